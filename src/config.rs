//! Runtime configuration.
//!
//! Loaded from an explicit JSON file, else `revision.json` in the working
//! directory, else defaults. `REVISION_DB` overrides the database path.

use crate::calendar::{Calendar, DEFAULT_DAY_OFFSET_HOURS};
use crate::error::{Result, RevisionError};
use crate::scheduling::{DEFAULT_INTERVAL_DAYS, IntervalCurve};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "revision.json";
pub const DATABASE_ENV: &str = "REVISION_DB";

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub database_path: PathBuf,
    /// Hours subtracted from every instant before taking its calendar day.
    pub day_offset_hours: i64,
    /// Days until the next review after the 1st, 2nd, ... revision.
    pub intervals_days: Vec<i64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_path: PathBuf::from("revisions.sqlite3"),
            day_offset_hours: DEFAULT_DAY_OFFSET_HOURS,
            intervals_days: DEFAULT_INTERVAL_DAYS.to_vec(),
        }
    }
}

impl Config {
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        Self::load_with(
            config_path,
            Path::new(CONFIG_FILE),
            std::env::var(DATABASE_ENV).ok(),
        )
    }

    /// Resolves the config from an explicit path, else `implicit_path`, else
    /// defaults, then applies a database override if one is given.
    pub fn load_with(
        config_path: Option<&Path>,
        implicit_path: &Path,
        database_override: Option<String>,
    ) -> Result<Self> {
        let mut config = match config_path {
            Some(path) => Self::load_from_file(path)?,
            None => Self::load_implicit(implicit_path),
        };

        if let Some(db) = database_override.filter(|db| !db.trim().is_empty()) {
            log::info!("Using database from {}: {}", DATABASE_ENV, db);
            config.database_path = PathBuf::from(db);
        }

        config.validate()?;
        Ok(config)
    }

    fn load_implicit(path: &Path) -> Self {
        if path.exists() {
            match Self::load_from_file(path) {
                Ok(config) => {
                    log::info!("Loaded config from {}", path.display());
                    return config;
                }
                Err(e) => log::warn!("Failed to load {}: {}", path.display(), e),
            }
        }

        log::info!("No config file found, using defaults");
        Self::default()
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)?;
        let config: Self = serde_json::from_str(&content)?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.calendar()?;
        self.interval_curve()?;
        Ok(())
    }

    pub fn calendar(&self) -> Result<Calendar> {
        Calendar::with_offset_hours(self.day_offset_hours)
    }

    pub fn interval_curve(&self) -> Result<IntervalCurve> {
        IntervalCurve::new(self.intervals_days.clone()).map_err(|e| match e {
            RevisionError::Config(msg) => RevisionError::Config(format!("intervals_days: {}", msg)),
            other => other,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.day_offset_hours, 6);
        assert_eq!(config.intervals_days, vec![3, 7, 15, 30, 60]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_partial_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("revision.json");
        fs::write(&path, r#"{ "intervals_days": [1, 3, 7, 16, 35] }"#).unwrap();

        let config = Config::load_from_file(&path).unwrap();
        assert_eq!(config.intervals_days, vec![1, 3, 7, 16, 35]);
        assert_eq!(config.day_offset_hours, 6);
        assert_eq!(config.interval_curve().unwrap().days_for(1), 1);
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let dir = TempDir::new().unwrap();
        let result = Config::load(Some(&dir.path().join("nope.json")));
        assert!(matches!(result, Err(RevisionError::Io(_))));
    }

    #[test]
    fn test_broken_implicit_file_falls_back_to_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "{ intervals_days: oops").unwrap();

        let config = Config::load_with(None, &path, None).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_implicit_file_is_used() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, r#"{ "day_offset_hours": 0 }"#).unwrap();

        let config = Config::load_with(None, &path, None).unwrap();
        assert_eq!(config.day_offset_hours, 0);
    }

    #[test]
    fn test_missing_implicit_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_with(None, &dir.path().join(CONFIG_FILE), None).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_database_override() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, r#"{ "database_path": "from_file.sqlite3" }"#).unwrap();

        let config =
            Config::load_with(None, &path, Some("/tmp/override.sqlite3".to_string())).unwrap();
        assert_eq!(config.database_path, PathBuf::from("/tmp/override.sqlite3"));

        let blank = Config::load_with(None, &path, Some("  ".to_string())).unwrap();
        assert_eq!(blank.database_path, PathBuf::from("from_file.sqlite3"));
    }

    #[test]
    fn test_explicit_file_wins_over_implicit() {
        let dir = TempDir::new().unwrap();
        let implicit = dir.path().join(CONFIG_FILE);
        let explicit = dir.path().join("custom.json");
        fs::write(&implicit, r#"{ "day_offset_hours": 1 }"#).unwrap();
        fs::write(&explicit, r#"{ "day_offset_hours": 2 }"#).unwrap();

        let config = Config::load_with(Some(&explicit), &implicit, None).unwrap();
        assert_eq!(config.day_offset_hours, 2);
    }

    #[test]
    fn test_huge_interval_rejected_on_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("custom.json");
        fs::write(&path, r#"{ "intervals_days": [1000000000000000] }"#).unwrap();

        let result = Config::load_with(Some(&path), &dir.path().join(CONFIG_FILE), None);
        assert!(matches!(result, Err(RevisionError::Config(_))));
    }

    #[test]
    fn test_invalid_curve_rejected() {
        let config = Config {
            intervals_days: vec![7, 3],
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(RevisionError::Config(_))));
    }

    #[test]
    fn test_invalid_offset_rejected() {
        let config = Config {
            day_offset_hours: 30,
            ..Default::default()
        };
        assert!(config.calendar().is_err());
    }
}
