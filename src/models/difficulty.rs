//! Problem difficulty as labelled by the judge site.
use crate::error::{Result, RevisionError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    /// Badge color for the difficulty label
    pub fn color(&self) -> &'static str {
        match self {
            Difficulty::Easy => "#00b8a3",
            Difficulty::Medium => "#ffc01e",
            Difficulty::Hard => "#ff375f",
        }
    }
}

impl FromStr for Difficulty {
    type Err = RevisionError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "Easy" => Ok(Difficulty::Easy),
            "Medium" => Ok(Difficulty::Medium),
            "Hard" => Ok(Difficulty::Hard),
            other => Err(RevisionError::InvalidDifficulty(other.to_string())),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_values() {
        assert_eq!("Easy".parse::<Difficulty>().unwrap(), Difficulty::Easy);
        assert_eq!(" Hard ".parse::<Difficulty>().unwrap(), Difficulty::Hard);
    }

    #[test]
    fn test_parse_rejects_unknown() {
        let result = "Insane".parse::<Difficulty>();
        assert!(matches!(result, Err(RevisionError::InvalidDifficulty(_))));
    }

    #[test]
    fn test_display_matches_as_str() {
        assert_eq!(Difficulty::Medium.to_string(), "Medium");
        assert_eq!(format!("{:<6}|", Difficulty::Easy), "Easy  |");
    }

    #[test]
    fn test_badge_colors() {
        assert_eq!(Difficulty::Easy.color(), "#00b8a3");
        assert_eq!(Difficulty::Hard.color(), "#ff375f");
    }
}
