//! JSON import/export of tracked problems.
//! Problems are written as wire records: ISO-8601 strings and snake_case keys.

use crate::error::Result;
use crate::models::{Problem, ProblemRecord};
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

/// Exports problems to a pretty-printed JSON file at the specified path.
pub fn export_json_to_path<P: AsRef<Path>>(problems: &[Problem], path: P) -> Result<()> {
    let records: Vec<ProblemRecord> = problems.iter().map(ProblemRecord::from).collect();
    let json_string = serde_json::to_string_pretty(&records)?;
    let mut file = File::create(path.as_ref())?;
    file.write_all(json_string.as_bytes())?;

    log::info!(
        "Exported {} problems to '{}'",
        records.len(),
        path.as_ref().display()
    );
    Ok(())
}

/// Imports problems from a JSON file.
/// Every record is validated; one bad timestamp, difficulty or count fails the
/// whole import.
pub fn import_json<P: AsRef<Path>>(path: P) -> Result<Vec<Problem>> {
    let mut file = File::open(path.as_ref())?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;

    let records: Vec<ProblemRecord> = serde_json::from_str(&contents)?;
    let problems = records
        .into_iter()
        .map(Problem::try_from)
        .collect::<Result<Vec<Problem>>>()?;

    log::info!(
        "Imported {} problems from '{}'",
        problems.len(),
        path.as_ref().display()
    );
    Ok(problems)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RevisionError;
    use crate::models::Difficulty;
    use chrono::{TimeZone, Utc};
    use std::fs;
    use tempfile::TempDir;

    fn create_test_problems() -> Vec<Problem> {
        let solved = Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap();
        vec![
            Problem {
                id: 1,
                title: "Two Sum".to_string(),
                url: Some("https://leetcode.com/problems/two-sum/".to_string()),
                difficulty: Difficulty::Easy,
                topics: vec!["arrays".to_string()],
                notes: Some("hash map".to_string()),
                solved_date: Some(solved),
                next_revision_date: Some(Utc.with_ymd_and_hms(2024, 1, 4, 10, 0, 0).unwrap()),
                last_revised_at: None,
                revision_count: 0,
                created_at: solved,
            },
            Problem {
                id: 2,
                title: "Trapping Rain Water".to_string(),
                url: None,
                difficulty: Difficulty::Hard,
                topics: vec!["two pointers".to_string(), "stack".to_string()],
                notes: None,
                solved_date: Some(solved),
                next_revision_date: Some(Utc.with_ymd_and_hms(2024, 2, 1, 10, 0, 0).unwrap()),
                last_revised_at: Some(Utc.with_ymd_and_hms(2024, 1, 17, 10, 0, 0).unwrap()),
                revision_count: 3,
                created_at: solved,
            },
        ]
    }

    #[test]
    fn test_export_json_to_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("problems.json");

        export_json_to_path(&create_test_problems(), &path).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("\"next_revision_date\": \"2024-01-04T10:00:00Z\""));
        assert!(written.contains("\"difficulty\": \"Hard\""));
    }

    #[test]
    fn test_import_json() {
        let json_content = r#"[
  {
    "id": 12,
    "title": "Climbing Stairs",
    "difficulty": "Easy",
    "topics": ["dp"],
    "solved_date": "2024-03-01T21:15:00.482913",
    "next_revision_date": "2024-03-04T21:15:00.482913",
    "revision_count": 0
  }
]"#;

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("import.json");
        fs::write(&path, json_content).unwrap();

        let problems = import_json(&path).unwrap();
        assert_eq!(problems.len(), 1);
        assert_eq!(problems[0].title, "Climbing Stairs");
        assert_eq!(problems[0].difficulty, Difficulty::Easy);
        assert!(problems[0].next_revision_date.is_some());
    }

    #[test]
    fn test_export_then_import_keeps_schedule() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("problems.json");
        let original = create_test_problems();

        export_json_to_path(&original, &path).unwrap();
        let imported = import_json(&path).unwrap();

        assert_eq!(original, imported);
    }

    #[test]
    fn test_import_nonexistent_file() {
        let result = import_json("nonexistent_file_xyz123.json");
        assert!(matches!(result, Err(RevisionError::Io(_))));
    }

    #[test]
    fn test_import_invalid_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("invalid.json");
        fs::write(&path, "{ this is not valid json }").unwrap();

        assert!(matches!(import_json(&path), Err(RevisionError::Json(_))));
    }

    #[test]
    fn test_import_bad_timestamp() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad_date.json");
        fs::write(
            &path,
            r#"[{ "id": 1, "title": "x", "difficulty": "Easy", "solved_date": "soon" }]"#,
        )
        .unwrap();

        assert!(matches!(
            import_json(&path),
            Err(RevisionError::InvalidInstant(_))
        ));
    }
}
