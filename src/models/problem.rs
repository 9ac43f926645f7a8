//! A tracked practice problem and its revision state.
use super::Difficulty;
use chrono::{DateTime, Utc};

/// Snapshot of a problem as held by the store.
///
/// `revision_count` is signed because snapshots come from outside the crate;
/// the scheduler rejects negative values instead of trusting them.
#[derive(Clone, Debug, PartialEq)]
pub struct Problem {
    pub id: i64,
    pub title: String,
    pub url: Option<String>,
    pub difficulty: Difficulty,
    pub topics: Vec<String>,
    pub notes: Option<String>,
    pub solved_date: Option<DateTime<Utc>>,
    pub next_revision_date: Option<DateTime<Utc>>,
    pub last_revised_at: Option<DateTime<Utc>>,
    pub revision_count: i64,
    pub created_at: DateTime<Utc>,
}

impl Problem {
    /// Most recent interaction: the last revision, or the first solve.
    pub fn last_activity(&self) -> Option<DateTime<Utc>> {
        self.last_revised_at.or(self.solved_date)
    }
}

/// Fields supplied when a problem is first logged.
#[derive(Clone, Debug, Default)]
pub struct NewProblem {
    pub title: String,
    pub url: Option<String>,
    pub difficulty: Difficulty,
    pub topics: Vec<String>,
    pub notes: Option<String>,
}

impl NewProblem {
    pub fn new(title: &str, difficulty: Difficulty) -> Self {
        Self {
            title: title.to_string(),
            difficulty,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_last_activity_prefers_revision() {
        let solved = Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap();
        let revised = Utc.with_ymd_and_hms(2024, 1, 5, 10, 0, 0).unwrap();
        let mut problem = Problem {
            id: 1,
            title: "Two Sum".to_string(),
            url: None,
            difficulty: Difficulty::Easy,
            topics: Vec::new(),
            notes: None,
            solved_date: Some(solved),
            next_revision_date: None,
            last_revised_at: None,
            revision_count: 0,
            created_at: solved,
        };

        assert_eq!(problem.last_activity(), Some(solved));
        problem.last_revised_at = Some(revised);
        assert_eq!(problem.last_activity(), Some(revised));
    }
}
