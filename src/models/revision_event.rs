//! Result of a "mark revised" action, handed to the store for persistence.
use crate::calendar::format_instant;
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RevisionEvent {
    pub problem_id: i64,
    pub revised_at: DateTime<Utc>,
    pub new_next_revision_date: DateTime<Utc>,
    pub new_revision_count: i64,
}

/// Write-back payload: the fields the store updates atomically.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RevisionUpdate {
    pub id: i64,
    pub next_revision_date: String,
    pub revision_count: i64,
}

impl From<&RevisionEvent> for RevisionUpdate {
    fn from(event: &RevisionEvent) -> Self {
        Self {
            id: event.problem_id,
            next_revision_date: format_instant(event.new_next_revision_date),
            revision_count: event.new_revision_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_update_payload_json() {
        let event = RevisionEvent {
            problem_id: 3,
            revised_at: Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap(),
            new_next_revision_date: Utc.with_ymd_and_hms(2024, 1, 2, 10, 0, 0).unwrap(),
            new_revision_count: 1,
        };

        let json = serde_json::to_value(RevisionUpdate::from(&event)).unwrap();
        assert_eq!(json["id"], 3);
        assert_eq!(json["next_revision_date"], "2024-01-02T10:00:00Z");
        assert_eq!(json["revision_count"], 1);
    }
}
