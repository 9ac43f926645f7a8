//! Wire form of a problem: ISO-8601 strings and a plain difficulty label, as
//! exchanged with the API layer and written by the JSON exporter.
use super::{Difficulty, Problem};
use crate::calendar::{format_instant, parse_optional_instant};
use chrono::{DateTime, SubsecRound, Utc};
use crate::error::{Result, RevisionError};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProblemRecord {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub url: Option<String>,
    pub difficulty: String,
    #[serde(default)]
    pub topics: Vec<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub solved_date: Option<String>,
    #[serde(default)]
    pub next_revision_date: Option<String>,
    #[serde(default)]
    pub last_revised_at: Option<String>,
    #[serde(default)]
    pub revision_count: i64,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl From<&Problem> for ProblemRecord {
    fn from(problem: &Problem) -> Self {
        Self {
            id: problem.id,
            title: problem.title.clone(),
            url: problem.url.clone(),
            difficulty: problem.difficulty.to_string(),
            topics: problem.topics.clone(),
            notes: problem.notes.clone(),
            solved_date: problem.solved_date.map(format_instant),
            next_revision_date: problem.next_revision_date.map(format_instant),
            last_revised_at: problem.last_revised_at.map(format_instant),
            revision_count: problem.revision_count,
            created_at: Some(format_instant(problem.created_at)),
        }
    }
}

/// Instants are kept at second precision, matching what the store writes.
fn parse_stored(raw: Option<&str>) -> Result<Option<DateTime<Utc>>> {
    Ok(parse_optional_instant(raw)?.map(|instant| instant.trunc_subsecs(0)))
}

impl TryFrom<ProblemRecord> for Problem {
    type Error = RevisionError;

    fn try_from(record: ProblemRecord) -> Result<Self> {
        if record.revision_count < 0 {
            return Err(RevisionError::InvalidState(format!(
                "problem {} has negative revision count {}",
                record.id, record.revision_count
            )));
        }

        let difficulty: Difficulty = record.difficulty.parse()?;
        let solved_date = parse_stored(record.solved_date.as_deref())?;
        let next_revision_date = parse_stored(record.next_revision_date.as_deref())?;
        let last_revised_at = parse_stored(record.last_revised_at.as_deref())?;

        // Older exports carry no creation time; the first solve is the closest stand-in
        let created_at = parse_stored(record.created_at.as_deref())?
            .or(solved_date)
            .ok_or_else(|| {
                RevisionError::InvalidInstant(format!(
                    "problem {} has neither created_at nor solved_date",
                    record.id
                ))
            })?;

        Ok(Problem {
            id: record.id,
            title: record.title,
            url: record.url,
            difficulty,
            topics: record.topics,
            notes: record.notes,
            solved_date,
            next_revision_date,
            last_revised_at,
            revision_count: record.revision_count,
            created_at,
        })
    }
}
