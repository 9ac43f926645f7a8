//! SQLite-backed problem store
//!
//! Handles schema setup, CRUD for tracked problems, due-problem queries and the
//! "mark revised" write-back. Timestamps are stored as RFC 3339 UTC strings with
//! second precision, so they compare correctly as text.

use crate::calendar::format_instant;
use crate::error::{Result, RevisionError};
use crate::models::{NewProblem, Problem, ProblemRecord, RevisionEvent};
use crate::scheduling::{IntervalPolicy, Scheduler};
use chrono::{DateTime, Utc};
use rusqlite::{Connection, OptionalExtension, Row, params};
use std::path::Path;

const PROBLEM_COLUMNS: &str = "id, title, url, difficulty, topics, notes, solved_date, \
     next_revision_date, last_revised_at, revision_count, created_at";

/// Opens (or creates) the database file and ensures the schema exists
pub fn init_database<P: AsRef<Path>>(path: P) -> Result<Connection> {
    let conn = Connection::open(path.as_ref())?;
    init_schema(&conn)?;
    log::info!("Opened problem store at {}", path.as_ref().display());
    Ok(conn)
}

/// Creates the problems table and its due-date index if missing
pub fn init_schema(conn: &Connection) -> Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS problems (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            url TEXT,
            difficulty TEXT NOT NULL,
            topics TEXT NOT NULL DEFAULT '[]',
            notes TEXT,
            solved_date TEXT,
            next_revision_date TEXT,
            last_revised_at TEXT,
            revision_count INTEGER NOT NULL DEFAULT 0 CHECK (revision_count >= 0),
            created_at TEXT NOT NULL
        )",
        (),
    )?;

    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_problems_next_revision
         ON problems (next_revision_date)",
        (),
    )?;

    Ok(())
}

/// Reads a row as its wire record plus the raw topics JSON
fn row_to_record(row: &Row<'_>) -> rusqlite::Result<(ProblemRecord, String)> {
    Ok((
        ProblemRecord {
            id: row.get(0)?,
            title: row.get(1)?,
            url: row.get(2)?,
            difficulty: row.get(3)?,
            topics: Vec::new(),
            notes: row.get(5)?,
            solved_date: row.get(6)?,
            next_revision_date: row.get(7)?,
            last_revised_at: row.get(8)?,
            revision_count: row.get(9)?,
            created_at: row.get(10)?,
        },
        row.get(4)?,
    ))
}

fn record_to_problem((mut record, topics): (ProblemRecord, String)) -> Result<Problem> {
    record.topics = serde_json::from_str(&topics)?;
    Problem::try_from(record)
}

fn query_problems(conn: &Connection, sql: &str, params: impl rusqlite::Params) -> Result<Vec<Problem>> {
    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map(params, row_to_record)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    rows.into_iter().map(record_to_problem).collect()
}

/// Inserts a freshly solved problem, scheduling its first review
pub fn add_problem<P: IntervalPolicy>(
    conn: &Connection,
    new: &NewProblem,
    now: DateTime<Utc>,
    scheduler: &Scheduler<P>,
) -> Result<Problem> {
    let first_due = scheduler.first_due(now, new.difficulty)?;
    let topics = serde_json::to_string(&new.topics)?;
    let now_text = format_instant(now);

    conn.execute(
        "INSERT INTO problems (title, url, difficulty, topics, notes, solved_date,
                               next_revision_date, revision_count, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, 0, ?6)",
        params![
            new.title,
            new.url,
            new.difficulty.as_str(),
            topics,
            new.notes,
            now_text,
            format_instant(first_due),
        ],
    )?;

    let id = conn.last_insert_rowid();
    log::info!("Problem '{}' added with id {}", new.title, id);

    get_problem(conn, id)?.ok_or(RevisionError::ProblemNotFound(id))
}

/// Inserts an already-complete problem (used by imports), keeping its dates
/// and revision count. Returns the new id.
///
/// Timestamps are stored at second precision; problems built from wire records
/// are already truncated, so they read back unchanged.
pub fn insert_problem(conn: &Connection, problem: &Problem) -> Result<i64> {
    let record = ProblemRecord::from(problem);
    let topics = serde_json::to_string(&record.topics)?;

    conn.execute(
        "INSERT INTO problems (title, url, difficulty, topics, notes, solved_date,
                               next_revision_date, last_revised_at, revision_count, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
        params![
            record.title,
            record.url,
            record.difficulty,
            topics,
            record.notes,
            record.solved_date,
            record.next_revision_date,
            record.last_revised_at,
            record.revision_count,
            record.created_at,
        ],
    )?;

    Ok(conn.last_insert_rowid())
}

pub fn get_problem(conn: &Connection, id: i64) -> Result<Option<Problem>> {
    let sql = format!("SELECT {} FROM problems WHERE id = ?1", PROBLEM_COLUMNS);
    let row = conn.query_row(&sql, params![id], row_to_record).optional()?;
    row.map(record_to_problem).transpose()
}

/// All problems, most recently added first
pub fn get_all_problems(conn: &Connection) -> Result<Vec<Problem>> {
    let sql = format!(
        "SELECT {} FROM problems ORDER BY created_at DESC, id DESC",
        PROBLEM_COLUMNS
    );
    query_problems(conn, &sql, [])
}

/// Problems whose next revision is at or before `now`, oldest due first
pub fn get_due_problems(conn: &Connection, now: DateTime<Utc>) -> Result<Vec<Problem>> {
    let sql = format!(
        "SELECT {} FROM problems
         WHERE next_revision_date IS NOT NULL AND next_revision_date <= ?1
         ORDER BY next_revision_date ASC",
        PROBLEM_COLUMNS
    );
    query_problems(conn, &sql, params![format_instant(now)])
}

pub fn update_notes(conn: &Connection, id: i64, notes: Option<&str>) -> Result<()> {
    let changed = conn.execute(
        "UPDATE problems SET notes = ?1 WHERE id = ?2",
        params![notes, id],
    )?;
    if changed == 0 {
        return Err(RevisionError::ProblemNotFound(id));
    }
    Ok(())
}

pub fn delete_problem(conn: &Connection, id: i64) -> Result<()> {
    let changed = conn.execute("DELETE FROM problems WHERE id = ?1", params![id])?;
    if changed == 0 {
        return Err(RevisionError::ProblemNotFound(id));
    }
    log::info!("Problem {} deleted", id);
    Ok(())
}

/// Writes a revision event back in a single statement.
///
/// The update only applies while the stored count still equals
/// `expected_count`; otherwise nothing is written and `Conflict` is returned.
pub fn apply_revision(conn: &Connection, event: &RevisionEvent, expected_count: i64) -> Result<()> {
    let changed = conn.execute(
        "UPDATE problems
         SET revision_count = ?1, next_revision_date = ?2, last_revised_at = ?3
         WHERE id = ?4 AND revision_count = ?5",
        params![
            event.new_revision_count,
            format_instant(event.new_next_revision_date),
            format_instant(event.revised_at),
            event.problem_id,
            expected_count,
        ],
    )?;

    if changed == 0 {
        let exists: Option<i64> = conn
            .query_row(
                "SELECT id FROM problems WHERE id = ?1",
                params![event.problem_id],
                |row| row.get(0),
            )
            .optional()?;
        return Err(match exists {
            Some(_) => RevisionError::Conflict(event.problem_id),
            None => RevisionError::ProblemNotFound(event.problem_id),
        });
    }

    log::info!(
        "Problem {} revised ({} revisions), next review {}",
        event.problem_id,
        event.new_revision_count,
        format_instant(event.new_next_revision_date)
    );
    Ok(())
}

/// Loads a problem, schedules its next review from `now` and persists the result
pub fn mark_revised<P: IntervalPolicy>(
    conn: &Connection,
    id: i64,
    now: DateTime<Utc>,
    scheduler: &Scheduler<P>,
) -> Result<RevisionEvent> {
    let problem = get_problem(conn, id)?.ok_or(RevisionError::ProblemNotFound(id))?;
    let event = scheduler.schedule(&problem, now)?;
    apply_revision(conn, &event, problem.revision_count)?;
    Ok(event)
}
