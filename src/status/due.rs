//! Selection of problems that are due for revision.
use crate::models::Problem;
use chrono::{DateTime, Utc};

/// A problem is due once its next revision instant has passed. Problems never
/// scheduled are not due.
pub fn is_due(problem: &Problem, now: DateTime<Utc>) -> bool {
    problem.next_revision_date.is_some_and(|due| due <= now)
}

/// Due problems ordered by due date, oldest first.
pub fn due_problems(problems: &[Problem], now: DateTime<Utc>) -> Vec<&Problem> {
    let mut due: Vec<&Problem> = problems.iter().filter(|p| is_due(p, now)).collect();
    due.sort_by_key(|p| p.next_revision_date);
    due
}
