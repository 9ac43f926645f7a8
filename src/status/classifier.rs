//! Urgency classification of a problem's next due date.
//!
//! Classification is by calendar day, using the normalized day of both the due
//! date and "now". With `diff` the whole days from today to the due day:
//! - `diff == 0`: due today
//! - `diff == -1`: due yesterday
//! - `diff <= -2`: overdue by `|diff|` days
//! - `diff` in 1..=2: soon
//! - otherwise: normal, labelled with the due date
//!
//! Day differences between normalized dates are always whole, so the half-open
//! windows `(-1, 0]` and `(-2, -1]` collapse to single values.

use super::relative_time::{time_ago, time_until};
use crate::calendar::Calendar;
use crate::models::{Difficulty, Problem, ReviewStatus, Severity};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Days ahead that still count as "soon".
pub const SOON_WINDOW_DAYS: i64 = 2;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StatusClassifier {
    calendar: Calendar,
}

/// Display-ready summary of one problem.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ProblemView {
    pub id: i64,
    pub title: String,
    pub difficulty: Difficulty,
    pub status: ReviewStatus,
    pub last_revised: String,
    pub next_review: String,
    pub revision_count: i64,
}

impl StatusClassifier {
    pub fn new(calendar: Calendar) -> Self {
        Self { calendar }
    }

    pub fn calendar(&self) -> &Calendar {
        &self.calendar
    }

    pub fn classify(&self, next_revision_date: Option<DateTime<Utc>>, now: DateTime<Utc>) -> ReviewStatus {
        let Some(due) = next_revision_date else {
            return ReviewStatus::new(Severity::Normal, "-");
        };

        let due_day = self.calendar.day_of(due);
        let diff = (due_day - self.calendar.day_of(now)).num_days();

        match diff {
            0 => ReviewStatus::new(Severity::DueToday, "Due Today"),
            -1 => ReviewStatus::new(Severity::DueYesterday, "Due Yesterday"),
            d if d <= -2 => ReviewStatus::overdue(d.abs()),
            1 => ReviewStatus::new(Severity::Soon, "Due Tomorrow"),
            d if d <= SOON_WINDOW_DAYS => ReviewStatus::new(Severity::Soon, format!("Due in {}d", d)),
            _ => ReviewStatus::new(Severity::Normal, due_day.format("%d %b %Y").to_string()),
        }
    }

    pub fn time_ago(&self, past: Option<DateTime<Utc>>, now: DateTime<Utc>) -> String {
        time_ago(&self.calendar, past, now)
    }

    pub fn time_until(&self, future: Option<DateTime<Utc>>, now: DateTime<Utc>) -> String {
        time_until(&self.calendar, future, now)
    }

    pub fn describe(&self, problem: &Problem, now: DateTime<Utc>) -> ProblemView {
        ProblemView {
            id: problem.id,
            title: problem.title.clone(),
            difficulty: problem.difficulty,
            status: self.classify(problem.next_revision_date, now),
            last_revised: self.time_ago(problem.last_activity(), now),
            next_review: self.time_until(problem.next_revision_date, now),
            revision_count: problem.revision_count,
        }
    }
}
