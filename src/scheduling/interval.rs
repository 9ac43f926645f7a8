//! Revision interval policies.
//!
//! The default curve widens the gap after every revision:
//! - 1st revision: 3 days
//! - 2nd revision: 7 days
//! - 3rd revision: 15 days
//! - 4th revision: 30 days
//! - 5th and later: 60 days
//!
//! Any `Fn(u32, Difficulty) -> Duration` is also a policy, which lets tests
//! pin exact gaps.

use crate::error::{Result, RevisionError};
use crate::models::Difficulty;
use chrono::Duration;

pub const DEFAULT_INTERVAL_DAYS: [i64; 5] = [3, 7, 15, 30, 60];

/// Maps the post-increment revision count to the gap until the next review.
pub trait IntervalPolicy {
    /// `revision_count` is the count *after* the revision being scheduled,
    /// so the first revision asks for count 1. Count 0 is a freshly solved problem.
    fn interval(&self, revision_count: u32, difficulty: Difficulty) -> Duration;
}

impl<F> IntervalPolicy for F
where
    F: Fn(u32, Difficulty) -> Duration,
{
    fn interval(&self, revision_count: u32, difficulty: Difficulty) -> Duration {
        self(revision_count, difficulty)
    }
}

/// Stepped curve of whole days; counts past the end reuse the last step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IntervalCurve {
    steps: Vec<i64>,
}

impl Default for IntervalCurve {
    fn default() -> Self {
        Self {
            steps: DEFAULT_INTERVAL_DAYS.to_vec(),
        }
    }
}

impl IntervalCurve {
    /// Steps must be non-empty, positive, representable as a `Duration` and
    /// non-decreasing.
    pub fn new(steps: Vec<i64>) -> Result<Self> {
        if steps.is_empty() {
            return Err(RevisionError::Config(
                "interval curve needs at least one step".to_string(),
            ));
        }
        if let Some(bad) = steps.iter().find(|&&days| days <= 0) {
            return Err(RevisionError::Config(format!(
                "interval steps must be positive, got {}",
                bad
            )));
        }
        if let Some(huge) = steps.iter().find(|&&days| Duration::try_days(days).is_none()) {
            return Err(RevisionError::Config(format!(
                "interval step of {} days is out of range",
                huge
            )));
        }
        if steps.windows(2).any(|pair| pair[1] < pair[0]) {
            return Err(RevisionError::Config(format!(
                "interval steps must not decrease: {:?}",
                steps
            )));
        }
        Ok(Self { steps })
    }

    pub fn steps(&self) -> &[i64] {
        &self.steps
    }

    /// Days for a post-increment count. Counts 0 and 1 both map to the first step.
    pub fn days_for(&self, revision_count: u32) -> i64 {
        let index = (revision_count.saturating_sub(1) as usize).min(self.steps.len() - 1);
        self.steps[index]
    }
}

impl IntervalPolicy for IntervalCurve {
    fn interval(&self, revision_count: u32, _difficulty: Difficulty) -> Duration {
        Duration::days(self.days_for(revision_count))
    }
}
