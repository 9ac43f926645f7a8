//! Computes the next review date when a problem is marked revised.
//!
//! The scheduler is pure: it never reads the clock and never writes anything.
//! Callers pass the revision instant and persist the returned event themselves.

use super::{IntervalCurve, IntervalPolicy};
use crate::error::{Result, RevisionError};
use crate::models::{Difficulty, Problem, RevisionEvent};
use chrono::{DateTime, Duration, Utc};

#[derive(Clone, Debug)]
pub struct Scheduler<P = IntervalCurve> {
    policy: P,
}

impl Default for Scheduler<IntervalCurve> {
    fn default() -> Self {
        Self::new(IntervalCurve::default())
    }
}

impl<P: IntervalPolicy> Scheduler<P> {
    pub fn new(policy: P) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// Advances a problem by one revision made at `revised_at`.
    ///
    /// Fails with `InvalidState` for a negative or saturated revision count, or
    /// when the policy yields a gap that would not move the due date forward.
    pub fn schedule(&self, current: &Problem, revised_at: DateTime<Utc>) -> Result<RevisionEvent> {
        if current.revision_count < 0 {
            return Err(RevisionError::InvalidState(format!(
                "problem {} has negative revision count {}",
                current.id, current.revision_count
            )));
        }

        let new_count = current.revision_count.checked_add(1).ok_or_else(|| {
            RevisionError::InvalidState(format!(
                "problem {} revision count overflows",
                current.id
            ))
        })?;

        let policy_count = u32::try_from(new_count).unwrap_or(u32::MAX);
        let next = self.advance(revised_at, policy_count, current.difficulty)?;

        log::debug!(
            "Problem {} revision {} scheduled for {}",
            current.id,
            new_count,
            next
        );

        Ok(RevisionEvent {
            problem_id: current.id,
            revised_at,
            new_next_revision_date: next,
            new_revision_count: new_count,
        })
    }

    /// Due date of a problem solved for the first time at `solved_at`.
    pub fn first_due(&self, solved_at: DateTime<Utc>, difficulty: Difficulty) -> Result<DateTime<Utc>> {
        self.advance(solved_at, 0, difficulty)
    }

    fn advance(
        &self,
        from: DateTime<Utc>,
        revision_count: u32,
        difficulty: Difficulty,
    ) -> Result<DateTime<Utc>> {
        let gap = self.policy.interval(revision_count, difficulty);
        if gap <= Duration::zero() {
            return Err(RevisionError::InvalidState(format!(
                "interval policy returned non-positive gap {} for revision {}",
                gap, revision_count
            )));
        }

        from.checked_add_signed(gap).ok_or_else(|| {
            RevisionError::InvalidInstant(format!("{} + {} is out of range", from, gap))
        })
    }
}
