//! Revision activity per calendar day, for a consistency heatmap.
use crate::calendar::Calendar;
use crate::models::Problem;
use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::Serialize;
use std::collections::HashMap;

/// Length of the default heatmap window.
pub const DEFAULT_HEATMAP_DAYS: usize = 365;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HeatmapDay {
    pub date: NaiveDate,
    pub count: usize,
    /// Shade bucket: 0 none, 1 one, 2 up to three, 3 up to five, 4 more.
    pub level: u8,
}

fn intensity(count: usize) -> u8 {
    match count {
        0 => 0,
        1 => 1,
        2..=3 => 2,
        4..=5 => 3,
        _ => 4,
    }
}

/// Counts each problem on the normalized day of its last activity and returns
/// `days` consecutive days ending today, oldest first.
pub fn activity_heatmap(
    calendar: &Calendar,
    problems: &[Problem],
    now: DateTime<Utc>,
    days: usize,
) -> Vec<HeatmapDay> {
    let mut activity: HashMap<NaiveDate, usize> = HashMap::new();
    for day in problems.iter().filter_map(|p| calendar.normalize(p.last_activity())) {
        *activity.entry(day).or_insert(0) += 1;
    }

    let today = calendar.day_of(now);
    // No days exist before the earliest representable date
    let available = (today - NaiveDate::MIN).num_days().saturating_add(1);
    let days = days.min(usize::try_from(available).unwrap_or(usize::MAX));

    (0..days)
        .rev()
        .filter_map(|back| {
            let back = Duration::try_days(i64::try_from(back).ok()?)?;
            today.checked_sub_signed(back)
        })
        .map(|date| {
            let count = activity.get(&date).copied().unwrap_or(0);
            HeatmapDay {
                date,
                count,
                level: intensity(count),
            }
        })
        .collect()
}
