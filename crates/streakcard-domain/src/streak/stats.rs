use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::evaluator::evaluate;
use crate::calendar::{CanonicalDay, CanonicalDaySet};

/// Calendar-wide statistics for platforms that expose per-day activity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreakStats {
    pub current_streak: u32,
    pub longest_streak: u32,
    pub active_days: u32,
    pub last_active_date: Option<NaiveDate>,
}

pub fn summarize(days: &CanonicalDaySet, now: DateTime<Utc>) -> StreakStats {
    let mut longest_streak = 0u32;
    let mut run = 0u32;
    let mut prev_day: Option<CanonicalDay> = None;

    for day in days.iter() {
        run = match prev_day {
            Some(prev) if day == prev.pred() => run + 1,
            _ => 1,
        };
        longest_streak = longest_streak.max(run);
        prev_day = Some(day);
    }

    StreakStats {
        current_streak: evaluate(days, now),
        longest_streak,
        active_days: u32::try_from(days.len()).unwrap_or(u32::MAX),
        last_active_date: days.most_recent().and_then(|day| day.date()),
    }
}
