use chrono::{DateTime, Utc};

use crate::calendar::{normalize, CanonicalDay, CanonicalDaySet, RawActivityRecord};

/// Length of the current run of consecutive active days.
///
/// The run must end today or yesterday (one-day grace period); a most recent
/// day older than yesterday means the streak is broken and yields 0. Counting
/// walks backward from that anchor and stops at the first gap.
pub fn evaluate(days: &CanonicalDaySet, now: DateTime<Utc>) -> u32 {
    let Some(anchor) = days.most_recent() else {
        return 0;
    };

    let today = CanonicalDay::from_instant(now);
    if anchor != today && anchor != today.pred() {
        return 0;
    }

    let mut streak = 0u32;
    let mut expected_day = anchor;

    for day in days.iter() {
        if day == expected_day {
            streak += 1;
            expected_day = expected_day.pred();
        } else if day < expected_day {
            break;
        }
    }

    streak
}

/// Full pipeline for one raw record: calendars are normalized and evaluated,
/// upstream-computed streaks pass through untouched.
pub fn compute_streak(record: &RawActivityRecord, now: DateTime<Utc>) -> u32 {
    match record {
        RawActivityRecord::Calendar(calendar) => evaluate(&normalize(calendar, now), now),
        RawActivityRecord::Streak(streak) => *streak,
    }
}
