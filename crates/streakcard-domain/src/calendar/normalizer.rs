use chrono::{DateTime, Utc};
use std::collections::BTreeSet;

use super::value_objects::{ActivityCalendar, CanonicalDay, CanonicalDaySet};

/// Reduce a raw calendar to its distinct active UTC days, most recent first.
///
/// Entries with a non-positive count are dropped. Entries dated after the UTC
/// day containing `now` are dropped too, so the most recent day of the result
/// never lies in the future of the evaluation instant.
pub fn normalize(calendar: &ActivityCalendar, now: DateTime<Utc>) -> CanonicalDaySet {
    let today = CanonicalDay::from_instant(now);

    let days: BTreeSet<CanonicalDay> = calendar
        .entries()
        .iter()
        .filter(|entry| entry.count > 0)
        .map(|entry| CanonicalDay::from_timestamp(entry.timestamp))
        .filter(|day| *day <= today)
        .collect();

    CanonicalDaySet::from_sorted_desc_unchecked(days.into_iter().rev().collect())
}
