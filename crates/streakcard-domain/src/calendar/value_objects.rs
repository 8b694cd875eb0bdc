use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use crate::shared::DomainError;

pub(crate) const SECONDS_PER_DAY: i64 = 86_400;

/// `NaiveDate::num_days_from_ce` of 1970-01-01
const EPOCH_DAYS_FROM_CE: i64 = 719_163;

/// One UTC calendar day, stored as whole days since the Unix epoch.
///
/// Unix time zero is UTC midnight, so flooring a timestamp by 86400 lands
/// exactly on the UTC date boundary. Every timestamp (including "now") goes
/// through [`CanonicalDay::from_timestamp`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CanonicalDay(i64);

impl CanonicalDay {
    pub fn from_timestamp(seconds: i64) -> Self {
        Self(seconds.div_euclid(SECONDS_PER_DAY))
    }

    pub fn from_instant(instant: DateTime<Utc>) -> Self {
        Self::from_timestamp(instant.timestamp())
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self(i64::from(date.num_days_from_ce()) - EPOCH_DAYS_FROM_CE)
    }

    pub fn days_since_epoch(self) -> i64 {
        self.0
    }

    /// Unix timestamp of this day's UTC midnight
    pub fn midnight_timestamp(self) -> i64 {
        self.0 * SECONDS_PER_DAY
    }

    /// The day immediately before this one
    pub fn pred(self) -> Self {
        Self(self.0 - 1)
    }

    pub fn date(self) -> Option<NaiveDate> {
        i32::try_from(self.0 + EPOCH_DAYS_FROM_CE)
            .ok()
            .and_then(NaiveDate::from_num_days_from_ce_opt)
    }
}

impl fmt::Display for CanonicalDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.date() {
            Some(date) => write!(f, "{}", date.format("%Y-%m-%d")),
            None => write!(f, "day#{}", self.0),
        }
    }
}

/// Distinct active days, most recent first.
///
/// Invariant: strictly descending, hence free of duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CanonicalDaySet(Vec<CanonicalDay>);

impl CanonicalDaySet {
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    /// Build a set from days the caller claims are already sorted descending
    /// without repeats. Rejects input that breaks that contract.
    pub fn from_sorted_desc(days: Vec<CanonicalDay>) -> Result<Self, DomainError> {
        if let Some(pair) = days.windows(2).find(|pair| pair[0] <= pair[1]) {
            return Err(DomainError::Validation(format!(
                "day set must be strictly descending, found {} before {}",
                pair[0], pair[1]
            )));
        }
        Ok(Self(days))
    }

    /// Caller guarantees the invariant
    pub(crate) fn from_sorted_desc_unchecked(days: Vec<CanonicalDay>) -> Self {
        debug_assert!(days.windows(2).all(|pair| pair[0] > pair[1]));
        Self(days)
    }

    pub fn most_recent(&self) -> Option<CanonicalDay> {
        self.0.first().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = CanonicalDay> + '_ {
        self.0.iter().copied()
    }

    pub fn as_slice(&self) -> &[CanonicalDay] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// One raw calendar entry: an activity count observed at a Unix timestamp
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub timestamp: i64,
    pub count: i64,
}

/// Platform calendar as delivered upstream (timestamp -> count)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityCalendar {
    entries: Vec<ActivityEntry>,
}

impl ActivityCalendar {
    pub fn new(entries: Vec<ActivityEntry>) -> Self {
        Self { entries }
    }

    /// Parse a `{"<timestamp>": <count>}` JSON object.
    ///
    /// Keys must be integer timestamps; values integers or integer strings.
    pub fn from_json_value(value: &Value) -> Result<Self, DomainError> {
        let map = value.as_object().ok_or_else(|| {
            DomainError::MalformedCalendar(format!(
                "expected a timestamp -> count object, got {}",
                json_kind(value)
            ))
        })?;

        let mut entries = Vec::with_capacity(map.len());
        for (key, raw_count) in map {
            let timestamp = key.trim().parse::<i64>().map_err(|_| {
                DomainError::MalformedCalendar(format!("non-numeric timestamp key '{}'", key))
            })?;
            let count = parse_count(raw_count).ok_or_else(|| {
                DomainError::MalformedCalendar(format!(
                    "non-integer count for timestamp {}: {}",
                    timestamp, raw_count
                ))
            })?;
            entries.push(ActivityEntry { timestamp, count });
        }

        Ok(Self { entries })
    }

    /// Parse a calendar that arrives as a JSON-encoded string
    pub fn from_json_str(raw: &str) -> Result<Self, DomainError> {
        let value: Value = serde_json::from_str(raw)
            .map_err(|e| DomainError::MalformedCalendar(format!("invalid calendar JSON: {}", e)))?;
        Self::from_json_value(&value)
    }

    pub fn entries(&self) -> &[ActivityEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(i64, i64)> for ActivityCalendar {
    fn from_iter<I: IntoIterator<Item = (i64, i64)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(timestamp, count)| ActivityEntry { timestamp, count })
                .collect(),
        }
    }
}

fn parse_count(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// What a retrieval adapter hands to the core
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawActivityRecord {
    /// Per-day activity, goes through normalize + evaluate
    Calendar(ActivityCalendar),
    /// Streak already computed upstream, returned as-is
    Streak(u32),
}

impl RawActivityRecord {
    pub fn empty() -> Self {
        RawActivityRecord::Calendar(ActivityCalendar::default())
    }

    pub fn is_calendar(&self) -> bool {
        matches!(self, RawActivityRecord::Calendar(_))
    }
}
