#[cfg(test)]
mod tests {
    use super::super::evaluator::{compute_streak, evaluate};
    use super::super::stats::summarize;
    use crate::calendar::{ActivityCalendar, CanonicalDay, CanonicalDaySet, RawActivityRecord};
    use chrono::{DateTime, NaiveDate, TimeZone, Utc};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 10, 0, 0, 0).unwrap()
    }

    fn today() -> CanonicalDay {
        CanonicalDay::from_instant(now())
    }

    /// Days given as offsets before today, most recent first
    fn days_ago(offsets: &[i64]) -> CanonicalDaySet {
        let days = offsets
            .iter()
            .map(|offset| CanonicalDay::from_timestamp(today().midnight_timestamp() - offset * 86_400))
            .collect();
        CanonicalDaySet::from_sorted_desc(days).unwrap()
    }

    fn ts(y: i32, m: u32, d: u32, h: u32) -> i64 {
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap().timestamp()
    }

    #[test]
    fn test_empty_set_is_zero() {
        assert_eq!(evaluate(&CanonicalDaySet::empty(), now()), 0);
    }

    #[test]
    fn test_anchor_today() {
        assert_eq!(evaluate(&days_ago(&[0, 1, 2]), now()), 3);
        assert_eq!(evaluate(&days_ago(&[0]), now()), 1);
    }

    #[test]
    fn test_grace_period_anchor_yesterday() {
        assert_eq!(evaluate(&days_ago(&[1, 2, 3, 4]), now()), 4);
        assert_eq!(evaluate(&days_ago(&[1]), now()), 1);
    }

    #[test]
    fn test_broken_streak_two_days_old() {
        assert_eq!(evaluate(&days_ago(&[2, 3, 4, 5, 6, 7, 8]), now()), 0);
    }

    #[test]
    fn test_broken_streak_long_ago() {
        let long_run: Vec<i64> = (30..400).collect();
        assert_eq!(evaluate(&days_ago(&long_run), now()), 0);
    }

    #[test]
    fn test_gap_terminates_count() {
        assert_eq!(evaluate(&days_ago(&[0, 1, 2, 4]), now()), 3);
    }

    #[test]
    fn test_older_consecutive_run_after_gap_is_ignored() {
        assert_eq!(evaluate(&days_ago(&[0, 2, 3, 4, 5, 6]), now()), 1);
    }

    #[test]
    fn test_no_upper_bound() {
        let offsets: Vec<i64> = (0..1000).collect();
        assert_eq!(evaluate(&days_ago(&offsets), now()), 1000);
    }

    #[test]
    fn test_late_evening_now_uses_utc_day() {
        let late = Utc.with_ymd_and_hms(2024, 3, 10, 23, 59, 59).unwrap();
        assert_eq!(evaluate(&days_ago(&[0, 1]), late), 2);

        let next_morning = Utc.with_ymd_and_hms(2024, 3, 11, 0, 0, 1).unwrap();
        assert_eq!(evaluate(&days_ago(&[0, 1]), next_morning), 2);

        let two_days_later = Utc.with_ymd_and_hms(2024, 3, 12, 0, 0, 1).unwrap();
        assert_eq!(evaluate(&days_ago(&[0, 1]), two_days_later), 0);
    }

    #[test]
    fn test_reference_scenario_streak_two() {
        let calendar: ActivityCalendar = vec![
            (ts(2024, 3, 9, 12), 1),
            (ts(2024, 3, 8, 3), 2),
            (ts(2024, 3, 8, 23), 1),
            (ts(2024, 3, 6, 0), 1),
        ]
        .into_iter()
        .collect();

        let record = RawActivityRecord::Calendar(calendar);
        assert_eq!(compute_streak(&record, now()), 2);
    }

    #[test]
    fn test_reference_scenario_outside_grace_window() {
        let calendar: ActivityCalendar = vec![(ts(2024, 3, 5, 0), 1)].into_iter().collect();

        let record = RawActivityRecord::Calendar(calendar);
        assert_eq!(compute_streak(&record, now()), 0);
    }

    #[test]
    fn test_zero_count_today_does_not_anchor() {
        let calendar: ActivityCalendar = vec![(ts(2024, 3, 10, 0), 0), (ts(2024, 3, 7, 0), 5)]
            .into_iter()
            .collect();

        assert_eq!(compute_streak(&RawActivityRecord::Calendar(calendar), now()), 0);
    }

    #[test]
    fn test_precomputed_streak_passes_through() {
        assert_eq!(compute_streak(&RawActivityRecord::Streak(42), now()), 42);
        assert_eq!(compute_streak(&RawActivityRecord::empty(), now()), 0);
    }

    #[test]
    fn test_summarize_tracks_longest_run() {
        let stats = summarize(&days_ago(&[1, 2, 5, 6, 7, 8, 20]), now());

        assert_eq!(stats.current_streak, 2);
        assert_eq!(stats.longest_streak, 4);
        assert_eq!(stats.active_days, 7);
        assert_eq!(stats.last_active_date, NaiveDate::from_ymd_opt(2024, 3, 9));
    }

    #[test]
    fn test_summarize_empty() {
        let stats = summarize(&CanonicalDaySet::empty(), now());

        assert_eq!(stats.current_streak, 0);
        assert_eq!(stats.longest_streak, 0);
        assert_eq!(stats.active_days, 0);
        assert!(stats.last_active_date.is_none());
    }

    #[test]
    fn test_summarize_broken_current_keeps_history() {
        let stats = summarize(&days_ago(&[3, 4, 5]), now());

        assert_eq!(stats.current_streak, 0);
        assert_eq!(stats.longest_streak, 3);
    }

    #[test]
    fn test_summarize_counts_isolated_and_adjacent_days() {
        let stats = summarize(&days_ago(&[0, 2, 3, 10]), now());

        assert_eq!(stats.current_streak, 1);
        assert_eq!(stats.longest_streak, 2);
        assert_eq!(stats.active_days, 4);
        assert_eq!(stats.last_active_date, NaiveDate::from_ymd_opt(2024, 3, 10));
    }
}
