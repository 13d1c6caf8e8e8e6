use anyhow::Result;
use chrono::{Duration, NaiveDate};

/// The overall search range. `end` is exclusive and must lie strictly after
/// `start`; anything else is a caller error and rejected up front, before any
/// query is issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        anyhow::ensure!(
            end > start,
            "end date {end} must be after start date {start}"
        );
        Ok(DateRange { start, end })
    }

    /// Start dates of the query windows covering this range, stepping by
    /// `stride_days`. Every start lies inside `[start, end)`; the last window
    /// itself may reach past `end`, which matches how the provider's `limit`
    /// parameter works (it counts days from `start_date`, not toward a cutoff).
    ///
    /// A stride equal to the window length gives one query per window. A
    /// stride of 1 reproduces the one-query-per-day volume of older scanners.
    pub fn window_starts(&self, stride_days: i64) -> impl Iterator<Item = NaiveDate> + use<> {
        assert!(stride_days >= 1, "window stride must be at least one day");
        let end = self.end;
        std::iter::successors(Some(self.start), move |day| {
            let next = *day + Duration::days(stride_days);
            (next < end).then_some(next)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanning::constants::WINDOW_DAYS;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn rejects_inverted_range() {
        assert!(DateRange::new(date(2022, 7, 1), date(2022, 6, 1)).is_err());
    }

    #[test]
    fn rejects_empty_range() {
        assert!(DateRange::new(date(2022, 7, 1), date(2022, 7, 1)).is_err());
    }

    #[test]
    fn one_window_per_fourteen_days() {
        // 28 days, stepped by the window length: two queries, not twenty-eight.
        let range = DateRange::new(date(2022, 7, 1), date(2022, 7, 29)).unwrap();
        let starts: Vec<_> = range.window_starts(WINDOW_DAYS).collect();
        assert_eq!(starts, vec![date(2022, 7, 1), date(2022, 7, 15)]);
    }

    #[test]
    fn partial_trailing_window_still_queried() {
        // 15 days needs two windows; the second covers a single day of range
        // and may reach past the end date.
        let range = DateRange::new(date(2022, 7, 1), date(2022, 7, 16)).unwrap();
        assert_eq!(range.window_starts(WINDOW_DAYS).count(), 2);
    }

    #[test]
    fn daily_stride_reproduces_per_day_query_volume() {
        // stride 1 queries every day of the range, matching the per-day
        // stepping some deployments still rely on.
        let range = DateRange::new(date(2022, 7, 1), date(2022, 7, 29)).unwrap();
        assert_eq!(range.window_starts(1).count(), 28);
    }

    #[test]
    fn window_starts_stay_inside_range() {
        let range = DateRange::new(date(2022, 7, 1), date(2022, 9, 1)).unwrap();
        for start in range.window_starts(WINDOW_DAYS) {
            assert!(start >= date(2022, 7, 1));
            assert!(start < date(2022, 9, 1));
        }
    }
}
