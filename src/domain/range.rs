// Date range domain model
use chrono::{DateTime, Duration, LocalResult, NaiveDate, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;

/// Inclusive calendar-date range selected by the range controls.
///
/// `start <= end` is deliberately not enforced; an inverted range is passed
/// through to the upstream API as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    pub fn single_day(day: NaiveDate) -> Self {
        Self::new(day, day)
    }

    /// `start_date`/`end_date` query parameters in calendar-date form,
    /// no time-of-day component.
    pub fn query_params(&self) -> [(&'static str, String); 2] {
        [
            ("start_date", self.start.format("%Y-%m-%d").to_string()),
            ("end_date", self.end.format("%Y-%m-%d").to_string()),
        ]
    }

    /// Human-readable "Month Day Year" forms used in chart titles,
    /// e.g. "January 1 2024".
    pub fn formatted(&self) -> (String, String) {
        (format_title_date(self.start), format_title_date(self.end))
    }

    /// X-axis bounds for this range: local midnight of the start day up to
    /// local midnight of the day after the end day, both in `tz`.
    pub fn axis_bounds(&self, tz: Tz) -> (DateTime<Utc>, DateTime<Utc>) {
        (
            local_midnight(self.start, tz),
            local_midnight(self.end + Duration::days(1), tz),
        )
    }

    pub fn with_start_stepped(&self, days: i64) -> Self {
        Self::new(self.start + Duration::days(days), self.end)
    }

    pub fn with_end_stepped(&self, days: i64) -> Self {
        Self::new(self.start, self.end + Duration::days(days))
    }
}

fn format_title_date(day: NaiveDate) -> String {
    day.format("%B %-d %Y").to_string()
}

fn local_midnight(day: NaiveDate, tz: Tz) -> DateTime<Utc> {
    let naive = day.and_time(NaiveTime::MIN);
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => dt.with_timezone(&Utc),
        // Midnight skipped by a DST gap; take the first instant after it.
        LocalResult::None => tz
            .from_local_datetime(&(naive + Duration::hours(1)))
            .earliest()
            .map(|dt| dt.with_timezone(&Utc))
            .unwrap_or_else(|| Utc.from_utc_datetime(&naive)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono_tz::Europe::Amsterdam;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_query_params() {
        let range = DateRange::new(date(2024, 1, 1), date(2024, 1, 7));
        assert_eq!(
            range.query_params(),
            [
                ("start_date", "2024-01-01".to_string()),
                ("end_date", "2024-01-07".to_string()),
            ]
        );
    }

    #[test]
    fn test_formatted_title_dates() {
        let range = DateRange::new(date(2024, 1, 1), date(2024, 12, 9));
        let (start, end) = range.formatted();
        assert_eq!(start, "January 1 2024");
        assert_eq!(end, "December 9 2024");
    }

    #[test]
    fn test_axis_bounds_cover_day_after_end() {
        let range = DateRange::single_day(date(2024, 1, 1));
        let (min, max) = range.axis_bounds(Amsterdam);
        // Amsterdam is UTC+1 in January.
        assert_eq!(min.to_rfc3339(), "2023-12-31T23:00:00+00:00");
        assert_eq!(max.to_rfc3339(), "2024-01-01T23:00:00+00:00");
    }

    #[test]
    fn test_step_helpers() {
        let range = DateRange::new(date(2024, 2, 28), date(2024, 3, 1));
        assert_eq!(range.with_start_stepped(1).start, date(2024, 2, 29));
        assert_eq!(range.with_end_stepped(-1).end, date(2024, 2, 29));
        // end is untouched by a start step
        assert_eq!(range.with_start_stepped(1).end, range.end);
    }
}
