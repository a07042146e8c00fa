//! Calendar abstraction for the dashboard statistics.
//!
//! Every date decision made by the statistics (which day a sale belongs to,
//! where a week starts, what "today" is) goes through [`LocalCalendar`], so the
//! bucketing and streak logic never read the host clock or time zone directly.

use chrono::{DateTime, Datelike, Days, FixedOffset, Local, NaiveDate, Offset, Utc};

/// Local calendar operations used by the statistics
pub trait LocalCalendar {
    /// The current local date
    fn today(&self) -> NaiveDate;

    /// The local calendar date a timestamp falls on
    fn local_date(&self, at: &DateTime<FixedOffset>) -> NaiveDate;

    /// The Sunday starting the week that contains `date`
    fn start_of_week(&self, date: NaiveDate) -> NaiveDate {
        // chrono counts Sunday as 0 here, so Sunday maps to itself
        let offset = date.weekday().num_days_from_sunday();
        date.checked_sub_days(Days::new(offset as u64)).unwrap_or(date)
    }

    /// Whether two timestamps fall on the same local calendar day
    fn same_day(&self, a: &DateTime<FixedOffset>, b: &DateTime<FixedOffset>) -> bool {
        self.local_date(a) == self.local_date(b)
    }

    /// Short numeric date, `M/D/YYYY`
    fn format_short_date(&self, date: NaiveDate) -> String {
        format!("{}/{}/{}", date.month(), date.day(), date.year())
    }
}

/// Calendar backed by the host clock and time zone
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemCalendar;

impl SystemCalendar {
    pub fn new() -> Self {
        Self
    }
}

impl LocalCalendar for SystemCalendar {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }

    fn local_date(&self, at: &DateTime<FixedOffset>) -> NaiveDate {
        at.with_timezone(&Local).date_naive()
    }
}

/// Calendar pinned to a fixed UTC offset and a fixed current date
#[derive(Debug, Clone, Copy)]
pub struct FixedCalendar {
    offset: FixedOffset,
    today: NaiveDate,
}

impl FixedCalendar {
    pub fn new(offset: FixedOffset, today: NaiveDate) -> Self {
        Self { offset, today }
    }

    /// UTC calendar whose current date is `today`
    pub fn utc(today: NaiveDate) -> Self {
        Self::new(Utc.fix(), today)
    }
}

impl LocalCalendar for FixedCalendar {
    fn today(&self) -> NaiveDate {
        self.today
    }

    fn local_date(&self, at: &DateTime<FixedOffset>) -> NaiveDate {
        at.with_timezone(&self.offset).date_naive()
    }
}

/// Three-letter English month abbreviation
pub fn month_abbrev(month: u32) -> &'static str {
    match month {
        1 => "Jan",
        2 => "Feb",
        3 => "Mar",
        4 => "Apr",
        5 => "May",
        6 => "Jun",
        7 => "Jul",
        8 => "Aug",
        9 => "Sep",
        10 => "Oct",
        11 => "Nov",
        12 => "Dec",
        _ => "???",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_start_of_week_is_previous_sunday() {
        let calendar = FixedCalendar::utc(date(2026, 2, 23));

        // 2026-02-18 is a Wednesday
        assert_eq!(calendar.start_of_week(date(2026, 2, 18)), date(2026, 2, 15));
        // Sundays start their own week
        assert_eq!(calendar.start_of_week(date(2026, 2, 15)), date(2026, 2, 15));
        // Saturday belongs to the week that started six days earlier
        assert_eq!(calendar.start_of_week(date(2026, 2, 21)), date(2026, 2, 15));
        // weeks can straddle a year boundary
        assert_eq!(calendar.start_of_week(date(2026, 1, 2)), date(2025, 12, 28));
    }

    #[test]
    fn test_local_date_follows_offset() {
        let ts = DateTime::parse_from_rfc3339("2026-02-17T23:30:00+00:00").unwrap();

        let utc = FixedCalendar::utc(date(2026, 2, 17));
        let plus_two = FixedCalendar::new(
            FixedOffset::east_opt(2 * 3600).unwrap(),
            date(2026, 2, 17),
        );

        assert_eq!(utc.local_date(&ts), date(2026, 2, 17));
        assert_eq!(plus_two.local_date(&ts), date(2026, 2, 18));
    }

    #[test]
    fn test_same_day_ignores_time_of_day() {
        let calendar = FixedCalendar::utc(date(2026, 2, 17));
        let morning = DateTime::parse_from_rfc3339("2026-02-17T00:05:00+00:00").unwrap();
        let night = DateTime::parse_from_rfc3339("2026-02-17T23:55:00+00:00").unwrap();
        let next = DateTime::parse_from_rfc3339("2026-02-18T00:00:00+00:00").unwrap();

        assert!(calendar.same_day(&morning, &night));
        assert!(!calendar.same_day(&night, &next));
    }

    #[test]
    fn test_format_short_date() {
        let calendar = FixedCalendar::utc(date(2026, 2, 17));
        assert_eq!(calendar.format_short_date(date(2026, 2, 7)), "2/7/2026");
        assert_eq!(calendar.format_short_date(date(2025, 12, 31)), "12/31/2025");
    }
}
