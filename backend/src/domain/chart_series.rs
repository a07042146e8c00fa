//! Time-bucketed revenue series for the dashboard chart.
//!
//! Completed sales are grouped by local day, by week (keyed by the Sunday that
//! starts it) or by month. Only the most recent buckets are kept: 14 days,
//! 8 weeks or 12 months.

use chrono::{Datelike, NaiveDate};
use shared::{ChartBucket, Sale, TimeRange};
use std::collections::HashMap;

use super::calendar::{month_abbrev, LocalCalendar};

/// Order in which buckets are laid out before the oldest are dropped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BucketOrder {
    /// Oldest bucket first, whatever order the sales are stored in
    #[default]
    Chronological,
    /// Order in which each bucket is first met while scanning the sales
    ScanOrder,
}

/// Caller-owned options for building a series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SeriesOptions {
    pub order: BucketOrder,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
enum BucketKey {
    Day(NaiveDate),
    /// Sunday starting the week
    Week(NaiveDate),
    Month { year: i32, month: u32 },
}

impl BucketKey {
    fn for_sale<C: LocalCalendar + ?Sized>(range: TimeRange, sale: &Sale, calendar: &C) -> Self {
        let day = calendar.local_date(&sale.date);
        match range {
            TimeRange::Daily => BucketKey::Day(day),
            TimeRange::Weekly => BucketKey::Week(calendar.start_of_week(day)),
            TimeRange::Monthly => BucketKey::Month {
                year: day.year(),
                month: day.month(),
            },
        }
    }

    fn label(&self) -> String {
        match self {
            BucketKey::Day(day) => format!("{} {:02}", month_abbrev(day.month()), day.day()),
            BucketKey::Week(sunday) => {
                format!("W {} {:02}", month_abbrev(sunday.month()), sunday.day())
            }
            BucketKey::Month { year, month } => {
                format!("{} {:02}", month_abbrev(*month), year.rem_euclid(100))
            }
        }
    }
}

/// Build the chart series for `range` from a snapshot of the sales.
///
/// Pending sales are ignored. Sales sharing a bucket are merged: their count,
/// revenue and Robux are summed.
pub fn build_series<C: LocalCalendar + ?Sized>(
    sales: &[Sale],
    range: TimeRange,
    calendar: &C,
    options: SeriesOptions,
) -> Vec<ChartBucket> {
    let mut buckets = collect_buckets(sales, range, calendar);

    if options.order == BucketOrder::Chronological {
        buckets.sort_by_key(|(key, _)| *key);
    }

    let skip = buckets.len().saturating_sub(range.bucket_limit());
    buckets.into_iter().skip(skip).map(|(_, bucket)| bucket).collect()
}

pub fn daily_series<C: LocalCalendar + ?Sized>(sales: &[Sale], calendar: &C) -> Vec<ChartBucket> {
    build_series(sales, TimeRange::Daily, calendar, SeriesOptions::default())
}

pub fn weekly_series<C: LocalCalendar + ?Sized>(sales: &[Sale], calendar: &C) -> Vec<ChartBucket> {
    build_series(sales, TimeRange::Weekly, calendar, SeriesOptions::default())
}

pub fn monthly_series<C: LocalCalendar + ?Sized>(sales: &[Sale], calendar: &C) -> Vec<ChartBucket> {
    build_series(sales, TimeRange::Monthly, calendar, SeriesOptions::default())
}

/// Every bucket, untruncated, in first-seen order
fn collect_buckets<C: LocalCalendar + ?Sized>(
    sales: &[Sale],
    range: TimeRange,
    calendar: &C,
) -> Vec<(BucketKey, ChartBucket)> {
    let mut positions: HashMap<BucketKey, usize> = HashMap::new();
    let mut buckets: Vec<(BucketKey, ChartBucket)> = Vec::new();

    for sale in sales.iter().filter(|s| s.is_completed()) {
        let key = BucketKey::for_sale(range, sale, calendar);
        let position = *positions.entry(key).or_insert_with(|| {
            buckets.push((
                key,
                ChartBucket {
                    label: key.label(),
                    revenue: 0.0,
                    robux: 0,
                    count: 0,
                },
            ));
            buckets.len() - 1
        });

        let bucket = &mut buckets[position].1;
        bucket.revenue += sale.amount;
        bucket.robux += sale.robux;
        bucket.count += 1;
    }

    buckets
}
