//! Dashboard snapshot assembly.
//!
//! Pulls every derived view the dashboard shows out of one snapshot of the
//! store. Nothing is cached: callers rebuild the snapshot after each change.

use log::debug;
use shared::{DashboardSnapshot, Product, Sale, TimeRange};

use super::calendar::LocalCalendar;
use super::chart_series::{build_series, SeriesOptions};
use super::rollups::{client_rollup, product_rollup};
use super::streak::calc_streak;
use super::totals::compute_totals;

#[derive(Clone, Default)]
pub struct DashboardService {}

impl DashboardService {
    pub fn new() -> Self {
        Self {}
    }

    pub fn snapshot<C: LocalCalendar + ?Sized>(
        &self,
        sales: &[Sale],
        products: &[Product],
        calendar: &C,
        range: TimeRange,
        options: SeriesOptions,
    ) -> DashboardSnapshot {
        debug!("Building {} dashboard from {} sales", range.as_str(), sales.len());

        DashboardSnapshot {
            totals: compute_totals(sales, products, calendar),
            streak: calc_streak(sales, calendar),
            range,
            chart: build_series(sales, range, calendar, options),
            products: product_rollup(sales),
            top_clients: client_rollup(sales),
        }
    }
}
