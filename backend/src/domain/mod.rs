//! # Domain Module
//!
//! Business logic of the sales dashboard.
//!
//! ## Module Organization
//!
//! - **calendar**: local date decisions (today, day of a sale, start of week)
//! - **chart_series**: daily/weekly/monthly revenue buckets
//! - **rollups**: per-product and top-client summaries
//! - **streak**: consecutive days with a completed sale
//! - **totals**: revenue, cost, profit, today and pending figures
//! - **history**: status tab and search filtering of the history list
//! - **export_service**: CSV export
//! - **dashboard_service**: one snapshot of every derived view
//! - **sale_service**, **product_service**, **settings_service**: record store operations
//!
//! The statistics modules are pure functions of a snapshot of sales (and the
//! catalog, for costs); they never read storage, the clock or global state.

pub mod calendar;
pub mod chart_series;
pub mod dashboard_service;
pub mod display;
pub mod export_service;
pub mod history;
pub mod models;
pub mod product_service;
pub mod rollups;
pub mod sale_service;
pub mod settings_service;
pub mod streak;
pub mod totals;

#[cfg(test)]
pub mod test_support;

pub use calendar::{FixedCalendar, LocalCalendar, SystemCalendar};
pub use chart_series::{
    build_series, daily_series, monthly_series, weekly_series, BucketOrder, SeriesOptions,
};
pub use dashboard_service::DashboardService;
pub use export_service::{ExportResult, ExportService};
pub use history::{filter_history, HistoryFilter, StatusFilter};
pub use product_service::ProductService;
pub use rollups::{client_rollup, product_rollup};
pub use sale_service::SaleService;
pub use settings_service::SettingsService;
pub use streak::calc_streak;
pub use totals::compute_totals;
