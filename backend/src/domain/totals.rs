//! Scalar statistics for the dashboard header cards.

use shared::{DashboardTotals, Product, Sale};
use std::collections::HashMap;

use super::calendar::LocalCalendar;

/// Compute revenue, cost, profit and the today/pending breakdowns.
///
/// Cost is looked up by product name in the current catalog; a sale whose
/// product has since been removed costs nothing.
pub fn compute_totals<C: LocalCalendar + ?Sized>(
    sales: &[Sale],
    products: &[Product],
    calendar: &C,
) -> DashboardTotals {
    let mut costs: HashMap<&str, f64> = HashMap::new();
    for product in products {
        // first entry wins when names repeat
        costs.entry(product.name.as_str()).or_insert(product.cost);
    }

    let today = calendar.today();
    let mut totals = DashboardTotals::default();

    for sale in sales {
        if !sale.is_completed() {
            totals.pending_count += 1;
            totals.pending_value += sale.amount;
            continue;
        }

        totals.completed_count += 1;
        totals.revenue += sale.amount;
        totals.robux += sale.robux;
        totals.total_cost += costs.get(sale.product.as_str()).copied().unwrap_or(0.0);

        if calendar.local_date(&sale.date) == today {
            totals.today_count += 1;
            totals.today_revenue += sale.amount;
            totals.today_robux += sale.robux;
        }
    }

    totals.profit = totals.revenue - totals.total_cost;
    totals.average_sale = average_sale(totals.revenue, totals.completed_count);
    totals
}

/// Revenue per sale rounded to a whole dollar, 0 when nothing was sold
pub fn average_sale(revenue: f64, count: u32) -> f64 {
    if count == 0 {
        0.0
    } else {
        (revenue / count as f64).round()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::test_support::{calendar_at, paid, pending, product, sale};
    use shared::SaleStatus;

    #[test]
    fn test_completed_and_pending_split() {
        let calendar = calendar_at(2026, 2, 23);
        let sales = vec![
            sale(1, "a", "Atomic", 25.0, 3000, SaleStatus::Completed, "2026-02-17T14:30:00"),
            sale(2, "b", "Atomic", 25.0, 0, SaleStatus::Pending, "2026-02-17T14:30:00"),
        ];

        let totals = compute_totals(&sales, &[], &calendar);

        assert_eq!(totals.revenue, 25.0);
        assert_eq!(totals.robux, 3000);
        assert_eq!(totals.pending_count, 1);
        assert_eq!(totals.pending_value, 25.0);
        assert_eq!(totals.completed_count, 1);
    }

    #[test]
    fn test_cost_and_profit_use_current_catalog() {
        let calendar = calendar_at(2026, 2, 23);
        let products = vec![product("Atomic", 25.0, 3000, 4.0), product("Nova", 40.0, 5000, 10.0)];
        let sales = vec![
            sale(4, "a", "Atomic", 25.0, 3000, SaleStatus::Completed, "2026-02-20T10:00:00"),
            sale(3, "b", "Nova", 40.0, 5000, SaleStatus::Completed, "2026-02-20T10:00:00"),
            sale(2, "c", "Retired", 30.0, 0, SaleStatus::Completed, "2026-02-20T10:00:00"),
            sale(1, "d", "Nova", 40.0, 5000, SaleStatus::Pending, "2026-02-20T10:00:00"),
        ];

        let totals = compute_totals(&sales, &products, &calendar);

        assert_eq!(totals.revenue, 95.0);
        assert_eq!(totals.total_cost, 14.0);
        assert_eq!(totals.profit, 81.0);
        assert_eq!(totals.pending_value, 40.0);
    }

    #[test]
    fn test_today_subset() {
        let calendar = calendar_at(2026, 2, 23);
        let sales = vec![
            paid(4, "a", 25.0, "2026-02-23T23:59:00"),
            paid(3, "b", 10.0, "2026-02-23T00:00:00"),
            pending(2, "c", 25.0, "2026-02-23T12:00:00"),
            paid(1, "d", 25.0, "2026-02-22T23:59:59"),
        ];

        let totals = compute_totals(&sales, &[], &calendar);

        assert_eq!(totals.today_count, 2);
        assert_eq!(totals.today_revenue, 35.0);
        assert_eq!(totals.today_robux, 6000);
        assert_eq!(totals.revenue, 60.0);
    }

    #[test]
    fn test_average_sale_rounds() {
        assert_eq!(average_sale(0.0, 0), 0.0);
        assert_eq!(average_sale(50.0, 4), 13.0);
        assert_eq!(average_sale(49.0, 4), 12.0);
        assert_eq!(average_sale(75.0, 3), 25.0);
    }

    #[test]
    fn test_empty_inputs() {
        let totals = compute_totals(&[], &[], &calendar_at(2026, 2, 23));
        assert_eq!(totals, DashboardTotals::default());
    }
}
