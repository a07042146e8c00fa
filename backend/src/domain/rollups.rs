//! Per-product and per-client summaries of completed sales.

use shared::{ClientRollup, ProductRollup, Sale};
use std::collections::HashMap;

/// Number of clients listed in the top clients panel
pub const TOP_CLIENTS: usize = 5;

/// Group completed sales by product name, highest revenue first.
///
/// Products with equal revenue keep the order in which they were first met.
pub fn product_rollup(sales: &[Sale]) -> Vec<ProductRollup> {
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut rollup: Vec<ProductRollup> = Vec::new();

    for sale in sales.iter().filter(|s| s.is_completed()) {
        let position = *positions.entry(sale.product.as_str()).or_insert_with(|| {
            rollup.push(ProductRollup {
                product: sale.product.clone(),
                revenue: 0.0,
                robux: 0,
                count: 0,
            });
            rollup.len() - 1
        });

        let entry = &mut rollup[position];
        entry.revenue += sale.amount;
        entry.robux += sale.robux;
        entry.count += 1;
    }

    // sort_by is stable, so ties stay in encounter order
    rollup.sort_by(|a, b| b.revenue.total_cmp(&a.revenue));
    rollup
}

/// The five clients with the highest completed revenue.
///
/// Each entry carries its revenue as a fraction of the first entry's, for
/// drawing proportional bars. When the top revenue is zero every fraction is 0.
pub fn client_rollup(sales: &[Sale]) -> Vec<ClientRollup> {
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut totals: Vec<(&str, f64, u64)> = Vec::new();

    for sale in sales.iter().filter(|s| s.is_completed()) {
        let position = *positions.entry(sale.client.as_str()).or_insert_with(|| {
            totals.push((sale.client.as_str(), 0.0, 0));
            totals.len() - 1
        });

        let entry = &mut totals[position];
        entry.1 += sale.amount;
        entry.2 += sale.robux;
    }

    totals.sort_by(|a, b| b.1.total_cmp(&a.1));
    totals.truncate(TOP_CLIENTS);

    let max = totals.first().map(|(_, revenue, _)| *revenue).unwrap_or(0.0);

    totals
        .into_iter()
        .map(|(client, revenue, robux)| ClientRollup {
            client: client.to_string(),
            revenue,
            robux,
            fraction: if max > 0.0 { revenue / max } else { 0.0 },
        })
        .collect()
}
