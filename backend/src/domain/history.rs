//! Filtering of the sales history list.

use shared::{Sale, SaleStatus};

/// Which status tab of the history list is selected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(SaleStatus),
}

/// Caller-owned state of the history list controls
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HistoryFilter {
    pub status: StatusFilter,
    /// Free-text search over client, product and notes
    pub query: Option<String>,
}

impl HistoryFilter {
    pub fn matches(&self, sale: &Sale) -> bool {
        if let StatusFilter::Only(status) = self.status {
            if sale.status != status {
                return false;
            }
        }

        match self.query.as_deref().map(str::trim) {
            Some(query) if !query.is_empty() => {
                let query = query.to_lowercase();
                sale.client.to_lowercase().contains(&query)
                    || sale.product.to_lowercase().contains(&query)
                    || sale.notes.to_lowercase().contains(&query)
            }
            _ => true,
        }
    }
}

/// Sales matching `filter`, in stored order
pub fn filter_history<'a>(sales: &'a [Sale], filter: &HistoryFilter) -> Vec<&'a Sale> {
    sales.iter().filter(|s| filter.matches(s)).collect()
}
