use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Payment state of a sale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SaleStatus {
    /// Paid; the only status that counts toward revenue
    Completed,
    /// Recorded but not yet paid
    Pending,
}

impl SaleStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SaleStatus::Completed => "completed",
            SaleStatus::Pending => "pending",
        }
    }

    /// The other status, used by the history list's paid/pending switch
    pub fn toggled(self) -> Self {
        match self {
            SaleStatus::Completed => SaleStatus::Pending,
            SaleStatus::Pending => SaleStatus::Completed,
        }
    }
}

impl fmt::Display for SaleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single recorded sale.
///
/// Amounts are frozen when the sale is created: later price changes or
/// deletions in the product catalog never touch existing records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sale {
    /// Creation time in epoch milliseconds, unique within the store
    pub id: u64,
    pub client: String,
    /// Name of the product in the catalog at the time of sale
    pub product: String,
    /// Price paid in USD
    pub amount: f64,
    /// Robux delivered alongside the sale
    #[serde(default)]
    pub robux: u64,
    /// When the sale happened (RFC 3339, immutable)
    pub date: DateTime<FixedOffset>,
    pub status: SaleStatus,
    #[serde(default)]
    pub notes: String,
}

impl Sale {
    pub fn is_completed(&self) -> bool {
        self.status == SaleStatus::Completed
    }
}

/// An entry of the product catalog. The name is the key sales refer to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    /// Unit price in USD
    pub price: f64,
    /// Unit amount of Robux
    #[serde(default)]
    pub robux: u64,
    /// Unit cost in USD, only used for profit
    #[serde(default)]
    pub cost: f64,
}

/// Display preferences. Nothing in the statistics depends on these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub accent: String,
    pub robux_color: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            accent: "#bdffff".to_string(),
            robux_color: "#6ee06e".to_string(),
        }
    }
}

/// Granularity of the revenue chart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeRange {
    Daily,
    Weekly,
    Monthly,
}

impl TimeRange {
    /// How many of the most recent buckets the chart keeps
    pub fn bucket_limit(&self) -> usize {
        match self {
            TimeRange::Daily => 14,
            TimeRange::Weekly => 8,
            TimeRange::Monthly => 12,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeRange::Daily => "daily",
            TimeRange::Weekly => "weekly",
            TimeRange::Monthly => "monthly",
        }
    }
}

impl std::str::FromStr for TimeRange {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "daily" => Ok(TimeRange::Daily),
            "weekly" => Ok(TimeRange::Weekly),
            "monthly" => Ok(TimeRange::Monthly),
            _ => Err(format!("Invalid time range: {}", s)),
        }
    }
}

/// One point of the revenue chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartBucket {
    pub label: String,
    pub revenue: f64,
    pub robux: u64,
    pub count: u32,
}

/// Completed sales grouped by product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRollup {
    pub product: String,
    pub revenue: f64,
    pub robux: u64,
    pub count: u32,
}

/// Completed sales grouped by client, with the bar length relative to the top client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientRollup {
    pub client: String,
    pub revenue: f64,
    pub robux: u64,
    /// Revenue divided by the largest revenue among the listed clients, in [0, 1]
    pub fraction: f64,
}

/// Scalar statistics shown in the dashboard header cards
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DashboardTotals {
    pub revenue: f64,
    pub robux: u64,
    pub total_cost: f64,
    pub profit: f64,
    pub completed_count: u32,
    /// Revenue per completed sale, rounded to a whole dollar
    pub average_sale: f64,
    pub today_revenue: f64,
    pub today_robux: u64,
    pub today_count: u32,
    pub pending_count: u32,
    pub pending_value: f64,
}

/// Everything the dashboard renders, computed from one snapshot of the store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    pub totals: DashboardTotals,
    pub streak: u32,
    pub range: TimeRange,
    pub chart: Vec<ChartBucket>,
    pub products: Vec<ProductRollup>,
    pub top_clients: Vec<ClientRollup>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sale_deserializes_with_missing_optional_fields() {
        let json = r#"{
            "id": 1,
            "client": "xDark_Mex",
            "product": "Atomic",
            "amount": 25,
            "date": "2026-02-17T14:30:00+00:00",
            "status": "completed"
        }"#;

        let sale: Sale = serde_json::from_str(json).unwrap();

        assert_eq!(sale.robux, 0);
        assert_eq!(sale.notes, "");
        assert_eq!(sale.amount, 25.0);
        assert!(sale.is_completed());
    }

    #[test]
    fn test_status_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&SaleStatus::Pending).unwrap(), "\"pending\"");
        assert_eq!(SaleStatus::Pending.toggled(), SaleStatus::Completed);
        assert_eq!(SaleStatus::Completed.toggled(), SaleStatus::Pending);
    }

    #[test]
    fn test_settings_use_camel_case_keys() {
        let json = serde_json::to_string(&Settings::default()).unwrap();
        assert!(json.contains("\"robuxColor\":\"#6ee06e\""));
    }

    #[test]
    fn test_time_range_limits() {
        assert_eq!(TimeRange::Daily.bucket_limit(), 14);
        assert_eq!(TimeRange::Weekly.bucket_limit(), 8);
        assert_eq!(TimeRange::Monthly.bucket_limit(), 12);
        assert_eq!("Weekly".parse::<TimeRange>(), Ok(TimeRange::Weekly));
        assert!("yearly".parse::<TimeRange>().is_err());
    }
}
