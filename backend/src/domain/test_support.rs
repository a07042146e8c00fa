//! Fixtures shared by the domain tests.
//!
//! Timestamps are written as `YYYY-MM-DDTHH:MM:SS` and interpreted at UTC,
//! which matches the offset of the calendars built by [`calendar_at`].

use chrono::{DateTime, NaiveDate};
use shared::{Product, Sale, SaleStatus};

use super::calendar::FixedCalendar;

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn calendar_at(y: i32, m: u32, d: u32) -> FixedCalendar {
    FixedCalendar::utc(date(y, m, d))
}

pub fn sale(
    id: u64,
    client: &str,
    product: &str,
    amount: f64,
    robux: u64,
    status: SaleStatus,
    when: &str,
) -> Sale {
    Sale {
        id,
        client: client.to_string(),
        product: product.to_string(),
        amount,
        robux,
        date: DateTime::parse_from_rfc3339(&format!("{}+00:00", when)).unwrap(),
        status,
        notes: String::new(),
    }
}

pub fn paid(id: u64, client: &str, amount: f64, when: &str) -> Sale {
    sale(id, client, "Atomic", amount, 3000, SaleStatus::Completed, when)
}

pub fn pending(id: u64, client: &str, amount: f64, when: &str) -> Sale {
    sale(id, client, "Atomic", amount, 3000, SaleStatus::Pending, when)
}

pub fn product(name: &str, price: f64, robux: u64, cost: f64) -> Product {
    Product {
        name: name.to_string(),
        price,
        robux,
        cost,
    }
}
