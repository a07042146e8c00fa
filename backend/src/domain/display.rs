//! Text formatting for amounts shown by the command-line dashboard.

/// Group the digits of a whole number with commas: `1234567` -> `1,234,567`
fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

/// `$1,234` for whole amounts, `$12.50` otherwise
pub fn format_usd(amount: f64) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    let cents = (amount.abs() * 100.0).round() as u64;
    let (dollars, cents) = (cents / 100, cents % 100);
    if cents == 0 {
        format!("{}${}", sign, group_thousands(dollars))
    } else {
        format!("{}${}.{:02}", sign, group_thousands(dollars), cents)
    }
}

/// `39,000 R$`
pub fn format_robux(robux: u64) -> String {
    format!("{} R$", group_thousands(robux))
}

/// Horizontal bar of `width` cells filled in proportion to `fraction`
pub fn bar(fraction: f64, width: usize) -> String {
    let filled = (fraction.clamp(0.0, 1.0) * width as f64).round() as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
