//! Consecutive-day sales streak.

use shared::Sale;
use std::collections::HashSet;

use super::calendar::LocalCalendar;

/// Number of consecutive local days, ending today, with at least one completed sale.
///
/// A day without sales so far does not break the streak: when nothing was sold
/// today the count starts from yesterday instead.
pub fn calc_streak<C: LocalCalendar + ?Sized>(sales: &[Sale], calendar: &C) -> u32 {
    let days: HashSet<_> = sales
        .iter()
        .filter(|s| s.is_completed())
        .map(|s| calendar.local_date(&s.date))
        .collect();

    if days.is_empty() {
        return 0;
    }

    let today = calendar.today();
    let mut cursor = if days.contains(&today) {
        Some(today)
    } else {
        today.pred_opt()
    };

    let mut streak = 0;
    while let Some(day) = cursor.filter(|d| days.contains(d)) {
        streak += 1;
        cursor = day.pred_opt();
    }
    streak
}
