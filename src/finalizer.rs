use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::engine::DateKey;
use crate::models::DateSummary;
use crate::rounding::{collapse_total, round_half_up};

/// Turn the buffered date groups into report lines, sorted by (recipient, date)
///
/// Each group is sorted once and its median taken directly. Empty groups are skipped.
pub fn finalize(groups: HashMap<DateKey, Vec<Decimal>>) -> Vec<DateSummary> {
    let mut groups: Vec<(DateKey, Vec<Decimal>)> = groups.into_iter().collect();
    groups.sort_by(|(a, _), (b, _)| a.cmp(b));

    groups
        .into_iter()
        .filter_map(|(key, mut amounts)| {
            amounts.sort();
            let median = median_of_sorted(&amounts)?;
            Some(DateSummary {
                recipient_id: key.recipient_id,
                transaction_date: key.transaction_date,
                median: round_half_up(median),
                count: amounts.len(),
                total: collapse_total(amounts.iter().sum()),
            })
        })
        .collect()
}

/// Median of an ascending slice, `None` when empty
pub fn median_of_sorted(sorted: &[Decimal]) -> Option<Decimal> {
    let n = sorted.len();
    if n == 0 {
        return None;
    }
    if n % 2 == 1 {
        Some(sorted[n / 2])
    } else {
        Some((sorted[n / 2 - 1] + sorted[n / 2]) / Decimal::TWO)
    }
}
