use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Serialize, Serializer};

use super::contribution::format_date;

/// One line of the running per-zip report
///
/// `median` is already rounded and `total` already collapsed, so both
/// serialize without trailing zeros.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ZipSummary {
    pub recipient_id: String,
    pub postal_area: String,
    pub median: Decimal,
    pub count: usize,
    pub total: Decimal,
}

/// One line of the final per-date report
#[derive(Debug, Clone, PartialEq)]
pub struct DateSummary {
    pub recipient_id: String,
    pub transaction_date: NaiveDate,
    pub median: Decimal,
    pub count: usize,
    pub total: Decimal,
}

// Dates are kept as `NaiveDate` for ordering and written back as MMDDYYYY
#[derive(Serialize)]
struct DateSummarySerialized<'a> {
    recipient_id: &'a str,
    transaction_date: String,
    median: Decimal,
    count: usize,
    total: Decimal,
}

impl Serialize for DateSummary {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let wrapper = DateSummarySerialized {
            recipient_id: &self.recipient_id,
            transaction_date: format_date(&self.transaction_date),
            median: self.median,
            count: self.count,
            total: self.total,
        };
        wrapper.serialize(serializer)
    }
}
