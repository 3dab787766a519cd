use std::str::FromStr;

use chrono::NaiveDate;
use csv::StringRecord;
use rust_decimal::Decimal;
use thiserror::Error;

/// Field positions in an itemized contribution line
pub const RECIPIENT_FIELD: usize = 0;
pub const ZIP_FIELD: usize = 10;
pub const DATE_FIELD: usize = 13;
pub const AMOUNT_FIELD: usize = 14;
pub const OTHER_ID_FIELD: usize = 15;

/// Minimum number of `|`-separated fields for a line to be considered
pub const MIN_FIELDS: usize = OTHER_ID_FIELD + 1;

const POSTAL_AREA_LEN: usize = 5;
const DATE_LEN: usize = 8;
const DATE_FORMAT: &str = "%m%d%Y";

/// Largest accepted amount magnitude; leaves room for sums and medians over a key
const MAX_AMOUNT: i128 = 100_000_000_000_000_000_000;

/// Why a line takes no part in either report
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Rejection {
    #[error("empty line")]
    EmptyLine,

    #[error("too few fields: found {0}")]
    TooFewFields(usize),

    #[error("contribution attributed to a non-individual contributor")]
    NonIndividualContributor,

    #[error("missing recipient id")]
    MissingRecipient,

    #[error("missing transaction amount")]
    MissingAmount,

    #[error("transaction amount is not a number: {0:?}")]
    InvalidAmount(String),
}

/// One validated contribution
///
/// `postal_area` and `transaction_date` are independently optional: a record
/// with a bad zip can still feed the date report and vice versa.
#[derive(Debug, Clone, PartialEq)]
pub struct Contribution {
    pub recipient_id: String,
    pub postal_area: Option<String>,
    pub transaction_date: Option<NaiveDate>,
    pub amount: Decimal,
}

impl Contribution {
    /// Parse a record already split by the CSV reader
    pub fn from_record(record: &StringRecord) -> Result<Self, Rejection> {
        if record.len() <= 1 && record.iter().all(str::is_empty) {
            return Err(Rejection::EmptyLine);
        }
        let fields: Vec<&str> = record.iter().collect();
        Self::from_fields(&fields)
    }

    /// Validate the relevant fields of a split line
    ///
    /// Checks run in a fixed order and the first failure wins.
    pub fn from_fields(fields: &[&str]) -> Result<Self, Rejection> {
        if fields.len() < MIN_FIELDS {
            return Err(Rejection::TooFewFields(fields.len()));
        }

        if !fields[OTHER_ID_FIELD].is_empty() {
            return Err(Rejection::NonIndividualContributor);
        }

        let recipient_id = fields[RECIPIENT_FIELD];
        if recipient_id.is_empty() {
            return Err(Rejection::MissingRecipient);
        }

        let raw_amount = fields[AMOUNT_FIELD];
        if raw_amount.is_empty() {
            return Err(Rejection::MissingAmount);
        }
        let amount = parse_amount(raw_amount)
            .ok_or_else(|| Rejection::InvalidAmount(raw_amount.to_string()))?;

        Ok(Self {
            recipient_id: recipient_id.to_string(),
            postal_area: postal_area(fields[ZIP_FIELD]),
            transaction_date: parse_date(fields[DATE_FIELD]),
            amount,
        })
    }
}

/// Parse an amount as a plain decimal, falling back to scientific notation
///
/// Values with a magnitude above 1e20 are refused.
fn parse_amount(raw: &str) -> Option<Decimal> {
    let trimmed = raw.trim();
    let amount = Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .ok()?;
    (amount.abs() <= Decimal::from_i128_with_scale(MAX_AMOUNT, 0)).then_some(amount)
}

/// First five characters of a zip code, `None` when the raw value is shorter
pub fn postal_area(raw_zip: &str) -> Option<String> {
    let area: String = raw_zip.chars().take(POSTAL_AREA_LEN).collect();
    (area.chars().count() == POSTAL_AREA_LEN).then_some(area)
}

/// Parse an eight digit `MMDDYYYY` date, `None` when it is not a real calendar date
pub fn parse_date(raw_date: &str) -> Option<NaiveDate> {
    if raw_date.len() != DATE_LEN || !raw_date.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    NaiveDate::parse_from_str(raw_date, DATE_FORMAT).ok()
}

/// Render a date back into `MMDDYYYY`
pub fn format_date(date: &NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}
