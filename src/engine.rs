use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::{Contribution, RunningMedianTracker, ZipSummary};
use crate::rounding::{collapse_total, round_half_up};

/// Identifies one running tracker: (recipient, postal area)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ZipKey {
    pub recipient_id: String,
    pub postal_area: String,
}

/// Identifies one batch group: (recipient, date)
///
/// Field order gives the report order: recipient first, then chronological date.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DateKey {
    pub recipient_id: String,
    pub transaction_date: NaiveDate,
}

/// Contribution aggregation engine
pub struct ContributionEngine {
    /// Running median per (recipient, postal area)
    by_zip: HashMap<ZipKey, RunningMedianTracker>,
    /// Amounts per (recipient, date), in arrival order
    by_date: HashMap<DateKey, Vec<Decimal>>,
}

impl ContributionEngine {
    /// Create an empty engine
    pub fn new() -> Self {
        Self {
            by_zip: HashMap::new(),
            by_date: HashMap::new(),
        }
    }

    /// Route one contribution into both aggregates
    ///
    /// Returns the per-zip line to emit, if the contribution carried a postal area.
    pub fn process_contribution(&mut self, contribution: Contribution) -> Option<ZipSummary> {
        let summary = self.update_zip(&contribution);
        self.record_date(contribution);
        summary
    }

    /// Feed the running tracker for the contribution's postal area
    ///
    /// No-op returning `None` when the postal area is absent.
    pub fn update_zip(&mut self, contribution: &Contribution) -> Option<ZipSummary> {
        let postal_area = contribution.postal_area.as_ref()?;

        let key = ZipKey {
            recipient_id: contribution.recipient_id.clone(),
            postal_area: postal_area.clone(),
        };

        // Get or create tracker
        let tracker = self
            .by_zip
            .entry(key)
            .or_insert_with(RunningMedianTracker::new);
        tracker.insert(contribution.amount);

        // A tracker always holds at least the value just inserted
        let median = tracker.median()?;

        Some(ZipSummary {
            recipient_id: contribution.recipient_id.clone(),
            postal_area: postal_area.clone(),
            median: round_half_up(median),
            count: tracker.count(),
            total: collapse_total(tracker.total()),
        })
    }

    /// Buffer the amount under (recipient, date) for the final report
    ///
    /// Returns false when the contribution carried no valid date.
    pub fn record_date(&mut self, contribution: Contribution) -> bool {
        let Some(transaction_date) = contribution.transaction_date else {
            return false;
        };

        let key = DateKey {
            recipient_id: contribution.recipient_id,
            transaction_date,
        };
        self.by_date
            .entry(key)
            .or_insert_with(Vec::new)
            .push(contribution.amount);
        true
    }

    /// Look up the running tracker for a (recipient, postal area) pair
    pub fn zip_tracker(
        &self,
        recipient_id: &str,
        postal_area: &str,
    ) -> Option<&RunningMedianTracker> {
        self.by_zip.get(&ZipKey {
            recipient_id: recipient_id.to_string(),
            postal_area: postal_area.to_string(),
        })
    }

    /// Number of distinct (recipient, postal area) pairs seen
    pub fn zip_key_count(&self) -> usize {
        self.by_zip.len()
    }

    /// Number of distinct (recipient, date) pairs seen
    pub fn date_key_count(&self) -> usize {
        self.by_date.len()
    }

    /// Consume the engine and hand the date groups to the finalizer
    pub fn into_date_groups(self) -> HashMap<DateKey, Vec<Decimal>> {
        self.by_date
    }
}

impl Default for ContributionEngine {
    fn default() -> Self {
        Self::new()
    }
}
