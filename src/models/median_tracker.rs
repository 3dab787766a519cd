use std::cmp::Reverse;
use std::collections::BinaryHeap;

use rust_decimal::Decimal;

/// Running median over an unbounded stream of amounts
///
/// Two heaps split the values seen so far: `lower` is a max-heap holding the
/// smaller half and `upper` is a min-heap holding the larger half. Every value
/// in `lower` is <= every value in `upper`, and `upper` holds either as many
/// values as `lower` or exactly one more.
///
/// Insertion is O(log n); median, count and total are O(1).
#[derive(Debug, Clone, Default)]
pub struct RunningMedianTracker {
    lower: BinaryHeap<Decimal>,
    upper: BinaryHeap<Reverse<Decimal>>,
    total: Decimal,
}

impl RunningMedianTracker {
    /// Create an empty tracker
    pub fn new() -> Self {
        Self {
            lower: BinaryHeap::new(),
            upper: BinaryHeap::new(),
            total: Decimal::ZERO,
        }
    }

    /// Add one amount to the stream
    pub fn insert(&mut self, value: Decimal) {
        // Route through `upper` so the smallest of the larger half drops into `lower`
        self.upper.push(Reverse(value));
        if let Some(Reverse(smallest)) = self.upper.pop() {
            self.lower.push(smallest);
        }

        if self.lower.len() > self.upper.len() {
            if let Some(largest) = self.lower.pop() {
                self.upper.push(Reverse(largest));
            }
        }

        self.total += value;
    }

    /// Median of everything inserted so far, `None` before the first insert
    pub fn median(&self) -> Option<Decimal> {
        let Reverse(upper_min) = *self.upper.peek()?;
        if self.upper.len() > self.lower.len() {
            return Some(upper_min);
        }
        let lower_max = *self.lower.peek()?;
        Some((upper_min + lower_max) / Decimal::TWO)
    }

    /// Number of amounts inserted
    pub fn count(&self) -> usize {
        self.lower.len() + self.upper.len()
    }

    /// Exact sum of all amounts inserted
    pub fn total(&self) -> Decimal {
        self.total
    }

    /// Sizes of the (lower, upper) halves
    pub fn halves(&self) -> (usize, usize) {
        (self.lower.len(), self.upper.len())
    }
}
