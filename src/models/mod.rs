pub mod contribution;
pub mod median_tracker;
pub mod report;

pub use contribution::{Contribution, Rejection};
pub use median_tracker::RunningMedianTracker;
pub use report::{DateSummary, ZipSummary};
