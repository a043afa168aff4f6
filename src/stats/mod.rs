//! Usage Statistics Module
//!
//! Per-day counters of processed files:
//! - `StatsAggregator` is the only writer (atomic upsert-increment)
//! - `StatsReporter` computes read-only rollups (today, yesterday, last
//!   week, all time)

pub mod aggregator;
pub mod reporter;
pub mod types;

pub use aggregator::StatsAggregator;
pub use reporter::StatsReporter;
pub use types::*;
