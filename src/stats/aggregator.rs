//! Stats Aggregator
//!
//! Records one processed file against the current UTC day. Concurrent
//! callers never lose an increment: each event is a single upsert statement
//! in the store, never a read followed by a write.

use chrono::{DateTime, Utc};

use super::types::{utc_day, StatsError};
use crate::db::StatsStore;

/// Writer side of the statistics store
#[derive(Debug, Clone)]
pub struct StatsAggregator {
    store: StatsStore,
}

impl StatsAggregator {
    pub fn new(store: StatsStore) -> Self {
        Self { store }
    }

    /// Record one processed file of `size_bytes` for today
    pub async fn record_event(&self, size_bytes: u64) -> Result<(), StatsError> {
        self.record_event_at(size_bytes, Utc::now()).await
    }

    /// Record one processed file against the UTC day containing `at`
    pub async fn record_event_at(&self, size_bytes: u64, at: DateTime<Utc>) -> Result<(), StatsError> {
        let size = i64::try_from(size_bytes).map_err(|_| StatsError::SizeOverflow(size_bytes))?;
        let date = utc_day(at);

        match self.store.increment(date, size).await {
            Ok(()) => {
                tracing::trace!(date = %date, size_bytes = size_bytes, "Recorded file event");
                Ok(())
            }
            Err(e) => {
                tracing::error!(
                    date = %date,
                    size_bytes = size_bytes,
                    error = %e,
                    "Failed to record file processing"
                );
                Err(e)
            }
        }
    }
}
