//! File event processing
//!
//! Issues the link and records usage for each forwarded file. The two run
//! side by side: a failed stats write is logged and reported through
//! `stats_recorded`, it never withholds the link.

use crate::links::{LinkError, LinkIssuer};
use crate::stats::StatsAggregator;

use super::media::{display_name, format_file_size, media_kind};
use super::types::{FileEvent, ProcessedFile};

/// Processes inbound file events
#[derive(Debug, Clone)]
pub struct FileEventProcessor {
    issuer: LinkIssuer,
    aggregator: StatsAggregator,
}

impl FileEventProcessor {
    pub fn new(issuer: LinkIssuer, aggregator: StatsAggregator) -> Self {
        Self { issuer, aggregator }
    }

    pub fn issuer(&self) -> &LinkIssuer {
        &self.issuer
    }

    /// Issue the link for `event` and record it in the usage counters
    pub async fn process(&self, event: &FileEvent) -> Result<ProcessedFile, LinkError> {
        let metadata = event.metadata();

        let (link, recorded) = tokio::join!(
            async { self.issuer.issue(event.message_id, &metadata) },
            self.aggregator.record_event(event.file_size),
        );

        let stats_recorded = match recorded {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(
                    message_id = event.message_id,
                    error = %e,
                    "Usage not recorded, continuing"
                );
                false
            }
        };

        let link = link?;

        tracing::info!(
            message_id = event.message_id,
            file_id = event.file_id,
            file_size = event.file_size,
            url = %link.url,
            "Processed file event"
        );

        Ok(ProcessedFile {
            display_name: display_name(event.file_id, &event.file_name),
            media_kind: media_kind(&event.mime_type),
            formatted_size: format_file_size(event.file_size),
            link,
            stats_recorded,
        })
    }
}
