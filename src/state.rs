//! Application state management

use std::sync::Arc;

use crate::config::Config;
use crate::db::StatsStore;
use crate::events::FileEventProcessor;
use crate::links::LinkIssuer;
use crate::stats::{StatsAggregator, StatsReporter};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: Config,
    processor: FileEventProcessor,
    reporter: StatsReporter,
}

impl AppState {
    /// Wire the services around an initialized stats store
    pub fn new(config: Config, store: StatsStore) -> Self {
        let issuer = LinkIssuer::new(
            config.links.worker_base_url.clone(),
            config.links.hash_length,
        );
        let processor = FileEventProcessor::new(issuer, StatsAggregator::new(store.clone()));
        let reporter = StatsReporter::new(store);

        Self {
            inner: Arc::new(AppStateInner {
                config,
                processor,
                reporter,
            }),
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.inner.config
    }

    /// Get the file event processor
    pub fn processor(&self) -> &FileEventProcessor {
        &self.inner.processor
    }

    /// Get the link issuer
    pub fn issuer(&self) -> &LinkIssuer {
        self.inner.processor.issuer()
    }

    /// Get the stats reporter
    pub fn reporter(&self) -> &StatsReporter {
        &self.inner.reporter
    }
}
