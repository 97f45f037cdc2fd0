//! Application state shared across all request handlers.

use std::{sync::Arc, time::Duration};

use crate::server::config::Config;

/// Shared state handed to every handler through Axum's state extraction.
///
/// Cloned per request; the configuration sits behind an `Arc`.
#[derive(Clone, Debug)]
pub struct AppState {
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Sleeps for `millis` unless latency is switched off.
    pub async fn simulate_latency(&self, millis: u64) {
        if self.config.latency {
            tokio::time::sleep(Duration::from_millis(millis)).await;
        }
    }
}
