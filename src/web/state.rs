//! Application state shared across handlers

use crate::config::UpstreamSettings;
use crate::network::HttpClient;
use crate::relay::PodcastSource;
use std::sync::Arc;

/// Shared application state, immutable after startup
#[derive(Clone)]
pub struct AppState {
    /// Upstream listing source
    pub source: Arc<PodcastSource>,
}

impl AppState {
    /// Create new application state
    pub fn new(settings: &UpstreamSettings, client: HttpClient) -> anyhow::Result<Self> {
        let source = PodcastSource::new(client, settings)?;

        Ok(Self {
            source: Arc::new(source),
        })
    }

    /// Build state from settings alone, creating the HTTP client from them
    pub fn from_settings(settings: &UpstreamSettings) -> anyhow::Result<Self> {
        let client = HttpClient::with_settings(settings)?;
        Self::new(settings, client)
    }
}
