//! Upstream podcast listing source
//!
//! Building the request and decoding the body are plain functions;
//! `fetch` ties them to the HTTP client and owns the status policy.

use super::RelayError;
use crate::config::UpstreamSettings;
use crate::network::HttpClient;
use crate::podcasts::{PodcastItem, PodcastQuery};
use reqwest::StatusCode;
use tracing::debug;
use url::Url;

/// The third-party listing API the relay forwards to
#[derive(Clone)]
pub struct PodcastSource {
    client: HttpClient,
    base_url: Url,
    page_size: u32,
}

impl PodcastSource {
    /// Create a source from the upstream settings
    pub fn new(client: HttpClient, settings: &UpstreamSettings) -> Result<Self, RelayError> {
        Ok(Self {
            client,
            base_url: Url::parse(&settings.base_url)?,
            page_size: settings.page_size,
        })
    }

    /// Build the upstream URL: `p`, `l` and `search`, percent-encoded
    pub fn request(&self, query: &PodcastQuery) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut()
            .append_pair("p", &query.page)
            .append_pair("l", &self.page_size.to_string())
            .append_pair("search", &query.search);
        url
    }

    /// Decode an upstream body as a JSON array of podcasts.
    ///
    /// Called for every status except 404, so upstream error pages surface
    /// as [`RelayError::Decode`].
    pub fn decode(body: &[u8]) -> Result<Vec<PodcastItem>, RelayError> {
        Ok(serde_json::from_slice(body)?)
    }

    /// Fetch one page of podcasts with a single upstream call.
    ///
    /// 404 means "no results": an empty list is returned and the body is
    /// never read.
    pub async fn fetch(&self, query: &PodcastQuery) -> Result<Vec<PodcastItem>, RelayError> {
        let url = self.request(query);
        debug!("Fetching podcasts from {}", url);

        let response = self.client.get(url).await.map_err(RelayError::Transport)?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            debug!("Upstream returned 404, relaying empty result");
            return Ok(Vec::new());
        }

        let body = response.bytes().await.map_err(RelayError::BodyRead)?;
        Self::decode(&body)
    }
}
