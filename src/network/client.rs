//! HTTP client for making requests to the upstream listing API

use crate::config::UpstreamSettings;
use anyhow::Result;
use reqwest::{Client, Response};
use std::time::Duration;
use url::Url;

/// HTTP client wrapper configured from the upstream settings
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    timeout: Option<Duration>,
}

impl HttpClient {
    /// Create a new HTTP client with default settings
    pub fn new() -> Result<Self> {
        Self::with_settings(&UpstreamSettings::default())
    }

    /// Create a new HTTP client with custom settings
    pub fn with_settings(settings: &UpstreamSettings) -> Result<Self> {
        let timeout = (settings.request_timeout.is_finite() && settings.request_timeout > 0.0)
            .then(|| Duration::from_secs_f64(settings.request_timeout));

        let mut builder = Client::builder()
            .user_agent(settings.useragent.as_str())
            .gzip(true);

        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        if let Some(ref proxy_url) = settings.proxy {
            builder = builder.proxy(reqwest::Proxy::all(proxy_url)?);
        }

        let client = builder.build()?;

        Ok(Self { client, timeout })
    }

    /// Send a single GET request. The body is left unread so callers can
    /// inspect the status first.
    pub async fn get(&self, url: Url) -> reqwest::Result<Response> {
        self.client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
    }

    /// Configured request timeout, if any
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}
