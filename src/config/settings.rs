//! Settings structures for podcast-relay configuration

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Listing endpoint the relay forwards to when nothing else is configured
pub const DEFAULT_UPSTREAM_URL: &str = "https://601f1754b5a0e9001706a292.mockapi.io/podcasts";

/// Main settings structure matching settings.yml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,
    pub upstream: UpstreamSettings,
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse settings from YAML text
    pub fn from_yaml(content: &str) -> Result<Self> {
        let settings: Settings = serde_yaml::from_str(content)?;
        Ok(settings)
    }

    /// Merge with environment variables (PODCAST_RELAY_* prefix)
    pub fn merge_env(&mut self) {
        self.merge_vars(|key| std::env::var(key).ok());
    }

    fn merge_vars<F>(&mut self, var: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = var("PODCAST_RELAY_PORT") {
            if let Ok(port) = val.parse() {
                self.server.port = port;
            }
        }
        if let Some(val) = var("PODCAST_RELAY_BIND_ADDRESS") {
            self.server.bind_address = val;
        }
        if let Some(val) = var("PODCAST_RELAY_UPSTREAM_URL") {
            self.upstream.base_url = val;
        }
        if let Some(val) = var("PODCAST_RELAY_REQUEST_TIMEOUT") {
            if let Ok(timeout) = val.parse() {
                self.upstream.request_timeout = timeout;
            }
        }
    }
}

/// Server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Server port
    pub port: u16,
    /// Bind address
    pub bind_address: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            port: 8080,
            bind_address: "0.0.0.0".to_string(),
        }
    }
}

/// Upstream listing API settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UpstreamSettings {
    /// Listing endpoint, without query string
    pub base_url: String,
    /// Sent as `l` on every upstream request
    pub page_size: u32,
    /// Request timeout in seconds; 0 waits forever
    pub request_timeout: f64,
    /// User agent sent upstream
    pub useragent: String,
    /// Proxy for all outgoing requests
    pub proxy: Option<String>,
}

impl Default for UpstreamSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_UPSTREAM_URL.to_string(),
            page_size: 10,
            request_timeout: 10.0,
            useragent: format!("podcast-relay/{}", crate::VERSION),
            proxy: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.server.port, 8080);
        assert_eq!(settings.server.bind_address, "0.0.0.0");
        assert_eq!(settings.upstream.base_url, DEFAULT_UPSTREAM_URL);
        assert_eq!(settings.upstream.page_size, 10);
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let settings = Settings::from_yaml(
            "upstream:\n  base_url: http://localhost:9000/podcasts\n  request_timeout: 2.5\n",
        )
        .unwrap();

        assert_eq!(settings.upstream.base_url, "http://localhost:9000/podcasts");
        assert_eq!(settings.upstream.request_timeout, 2.5);
        assert_eq!(settings.upstream.page_size, 10);
        assert_eq!(settings.server.port, 8080);
    }

    #[test]
    fn test_from_file() {
        let path = std::env::temp_dir().join(format!(
            "podcast-relay-settings-{}.yml",
            std::process::id()
        ));
        std::fs::write(&path, "server:\n  port: 9191\n").unwrap();

        let settings = Settings::from_file(&path);
        std::fs::remove_file(&path).ok();

        assert_eq!(settings.unwrap().server.port, 9191);
    }

    #[test]
    fn test_invalid_yaml_is_an_error() {
        assert!(Settings::from_yaml("server: [not, a, map]").is_err());
    }

    #[test]
    fn test_env_overrides() {
        let vars: HashMap<&str, &str> = [
            ("PODCAST_RELAY_PORT", "3000"),
            ("PODCAST_RELAY_BIND_ADDRESS", "127.0.0.1"),
            ("PODCAST_RELAY_UPSTREAM_URL", "http://upstream.test/podcasts"),
            ("PODCAST_RELAY_REQUEST_TIMEOUT", "not-a-number"),
        ]
        .into_iter()
        .collect();

        let mut settings = Settings::default();
        settings.merge_vars(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(settings.server.port, 3000);
        assert_eq!(settings.server.bind_address, "127.0.0.1");
        assert_eq!(settings.upstream.base_url, "http://upstream.test/podcasts");
        // unparsable values leave the default in place
        assert_eq!(settings.upstream.request_timeout, 10.0);
    }
}
