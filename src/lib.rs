//! Podcast-Relay: a small HTTP relay in front of a podcast listing API
//!
//! Accepts search and page parameters, forwards them to the upstream API and
//! republishes the JSON result with permissive cross-origin headers.

pub mod config;
pub mod network;
pub mod podcasts;
pub mod relay;
pub mod web;

pub use config::Settings;
pub use podcasts::{ErrorResponse, PodcastItem, PodcastQuery, PodcastsResponse};
pub use relay::{PodcastSource, RelayError};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
