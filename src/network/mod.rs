//! HTTP networking module
//!
//! Provides the outgoing HTTP client used to reach the upstream listing API.

mod client;

pub use client::HttpClient;
