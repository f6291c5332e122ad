//! Podcast listing data models
//!
//! Field names follow the upstream API exactly; nothing is derived or
//! normalized on the way through.

use serde::{Deserialize, Deserializer, Serialize};

/// Decode an explicit `null` as the field's zero value
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A single podcast as returned by the upstream listing API
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PodcastItem {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub images: PodcastImages,
    #[serde(deserialize_with = "null_as_default")]
    pub is_exclusive: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub publisher_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub publisher_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub media_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub category_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub category_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub has_free_episodes: bool,
    /// Kept as text; upstream formatting is not interpreted
    #[serde(deserialize_with = "null_as_default")]
    pub play_sequence: String,
}

/// Artwork URLs for a podcast
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PodcastImages {
    #[serde(deserialize_with = "null_as_default")]
    pub default: String,
    #[serde(deserialize_with = "null_as_default")]
    pub featured: String,
    #[serde(deserialize_with = "null_as_default")]
    pub thumbnail: String,
    #[serde(deserialize_with = "null_as_default")]
    pub wide: String,
}

/// Success envelope returned to callers
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PodcastsResponse {
    pub items: Vec<PodcastItem>,
}

impl PodcastsResponse {
    pub fn new(items: Vec<PodcastItem>) -> Self {
        Self { items }
    }
}

/// Error envelope returned to callers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Query forwarded to the upstream API
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PodcastQuery {
    /// Free-text search term
    pub search: String,
    /// Page, forwarded unvalidated
    pub page: String,
}

impl PodcastQuery {
    pub fn new(search: impl Into<String>, page: impl Into<String>) -> Self {
        Self {
            search: search.into(),
            page: page.into(),
        }
    }

    /// Build from raw query pairs. The first `search` and the first `page`
    /// win; repeats and unknown keys are ignored.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut search = None;
        let mut page = None;
        for (key, value) in pairs {
            match key.as_str() {
                "search" if search.is_none() => search = Some(value),
                "page" if page.is_none() => page = Some(value),
                _ => {}
            }
        }
        Self::new(search.unwrap_or_default(), page.unwrap_or_default())
    }
}
