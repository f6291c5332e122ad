//! Relay to the upstream podcast listing API

mod error;
mod source;

pub use error::RelayError;
pub use source::PodcastSource;
