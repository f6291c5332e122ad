//! Podcast data models shared by the relay and the web layer

mod models;

pub use models::*;
