//! Web server module
//!
//! Provides the HTTP API for podcast-relay.

mod handlers;
mod routes;
mod state;

pub use routes::create_router;
pub use state::AppState;
