//! Carhub — car catalog REST backend.
//!
//! Compiled as a library so the binary and the tests in `tests/` share the
//! same modules.

pub mod api;
pub mod auth;
pub mod cli;
pub mod config;
pub mod errors;
pub mod jobs;
pub mod models;
pub mod store;

use store::postgres::PgStore;

/// Shared application state passed to handlers.
pub struct AppState {
    pub db: PgStore,
    pub config: config::Config,
}
