//! Background job: archive access tokens past their expiry.
//!
//! Runs hourly. Rows are moved into `expired_access_tokens`, never deleted
//! outright, so the session history stays auditable.

use std::time::Duration;

use tokio::time;

use crate::store::postgres::PgStore;

/// Spawn the background archival task. Call this once at startup.
pub fn spawn(db: PgStore) {
    tokio::spawn(async move {
        let mut interval = time::interval(Duration::from_secs(3600)); // every hour
        loop {
            interval.tick().await;
            match db.archive_expired_tokens().await {
                Ok(0) => {}
                Ok(rows) => tracing::info!(rows, "archived expired access tokens"),
                Err(e) => tracing::error!("token expiry job failed: {}", e),
            }
        }
    });
}
