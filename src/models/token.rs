use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// A live session token. At most one row per email; the login flow archives
/// the previous row into `expired_access_tokens` before inserting.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct AccessToken {
    pub jti: Uuid,
    pub token: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}
