//! Login and logout flows over the access token table.
//!
//! State transitions: Anonymous → Authenticated (token issued) → LoggedOut
//! (token archived). A second login for the same email archives the first
//! token before issuing a new one, so only the latest token stays live.

use chrono::Duration;

use crate::config::Config;
use crate::errors::AppError;
use crate::store::postgres::PgStore;

use super::jwt;

pub async fn login(
    db: &PgStore,
    config: &Config,
    email: &str,
    password: &str,
) -> Result<String, AppError> {
    let user = db
        .get_user_by_email(email)
        .await?
        .ok_or(AppError::InvalidCredentials)?;

    let password_ok = bcrypt::verify(password, &user.password_hash)
        .map_err(|e| AppError::Internal(e.into()))?;
    if !password_ok {
        return Err(AppError::InvalidCredentials);
    }

    let issued = jwt::issue(
        &config.jwt_secret,
        email,
        Duration::hours(config.token_ttl_hours),
    )?;
    db.replace_access_token_for_email(email, issued.jti, &issued.token, issued.expires_at)
        .await?;

    tracing::info!(email = %email, jti = %issued.jti, "login: issued access token");
    Ok(issued.token)
}

pub async fn logout(db: &PgStore, token: &str) -> Result<(), AppError> {
    let row = db
        .get_access_token(token)
        .await?
        .ok_or(AppError::TokenNotFound)?;

    if !db.archive_access_token(row.jti).await? {
        return Err(AppError::TokenNotFound);
    }

    tracing::info!(email = %row.email, jti = %row.jti, "logout: token archived");
    Ok(())
}

#[cfg(test)]
mod tests {
    // The login/logout flows need a live Postgres; what can be checked
    // in isolation is the password hashing they sit on.
    #[test]
    fn bcrypt_verify_roundtrip() {
        let hash = bcrypt::hash("hunter2", 4).unwrap();
        assert!(bcrypt::verify("hunter2", &hash).unwrap());
        assert!(!bcrypt::verify("hunter3", &hash).unwrap());
    }
}
