//! HS256 access token issue and verification.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (the user's email)
    pub sub: String,
    /// Token identifier, matches the `access_tokens.jti` row
    pub jti: String,
    /// Issued at (Unix epoch seconds)
    pub iat: i64,
    /// Expiration (Unix epoch seconds)
    pub exp: i64,
}

pub struct IssuedToken {
    pub token: String,
    pub jti: Uuid,
    pub expires_at: DateTime<Utc>,
}

pub fn issue(secret: &str, email: &str, ttl: Duration) -> anyhow::Result<IssuedToken> {
    let now = Utc::now();
    let expires_at = now + ttl;
    let jti = Uuid::new_v4();
    let claims = Claims {
        sub: email.to_string(),
        jti: jti.to_string(),
        iat: now.timestamp(),
        exp: expires_at.timestamp(),
    };
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )?;
    Ok(IssuedToken {
        token,
        jti,
        expires_at,
    })
}

pub fn verify(secret: &str, token: &str) -> anyhow::Result<Claims> {
    let validation = Validation::new(Algorithm::HS256);
    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )?;
    Ok(data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-secret";

    #[test]
    fn issue_and_verify_roundtrip() {
        let issued = issue(SECRET, "admin@example.com", Duration::days(1)).unwrap();
        assert_eq!(issued.token.split('.').count(), 3);

        let claims = verify(SECRET, &issued.token).unwrap();
        assert_eq!(claims.sub, "admin@example.com");
        assert_eq!(claims.jti, issued.jti.to_string());
        assert_eq!(claims.exp, issued.expires_at.timestamp());
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let issued = issue(SECRET, "admin@example.com", Duration::days(1)).unwrap();
        assert!(verify("other-secret", &issued.token).is_err());
    }

    #[test]
    fn expired_token_is_rejected() {
        // Expired two hours ago, well past the default validation leeway.
        let issued = issue(SECRET, "admin@example.com", Duration::hours(-2)).unwrap();
        assert!(verify(SECRET, &issued.token).is_err());
    }

    #[test]
    fn garbage_token_is_rejected() {
        assert!(verify(SECRET, "not-a-jwt").is_err());
    }

    #[test]
    fn each_issue_gets_a_fresh_jti() {
        let a = issue(SECRET, "admin@example.com", Duration::days(1)).unwrap();
        let b = issue(SECRET, "admin@example.com", Duration::days(1)).unwrap();
        assert_ne!(a.jti, b.jti);
    }
}
