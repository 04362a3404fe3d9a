use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Three- or six-digit hex code, `#` prefix optional, case-insensitive.
static HEX_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^#?([0-9a-f]{3}|[0-9a-f]{6})$").unwrap());

pub fn is_valid_hex(code: &str) -> bool {
    HEX_RE.is_match(code)
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Colour {
    pub id: i64,
    pub name: String,
    pub hex: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct CreateColour {
    pub name: String,
    pub hex: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct ColourUpdate {
    pub name: Option<String>,
    pub hex: Option<String>,
}

impl ColourUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.hex.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_three_and_six_digit_codes() {
        for code in ["#abc", "abc", "#1a2b3c", "1a2b3c", "#1A2B3C", "FFF"] {
            assert!(is_valid_hex(code), "{code} should be accepted");
        }
    }

    #[test]
    fn rejects_malformed_codes() {
        for code in ["", "#", "#ab", "#abcd", "#1a2b3", "red", "#ggg", "##abc", "#1a2b3c4d"] {
            assert!(!is_valid_hex(code), "{code} should be rejected");
        }
    }
}
