use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Car {
    pub id: i64,
    pub name: String,
    pub model: String,
    pub description: String,
    pub image: String,
    pub brand_id: i64,
    pub category_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct CreateCar {
    pub name: String,
    pub model: String,
    pub description: String,
    pub image: String,
    pub brand_id: i64,
    pub category_id: i64,
}

/// Partial update; `None` leaves the column untouched.
#[derive(Debug, Default, Deserialize)]
pub struct CarUpdate {
    pub name: Option<String>,
    pub model: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub brand_id: Option<i64>,
    pub category_id: Option<i64>,
}

impl CarUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.model.is_none()
            && self.description.is_none()
            && self.image.is_none()
            && self.brand_id.is_none()
            && self.category_id.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_update_is_detected() {
        assert!(CarUpdate::default().is_empty());
    }

    #[test]
    fn single_field_update_is_not_empty() {
        let update = CarUpdate {
            model: Some("GT3 RS".to_string()),
            ..Default::default()
        };
        assert!(!update.is_empty());
    }

    #[test]
    fn unknown_json_fields_are_ignored() {
        // A body with only unrecognized fields deserializes to an empty update.
        let update: CarUpdate = serde_json::from_str(r#"{"horsepower": 520}"#).unwrap();
        assert!(update.is_empty());
    }
}
