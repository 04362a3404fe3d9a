use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Brand {
    pub id: i64,
    pub name: String,
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct CreateBrand {
    pub name: String,
    pub image: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct BrandUpdate {
    pub name: Option<String>,
    pub image: Option<String>,
}

impl BrandUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.image.is_none()
    }
}
