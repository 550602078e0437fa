use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Offer {
    pub id: String,
    pub tutor_id: String,
    pub subject: String,
    pub description: Option<String>,
    pub price_hour: f64,
    pub created_at: DateTime<Utc>,
}

impl Offer {
    pub fn new(tutor_id: String, subject: String, description: Option<String>, price_hour: f64) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            tutor_id,
            subject,
            description,
            price_hour,
            created_at: Utc::now(),
        }
    }
}
