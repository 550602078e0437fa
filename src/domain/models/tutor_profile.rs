use serde::{Deserialize, Serialize};
use uuid::Uuid;
use sqlx::FromRow;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct TutorProfile {
    pub id: String,
    pub user_id: String,
    pub bio: Option<String>,
    pub city: Option<String>,
    pub postal_code: Option<String>,
    pub languages: Option<String>,
    pub years_experience: Option<i32>,
    pub photo_url: Option<String>,
}

impl TutorProfile {
    pub fn empty(user_id: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            user_id,
            bio: None,
            city: None,
            postal_code: None,
            languages: None,
            years_experience: None,
            photo_url: None,
        }
    }
}

/// Joined profile + user row returned by the department search.
#[derive(Debug, Serialize, FromRow, Clone)]
pub struct TutorSearchRow {
    pub id: String,
    pub user_id: String,
    pub first_name: String,
    pub last_name: String,
    pub bio: Option<String>,
    pub city: Option<String>,
    pub postal_code: Option<String>,
    pub photo_url: Option<String>,
}
