use crate::domain::models::user::UserRole;
use chrono::{DateTime, Utc};
use serde::Deserialize;

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub role: UserRole,
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct CreateOfferRequest {
    pub subject: String,
    pub description: Option<String>,
    pub price_hour: f64,
}

#[derive(Deserialize)]
pub struct CreateTimeslotRequest {
    pub offer_id: String,
    pub start_utc: DateTime<Utc>,
    pub end_utc: DateTime<Utc>,
}

#[derive(Deserialize)]
pub struct CreateBookingRequest {
    pub offer_id: String,
    pub timeslot_id: Option<String>,
}

#[derive(Deserialize)]
pub struct CreateReviewRequest {
    pub rating: i32,
    pub comment: Option<String>,
}

#[derive(Deserialize, Default)]
#[serde(default)]
pub struct UpsertProfileRequest {
    pub bio: Option<String>,
    pub city: Option<String>,
    pub postal_code: Option<String>,
    pub languages: Option<String>,
    pub years_experience: Option<i32>,
    pub photo_url: Option<String>,
}

#[derive(Deserialize, Default)]
#[serde(default)]
pub struct BookingListQuery {
    pub status: Option<String>,
    pub skip: Option<i64>,
    pub limit: Option<i64>,
}

#[derive(Deserialize)]
pub struct OfferListQuery {
    pub q: Option<String>,
}

#[derive(Deserialize)]
pub struct SearchQuery {
    pub zip_code: String,
}
