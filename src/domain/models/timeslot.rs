use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// A bookable time window attached to an offer. `is_booked` is true exactly
/// when `booking_id` points at the booking currently claiming the slot.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Timeslot {
    pub id: String,
    pub offer_id: String,
    pub start_utc: DateTime<Utc>,
    pub end_utc: DateTime<Utc>,
    pub is_booked: bool,
    pub booking_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Timeslot {
    pub fn new(offer_id: String, start_utc: DateTime<Utc>, end_utc: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            offer_id,
            start_utc,
            end_utc,
            is_booked: false,
            booking_id: None,
            created_at: Utc::now(),
        }
    }
}
