use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use std::str::FromStr;

/// Lifecycle: created as PENDING by a student, decided by the offer's tutor.
/// ACCEPTED keeps any timeslot claim, REJECTED releases it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BookingStatus {
    Pending,
    Accepted,
    Rejected,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "PENDING",
            BookingStatus::Accepted => "ACCEPTED",
            BookingStatus::Rejected => "REJECTED",
        }
    }
}

impl FromStr for BookingStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PENDING" => Ok(BookingStatus::Pending),
            "ACCEPTED" => Ok(BookingStatus::Accepted),
            "REJECTED" => Ok(BookingStatus::Rejected),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Booking {
    pub id: String,
    pub offer_id: String,
    pub student_id: String,
    pub status: String,
    pub timeslot_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Booking {
    pub fn new(offer_id: String, student_id: String, timeslot_id: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            offer_id,
            student_id,
            status: BookingStatus::Pending.as_str().to_string(),
            timeslot_id,
            created_at: Utc::now(),
        }
    }
}
