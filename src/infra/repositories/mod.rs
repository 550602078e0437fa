pub mod sqlite_user_repo;
pub mod sqlite_offer_repo;
pub mod sqlite_timeslot_repo;
pub mod sqlite_booking_repo;
pub mod sqlite_review_repo;
pub mod sqlite_profile_repo;

pub mod postgres_user_repo;
pub mod postgres_offer_repo;
pub mod postgres_timeslot_repo;
pub mod postgres_booking_repo;
pub mod postgres_review_repo;
pub mod postgres_profile_repo;
