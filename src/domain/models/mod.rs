pub mod auth;
pub mod booking;
pub mod offer;
pub mod review;
pub mod timeslot;
pub mod tutor_profile;
pub mod user;
