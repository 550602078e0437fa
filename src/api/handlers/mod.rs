pub mod auth;
pub mod booking;
pub mod health;
pub mod offer;
pub mod review;
pub mod search;
pub mod timeslot;
pub mod tutor_profile;
pub mod user;
