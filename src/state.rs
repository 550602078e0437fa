use std::sync::Arc;
use crate::domain::ports::{
    BookingRepository, OfferRepository, ReviewRepository, TimeslotRepository,
    TutorProfileRepository, UserRepository,
};
use crate::domain::services::auth_service::AuthService;
use crate::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub user_repo: Arc<dyn UserRepository>,
    pub offer_repo: Arc<dyn OfferRepository>,
    pub timeslot_repo: Arc<dyn TimeslotRepository>,
    pub booking_repo: Arc<dyn BookingRepository>,
    pub review_repo: Arc<dyn ReviewRepository>,
    pub profile_repo: Arc<dyn TutorProfileRepository>,
    pub auth_service: Arc<AuthService>,
}
