use crate::domain::models::{
    booking::{Booking, BookingStatus},
    offer::Offer,
    review::Review,
    timeslot::Timeslot,
    tutor_profile::{TutorProfile, TutorSearchRow},
    user::User,
};
use crate::error::AppError;
use async_trait::async_trait;

/// skip/limit pagination for the booking list endpoints.
#[derive(Debug, Clone, Copy)]
pub struct Page {
    pub skip: i64,
    pub limit: i64,
}

impl Default for Page {
    fn default() -> Self {
        Self { skip: 0, limit: 50 }
    }
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create(&self, user: &User) -> Result<User, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError>;
    async fn list(&self) -> Result<Vec<User>, AppError>;
    async fn delete(&self, id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait OfferRepository: Send + Sync {
    async fn create(&self, offer: &Offer) -> Result<Offer, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Offer>, AppError>;
    async fn list(&self, subject_query: Option<&str>) -> Result<Vec<Offer>, AppError>;
    async fn list_by_tutor(&self, tutor_id: &str) -> Result<Vec<Offer>, AppError>;
}

#[async_trait]
pub trait TimeslotRepository: Send + Sync {
    async fn create(&self, timeslot: &Timeslot) -> Result<Timeslot, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Timeslot>, AppError>;
    async fn list_by_offer(&self, offer_id: &str) -> Result<Vec<Timeslot>, AppError>;
    async fn list_by_tutor(&self, tutor_id: &str) -> Result<Vec<Timeslot>, AppError>;
}

#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Inserts the booking and, if `claim_timeslot` is set, marks that slot
    /// booked in the same transaction. The claim is a conditional update
    /// guarded by `is_booked = FALSE`; losing a race returns `Conflict` and
    /// rolls the insert back.
    async fn create(&self, booking: &Booking, claim_timeslot: Option<&str>) -> Result<Booking, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Booking>, AppError>;
    async fn list(&self, status: Option<BookingStatus>, page: Page) -> Result<Vec<Booking>, AppError>;
    async fn list_by_student(&self, student_id: &str, status: Option<BookingStatus>, page: Page) -> Result<Vec<Booking>, AppError>;
    async fn list_by_offer(&self, offer_id: &str, status: Option<BookingStatus>, page: Page) -> Result<Vec<Booking>, AppError>;
    async fn list_by_tutor(&self, tutor_id: &str, status: Option<BookingStatus>, page: Page) -> Result<Vec<Booking>, AppError>;
    /// Writes the new status. For `Rejected` the timeslot claiming this
    /// booking (if any) is released in the same transaction.
    async fn set_status(&self, id: &str, status: BookingStatus) -> Result<Booking, AppError>;
}

#[async_trait]
pub trait ReviewRepository: Send + Sync {
    async fn create(&self, review: &Review) -> Result<Review, AppError>;
    async fn list_by_tutor(&self, tutor_id: &str) -> Result<Vec<Review>, AppError>;
    async fn summary(&self, tutor_id: &str) -> Result<(i64, Option<f64>), AppError>;
}

#[async_trait]
pub trait TutorProfileRepository: Send + Sync {
    async fn create(&self, profile: &TutorProfile) -> Result<TutorProfile, AppError>;
    async fn find_by_user(&self, user_id: &str) -> Result<Option<TutorProfile>, AppError>;
    async fn update(&self, profile: &TutorProfile) -> Result<TutorProfile, AppError>;
    /// All profiles joined with user names, for the department search.
    async fn list_with_users(&self) -> Result<Vec<TutorSearchRow>, AppError>;
}
