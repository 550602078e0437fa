use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use crate::api::dtos::requests::{BookingListQuery, CreateBookingRequest};
use crate::api::extractors::auth::AuthUser;
use crate::domain::models::{
    booking::{Booking, BookingStatus},
    user::UserRole,
};
use crate::domain::ports::Page;
use crate::domain::services::authz;
use crate::error::AppError;
use crate::state::AppState;
use std::str::FromStr;
use std::sync::Arc;
use tracing::info;

fn parse_list_params(params: &BookingListQuery) -> Result<(Option<BookingStatus>, Page), AppError> {
    let status = match &params.status {
        Some(raw) => Some(
            BookingStatus::from_str(raw)
                .map_err(|_| AppError::Validation(format!("Unknown booking status '{}'", raw)))?,
        ),
        None => None,
    };

    let default = Page::default();
    let page = Page {
        skip: params.skip.unwrap_or(default.skip).max(0),
        limit: params.limit.unwrap_or(default.limit).max(0),
    };
    Ok((status, page))
}

/// Creates a PENDING booking for the caller, optionally claiming a free
/// timeslot of the offer. Validation happens fully before any write; the
/// booking insert and the slot claim are one transaction in the repository.
pub async fn create_booking(
    State(state): State<Arc<AppState>>,
    AuthUser(caller_id): AuthUser,
    Json(payload): Json<CreateBookingRequest>,
) -> Result<impl IntoResponse, AppError> {
    let student = state.user_repo.find_by_id(&caller_id).await?
        .ok_or(AppError::Forbidden("Only students can create bookings".into()))?;
    authz::require_role(&student, UserRole::Student)?;

    let offer = state.offer_repo.find_by_id(&payload.offer_id).await?
        .ok_or(AppError::NotFound("Offer not found".into()))?;

    if let Some(timeslot_id) = &payload.timeslot_id {
        let timeslot = state.timeslot_repo.find_by_id(timeslot_id).await?
            .ok_or(AppError::NotFound("Timeslot not found".into()))?;
        if timeslot.offer_id != offer.id {
            return Err(AppError::Validation("Timeslot does not belong to this offer".into()));
        }
        if timeslot.is_booked {
            return Err(AppError::Conflict("Timeslot already booked".into()));
        }
    }

    let booking = Booking::new(offer.id, student.id, payload.timeslot_id.clone());
    let created = state.booking_repo.create(&booking, payload.timeslot_id.as_deref()).await?;

    info!("Booking created: {} on offer {}", created.id, created.offer_id);
    Ok((StatusCode::CREATED, Json(created)))
}

/// Accept or reject a pending booking. Only the owning tutor of the booked
/// offer may decide. A missing offer and a foreign offer are the same
/// Forbidden signal. Re-deciding an already decided booking overwrites the
/// status (last write wins).
pub async fn decide_booking(
    State(state): State<Arc<AppState>>,
    AuthUser(caller_id): AuthUser,
    Path((booking_id, action)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let booking = state.booking_repo.find_by_id(&booking_id).await?
        .ok_or(AppError::NotFound("Booking not found".into()))?;

    let offer = state.offer_repo.find_by_id(&booking.offer_id).await?
        .ok_or(AppError::Forbidden("Not your offer".into()))?;
    authz::require_offer_owner(&offer, &caller_id)?;

    let status = match action.to_uppercase().as_str() {
        "ACCEPT" => BookingStatus::Accepted,
        "REJECT" => BookingStatus::Rejected,
        _ => return Err(AppError::Validation("Action must be ACCEPT or REJECT".into())),
    };

    let updated = state.booking_repo.set_status(&booking.id, status).await?;

    info!("Booking {} decided: {}", updated.id, updated.status);
    Ok(Json(updated))
}

pub async fn list_bookings(
    State(state): State<Arc<AppState>>,
    Query(params): Query<BookingListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let (status, page) = parse_list_params(&params)?;
    let bookings = state.booking_repo.list(status, page).await?;
    Ok(Json(bookings))
}

pub async fn get_booking(
    State(state): State<Arc<AppState>>,
    Path(booking_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let booking = state.booking_repo.find_by_id(&booking_id).await?
        .ok_or(AppError::NotFound("Booking not found".into()))?;
    Ok(Json(booking))
}

pub async fn list_bookings_by_student(
    State(state): State<Arc<AppState>>,
    Path(student_id): Path<String>,
    Query(params): Query<BookingListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let (status, page) = parse_list_params(&params)?;
    let bookings = state.booking_repo.list_by_student(&student_id, status, page).await?;
    Ok(Json(bookings))
}

pub async fn list_bookings_by_offer(
    State(state): State<Arc<AppState>>,
    Path(offer_id): Path<String>,
    Query(params): Query<BookingListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let (status, page) = parse_list_params(&params)?;
    let bookings = state.booking_repo.list_by_offer(&offer_id, status, page).await?;
    Ok(Json(bookings))
}

pub async fn list_bookings_by_tutor(
    State(state): State<Arc<AppState>>,
    Path(tutor_id): Path<String>,
    Query(params): Query<BookingListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let (status, page) = parse_list_params(&params)?;
    let bookings = state.booking_repo.list_by_tutor(&tutor_id, status, page).await?;
    Ok(Json(bookings))
}

pub async fn my_bookings(
    State(state): State<Arc<AppState>>,
    AuthUser(caller_id): AuthUser,
    Query(params): Query<BookingListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let (status, page) = parse_list_params(&params)?;
    let bookings = state.booking_repo.list_by_student(&caller_id, status, page).await?;
    Ok(Json(bookings))
}

pub async fn bookings_on_my_offers(
    State(state): State<Arc<AppState>>,
    AuthUser(caller_id): AuthUser,
    Query(params): Query<BookingListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let (status, page) = parse_list_params(&params)?;
    let bookings = state.booking_repo.list_by_tutor(&caller_id, status, page).await?;
    Ok(Json(bookings))
}
