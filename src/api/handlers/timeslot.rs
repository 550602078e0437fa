use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use crate::api::dtos::requests::CreateTimeslotRequest;
use crate::api::extractors::auth::AuthUser;
use crate::domain::models::{timeslot::Timeslot, user::UserRole};
use crate::domain::services::authz;
use crate::error::AppError;
use crate::state::AppState;
use std::sync::Arc;
use tracing::info;

pub async fn create_timeslot(
    State(state): State<Arc<AppState>>,
    AuthUser(caller_id): AuthUser,
    Json(payload): Json<CreateTimeslotRequest>,
) -> Result<impl IntoResponse, AppError> {
    let me = state.user_repo.find_by_id(&caller_id).await?
        .ok_or(AppError::Forbidden("Only tutors can create timeslots".into()))?;
    authz::require_role(&me, UserRole::Tutor)?;

    let offer = state.offer_repo.find_by_id(&payload.offer_id).await?
        .ok_or(AppError::NotFound("Offer not found".into()))?;
    authz::require_offer_owner(&offer, &me.id)?;

    if payload.start_utc >= payload.end_utc {
        return Err(AppError::Validation("start_utc must be before end_utc".into()));
    }

    let timeslot = Timeslot::new(offer.id, payload.start_utc, payload.end_utc);
    let created = state.timeslot_repo.create(&timeslot).await?;

    info!("Timeslot created: {} on offer {}", created.id, created.offer_id);
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn list_timeslots_of_offer(
    State(state): State<Arc<AppState>>,
    Path(offer_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let timeslots = state.timeslot_repo.list_by_offer(&offer_id).await?;
    Ok(Json(timeslots))
}

pub async fn list_my_timeslots(
    State(state): State<Arc<AppState>>,
    AuthUser(caller_id): AuthUser,
) -> Result<impl IntoResponse, AppError> {
    let me = state.user_repo.find_by_id(&caller_id).await?
        .ok_or(AppError::Forbidden("Only tutors can list their timeslots".into()))?;
    authz::require_role(&me, UserRole::Tutor)?;

    let timeslots = state.timeslot_repo.list_by_tutor(&me.id).await?;
    Ok(Json(timeslots))
}
