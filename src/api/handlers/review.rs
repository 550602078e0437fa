use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use crate::api::dtos::requests::CreateReviewRequest;
use crate::api::extractors::auth::AuthUser;
use crate::domain::models::{review::{RatingSummary, Review}, user::UserRole};
use crate::domain::services::authz;
use crate::error::AppError;
use crate::state::AppState;
use std::sync::Arc;
use tracing::info;

pub async fn create_review(
    State(state): State<Arc<AppState>>,
    AuthUser(caller_id): AuthUser,
    Path(tutor_id): Path<String>,
    Json(payload): Json<CreateReviewRequest>,
) -> Result<impl IntoResponse, AppError> {
    let me = state.user_repo.find_by_id(&caller_id).await?
        .ok_or(AppError::Forbidden("Only students can create reviews".into()))?;
    authz::require_role(&me, UserRole::Student)?;

    let tutor = state.user_repo.find_by_id(&tutor_id).await?
        .ok_or(AppError::NotFound("User not found".into()))?;
    if !tutor.has_role(UserRole::Tutor) {
        return Err(AppError::Validation("Target user is not a tutor".into()));
    }

    if !(1..=5).contains(&payload.rating) {
        return Err(AppError::Validation("rating must be between 1 and 5".into()));
    }

    let review = Review::new(tutor.id, me.id, payload.rating, payload.comment);
    let created = state.review_repo.create(&review).await?;

    info!("Review created: {} for tutor {}", created.id, created.tutor_id);
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn list_reviews_of_tutor(
    State(state): State<Arc<AppState>>,
    Path(tutor_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let reviews = state.review_repo.list_by_tutor(&tutor_id).await?;
    Ok(Json(reviews))
}

pub async fn rating_summary(
    State(state): State<Arc<AppState>>,
    Path(tutor_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let (rating_count, rating_avg) = state.review_repo.summary(&tutor_id).await?;
    Ok(Json(RatingSummary { tutor_id, rating_count, rating_avg }))
}
