use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use crate::api::dtos::requests::{CreateOfferRequest, OfferListQuery};
use crate::api::extractors::auth::AuthUser;
use crate::domain::models::{offer::Offer, user::UserRole};
use crate::domain::services::authz;
use crate::error::AppError;
use crate::state::AppState;
use std::sync::Arc;
use tracing::info;

pub async fn create_offer(
    State(state): State<Arc<AppState>>,
    AuthUser(caller_id): AuthUser,
    Json(payload): Json<CreateOfferRequest>,
) -> Result<impl IntoResponse, AppError> {
    let tutor = state.user_repo.find_by_id(&caller_id).await?
        .ok_or(AppError::Forbidden("Only users with role 'tutor' can create offers".into()))?;
    authz::require_role(&tutor, UserRole::Tutor)?;

    let offer = Offer::new(tutor.id, payload.subject, payload.description, payload.price_hour);
    let created = state.offer_repo.create(&offer).await?;

    info!("Offer created: {} ({})", created.id, created.subject);
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn list_offers(
    State(state): State<Arc<AppState>>,
    Query(params): Query<OfferListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let offers = state.offer_repo.list(params.q.as_deref()).await?;
    Ok(Json(offers))
}

pub async fn list_offers_by_tutor(
    State(state): State<Arc<AppState>>,
    Path(tutor_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let offers = state.offer_repo.list_by_tutor(&tutor_id).await?;
    Ok(Json(offers))
}
