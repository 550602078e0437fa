use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use crate::api::dtos::requests::UpsertProfileRequest;
use crate::api::extractors::auth::AuthUser;
use crate::domain::models::{tutor_profile::TutorProfile, user::{User, UserRole}};
use crate::domain::services::authz;
use crate::error::AppError;
use crate::state::AppState;
use std::sync::Arc;
use tracing::info;

async fn get_me(state: &AppState, caller_id: &str) -> Result<User, AppError> {
    state.user_repo.find_by_id(caller_id).await?
        .ok_or(AppError::NotFound("User not found".into()))
}

async fn find_or_create(state: &AppState, user_id: &str) -> Result<TutorProfile, AppError> {
    match state.profile_repo.find_by_user(user_id).await? {
        Some(profile) => Ok(profile),
        None => state.profile_repo.create(&TutorProfile::empty(user_id.to_string())).await,
    }
}

pub async fn get_my_profile(
    State(state): State<Arc<AppState>>,
    AuthUser(caller_id): AuthUser,
) -> Result<impl IntoResponse, AppError> {
    let me = get_me(&state, &caller_id).await?;
    authz::require_role(&me, UserRole::Tutor)?;

    let profile = find_or_create(&state, &me.id).await?;
    Ok(Json(profile))
}

pub async fn upsert_my_profile(
    State(state): State<Arc<AppState>>,
    AuthUser(caller_id): AuthUser,
    Json(payload): Json<UpsertProfileRequest>,
) -> Result<impl IntoResponse, AppError> {
    let me = get_me(&state, &caller_id).await?;
    authz::require_role(&me, UserRole::Tutor)?;

    let mut profile = find_or_create(&state, &me.id).await?;

    if let Some(bio) = payload.bio { profile.bio = Some(bio); }
    if let Some(city) = payload.city { profile.city = Some(city); }
    if let Some(postal_code) = payload.postal_code { profile.postal_code = Some(postal_code); }
    if let Some(languages) = payload.languages { profile.languages = Some(languages); }
    if let Some(years) = payload.years_experience { profile.years_experience = Some(years); }
    if let Some(photo_url) = payload.photo_url { profile.photo_url = Some(photo_url); }

    let updated = state.profile_repo.update(&profile).await?;

    info!("Tutor profile updated: {}", updated.id);
    Ok(Json(updated))
}

pub async fn get_public_profile(
    State(state): State<Arc<AppState>>,
    Path(tutor_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let profile = state.profile_repo.find_by_user(&tutor_id).await?
        .ok_or(AppError::NotFound("Tutor profile not found".into()))?;
    Ok(Json(profile))
}
