use axum::{extract::State, response::IntoResponse, Json};
use crate::api::dtos::requests::{LoginRequest, RegisterRequest};
use crate::api::extractors::auth::AuthUser;
use crate::domain::models::{auth::AuthToken, user::User};
use crate::error::AppError;
use crate::state::AppState;
use std::sync::Arc;
use tracing::info;

pub async fn register(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<RegisterRequest>,
) -> Result<impl IntoResponse, AppError> {
    let email = payload.email.trim().to_lowercase();
    let first_name = payload.first_name.trim().to_string();
    let last_name = payload.last_name.trim().to_string();
    let password = payload.password.trim();

    if email.is_empty() {
        return Err(AppError::Validation("email is required".into()));
    }
    if first_name.is_empty() {
        return Err(AppError::Validation("first_name is required".into()));
    }
    if last_name.is_empty() {
        return Err(AppError::Validation("last_name is required".into()));
    }
    if password.len() < 4 {
        return Err(AppError::Validation("password must be at least 4 characters".into()));
    }

    if state.user_repo.find_by_email(&email).await?.is_some() {
        return Err(AppError::Conflict("User already exists".into()));
    }

    let password_hash = state.auth_service.hash_password(password)?;
    let user = User::new(first_name, last_name, email, password_hash, payload.role);
    let created = state.user_repo.create(&user).await?;

    info!("Registered user {} with role {}", created.id, created.role);

    let access_token = state.auth_service.issue_token(&created)?;
    Ok(Json(AuthToken { access_token }))
}

pub async fn token(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    let email = payload.email.trim().to_lowercase();

    let user = state.user_repo.find_by_email(&email).await?
        .ok_or(AppError::NotFound("User not found".into()))?;

    if !state.auth_service.verify_password(payload.password.trim(), &user.password_hash)? {
        return Err(AppError::Validation("Incorrect password".into()));
    }

    info!("User logged in: {}", user.id);

    let access_token = state.auth_service.issue_token(&user)?;
    Ok(Json(AuthToken { access_token }))
}

pub async fn me(
    State(state): State<Arc<AppState>>,
    AuthUser(user_id): AuthUser,
) -> Result<impl IntoResponse, AppError> {
    let user = state.user_repo.find_by_id(&user_id).await?
        .ok_or(AppError::NotFound("User not found".into()))?;
    Ok(Json(user))
}
