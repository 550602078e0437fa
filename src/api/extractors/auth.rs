use axum::{
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use crate::error::AppError;
use crate::state::AppState;
use std::sync::Arc;
use tracing::Span;

/// The authenticated caller's user id, taken from a `Bearer` token. The
/// identity service contract ends here: handlers resolve the id against the
/// store before trusting anything beyond it.
pub struct AuthUser(pub String);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    Arc<AppState>: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(axum::http::header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or(AppError::Unauthorized)?;

        let token = header.strip_prefix("Bearer ").ok_or(AppError::Unauthorized)?.trim();

        let app_state = <Arc<AppState> as FromRef<S>>::from_ref(state);
        let claims = app_state.auth_service.decode_token(token)?;

        Span::current().record("user_id", claims.sub.as_str());

        Ok(AuthUser(claims.sub))
    }
}
