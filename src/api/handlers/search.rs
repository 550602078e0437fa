use axum::{extract::{Query, State}, response::IntoResponse, Json};
use crate::api::dtos::{requests::SearchQuery, responses::SearchResponse};
use crate::domain::services::geo::postal_code_to_department;
use crate::error::AppError;
use crate::state::AppState;
use std::sync::Arc;

/// Department-based tutor search: extracts the department from the queried
/// postal code and keeps the profiles whose own postal code falls in it.
pub async fn search_tutors(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchQuery>,
) -> Result<impl IntoResponse, AppError> {
    let data = match postal_code_to_department(&params.zip_code) {
        Some(target_dept) => {
            let rows = state.profile_repo.list_with_users().await?;
            rows.into_iter()
                .filter(|row| {
                    row.postal_code
                        .as_deref()
                        .and_then(postal_code_to_department)
                        .is_some_and(|dept| dept == target_dept)
                })
                .collect()
        }
        None => Vec::new(),
    };

    Ok(Json(SearchResponse {
        count: data.len(),
        search_zip: params.zip_code,
        data,
    }))
}
