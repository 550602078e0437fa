use crate::domain::models::tutor_profile::TutorSearchRow;
use serde::Serialize;

#[derive(Serialize)]
pub struct SearchResponse {
    pub count: usize,
    pub search_zip: String,
    pub data: Vec<TutorSearchRow>,
}
