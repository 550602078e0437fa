use crate::domain::models::tutor_profile::{TutorProfile, TutorSearchRow};
use crate::domain::ports::TutorProfileRepository;
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteProfileRepo {
    pool: SqlitePool,
}

impl SqliteProfileRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TutorProfileRepository for SqliteProfileRepo {
    async fn create(&self, profile: &TutorProfile) -> Result<TutorProfile, AppError> {
        sqlx::query_as::<_, TutorProfile>(
            "INSERT INTO tutor_profiles (id, user_id, bio, city, postal_code, languages, years_experience, photo_url)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)
             RETURNING *"
        )
            .bind(&profile.id).bind(&profile.user_id).bind(&profile.bio).bind(&profile.city)
            .bind(&profile.postal_code).bind(&profile.languages).bind(profile.years_experience)
            .bind(&profile.photo_url)
            .fetch_one(&self.pool).await.map_err(AppError::Database)
    }

    async fn find_by_user(&self, user_id: &str) -> Result<Option<TutorProfile>, AppError> {
        sqlx::query_as::<_, TutorProfile>("SELECT * FROM tutor_profiles WHERE user_id = ?")
            .bind(user_id).fetch_optional(&self.pool).await.map_err(AppError::Database)
    }

    async fn update(&self, profile: &TutorProfile) -> Result<TutorProfile, AppError> {
        sqlx::query_as::<_, TutorProfile>(
            "UPDATE tutor_profiles
             SET bio = ?, city = ?, postal_code = ?, languages = ?, years_experience = ?, photo_url = ?
             WHERE id = ?
             RETURNING *"
        )
            .bind(&profile.bio).bind(&profile.city).bind(&profile.postal_code)
            .bind(&profile.languages).bind(profile.years_experience).bind(&profile.photo_url)
            .bind(&profile.id)
            .fetch_one(&self.pool).await.map_err(AppError::Database)
    }

    async fn list_with_users(&self) -> Result<Vec<TutorSearchRow>, AppError> {
        sqlx::query_as::<_, TutorSearchRow>(
            "SELECT p.id, p.user_id, u.first_name, u.last_name, p.bio, p.city, p.postal_code, p.photo_url
             FROM tutor_profiles p
             JOIN users u ON u.id = p.user_id"
        )
            .fetch_all(&self.pool).await.map_err(AppError::Database)
    }
}
