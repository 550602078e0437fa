use crate::domain::models::tutor_profile::{TutorProfile, TutorSearchRow};
use crate::domain::ports::TutorProfileRepository;
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::PgPool;

pub struct PostgresProfileRepo {
    pool: PgPool,
}

impl PostgresProfileRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TutorProfileRepository for PostgresProfileRepo {
    async fn create(&self, profile: &TutorProfile) -> Result<TutorProfile, AppError> {
        sqlx::query_as::<_, TutorProfile>(
            "INSERT INTO tutor_profiles (id, user_id, bio, city, postal_code, languages, years_experience, photo_url)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING *"
        )
            .bind(&profile.id).bind(&profile.user_id).bind(&profile.bio).bind(&profile.city)
            .bind(&profile.postal_code).bind(&profile.languages).bind(profile.years_experience)
            .bind(&profile.photo_url)
            .fetch_one(&self.pool).await.map_err(AppError::Database)
    }

    async fn find_by_user(&self, user_id: &str) -> Result<Option<TutorProfile>, AppError> {
        sqlx::query_as::<_, TutorProfile>("SELECT * FROM tutor_profiles WHERE user_id = $1")
            .bind(user_id).fetch_optional(&self.pool).await.map_err(AppError::Database)
    }

    async fn update(&self, profile: &TutorProfile) -> Result<TutorProfile, AppError> {
        sqlx::query_as::<_, TutorProfile>(
            "UPDATE tutor_profiles
             SET bio = $1, city = $2, postal_code = $3, languages = $4, years_experience = $5, photo_url = $6
             WHERE id = $7
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
