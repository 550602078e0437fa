use crate::domain::models::review::Review;
use crate::domain::ports::ReviewRepository;
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::{Row, SqlitePool};

pub struct SqliteReviewRepo {
    pool: SqlitePool,
}

impl SqliteReviewRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReviewRepository for SqliteReviewRepo {
    async fn create(&self, review: &Review) -> Result<Review, AppError> {
        sqlx::query_as::<_, Review>(
            "INSERT INTO reviews (id, tutor_id, student_id, rating, comment, created_at)
             VALUES (?, ?, ?, ?, ?, ?)
             RETURNING *"
        )
            .bind(&review.id).bind(&review.tutor_id).bind(&review.student_id)
            .bind(review.rating).bind(&review.comment).bind(review.created_at)
            .fetch_one(&self.pool).await.map_err(AppError::Database)
    }

    async fn list_by_tutor(&self, tutor_id: &str) -> Result<Vec<Review>, AppError> {
        sqlx::query_as::<_, Review>(
            "SELECT * FROM reviews WHERE tutor_id = ? ORDER BY created_at DESC"
        )
            .bind(tutor_id).fetch_all(&self.pool).await.map_err(AppError::Database)
    }

    async fn summary(&self, tutor_id: &str) -> Result<(i64, Option<f64>), AppError> {
        let row = sqlx::query(
            "SELECT COUNT(id) as rating_count, AVG(rating) as rating_avg FROM reviews WHERE tutor_id = ?"
        )
            .bind(tutor_id).fetch_one(&self.pool).await.map_err(AppError::Database)?;
        Ok((row.get::<i64, _>("rating_count"), row.get::<Option<f64>, _>("rating_avg")))
    }
}
