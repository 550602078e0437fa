use crate::domain::models::timeslot::Timeslot;
use crate::domain::ports::TimeslotRepository;
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteTimeslotRepo {
    pool: SqlitePool,
}

impl SqliteTimeslotRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TimeslotRepository for SqliteTimeslotRepo {
    async fn create(&self, timeslot: &Timeslot) -> Result<Timeslot, AppError> {
        sqlx::query_as::<_, Timeslot>(
            "INSERT INTO timeslots (id, offer_id, start_utc, end_utc, is_booked, booking_id, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?)
             RETURNING *"
        )
            .bind(&timeslot.id).bind(&timeslot.offer_id).bind(timeslot.start_utc)
            .bind(timeslot.end_utc).bind(timeslot.is_booked).bind(&timeslot.booking_id)
            .bind(timeslot.created_at)
            .fetch_one(&self.pool).await.map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Timeslot>, AppError> {
        sqlx::query_as::<_, Timeslot>("SELECT * FROM timeslots WHERE id = ?")
            .bind(id).fetch_optional(&self.pool).await.map_err(AppError::Database)
    }

    async fn list_by_offer(&self, offer_id: &str) -> Result<Vec<Timeslot>, AppError> {
        sqlx::query_as::<_, Timeslot>(
            "SELECT * FROM timeslots WHERE offer_id = ? ORDER BY start_utc ASC"
        )
            .bind(offer_id).fetch_all(&self.pool).await.map_err(AppError::Database)
    }

    async fn list_by_tutor(&self, tutor_id: &str) -> Result<Vec<Timeslot>, AppError> {
        sqlx::query_as::<_, Timeslot>(
            "SELECT t.* FROM timeslots t
             JOIN offers o ON o.id = t.offer_id
             WHERE o.tutor_id = ?
             ORDER BY t.start_utc ASC"
        )
            .bind(tutor_id).fetch_all(&self.pool).await.map_err(AppError::Database)
    }
}
