use crate::domain::models::booking::{Booking, BookingStatus};
use crate::domain::ports::{BookingRepository, Page};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteBookingRepo {
    pool: SqlitePool,
}

impl SqliteBookingRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookingRepository for SqliteBookingRepo {
    async fn create(&self, booking: &Booking, claim_timeslot: Option<&str>) -> Result<Booking, AppError> {
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;

        let created = sqlx::query_as::<_, Booking>(
            "INSERT INTO bookings (id, offer_id, student_id, status, timeslot_id, created_at)
             VALUES (?, ?, ?, ?, ?, ?)
             RETURNING *"
        )
            .bind(&booking.id).bind(&booking.offer_id).bind(&booking.student_id)
            .bind(&booking.status).bind(&booking.timeslot_id).bind(booking.created_at)
            .fetch_one(&mut *tx).await.map_err(AppError::Database)?;

        if let Some(timeslot_id) = claim_timeslot {
            // conditional claim: the guard on is_booked decides double-claim races
            let result = sqlx::query(
                "UPDATE timeslots SET is_booked = TRUE, booking_id = ? WHERE id = ? AND is_booked = FALSE"
            )
                .bind(&created.id).bind(timeslot_id)
                .execute(&mut *tx).await.map_err(AppError::Database)?;

            if result.rows_affected() == 0 {
                // dropping tx rolls the booking insert back
                return Err(AppError::Conflict("Timeslot already booked".to_string()));
            }
        }

        tx.commit().await.map_err(AppError::Database)?;
        Ok(created)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Booking>, AppError> {
        sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE id = ?")
            .bind(id).fetch_optional(&self.pool).await.map_err(AppError::Database)
    }

    async fn list(&self, status: Option<BookingStatus>, page: Page) -> Result<Vec<Booking>, AppError> {
        let status = status.map(|s| s.as_str());
        sqlx::query_as::<_, Booking>(
            "SELECT * FROM bookings WHERE (? IS NULL OR status = ?)
             ORDER BY created_at ASC LIMIT ? OFFSET ?"
        )
            .bind(status).bind(status).bind(page.limit).bind(page.skip)
            .fetch_all(&self.pool).await.map_err(AppError::Database)
    }

    async fn list_by_student(&self, student_id: &str, status: Option<BookingStatus>, page: Page) -> Result<Vec<Booking>, AppError> {
        let status = status.map(|s| s.as_str());
        sqlx::query_as::<_, Booking>(
            "SELECT * FROM bookings WHERE student_id = ? AND (? IS NULL OR status = ?)
             ORDER BY created_at ASC LIMIT ? OFFSET ?"
        )
            .bind(student_id).bind(status).bind(status).bind(page.limit).bind(page.skip)
            .fetch_all(&self.pool).await.map_err(AppError::Database)
    }

    async fn list_by_offer(&self, offer_id: &str, status: Option<BookingStatus>, page: Page) -> Result<Vec<Booking>, AppError> {
        let status = status.map(|s| s.as_str());
        sqlx::query_as::<_, Booking>(
            "SELECT * FROM bookings WHERE offer_id = ? AND (? IS NULL OR status = ?)
             ORDER BY created_at ASC LIMIT ? OFFSET ?"
        )
            .bind(offer_id).bind(status).bind(status).bind(page.limit).bind(page.skip)
            .fetch_all(&self.pool).await.map_err(AppError::Database)
    }

    async fn list_by_tutor(&self, tutor_id: &str, status: Option<BookingStatus>, page: Page) -> Result<Vec<Booking>, AppError> {
        let status = status.map(|s| s.as_str());
        sqlx::query_as::<_, Booking>(
            "SELECT b.* FROM bookings b
             JOIN offers o ON o.id = b.offer_id
             WHERE o.tutor_id = ? AND (? IS NULL OR b.status = ?)
             ORDER BY b.created_at ASC LIMIT ? OFFSET ?"
        )
            .bind(tutor_id).bind(status).bind(status).bind(page.limit).bind(page.skip)
            .fetch_all(&self.pool).await.map_err(AppError::Database)
    }

    async fn set_status(&self, id: &str, status: BookingStatus) -> Result<Booking, AppError> {
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;

        if status == BookingStatus::Rejected {
            // release any slot claimed by this booking; finds nothing for
            // bookings created without a timeslot
            sqlx::query("UPDATE timeslots SET is_booked = FALSE, booking_id = NULL WHERE booking_id = ?")
                .bind(id)
                .execute(&mut *tx).await.map_err(AppError::Database)?;
        }

        let updated = sqlx::query_as::<_, Booking>(
            "UPDATE bookings SET status = ? WHERE id = ? RETURNING *"
        )
            .bind(status.as_str()).bind(id)
            .fetch_one(&mut *tx).await.map_err(AppError::Database)?;

        tx.commit().await.map_err(AppError::Database)?;
        Ok(updated)
    }
}
