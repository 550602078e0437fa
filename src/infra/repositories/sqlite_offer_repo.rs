use crate::domain::models::offer::Offer;
use crate::domain::ports::OfferRepository;
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteOfferRepo {
    pool: SqlitePool,
}

impl SqliteOfferRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OfferRepository for SqliteOfferRepo {
    async fn create(&self, offer: &Offer) -> Result<Offer, AppError> {
        sqlx::query_as::<_, Offer>(
            "INSERT INTO offers (id, tutor_id, subject, description, price_hour, created_at)
             VALUES (?, ?, ?, ?, ?, ?)
             RETURNING *"
        )
            .bind(&offer.id).bind(&offer.tutor_id).bind(&offer.subject)
            .bind(&offer.description).bind(offer.price_hour).bind(offer.created_at)
            .fetch_one(&self.pool).await.map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Offer>, AppError> {
        sqlx::query_as::<_, Offer>("SELECT * FROM offers WHERE id = ?")
            .bind(id).fetch_optional(&self.pool).await.map_err(AppError::Database)
    }

    async fn list(&self, subject_query: Option<&str>) -> Result<Vec<Offer>, AppError> {
        match subject_query {
            Some(q) => {
                let pattern = format!("%{}%", q);
                sqlx::query_as::<_, Offer>(
                    "SELECT * FROM offers WHERE subject LIKE ? COLLATE NOCASE ORDER BY created_at ASC"
                )
                    .bind(pattern).fetch_all(&self.pool).await.map_err(AppError::Database)
            }
            None => {
                sqlx::query_as::<_, Offer>("SELECT * FROM offers ORDER BY created_at ASC")
                    .fetch_all(&self.pool).await.map_err(AppError::Database)
            }
        }
    }

    async fn list_by_tutor(&self, tutor_id: &str) -> Result<Vec<Offer>, AppError> {
        sqlx::query_as::<_, Offer>("SELECT * FROM offers WHERE tutor_id = ? ORDER BY created_at ASC")
            .bind(tutor_id).fetch_all(&self.pool).await.map_err(AppError::Database)
    }
}
