use tutor_marketplace::{
    api::router::create_router,
    config::Config,
    domain::services::auth_service::AuthService,
    infra::repositories::{
        sqlite_booking_repo::SqliteBookingRepo,
        sqlite_offer_repo::SqliteOfferRepo,
        sqlite_profile_repo::SqliteProfileRepo,
        sqlite_review_repo::SqliteReviewRepo,
        sqlite_timeslot_repo::SqliteTimeslotRepo,
        sqlite_user_repo::SqliteUserRepo,
    },
    state::AppState,
};
use axum::{
    body::Body,
    http::{header, Request},
    response::Response,
    Router,
};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use serde_json::{json, Value};
use std::str::FromStr;
use std::sync::Arc;
use tower::ServiceExt;
use uuid::Uuid;

#[allow(dead_code)]
pub struct TestApp {
    pub router: Router,
    pub pool: Pool<Sqlite>,
    pub db_filename: String,
    pub state: Arc<AppState>,
}

#[allow(dead_code)]
impl TestApp {
    pub async fn new() -> Self {
        let db_filename = format!("test_{}.db", Uuid::new_v4());
        let db_url = format!("sqlite://{}?mode=rwc", db_filename);

        let connection_options = SqliteConnectOptions::from_str(&db_url)
            .unwrap()
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .connect_with(connection_options)
            .await
            .expect("Failed to connect to test db");

        sqlx::migrate!("./migrations/sqlite")
            .run(&pool)
            .await
            .expect("Failed to migrate test db");

        let config = Config {
            database_url: db_url.clone(),
            port: 0,
            jwt_secret: "test-secret".to_string(),
        };

        let state = Arc::new(AppState {
            config: config.clone(),
            user_repo: Arc::new(SqliteUserRepo::new(pool.clone())),
            offer_repo: Arc::new(SqliteOfferRepo::new(pool.clone())),
            timeslot_repo: Arc::new(SqliteTimeslotRepo::new(pool.clone())),
            booking_repo: Arc::new(SqliteBookingRepo::new(pool.clone())),
            review_repo: Arc::new(SqliteReviewRepo::new(pool.clone())),
            profile_repo: Arc::new(SqliteProfileRepo::new(pool.clone())),
            auth_service: Arc::new(AuthService::new(&config.jwt_secret)),
        });

        let router = create_router(state.clone());

        Self {
            router,
            pool,
            db_filename,
            state,
        }
    }

    pub async fn request(
        &self,
        method: &str,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> Response {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        let request = match body {
            Some(payload) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        self.router.clone().oneshot(request).await.unwrap()
    }

    /// Registers a user and returns their bearer token.
    pub async fn register(&self, email: &str, role: &str) -> String {
        let response = self
            .request(
                "POST",
                "/auth/register",
                None,
                Some(json!({
                    "email": email,
                    "password": "password",
                    "first_name": "Test",
                    "last_name": "User",
                    "role": role
                })),
            )
            .await;

        if !response.status().is_success() {
            panic!("Register failed in test helper: status {}", response.status());
        }

        let body = parse_body(response).await;
        body["access_token"].as_str().expect("No access_token in body").to_string()
    }

    /// Resolves a bearer token back to the user id via /auth/me.
    pub async fn user_id(&self, token: &str) -> String {
        let response = self.request("GET", "/auth/me", Some(token), None).await;
        let body = parse_body(response).await;
        body["id"].as_str().expect("No id in /auth/me body").to_string()
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.db_filename);
    }
}

pub async fn parse_body(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
