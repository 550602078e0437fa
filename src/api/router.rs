use axum::{
    body::Body,
    extract::Request,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use crate::state::AppState;
use crate::api::handlers::{auth, booking, health, offer, review, search, timeslot, tutor_profile, user};
use tower_http::{
    classify::ServerErrorsFailureClass,
    trace::TraceLayer,
};
use tracing::{error, info, info_span, Span};
use uuid::Uuid;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health_check))

        // Auth
        .route("/auth/register", post(auth::register))
        .route("/auth/token", post(auth::token))
        .route("/auth/me", get(auth::me))

        // Users
        .route("/users", get(user::list_users))
        .route("/users/{user_id}", get(user::get_user).delete(user::delete_user))

        // Offers
        .route("/offers", post(offer::create_offer).get(offer::list_offers))
        .route("/offers/by-tutor/{tutor_id}", get(offer::list_offers_by_tutor))

        // Timeslots
        .route("/timeslots", post(timeslot::create_timeslot))
        .route("/timeslots/of-offer/{offer_id}", get(timeslot::list_timeslots_of_offer))
        .route("/timeslots/mine", get(timeslot::list_my_timeslots))

        // Bookings (reservation engine)
        .route("/bookings", post(booking::create_booking).get(booking::list_bookings))
        .route("/bookings/list/mine", get(booking::my_bookings))
        .route("/bookings/list/on-my-offers", get(booking::bookings_on_my_offers))
        .route("/bookings/by-student/{student_id}", get(booking::list_bookings_by_student))
        .route("/bookings/by-offer/{offer_id}", get(booking::list_bookings_by_offer))
        .route("/bookings/by-tutor/{tutor_id}", get(booking::list_bookings_by_tutor))
        .route("/bookings/{booking_id}", get(booking::get_booking))
        .route("/bookings/{booking_id}/{action}", post(booking::decide_booking))

        // Reviews
        .route("/reviews/for/{tutor_id}", post(review::create_review))
        .route("/reviews/of-tutor/{tutor_id}", get(review::list_reviews_of_tutor))
        .route("/reviews/of-tutor/{tutor_id}/summary", get(review::rating_summary))

        // Tutor profiles & search
        .route("/tutors/me/profile", get(tutor_profile::get_my_profile).put(tutor_profile::upsert_my_profile))
        .route("/tutors/{tutor_id}/profile", get(tutor_profile::get_public_profile))
        .route("/search/tutors", get(search::search_tutors))

        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = Uuid::new_v4().to_string();
                    info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = ?request.method(),
                        uri = ?request.uri(),
                        version = ?request.version(),
                        user_id = tracing::field::Empty,
                    )
                })
                .on_request(|request: &Request<Body>, _span: &Span| {
                    info!("started processing request: {} {}", request.method(), request.uri().path());
                })
                .on_response(|response: &axum::http::Response<Body>, latency: Duration, _span: &Span| {
                    info!(
                        status = response.status().as_u16(),
                        latency_ms = latency.as_millis(),
                        "finished processing request"
                    );
                })
                .on_failure(|error: ServerErrorsFailureClass, _latency: Duration, _span: &Span| {
                    error!("request failed: {:?}", error);
                })
        )
        .with_state(state)
}
