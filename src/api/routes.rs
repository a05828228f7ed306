use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::middleware::{make_span_with_request_id, request_id_middleware};

use super::handlers;
use super::AppState;

/// Creates the main API router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        // Venue catalog & community submissions
        .route(
            "/venues",
            get(handlers::list_venues).post(handlers::submit_venue),
        )
        .route("/venues/:id", get(handlers::get_venue))
        // Taste profile
        .route(
            "/profile",
            get(handlers::get_profile).put(handlers::update_profile),
        )
        // Activity
        .route("/favorites", post(handlers::add_favorite))
        .route("/visits", post(handlers::log_visit))
        // Recommendations
        .route("/recommendations", get(handlers::get_recommendations))
        .layer(TraceLayer::new_for_http().make_span_with(make_span_with_request_id))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
