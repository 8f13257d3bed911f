//! API handlers for Gateman REST endpoints
//!
//! Both kiosk variants share the same handlers; the `{profile}` path segment
//! (`web` or `mobile`) selects the variant's rules.

pub mod health;
pub mod openapi;
pub mod visits;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::AppState;

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_v1 = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        // Visits
        .route("/:profile/check-in", post(visits::check_in))
        .route("/:profile/check-out", post(visits::check_out))
        .route("/:profile/visitors/active", get(visits::active_visitors))
        .route("/:profile/visitors/history", get(visits::history))
        .with_state(state);

    Router::new()
        .nest("/api/v1", api_v1)
        .merge(openapi::create_openapi_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
