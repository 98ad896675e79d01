//! Route definitions for the Crop Advisor

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/options", get(handlers::get_form_options))
        .nest("/yield", yield_routes())
        .nest("/recommendation", recommendation_routes())
}

/// Yield form routes
fn yield_routes() -> Router<AppState> {
    Router::new()
        .route("/validate", post(handlers::validate_yield_fields))
        .route("/submit", post(handlers::submit_yield_form))
        .route("/state", get(handlers::get_yield_state))
}

/// Crop recommendation form routes
fn recommendation_routes() -> Router<AppState> {
    Router::new()
        .route("/validate", post(handlers::validate_recommendation_fields))
        .route("/submit", post(handlers::submit_recommendation_form))
        .route("/state", get(handlers::get_recommendation_state))
}
