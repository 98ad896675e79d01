//! Crop Advisor - Backend
//!
//! Validates the yield and crop recommendation forms, runs the submission
//! workflows against the external weather, prediction and recommendation
//! services, and exposes their state to the browser.

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod config;
pub mod error;
pub mod external;
pub mod handlers;
pub mod routes;
pub mod services;

pub use config::Config;
pub use error::{AppError, AppResult};

use services::{RecommendationWorkflow, YieldWorkflow};

/// Application state shared across handlers
///
/// Each workflow owns independent submission state.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub yield_workflow: Arc<YieldWorkflow>,
    pub recommendation_workflow: Arc<RecommendationWorkflow>,
}

impl AppState {
    /// Build both workflows from configuration
    pub fn from_config(config: Config) -> AppResult<Self> {
        Ok(Self {
            yield_workflow: Arc::new(YieldWorkflow::from_config(&config)?),
            recommendation_workflow: Arc::new(RecommendationWorkflow::from_config(&config)?),
            config: Arc::new(config),
        })
    }
}

/// Create the application router with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/health", get(handlers::health_check))
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "Crop Advisor API v1.0"
}
