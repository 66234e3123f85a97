//! Route definitions for the Crop Irrigation Advisor

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/irrigation-check", post(handlers::irrigation_check))
        .route("/predict-diseases", post(handlers::predict_diseases))
        .nest("/api", reference_routes())
}

/// Forecast and reference data (read-only)
fn reference_routes() -> Router<AppState> {
    Router::new()
        .route("/forecast", get(handlers::get_forecast))
        .route("/crops", get(handlers::list_crops))
        .route("/health", get(handlers::health_check))
}
