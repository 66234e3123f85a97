//! HTTP handlers for the crop reference data

use axum::{extract::State, Json};
use shared::CropSoilSummary;

use crate::AppState;

/// List the crop/soil combinations the service can evaluate
pub async fn list_crops(State(state): State<AppState>) -> Json<Vec<CropSoilSummary>> {
    Json(state.catalog.summaries())
}
