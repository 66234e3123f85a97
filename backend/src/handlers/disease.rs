//! HTTP handler for crop disease prediction

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use shared::DiseasePrediction;

use crate::error::{AppError, AppResult};
use crate::services::disease::DiseasePredictionInput;
use crate::services::DiseaseService;
use crate::AppState;

/// Likely diseases for a crop at its current age
pub async fn predict_diseases(
    State(state): State<AppState>,
    payload: Result<Json<DiseasePredictionInput>, JsonRejection>,
) -> AppResult<Json<DiseasePrediction>> {
    let Json(input) = payload.map_err(|e| AppError::Validation(e.body_text()))?;
    let (crop_name, age_days) = input.validate()?;

    let client = state
        .disease
        .clone()
        .ok_or(AppError::DiseasePredictionUnavailable)?;
    let prediction = DiseaseService::new(client)
        .predict(&crop_name, age_days)
        .await?;
    Ok(Json(prediction))
}
