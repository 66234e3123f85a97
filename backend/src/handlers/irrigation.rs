//! HTTP handler for irrigation checks

use axum::{extract::rejection::JsonRejection, extract::State, Json};

use crate::error::{AppError, AppResult};
use crate::services::irrigation::{IrrigationCheckInput, IrrigationCheckResponse};
use crate::services::{IrrigationService, NotificationService, WeatherService};
use crate::AppState;

/// Decide whether a field needs irrigation and alert the grower if it does
pub async fn irrigation_check(
    State(state): State<AppState>,
    payload: Result<Json<IrrigationCheckInput>, JsonRejection>,
) -> AppResult<Json<IrrigationCheckResponse>> {
    let Json(input) = payload.map_err(|e| AppError::Validation(e.body_text()))?;

    let service = IrrigationService::new(
        state.catalog.clone(),
        WeatherService::new(state.weather.clone(), &state.config.weather),
        NotificationService::new(state.notifier.clone()),
    );
    let response = service.check(input).await?;
    Ok(Json(response))
}
