//! HTTP handlers for weather forecast endpoints

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared::{validation, DailyForecast, GpsCoordinates};

use crate::error::{AppError, AppResult};
use crate::services::WeatherService;
use crate::AppState;

/// Query parameters for the forecast endpoint
#[derive(Debug, Deserialize)]
pub struct ForecastQuery {
    pub lat: Option<Decimal>,
    pub lon: Option<Decimal>,
}

#[derive(Debug, Serialize)]
pub struct ForecastResponse {
    pub success: bool,
    #[serde(with = "rust_decimal::serde::float")]
    pub latitude: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub longitude: Decimal,
    pub forecast: Vec<DailyForecast>,
}

/// Daily forecast for a location
pub async fn get_forecast(
    State(state): State<AppState>,
    query: Result<Query<ForecastQuery>, QueryRejection>,
) -> AppResult<Json<ForecastResponse>> {
    let Query(query) = query.map_err(|e| AppError::Validation(e.body_text()))?;
    let (Some(lat), Some(lon)) = (query.lat, query.lon) else {
        return Err(AppError::Validation(
            "Latitude and longitude are required".to_string(),
        ));
    };
    validation::validate_latitude(lat).map_err(|e| AppError::Validation(e.to_string()))?;
    validation::validate_longitude(lon).map_err(|e| AppError::Validation(e.to_string()))?;

    let service = WeatherService::new(state.weather.clone(), &state.config.weather);
    let forecast = service
        .daily_forecast(GpsCoordinates::new(lat, lon))
        .await?;

    Ok(Json(ForecastResponse {
        success: true,
        latitude: forecast.latitude,
        longitude: forecast.longitude,
        forecast: forecast.forecast,
    }))
}
