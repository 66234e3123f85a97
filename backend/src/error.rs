//! Error handling for the Crop Irrigation Advisor
//!
//! Provides consistent error responses in English and Marathi

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use shared::IrrigationError;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Crop/soil combination not found: {crop_name}/{soil_type}")]
    CropSoilNotFound {
        crop_name: String,
        soil_type: String,
    },

    // External service errors
    #[error("Weather service unavailable")]
    WeatherServiceUnavailable,

    #[error("Disease prediction is not configured")]
    DiseasePredictionUnavailable,

    #[error("External service error: {0}")]
    ExternalService(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    // Internal errors
    #[error("Internal server error")]
    InternalError(#[from] anyhow::Error),
}

/// Error response structure
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
    pub error_mr: String,
}

impl From<IrrigationError> for AppError {
    fn from(err: IrrigationError) -> Self {
        AppError::Configuration(err.to_string())
    }
}

impl AppError {
    fn status_and_body(&self) -> (StatusCode, ErrorResponse) {
        let (status, code, error, error_mr) = match self {
            AppError::Validation(msg) => (
                StatusCode::BAD_REQUEST,
                "VALIDATION_ERROR",
                msg.clone(),
                format!("अवैध माहिती: {}", msg),
            ),
            AppError::CropSoilNotFound { .. } => (
                StatusCode::BAD_REQUEST,
                "CROP_SOIL_NOT_FOUND",
                "Crop/soil combination not found".to_string(),
                "पीक/माती संयोजन सापडले नाही".to_string(),
            ),
            AppError::WeatherServiceUnavailable => (
                StatusCode::SERVICE_UNAVAILABLE,
                "WEATHER_SERVICE_UNAVAILABLE",
                "Weather service is temporarily unavailable".to_string(),
                "हवामान सेवा तात्पुरती उपलब्ध नाही".to_string(),
            ),
            AppError::DiseasePredictionUnavailable => (
                StatusCode::SERVICE_UNAVAILABLE,
                "DISEASE_PREDICTION_UNAVAILABLE",
                "Disease prediction is not available".to_string(),
                "रोग अंदाज सेवा उपलब्ध नाही".to_string(),
            ),
            AppError::ExternalService(_) => (
                StatusCode::BAD_GATEWAY,
                "EXTERNAL_SERVICE_ERROR",
                "External service error".to_string(),
                "बाह्य सेवेत त्रुटी आली".to_string(),
            ),
            AppError::Configuration(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "CONFIGURATION_ERROR",
                "Reference data for this crop is misconfigured".to_string(),
                "या पिकाची संदर्भ माहिती चुकीची आहे".to_string(),
            ),
            AppError::InternalError(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "Internal server error".to_string(),
                "सर्व्हरमध्ये अंतर्गत त्रुटी आली".to_string(),
            ),
        };

        (
            status,
            ErrorResponse {
                error,
                code: code.to_string(),
                error_mr,
            },
        )
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = self.status_and_body();

        // Details stay in the log, never in the response body
        if status.is_server_error() {
            tracing::error!("Error: {:?}", self);
        } else {
            tracing::debug!("Rejected request: {}", self);
        }

        (status, Json(body)).into_response()
    }
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;
