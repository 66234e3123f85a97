//! Crop Irrigation Advisor - Backend
//!
//! Decides whether a field needs watering from the crop's growth phase,
//! soil moisture and the week's rain forecast, and alerts the grower.

use std::sync::Arc;

use axum::{routing::get, Router};
use shared::CropCatalog;
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

pub use crate::config::Config;
pub use crate::error::{AppError, AppResult};

use crate::external::{GeminiClient, NotificationClient, WeatherClient};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub catalog: Arc<CropCatalog>,
    pub weather: WeatherClient,
    pub notifier: NotificationClient,
    /// Absent when no Gemini API key is configured
    pub disease: Option<GeminiClient>,
}

impl AppState {
    /// Build the outbound clients from configuration
    pub fn new(config: Config, catalog: CropCatalog) -> AppResult<Self> {
        let weather = WeatherClient::new(&config.weather.api_endpoint, config.weather.timeout())?;
        let notifier = NotificationClient::new(
            &config.notification.endpoint,
            &config.notification.country_code,
            config.notification.timeout(),
        )?;

        let disease = match &config.disease.api_key {
            Some(api_key) => Some(GeminiClient::new(
                &config.disease.api_endpoint,
                &config.disease.model,
                api_key,
                config.disease.timeout(),
            )?),
            None => {
                tracing::warn!("No Gemini API key configured, disease prediction disabled");
                None
            }
        };

        Ok(Self {
            config: Arc::new(config),
            catalog: Arc::new(catalog),
            weather,
            notifier,
            disease,
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
        .route("/", get(handlers::health_check))
        .route("/health", get(handlers::health_check))
        .merge(routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
