//! Weather service: precipitation lookup with the configured failure policy

use shared::{GpsCoordinates, PrecipitationForecast, WeatherForecast};

use crate::config::{ForecastFailurePolicy, WeatherConfig};
use crate::error::{AppError, AppResult};
use crate::external::WeatherClient;

/// Weather service wrapping the forecast client
#[derive(Clone)]
pub struct WeatherService {
    weather_client: WeatherClient,
    forecast_days: u32,
    on_failure: ForecastFailurePolicy,
}

impl WeatherService {
    pub fn new(weather_client: WeatherClient, config: &WeatherConfig) -> Self {
        Self {
            weather_client,
            forecast_days: config.forecast_days,
            on_failure: config.on_failure,
        }
    }

    /// Cumulative precipitation over the forecast horizon.
    ///
    /// Lookup failures become a dry forecast or a 503 depending on policy.
    pub async fn precipitation_forecast(
        &self,
        location: GpsCoordinates,
    ) -> AppResult<PrecipitationForecast> {
        match self
            .weather_client
            .get_precipitation_sum(location, self.forecast_days)
            .await
        {
            Ok(total_mm) => Ok(PrecipitationForecast::observed(total_mm, self.forecast_days)),
            Err(e) => self.on_lookup_failure(location, e),
        }
    }

    fn on_lookup_failure(
        &self,
        location: GpsCoordinates,
        error: AppError,
    ) -> AppResult<PrecipitationForecast> {
        match self.on_failure {
            ForecastFailurePolicy::AssumeDry => {
                tracing::warn!(
                    latitude = %location.latitude,
                    longitude = %location.longitude,
                    "Precipitation forecast unavailable, assuming 0 mm: {}",
                    error
                );
                Ok(PrecipitationForecast::assumed_dry(self.forecast_days))
            }
            ForecastFailurePolicy::Reject => {
                tracing::warn!(
                    latitude = %location.latitude,
                    longitude = %location.longitude,
                    "Precipitation forecast unavailable, rejecting check: {}",
                    error
                );
                Err(AppError::WeatherServiceUnavailable)
            }
        }
    }

    /// Day-by-day forecast for display. Failures are always reported.
    pub async fn daily_forecast(&self, location: GpsCoordinates) -> AppResult<WeatherForecast> {
        self.weather_client
            .get_daily_forecast(location, self.forecast_days)
            .await
            .map_err(|e| {
                tracing::warn!("Daily forecast lookup failed: {}", e);
                AppError::WeatherServiceUnavailable
            })
    }
}
