//! Weather API client for fetching precipitation forecasts
//!
//! Integrates with the Open-Meteo daily forecast API

use std::time::Duration;

use chrono::NaiveDate;
use reqwest::Client;
use rust_decimal::Decimal;
use serde::Deserialize;
use shared::{DailyForecast, GpsCoordinates, WeatherForecast};

use crate::error::{AppError, AppResult};

const DAILY_FORECAST_FIELDS: &str =
    "weather_code,temperature_2m_max,temperature_2m_min,precipitation_sum,relative_humidity_2m_mean";

/// Weather API client
#[derive(Clone)]
pub struct WeatherClient {
    client: Client,
    base_url: String,
}

/// Open-Meteo API response
#[derive(Debug, Deserialize)]
struct OpenMeteoResponse {
    latitude: f64,
    longitude: f64,
    daily: OpenMeteoDaily,
}

/// Open-Meteo returns one array per requested variable, values may be null
#[derive(Debug, Deserialize)]
struct OpenMeteoDaily {
    #[serde(default)]
    time: Vec<String>,
    #[serde(default)]
    precipitation_sum: Vec<Option<f64>>,
    #[serde(rename = "temperature_2m_max", default)]
    temperature_max: Vec<Option<f64>>,
    #[serde(rename = "temperature_2m_min", default)]
    temperature_min: Vec<Option<f64>>,
    #[serde(rename = "relative_humidity_2m_mean", default)]
    humidity_mean: Vec<Option<f64>>,
    #[serde(default)]
    weather_code: Vec<Option<i32>>,
}

impl WeatherClient {
    /// Create a new WeatherClient against `base_url` (e.g. https://api.open-meteo.com/v1)
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Configuration(format!("Weather HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Sum of forecast daily precipitation (mm) over the next `days` days
    pub async fn get_precipitation_sum(
        &self,
        location: GpsCoordinates,
        days: u32,
    ) -> AppResult<Decimal> {
        let url = format!(
            "{}/forecast?latitude={}&longitude={}&daily=precipitation_sum&forecast_days={}&timezone=auto",
            self.base_url, location.latitude, location.longitude, days
        );

        let data = self.fetch(&url).await?;
        Ok(data
            .daily
            .precipitation_sum
            .into_iter()
            .flatten()
            .map(to_decimal)
            .sum())
    }

    /// Fetch a daily forecast for the next `days` days
    pub async fn get_daily_forecast(
        &self,
        location: GpsCoordinates,
        days: u32,
    ) -> AppResult<WeatherForecast> {
        let url = format!(
            "{}/forecast?latitude={}&longitude={}&daily={}&forecast_days={}&timezone=auto",
            self.base_url, location.latitude, location.longitude, DAILY_FORECAST_FIELDS, days
        );

        let data = self.fetch(&url).await?;
        self.convert_forecast_response(data)
    }

    async fn fetch(&self, url: &str) -> AppResult<OpenMeteoResponse> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| AppError::ExternalService(format!("Weather API request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalService(format!(
                "Weather API error: {} - {}",
                status, body
            )));
        }

        response.json().await.map_err(|e| {
            AppError::ExternalService(format!("Failed to parse forecast response: {}", e))
        })
    }

    /// Convert the column-oriented Open-Meteo payload to one entry per day
    fn convert_forecast_response(&self, data: OpenMeteoResponse) -> AppResult<WeatherForecast> {
        let daily = data.daily;
        let column = |values: &[Option<f64>], index: usize| {
            values.get(index).copied().flatten().map(to_decimal)
        };

        let forecast = daily
            .time
            .iter()
            .enumerate()
            .map(|(index, date)| {
                let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|e| {
                    AppError::ExternalService(format!("Invalid forecast date '{}': {}", date, e))
                })?;

                Ok::<_, AppError>(DailyForecast {
                    date,
                    temperature_max: column(&daily.temperature_max, index),
                    temperature_min: column(&daily.temperature_min, index),
                    precipitation: column(&daily.precipitation_sum, index),
                    humidity: column(&daily.humidity_mean, index),
                    weather_code: daily.weather_code.get(index).copied().flatten(),
                })
            })
            .collect::<AppResult<Vec<_>>>()?;

        Ok(WeatherForecast {
            latitude: to_decimal(data.latitude),
            longitude: to_decimal(data.longitude),
            forecast,
        })
    }
}

fn to_decimal(value: f64) -> Decimal {
    Decimal::try_from(value).unwrap_or_default()
}
