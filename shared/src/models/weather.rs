//! Weather forecast models

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Cumulative precipitation forecast used by the irrigation decision
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PrecipitationForecast {
    pub total_mm: Decimal,
    pub horizon_days: u32,
    /// False when the lookup failed and a fallback value was substituted
    pub available: bool,
}

impl PrecipitationForecast {
    pub fn observed(total_mm: Decimal, horizon_days: u32) -> Self {
        Self {
            total_mm,
            horizon_days,
            available: true,
        }
    }

    /// Zero-rain fallback used when the lookup fails
    pub fn assumed_dry(horizon_days: u32) -> Self {
        Self {
            total_mm: Decimal::ZERO,
            horizon_days,
            available: false,
        }
    }
}

/// Daily weather forecast
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DailyForecast {
    pub date: NaiveDate,
    #[serde(with = "rust_decimal::serde::float_option")]
    pub temperature_max: Option<Decimal>,
    #[serde(with = "rust_decimal::serde::float_option")]
    pub temperature_min: Option<Decimal>,
    #[serde(with = "rust_decimal::serde::float_option")]
    pub precipitation: Option<Decimal>,
    #[serde(with = "rust_decimal::serde::float_option")]
    pub humidity: Option<Decimal>,
    pub weather_code: Option<i32>,
}

/// Multi-day forecast for a location
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeatherForecast {
    #[serde(with = "rust_decimal::serde::float")]
    pub latitude: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub longitude: Decimal,
    pub forecast: Vec<DailyForecast>,
}
