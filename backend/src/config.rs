//! Configuration management for the Crop Irrigation Advisor
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides, e.g. IRRIGATION_SERVER__PORT=8080

use std::time::Duration;

use config::{ConfigError, Environment, File};
use serde::Deserialize;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// Crop reference dataset
    pub dataset: DatasetConfig,

    /// Precipitation forecast API configuration
    pub weather: WeatherConfig,

    /// SMS/email gateway configuration
    pub notification: NotificationConfig,

    /// Generative model used for crop disease prediction
    pub disease: DiseaseConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatasetConfig {
    /// Path to crop_data.json
    pub path: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct WeatherConfig {
    /// Open-Meteo API base URL
    pub api_endpoint: String,

    /// Days of forecast summed for the irrigation decision
    pub forecast_days: u32,

    /// Request timeout in milliseconds
    pub timeout_ms: u64,

    /// What to do when the forecast cannot be fetched
    pub on_failure: ForecastFailurePolicy,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ForecastFailurePolicy {
    /// Treat the forecast as 0 mm and carry on
    #[default]
    AssumeDry,
    /// Fail the irrigation check with 503
    Reject,
}

#[derive(Debug, Deserialize, Clone)]
pub struct NotificationConfig {
    /// Gateway endpoint accepting `{email, mobile, message}`
    pub endpoint: String,

    /// Prefix added to mobile numbers given without one
    pub country_code: String,

    /// Request timeout in milliseconds
    pub timeout_ms: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DiseaseConfig {
    /// Gemini API base URL
    pub api_endpoint: String,

    /// Model name, e.g. gemini-1.5-flash
    pub model: String,

    /// API key; disease prediction is disabled without one
    pub api_key: Option<String>,

    /// Request timeout in milliseconds
    pub timeout_ms: u64,
}

impl WeatherConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl NotificationConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl DiseaseConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Default for DiseaseConfig {
    fn default() -> Self {
        Self {
            api_endpoint: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            model: "gemini-1.5-flash".to_string(),
            api_key: None,
            timeout_ms: 30000,
        }
    }
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment =
            std::env::var("IRRIGATION_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("server.port", 3000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("dataset.path", "data/crop_data.json")?
            .set_default("weather.api_endpoint", "https://api.open-meteo.com/v1")?
            .set_default("weather.forecast_days", 7)?
            .set_default("weather.timeout_ms", 5000)?
            .set_default("weather.on_failure", "assume_dry")?
            .set_default(
                "notification.endpoint",
                "https://simple-sms-email-system.onrender.com/notifications/send",
            )?
            .set_default("notification.country_code", "+91")?
            .set_default("notification.timeout_ms", 5000)?
            .set_default(
                "disease.api_endpoint",
                "https://generativelanguage.googleapis.com/v1beta",
            )?
            .set_default("disease.model", "gemini-1.5-flash")?
            .set_default("disease.timeout_ms", 30000)?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (IRRIGATION_ prefix, __ between keys)
            .add_source(
                Environment::with_prefix("IRRIGATION")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            server: ServerConfig::default(),
            dataset: DatasetConfig {
                path: "data/crop_data.json".to_string(),
            },
            weather: WeatherConfig {
                api_endpoint: "https://api.open-meteo.com/v1".to_string(),
                forecast_days: 7,
                timeout_ms: 5000,
                on_failure: ForecastFailurePolicy::AssumeDry,
            },
            notification: NotificationConfig {
                endpoint: "https://simple-sms-email-system.onrender.com/notifications/send"
                    .to_string(),
                country_code: "+91".to_string(),
                timeout_ms: 5000,
            },
            disease: DiseaseConfig::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            host: "0.0.0.0".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_policy_names() {
        let policy: ForecastFailurePolicy = serde_json::from_str("\"assume_dry\"").unwrap();
        assert_eq!(policy, ForecastFailurePolicy::AssumeDry);
        let policy: ForecastFailurePolicy = serde_json::from_str("\"reject\"").unwrap();
        assert_eq!(policy, ForecastFailurePolicy::Reject);
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.weather.forecast_days, 7);
        assert_eq!(config.weather.timeout(), Duration::from_secs(5));
        assert_eq!(config.notification.country_code, "+91");
        assert!(config.disease.api_key.is_none());
    }

    #[test]
    fn test_environment_overrides() {
        std::env::set_var("IRRIGATION_SERVER__PORT", "8181");
        std::env::set_var("IRRIGATION_WEATHER__ON_FAILURE", "reject");
        std::env::set_var("IRRIGATION_DISEASE__API_KEY", "test-key");

        let loaded = Config::load();

        std::env::remove_var("IRRIGATION_SERVER__PORT");
        std::env::remove_var("IRRIGATION_WEATHER__ON_FAILURE");
        std::env::remove_var("IRRIGATION_DISEASE__API_KEY");

        let config = loaded.unwrap();
        assert_eq!(config.server.port, 8181);
        assert_eq!(config.weather.on_failure, ForecastFailurePolicy::Reject);
        assert_eq!(config.disease.api_key.as_deref(), Some("test-key"));
        assert_eq!(config.disease.model, "gemini-1.5-flash");
    }
}
