//! SMS/email gateway client
//!
//! The gateway accepts `{email, mobile, message}` and fans out to both channels.
//! A 2xx response only means the gateway accepted the message.

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// Notification gateway client
#[derive(Clone)]
pub struct NotificationClient {
    http_client: Client,
    endpoint: String,
    country_code: String,
}

/// Gateway send request
#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    email: &'a str,
    mobile: String,
    message: &'a str,
}

/// Gateway error body
#[derive(Debug, Deserialize)]
struct GatewayErrorResponse {
    #[serde(default, alias = "error")]
    message: Option<String>,
}

impl NotificationClient {
    pub fn new(
        endpoint: impl Into<String>,
        country_code: impl Into<String>,
        timeout: Duration,
    ) -> AppResult<Self> {
        let http_client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Configuration(format!("Notification HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            endpoint: endpoint.into(),
            country_code: country_code.into(),
        })
    }

    /// Send one message to both the email address and the mobile number
    pub async fn send(&self, email: &str, mobile: &str, message: &str) -> AppResult<()> {
        let request = SendRequest {
            email,
            mobile: international_mobile(&self.country_code, mobile),
            message,
        };

        let response = self
            .http_client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(|e| AppError::ExternalService(format!("Failed to send notification: {}", e)))?;

        if response.status().is_success() {
            return Ok(());
        }

        let status = response.status();
        let error: GatewayErrorResponse = response
            .json()
            .await
            .unwrap_or(GatewayErrorResponse { message: None });
        Err(AppError::ExternalService(format!(
            "Notification gateway returned {}: {}",
            status,
            error.message.unwrap_or_else(|| "Unknown error".to_string())
        )))
    }
}

/// Prefix the country code unless the number already carries one
pub fn international_mobile(country_code: &str, mobile: &str) -> String {
    let mobile: String = mobile
        .trim()
        .chars()
        .filter(|c| !matches!(c, ' ' | '-'))
        .collect();

    if mobile.starts_with('+') {
        mobile
    } else {
        format!("{}{}", country_code, mobile)
    }
}
