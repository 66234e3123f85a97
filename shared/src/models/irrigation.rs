//! Irrigation check request and decision models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::GpsCoordinates;

/// Where to send an irrigation alert
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactDetails {
    pub mobile_number: String,
    pub email_address: String,
}

/// A validated irrigation check for one field
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IrrigationRequest {
    pub crop_name: String,
    pub soil_type: String,
    /// Crop age in days since sowing
    pub age_days: u32,
    /// Sensor reading, percentage 0-100
    pub current_moisture_percent: Decimal,
    pub location: GpsCoordinates,
    pub contact: ContactDetails,
}

/// Outcome of the alert dispatch for a decision
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum AlertStatus {
    #[default]
    #[serde(rename = "not sent")]
    NotSent,
    #[serde(rename = "sent")]
    Sent,
    #[serde(rename = "failed")]
    Failed,
}

impl std::fmt::Display for AlertStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AlertStatus::NotSent => write!(f, "not sent"),
            AlertStatus::Sent => write!(f, "sent"),
            AlertStatus::Failed => write!(f, "failed"),
        }
    }
}

/// Result of the irrigation calculation for one request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IrrigationDecision {
    pub irrigation_required: bool,
    /// Net water balance clamped at zero, mm, unrounded
    pub water_balance_mm: Decimal,
    /// `water_balance_mm` rounded to 2 decimal places for display
    pub water_needed_mm: Decimal,
    /// Forecast precipitation over the lookup horizon, mm, 2 decimal places
    pub precipitation_forecast_mm: Decimal,
    pub alert_status: AlertStatus,
    pub current_moisture_percent: Decimal,
    /// Name of the growth phase the crop age resolved to
    pub growth_phase: String,
}

impl IrrigationDecision {
    pub fn with_alert_status(mut self, alert_status: AlertStatus) -> Self {
        self.alert_status = alert_status;
        self
    }
}
