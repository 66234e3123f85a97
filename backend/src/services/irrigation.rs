//! Irrigation check orchestration: lookup, forecast, decide, notify

use std::sync::Arc;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared::{
    irrigation::decide, validation, AlertStatus, ContactDetails, CropCatalog, GpsCoordinates,
    IrrigationDecision, IrrigationRequest,
};

use crate::error::{AppError, AppResult};
use crate::services::{NotificationService, WeatherService};

/// Body of `POST /irrigation-check`. Every field is optional here so that
/// missing ones are reported together.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IrrigationCheckInput {
    pub crop_name: Option<String>,
    pub soil_type: Option<String>,
    pub age: Option<i64>,
    pub current_soil_moisture: Option<Decimal>,
    pub latitude: Option<Decimal>,
    pub longitude: Option<Decimal>,
    pub mobile_number: Option<String>,
    pub email_address: Option<String>,
}

/// Response of `POST /irrigation-check`
#[derive(Debug, Clone, Serialize)]
pub struct IrrigationCheckResponse {
    pub irrigation_required: bool,
    /// Zero whenever irrigation is not required
    #[serde(with = "rust_decimal::serde::float")]
    pub water_needed: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub precipitation_forecast: Decimal,
    pub alert_status: AlertStatus,
    #[serde(with = "rust_decimal::serde::float")]
    pub current_soil_moisture_percent: Decimal,
    pub growth_phase: String,
}

impl From<IrrigationDecision> for IrrigationCheckResponse {
    fn from(decision: IrrigationDecision) -> Self {
        let water_needed = if decision.irrigation_required {
            decision.water_needed_mm
        } else {
            Decimal::ZERO
        };

        Self {
            irrigation_required: decision.irrigation_required,
            water_needed,
            precipitation_forecast: decision.precipitation_forecast_mm,
            alert_status: decision.alert_status,
            current_soil_moisture_percent: decision.current_moisture_percent,
            growth_phase: decision.growth_phase,
        }
    }
}

fn required_text(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

impl IrrigationCheckInput {
    /// Check presence and ranges of every field
    pub fn into_request(self) -> AppResult<IrrigationRequest> {
        let crop_name = required_text(self.crop_name);
        let soil_type = required_text(self.soil_type);
        let mobile_number = required_text(self.mobile_number);
        let email_address = required_text(self.email_address);

        let (
            Some(crop_name),
            Some(soil_type),
            Some(age),
            Some(moisture),
            Some(latitude),
            Some(longitude),
            Some(mobile_number),
            Some(email_address),
        ) = (
            crop_name.clone(),
            soil_type.clone(),
            self.age,
            self.current_soil_moisture,
            self.latitude,
            self.longitude,
            mobile_number.clone(),
            email_address.clone(),
        )
        else {
            let missing: Vec<&str> = [
                ("crop_name", crop_name.is_none()),
                ("soil_type", soil_type.is_none()),
                ("age", self.age.is_none()),
                ("current_soil_moisture", self.current_soil_moisture.is_none()),
                ("latitude", self.latitude.is_none()),
                ("longitude", self.longitude.is_none()),
                ("mobile_number", mobile_number.is_none()),
                ("email_address", email_address.is_none()),
            ]
            .into_iter()
            .filter_map(|(field, missing)| missing.then_some(field))
            .collect();
            return Err(AppError::Validation(format!(
                "Missing required fields: {}",
                missing.join(", ")
            )));
        };

        let invalid = |msg: &str| AppError::Validation(msg.to_string());
        validation::validate_crop_age(age).map_err(invalid)?;
        validation::validate_soil_moisture_percent(moisture).map_err(invalid)?;
        validation::validate_latitude(latitude).map_err(invalid)?;
        validation::validate_longitude(longitude).map_err(invalid)?;
        validation::validate_mobile_number(&mobile_number).map_err(invalid)?;
        validation::validate_email(&email_address).map_err(invalid)?;

        let age_days =
            u32::try_from(age).map_err(|_| invalid("Crop age is too large"))?;

        Ok(IrrigationRequest {
            crop_name,
            soil_type,
            age_days,
            current_moisture_percent: moisture,
            location: GpsCoordinates::new(latitude, longitude),
            contact: ContactDetails {
                mobile_number,
                email_address,
            },
        })
    }
}

/// Irrigation service for field checks
#[derive(Clone)]
pub struct IrrigationService {
    catalog: Arc<CropCatalog>,
    weather: WeatherService,
    notifier: NotificationService,
}

impl IrrigationService {
    pub fn new(
        catalog: Arc<CropCatalog>,
        weather: WeatherService,
        notifier: NotificationService,
    ) -> Self {
        Self {
            catalog,
            weather,
            notifier,
        }
    }

    /// Run one irrigation check end to end
    pub async fn check(&self, input: IrrigationCheckInput) -> AppResult<IrrigationCheckResponse> {
        let request = input.into_request()?;
        let decision = self.evaluate(&request).await?;
        Ok(decision.into())
    }

    /// Decide for a validated request and dispatch the alert when needed
    pub async fn evaluate(&self, request: &IrrigationRequest) -> AppResult<IrrigationDecision> {
        let profile = self
            .catalog
            .get(&request.crop_name, &request.soil_type)
            .ok_or_else(|| AppError::CropSoilNotFound {
                crop_name: request.crop_name.clone(),
                soil_type: request.soil_type.clone(),
            })?;

        let forecast = self.weather.precipitation_forecast(request.location).await?;
        let decision = decide(request, profile, forecast.total_mm)?;

        let alert_status = if decision.irrigation_required {
            self.notifier
                .send_irrigation_alert(&request.contact, decision.water_balance_mm)
                .await
        } else {
            AlertStatus::NotSent
        };
        let decision = decision.with_alert_status(alert_status);

        tracing::info!(
            crop = %request.crop_name,
            soil = %request.soil_type,
            age_days = request.age_days,
            phase = %decision.growth_phase,
            forecast_available = forecast.available,
            horizon_days = forecast.horizon_days,
            precipitation_mm = %decision.precipitation_forecast_mm,
            water_needed_mm = %decision.water_needed_mm,
            irrigation_required = decision.irrigation_required,
            alert_status = %decision.alert_status,
            "Irrigation check completed"
        );

        Ok(decision)
    }
}
