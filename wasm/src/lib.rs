//! WebAssembly module for the Crop Irrigation Advisor
//!
//! Provides client-side computation for:
//! - Irrigation decisions from a crop/soil profile
//! - Growth phase lookup
//! - Weekly irrigation requirement and moisture deficit

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::Serialize;
use shared::irrigation::{
    compute_moisture_deficit, compute_weekly_requirement, evaluate, resolve_growth_phase,
    ROOT_DEPTH_M,
};
use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::models::*;
pub use shared::types::*;
pub use shared::validation::*;

/// Decision as handed back to JavaScript, numbers as plain floats
#[derive(Debug, Serialize)]
struct IrrigationEstimate {
    irrigation_required: bool,
    water_needed: f64,
    precipitation_forecast: f64,
    current_soil_moisture_percent: f64,
    growth_phase: String,
}

fn to_f64(value: Decimal) -> f64 {
    value.to_f64().unwrap_or(0.0)
}

fn to_decimal(value: f64, field: &str) -> Result<Decimal, String> {
    Decimal::try_from(value).map_err(|_| format!("{} is not a finite number", field))
}

fn parse_profile(profile_json: &str) -> Result<CropSoilProfile, String> {
    let profile: CropSoilProfile = serde_json::from_str(profile_json)
        .map_err(|e| format!("Invalid profile JSON: {}", e))?;
    validate_profile(&profile)?;
    Ok(profile)
}

fn estimate(
    profile_json: &str,
    age_days: u32,
    moisture_percent: f64,
    precipitation_mm: f64,
) -> Result<String, String> {
    let profile = parse_profile(profile_json)?;
    let moisture = to_decimal(moisture_percent, "moisture_percent")?;
    validate_soil_moisture_percent(moisture)?;
    let precipitation = to_decimal(precipitation_mm, "precipitation_mm")?;

    let decision =
        evaluate(&profile, age_days, moisture, precipitation).map_err(|e| e.to_string())?;
    let water_needed = if decision.irrigation_required {
        decision.water_needed_mm
    } else {
        Decimal::ZERO
    };

    let estimate = IrrigationEstimate {
        irrigation_required: decision.irrigation_required,
        water_needed: to_f64(water_needed),
        precipitation_forecast: to_f64(decision.precipitation_forecast_mm),
        current_soil_moisture_percent: moisture_percent,
        growth_phase: decision.growth_phase,
    };
    serde_json::to_string(&estimate).map_err(|e| e.to_string())
}

fn phase_name(profile_json: &str, age_days: u32) -> Result<String, String> {
    let profile = parse_profile(profile_json)?;
    resolve_growth_phase(&profile.phases, age_days)
        .map(|phase| phase.name.clone())
        .map_err(|e| e.to_string())
}

fn weekly_requirement(
    depth_min_m: f64,
    depth_max_m: f64,
    interval_min_days: f64,
    interval_max_days: f64,
) -> Result<f64, String> {
    let depth = ValueRange::new(
        to_decimal(depth_min_m, "depth_min_m")?,
        to_decimal(depth_max_m, "depth_max_m")?,
    );
    let interval = ValueRange::new(
        to_decimal(interval_min_days, "interval_min_days")?,
        to_decimal(interval_max_days, "interval_max_days")?,
    );
    let weekly = compute_weekly_requirement(&depth, &interval).map_err(|e| e.to_string())?;
    Ok(to_f64(round_for_display(weekly, 2)))
}

/// Run the irrigation decision against a crop/soil profile (JSON).
/// Returns the decision as JSON.
#[wasm_bindgen]
pub fn calculate_irrigation(
    profile_json: &str,
    age_days: u32,
    moisture_percent: f64,
    precipitation_mm: f64,
) -> Result<String, JsValue> {
    estimate(profile_json, age_days, moisture_percent, precipitation_mm)
        .map_err(|e| JsValue::from_str(&e))
}

/// Name of the growth phase active at `age_days`
#[wasm_bindgen]
pub fn resolve_growth_phase_name(profile_json: &str, age_days: u32) -> Result<String, JsValue> {
    phase_name(profile_json, age_days).map_err(|e| JsValue::from_str(&e))
}

/// Irrigation schedule normalized to mm per week
#[wasm_bindgen]
pub fn weekly_irrigation_requirement(
    depth_min_m: f64,
    depth_max_m: f64,
    interval_min_days: f64,
    interval_max_days: f64,
) -> Result<f64, JsValue> {
    weekly_requirement(depth_min_m, depth_max_m, interval_min_days, interval_max_days)
        .map_err(|e| JsValue::from_str(&e))
}

/// Water (mm) needed to lift the root zone to the optimal minimum
#[wasm_bindgen]
pub fn moisture_deficit_mm(
    moisture_percent: f64,
    optimal_min_fraction: f64,
    capacity_min: f64,
    capacity_max: f64,
) -> f64 {
    let to_dec = |value: f64| Decimal::try_from(value).unwrap_or(Decimal::ZERO);
    let capacity = ValueRange::new(to_dec(capacity_min), to_dec(capacity_max));
    let deficit = compute_moisture_deficit(
        percent_to_fraction(to_dec(moisture_percent)),
        to_dec(optimal_min_fraction),
        capacity.average(),
        ROOT_DEPTH_M,
    );
    to_f64(round_for_display(deficit, 2))
}
