//! Validation utilities for irrigation requests and the reference dataset

use rust_decimal::Decimal;

use crate::models::{CropSoilProfile, GrowthPhase};
use crate::types::ValueRange;

// ============================================================================
// Request Validations
// ============================================================================

/// Validate soil moisture sensor reading is a percentage
pub fn validate_soil_moisture_percent(moisture: Decimal) -> Result<(), &'static str> {
    if moisture < Decimal::ZERO || moisture > Decimal::ONE_HUNDRED {
        return Err("Soil moisture must be between 0 and 100%");
    }
    Ok(())
}

/// Validate crop age in days
pub fn validate_crop_age(age_days: i64) -> Result<(), &'static str> {
    if age_days < 0 {
        return Err("Crop age cannot be negative");
    }
    if age_days > i64::from(u32::MAX) {
        return Err("Crop age is too large");
    }
    Ok(())
}

pub fn validate_latitude(latitude: Decimal) -> Result<(), &'static str> {
    if latitude < Decimal::from(-90) || latitude > Decimal::from(90) {
        return Err("Latitude must be between -90 and 90");
    }
    Ok(())
}

pub fn validate_longitude(longitude: Decimal) -> Result<(), &'static str> {
    if longitude < Decimal::from(-180) || longitude > Decimal::from(180) {
        return Err("Longitude must be between -180 and 180");
    }
    Ok(())
}

/// Validate email format (basic check)
pub fn validate_email(email: &str) -> Result<(), &'static str> {
    let Some((local, domain)) = email.split_once('@') else {
        return Err("Invalid email format");
    };
    if local.is_empty() || !domain.contains('.') || domain.starts_with('.') || domain.ends_with('.')
    {
        return Err("Invalid email format");
    }
    Ok(())
}

/// Validate mobile number format
/// Accepts: 9876543210, 98765-43210, +919876543210
pub fn validate_mobile_number(mobile: &str) -> Result<(), &'static str> {
    let mobile = mobile.trim();
    if mobile.is_empty() {
        return Err("Mobile number is required");
    }
    if !mobile
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | ' '))
    {
        return Err("Mobile number may only contain digits, spaces, '-' and a leading '+'");
    }
    if mobile.rfind('+').is_some_and(|idx| idx > 0) {
        return Err("'+' is only allowed as the first character");
    }

    let digits = mobile.chars().filter(|c| c.is_ascii_digit()).count();
    if !(10..=15).contains(&digits) {
        return Err("Mobile number must have between 10 and 15 digits");
    }
    Ok(())
}

// ============================================================================
// Reference Dataset Validations
// ============================================================================

fn validate_ordered(range: &ValueRange, field: &'static str) -> Result<(), String> {
    if !range.is_ordered() {
        return Err(format!("{}: min {} exceeds max {}", field, range.min, range.max));
    }
    Ok(())
}

fn validate_non_negative(range: &ValueRange, field: &'static str) -> Result<(), String> {
    validate_ordered(range, field)?;
    if range.min < Decimal::ZERO {
        return Err(format!("{}: values cannot be negative", field));
    }
    Ok(())
}

fn validate_fraction(range: &ValueRange, field: &'static str) -> Result<(), String> {
    validate_non_negative(range, field)?;
    if range.max > Decimal::ONE {
        return Err(format!("{}: fractions must be between 0 and 1", field));
    }
    Ok(())
}

/// Validate a growth phase can be used by the calculation
pub fn validate_growth_phase(phase: &GrowthPhase) -> Result<(), String> {
    let check = || -> Result<(), String> {
        validate_non_negative(&phase.duration_days, "duration_days")?;
        validate_non_negative(&phase.irrigation_depth_m, "irrigation_depth_m")?;
        validate_non_negative(&phase.irrigation_interval_days, "irrigation_interval_days")?;
        validate_fraction(&phase.optimal_moisture, "optimal_moisture_m3_per_m3")?;
        if phase.irrigation_interval_days.average() <= Decimal::ZERO {
            return Err("irrigation_interval_days must average more than zero".to_string());
        }
        Ok(())
    };
    check().map_err(|reason| format!("phase '{}': {}", phase.name, reason))
}

/// Validate a crop/soil profile from the reference dataset
pub fn validate_profile(profile: &CropSoilProfile) -> Result<(), String> {
    if profile.crop_name.trim().is_empty() {
        return Err("crop name is empty".to_string());
    }
    if profile.soil_type.trim().is_empty() {
        return Err("soil type is empty".to_string());
    }
    if profile.phases.is_empty() {
        return Err("growth phase list is empty".to_string());
    }
    validate_fraction(
        &profile.moisture_capacity,
        "moisture_holding_capacity_m3_per_m3",
    )?;
    profile.phases.iter().try_for_each(validate_growth_phase)
}
