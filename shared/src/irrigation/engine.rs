use rust_decimal::Decimal;

use super::{compute_moisture_deficit, compute_weekly_requirement, resolve_growth_phase, ROOT_DEPTH_M};
use crate::error::IrrigationResult;
use crate::models::{AlertStatus, CropSoilProfile, IrrigationDecision, IrrigationRequest};
use crate::types::{percent_to_fraction, round_for_display};

const DISPLAY_DECIMAL_PLACES: u32 = 2;

/// Decide whether the field in `request` needs irrigation.
///
/// Pure: the forecast is passed in, nothing is fetched or sent. The returned
/// decision always carries [`AlertStatus::NotSent`].
pub fn decide(
    request: &IrrigationRequest,
    profile: &CropSoilProfile,
    precipitation_mm: Decimal,
) -> IrrigationResult<IrrigationDecision> {
    evaluate(
        profile,
        request.age_days,
        request.current_moisture_percent,
        precipitation_mm,
    )
}

/// Same calculation as [`decide`] without the contact and location details
pub fn evaluate(
    profile: &CropSoilProfile,
    age_days: u32,
    current_moisture_percent: Decimal,
    precipitation_mm: Decimal,
) -> IrrigationResult<IrrigationDecision> {
    let current_moisture = percent_to_fraction(current_moisture_percent);
    let phase = resolve_growth_phase(&profile.phases, age_days)?;
    let optimal_min = phase.optimal_moisture.min;

    let deficit_mm = compute_moisture_deficit(
        current_moisture,
        optimal_min,
        profile.moisture_capacity.average(),
        ROOT_DEPTH_M,
    );
    let weekly_requirement_mm =
        compute_weekly_requirement(&phase.irrigation_depth_m, &phase.irrigation_interval_days)?;

    let net_mm = deficit_mm + weekly_requirement_mm - precipitation_mm;
    let water_balance_mm = net_mm.max(Decimal::ZERO);

    // Gate on the exact balance; rounding is for display only.
    // A large weekly requirement alone never triggers irrigation of moist soil.
    let irrigation_required = water_balance_mm > Decimal::ZERO && current_moisture < optimal_min;

    Ok(IrrigationDecision {
        irrigation_required,
        water_balance_mm,
        water_needed_mm: round_for_display(water_balance_mm, DISPLAY_DECIMAL_PLACES),
        precipitation_forecast_mm: round_for_display(precipitation_mm, DISPLAY_DECIMAL_PLACES),
        alert_status: AlertStatus::NotSent,
        current_moisture_percent,
        growth_phase: phase.name.clone(),
    })
}
