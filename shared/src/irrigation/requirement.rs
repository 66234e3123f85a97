use rust_decimal::Decimal;

use super::{DAYS_PER_WEEK, MM_PER_M};
use crate::error::{IrrigationError, IrrigationResult};
use crate::types::ValueRange;

/// Normalize a phase's irrigation schedule to mm of water per week
pub fn compute_weekly_requirement(
    irrigation_depth_m: &ValueRange,
    irrigation_interval_days: &ValueRange,
) -> IrrigationResult<Decimal> {
    let avg_interval_days = irrigation_interval_days.average();
    if avg_interval_days <= Decimal::ZERO {
        return Err(IrrigationError::configuration(format!(
            "average irrigation interval must be positive, got {} days",
            avg_interval_days
        )));
    }

    // multiply before dividing so whole-week intervals stay exact
    let avg_depth_mm = irrigation_depth_m.average() * MM_PER_M;
    Ok(avg_depth_mm * Decimal::from(DAYS_PER_WEEK) / avg_interval_days)
}
