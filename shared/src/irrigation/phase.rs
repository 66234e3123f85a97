use rust_decimal::Decimal;

use crate::error::{IrrigationError, IrrigationResult};
use crate::models::GrowthPhase;

/// Find the growth phase active at `age_days`.
///
/// Phases are walked in order, each occupying its average duration. An age
/// past the end of the last phase stays in the last phase.
pub fn resolve_growth_phase(phases: &[GrowthPhase], age_days: u32) -> IrrigationResult<&GrowthPhase> {
    let last = phases
        .last()
        .ok_or_else(|| IrrigationError::configuration("growth phase list is empty"))?;

    let age = Decimal::from(age_days);
    let mut cumulative = Decimal::ZERO;

    for phase in phases {
        let avg_duration = phase.duration_days.average();
        if age <= cumulative + avg_duration {
            return Ok(phase);
        }
        cumulative += avg_duration;
    }

    Ok(last)
}
