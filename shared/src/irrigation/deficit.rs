use rust_decimal::Decimal;

use super::MM_PER_M;

/// Water depth (mm) needed to lift soil moisture back to `optimal_min`.
///
/// Volumetric moisture is m³ water per m³ soil, so multiplying by the root
/// zone depth gives an equivalent water column. Returns exactly zero when the
/// soil is already at or above the optimal minimum.
pub fn compute_moisture_deficit(
    current_moisture_fraction: Decimal,
    optimal_min: Decimal,
    moisture_capacity_fraction: Decimal,
    root_depth_m: Decimal,
) -> Decimal {
    if current_moisture_fraction >= optimal_min {
        return Decimal::ZERO;
    }

    let capacity_mm = moisture_capacity_fraction * root_depth_m * MM_PER_M;
    (optimal_min - current_moisture_fraction) * capacity_mm
}
