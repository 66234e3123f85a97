//! Irrigation decision calculation
//!
//! Converts soil moisture fractions, irrigation depths in meters and
//! intervals in days into a single water balance in millimeters:
//!
//! - [`resolve_growth_phase`] picks the phase active at the crop's age
//! - [`compute_moisture_deficit`] turns a moisture shortfall into mm of water
//! - [`compute_weekly_requirement`] normalizes a phase's schedule to mm/week
//! - [`decide`] nets both against the precipitation forecast
//!
//! Everything here is pure; forecast lookup and alert dispatch live in the backend.

mod deficit;
mod engine;
mod phase;
mod requirement;

pub use deficit::*;
pub use engine::*;
pub use phase::*;
pub use requirement::*;

use rust_decimal::Decimal;

/// Effective root zone depth used to turn volumetric moisture into a water column
pub const ROOT_DEPTH_M: Decimal = Decimal::ONE;

pub(crate) const MM_PER_M: Decimal = Decimal::ONE_THOUSAND;

pub(crate) const DAYS_PER_WEEK: u32 = 7;
