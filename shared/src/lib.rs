//! Shared types and calculations for the Crop Irrigation Advisor
//!
//! This crate contains the reference-data model and the irrigation decision
//! calculation shared between the backend and the browser (via WASM).

pub mod error;
pub mod irrigation;
pub mod models;
pub mod types;
pub mod validation;

pub use error::*;
pub use models::*;
pub use types::*;
pub use validation::*;
