//! Errors raised by the irrigation calculation and the reference dataset

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IrrigationError {
    /// The reference dataset cannot support the calculation
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Reference dataset could not be parsed: {0}")]
    Dataset(String),
}

impl IrrigationError {
    pub fn configuration(message: impl Into<String>) -> Self {
        IrrigationError::Configuration(message.into())
    }
}

pub type IrrigationResult<T> = Result<T, IrrigationError>;
