//! HTTP handlers for the Crop Irrigation Advisor

pub mod crops;
pub mod disease;
pub mod health;
pub mod irrigation;
pub mod weather;

pub use crops::*;
pub use disease::*;
pub use health::*;
pub use irrigation::*;
pub use weather::*;
