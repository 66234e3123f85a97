//! Domain models for the Crop Irrigation Advisor

mod crop;
mod disease;
mod irrigation;
mod weather;

pub use crop::*;
pub use disease::*;
pub use irrigation::*;
pub use weather::*;
