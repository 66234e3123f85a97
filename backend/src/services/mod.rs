//! Business logic services for the Crop Irrigation Advisor

pub mod catalog;
pub mod disease;
pub mod irrigation;
pub mod notification;
pub mod weather;

pub use catalog::load_catalog;
pub use disease::DiseaseService;
pub use irrigation::IrrigationService;
pub use notification::NotificationService;
pub use weather::WeatherService;
