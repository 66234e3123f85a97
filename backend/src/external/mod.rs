//! External API integrations

pub mod disease;
pub mod notification;
pub mod weather;

pub use disease::GeminiClient;
pub use notification::NotificationClient;
pub use weather::WeatherClient;
