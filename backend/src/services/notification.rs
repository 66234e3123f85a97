//! Irrigation alert delivery through the SMS/email gateway

use rust_decimal::Decimal;
use shared::{round_for_display, AlertStatus, ContactDetails, Language};

use crate::external::NotificationClient;

/// Alert text in both languages
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IrrigationAlert {
    pub message_en: String,
    pub message_mr: String,
}

impl IrrigationAlert {
    /// `water_needed_mm` should be the unrounded balance; it is rounded once here.
    pub fn new(water_needed_mm: Decimal) -> Self {
        let amount = round_for_display(water_needed_mm, 1);
        Self {
            message_en: format!("Irrigation needed: {:.1}mm required", amount),
            message_mr: format!("सिंचनाची आवश्यकता: {:.1}मिमी आवश्यक", amount),
        }
    }

    pub fn message(&self, language: Language) -> &str {
        match language {
            Language::English => &self.message_en,
            Language::Marathi => &self.message_mr,
        }
    }

    /// Single gateway message carrying both languages
    pub fn body(&self) -> String {
        format!(
            "{} {}",
            self.message(Language::English),
            self.message(Language::Marathi)
        )
    }
}

/// Notification service for irrigation alerts
#[derive(Clone)]
pub struct NotificationService {
    client: NotificationClient,
}

impl NotificationService {
    pub fn new(client: NotificationClient) -> Self {
        Self { client }
    }

    /// Send the alert once. Delivery problems are reported, never raised.
    pub async fn send_irrigation_alert(
        &self,
        contact: &ContactDetails,
        water_needed_mm: Decimal,
    ) -> AlertStatus {
        let alert = IrrigationAlert::new(water_needed_mm);

        match self
            .client
            .send(&contact.email_address, &contact.mobile_number, &alert.body())
            .await
        {
            Ok(()) => {
                tracing::info!("Irrigation alert sent ({} mm)", water_needed_mm);
                AlertStatus::Sent
            }
            Err(e) => {
                tracing::warn!("Irrigation alert not delivered: {}", e);
                AlertStatus::Failed
            }
        }
    }
}
