//! Crop disease prediction models

use serde::{Deserialize, Serialize};

/// Likely diseases for a crop at a given age
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DiseasePrediction {
    pub diseases: Vec<CropDisease>,
}

/// One disease with English text and its Marathi translation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CropDisease {
    pub name: String,
    pub symptoms: String,
    pub prevention: String,
    pub marathi_translation: MarathiDiseaseText,
}

/// Marathi keys are part of the wire format
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MarathiDiseaseText {
    #[serde(rename = "नाव")]
    pub name: String,
    #[serde(rename = "लक्षणे")]
    pub symptoms: String,
    #[serde(rename = "प्रतिबंध")]
    pub prevention: String,
}
