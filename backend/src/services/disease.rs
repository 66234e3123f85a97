//! Crop disease prediction through a generative model

use serde::Deserialize;
use shared::{validation, DiseasePrediction};

use crate::error::{AppError, AppResult};
use crate::external::GeminiClient;

/// Body of `POST /predict-diseases`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DiseasePredictionInput {
    pub crop_name: Option<String>,
    pub crop_age: Option<i64>,
}

impl DiseasePredictionInput {
    /// Crop name and age in days
    pub fn validate(self) -> AppResult<(String, u32)> {
        let crop_name = self
            .crop_name
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        let (Some(crop_name), Some(age)) = (crop_name.clone(), self.crop_age) else {
            let missing: Vec<&str> = [
                ("crop_name", crop_name.is_none()),
                ("crop_age", self.crop_age.is_none()),
            ]
            .into_iter()
            .filter_map(|(field, missing)| missing.then_some(field))
            .collect();
            return Err(AppError::Validation(format!(
                "Missing required fields: {}",
                missing.join(", ")
            )));
        };

        validation::validate_crop_age(age).map_err(|e| AppError::Validation(e.to_string()))?;
        let age_days =
            u32::try_from(age).map_err(|_| AppError::Validation("Crop age is too large".to_string()))?;
        Ok((crop_name, age_days))
    }
}

/// Prompt asking for three diseases with English and Marathi text
pub fn disease_prompt(crop_name: &str, age_days: u32) -> String {
    format!(
        r#"Predict three possible diseases for {crop_name} at age {age_days} days.
Provide symptoms and prevention methods in JSON format without code block formatting.
Ensure the response follows:
{{
  "diseases": [
    {{
      "name": "Disease Name",
      "symptoms": "English symptoms",
      "prevention": "English prevention",
      "marathi_translation": {{
        "नाव": "Disease Name in Marathi",
        "लक्षणे": "Marathi symptoms",
        "प्रतिबंध": "Marathi prevention"
      }}
    }}
  ]
}}"#
    )
}

/// Parse model output, tolerating a ```json fence around the object
pub fn parse_prediction(text: &str) -> AppResult<DiseasePrediction> {
    let trimmed = text.trim();
    let body = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .unwrap_or(trimmed);
    let body = body.strip_suffix("```").unwrap_or(body).trim();

    serde_json::from_str(body).map_err(|e| {
        tracing::warn!("Invalid disease prediction from model: {} ({})", e, text);
        AppError::ExternalService("Invalid AI response".to_string())
    })
}

/// Disease prediction service
#[derive(Clone)]
pub struct DiseaseService {
    client: GeminiClient,
}

impl DiseaseService {
    pub fn new(client: GeminiClient) -> Self {
        Self { client }
    }

    pub async fn predict(&self, crop_name: &str, age_days: u32) -> AppResult<DiseasePrediction> {
        let text = self
            .client
            .generate_text(&disease_prompt(crop_name, age_days))
            .await?;
        let prediction = parse_prediction(&text)?;

        tracing::info!(
            crop = %crop_name,
            age_days,
            diseases = prediction.diseases.len(),
            "Disease prediction completed"
        );
        Ok(prediction)
    }
}
