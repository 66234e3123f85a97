//! Gemini client for crop disease prediction
//!
//! Sends a single text prompt to `models/{model}:generateContent` and returns
//! the generated text.

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// Gemini generateContent client
#[derive(Clone)]
pub struct GeminiClient {
    http_client: Client,
    api_endpoint: String,
    model: String,
    api_key: String,
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<PromptPart<'a>>,
}

#[derive(Debug, Serialize)]
struct PromptPart<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: Option<String>,
}

impl GeminiClient {
    pub fn new(
        api_endpoint: impl Into<String>,
        model: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> AppResult<Self> {
        let http_client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Configuration(format!("Gemini HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            api_endpoint: api_endpoint.into().trim_end_matches('/').to_string(),
            model: model.into(),
            api_key: api_key.into(),
        })
    }

    fn generate_url(&self) -> String {
        format!("{}/models/{}:generateContent", self.api_endpoint, self.model)
    }

    /// Text of the first candidate
    pub async fn generate_text(&self, prompt: &str) -> AppResult<String> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![PromptPart { text: prompt }],
            }],
        };

        let response = self
            .http_client
            .post(self.generate_url())
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| AppError::ExternalService(format!("Gemini request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::ExternalService(format!(
                "Gemini returned {}: {}",
                status, body
            )));
        }

        let data: GenerateContentResponse = response.json().await.map_err(|e| {
            AppError::ExternalService(format!("Failed to parse Gemini response: {}", e))
        })?;

        candidate_text(data)
            .ok_or_else(|| AppError::ExternalService("Gemini returned no text".to_string()))
    }
}

fn candidate_text(data: GenerateContentResponse) -> Option<String> {
    let candidate = data.candidates.into_iter().next()?;
    let text: String = candidate
        .content
        .parts
        .into_iter()
        .filter_map(|part| part.text)
        .collect();

    (!text.trim().is_empty()).then_some(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_url() {
        let client = GeminiClient::new(
            "http://localhost:1/v1beta/",
            "gemini-1.5-flash",
            "key",
            Duration::from_secs(1),
        )
        .unwrap();
        assert_eq!(
            client.generate_url(),
            "http://localhost:1/v1beta/models/gemini-1.5-flash:generateContent"
        );
    }

    #[test]
    fn test_candidate_parts_joined() {
        let json = r#"{
            "candidates": [
                {"content": {"parts": [{"text": "{\"diseases\": "}, {"text": "[]}"}]}},
                {"content": {"parts": [{"text": "ignored"}]}}
            ]
        }"#;
        let data: GenerateContentResponse = serde_json::from_str(json).unwrap();
        assert_eq!(candidate_text(data).as_deref(), Some("{\"diseases\": []}"));
    }

    #[test]
    fn test_no_candidates() {
        let data: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(candidate_text(data), None);
    }
}
