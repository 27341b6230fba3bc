//! Gemini API client
//!
//! Thin wrapper over the generateContent endpoint for the advisory
//! operations. Uses a long-lived reqwest::Client for connection pooling.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{error, info};

use crate::error::AdvisoryError;

const BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Reusable Gemini client (connection-pooled)
pub struct GeminiClient {
    client: Client,
    api_key: String,
    endpoint: String,
}

impl GeminiClient {
    pub fn new(api_key: String, model: String) -> Self {
        let client = Client::builder()
            .pool_idle_timeout(Duration::from_secs(90))
            .pool_max_idle_per_host(8)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            api_key,
            endpoint: format!("{}/{}:generateContent", BASE_URL, model),
        }
    }

    /// Generate a plain-text response.
    pub async fn generate(
        &self,
        prompt: &str,
        system_instruction: Option<&str>,
    ) -> crate::Result<String> {
        let request = GeminiRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: GenerationConfig::text(),
            system_instruction: system_instruction.map(|text| SystemInstruction {
                parts: vec![Part {
                    text: text.to_string(),
                }],
            }),
        };

        self.call(request).await
    }

    /// Generate a response constrained to a JSON schema.
    ///
    /// Returns the raw JSON text; the caller deserializes it into the
    /// structure it asked for.
    pub async fn generate_structured(
        &self,
        prompt: &str,
        schema: serde_json::Value,
    ) -> crate::Result<String> {
        let request = GeminiRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: GenerationConfig::json_constrained(schema),
            system_instruction: None,
        };

        self.call(request).await
    }

    /// One outbound request per call; no retries.
    async fn call(&self, request: GeminiRequest) -> crate::Result<String> {
        if self.api_key.is_empty() {
            return Err(AdvisoryError::Provider(
                "GEMINI_API_KEY not configured".to_string(),
            ));
        }

        let url = format!("{}?key={}", self.endpoint, self.api_key);

        info!("Calling Gemini API");

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                error!("Gemini API request failed: {}", e);
                AdvisoryError::Provider(format!("Gemini API error: {}", e))
            })?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!("Gemini API error response: {}", error_text);
            return Err(AdvisoryError::Provider(format!(
                "Gemini API error: {}",
                error_text
            )));
        }

        let gemini_response: GeminiResponse = response.json().await.map_err(|e| {
            error!("Failed to parse Gemini response: {}", e);
            AdvisoryError::Provider(format!("Gemini parse error: {}", e))
        })?;

        let answer = gemini_response
            .candidates
            .first()
            .and_then(|candidate| candidate.content.parts.first())
            .map(|part| part.text.clone())
            .ok_or_else(|| AdvisoryError::Provider("Empty response from Gemini".to_string()))?;

        Ok(answer)
    }
}

#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<SystemInstruction>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    temperature: f32,
    top_p: f32,
    top_k: i32,
    max_output_tokens: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_mime_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_schema: Option<serde_json::Value>,
}

impl GenerationConfig {
    fn text() -> Self {
        Self {
            temperature: 0.3,
            top_p: 0.9,
            top_k: 40,
            max_output_tokens: 1024,
            response_mime_type: None,
            response_schema: None,
        }
    }

    fn json_constrained(schema: serde_json::Value) -> Self {
        Self {
            response_mime_type: Some("application/json".to_string()),
            response_schema: Some(schema),
            ..Self::text()
        }
    }
}

#[derive(Debug, Serialize)]
struct SystemInstruction {
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Content,
}
