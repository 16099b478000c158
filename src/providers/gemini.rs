// Google Gemini API provider implementation
//
// Speaks the non-streaming `generateContent` REST call. A response without
// candidates (e.g. blocked by safety filters) or without text parts is not an
// error; it comes back as `text: None`.

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::types::{ProviderRequest, ProviderResponse};
use super::LlmProvider;
use crate::config::constants::{DEFAULT_GEMINI_BASE_URL, DEFAULT_MODEL};

/// The key never goes in the URL: reqwest errors print the URL
const API_KEY_HEADER: &str = "x-goog-api-key";

/// Google Gemini API provider
#[derive(Clone)]
pub struct GeminiProvider {
    client: Client,
    api_key: String,
    base_url: String,
    default_model: String,
}

impl GeminiProvider {
    /// Create a new Gemini provider
    ///
    /// No request timeout is set; the service default applies.
    pub fn new(api_key: String) -> Result<Self> {
        let client = Client::builder()
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            api_key,
            base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            default_model: DEFAULT_MODEL.to_string(),
        })
    }

    /// Create with custom default model
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.default_model = model.into();
        self
    }

    /// Point the provider at another endpoint (proxies, test servers)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Rebuild the HTTP client with an explicit request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Result<Self> {
        self.client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to create HTTP client")?;
        Ok(self)
    }

    /// Convert ProviderRequest to Gemini API format
    fn to_gemini_request(&self, request: &ProviderRequest) -> GeminiRequest {
        let model = if request.model.is_empty() {
            self.default_model.clone()
        } else {
            request.model.clone()
        };

        let contents = request
            .messages
            .iter()
            .map(|msg| GeminiContent {
                // Gemini uses "model" instead of "assistant"
                role: if msg.role == "assistant" {
                    "model".to_string()
                } else {
                    msg.role.clone()
                },
                parts: vec![GeminiPart {
                    text: Some(msg.text.clone()),
                }],
            })
            .collect();

        GeminiRequest {
            model,
            contents,
            generation_config: GeminiGenerationConfig {
                temperature: request.temperature,
                max_output_tokens: Some(request.max_tokens),
            },
        }
    }

    /// Convert Gemini response to ProviderResponse
    fn from_gemini_response(response: GeminiResponse, model: String) -> ProviderResponse {
        let candidate = response.candidates.into_iter().next();

        let finish_reason = candidate.as_ref().and_then(|c| c.finish_reason.clone());
        let text: String = candidate
            .and_then(|c| c.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|part| part.text)
                    .collect()
            })
            .unwrap_or_default();

        ProviderResponse {
            model,
            text: if text.is_empty() { None } else { Some(text) },
            finish_reason,
            provider: "gemini".to_string(),
        }
    }
}

#[async_trait]
impl LlmProvider for GeminiProvider {
    async fn send_message(&self, request: &ProviderRequest) -> Result<ProviderResponse> {
        let gemini_request = self.to_gemini_request(request);
        let model = gemini_request.model.clone();

        let url = format!("{}/models/{}:generateContent", self.base_url, model);

        tracing::debug!("Sending request to Gemini API: {:?}", gemini_request);

        let response = self
            .client
            .post(&url)
            .header(API_KEY_HEADER, self.api_key.as_str())
            .header("content-type", "application/json")
            .json(&gemini_request)
            .send()
            .await
            .context("Failed to send request to Gemini API")?;

        let status = response.status();

        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            anyhow::bail!(
                "Gemini API request failed\n\nStatus: {}\nBody: {}",
                status,
                error_body
            );
        }

        let gemini_response: GeminiResponse = response
            .json()
            .await
            .context("Failed to parse Gemini API response")?;

        tracing::debug!("Received response: {:?}", gemini_response);

        Ok(Self::from_gemini_response(gemini_response, model))
    }

    fn name(&self) -> &str {
        "gemini"
    }

    fn default_model(&self) -> &str {
        &self.default_model
    }
}

// Gemini API types

#[derive(Debug, Clone, Serialize)]
struct GeminiRequest {
    #[serde(skip)]
    model: String, // Used in URL, not in body
    contents: Vec<GeminiContent>,
    #[serde(rename = "generationConfig")]
    generation_config: GeminiGenerationConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct GeminiContent {
    #[serde(default)]
    role: String, // "user" or "model"
    #[serde(default)]
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct GeminiPart {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

#[derive(Debug, Clone, Serialize, Default)]
struct GeminiGenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(rename = "maxOutputTokens", skip_serializing_if = "Option::is_none")]
    max_output_tokens: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
}

#[derive(Debug, Clone, Deserialize)]
struct GeminiCandidate {
    content: Option<GeminiContent>,
    #[serde(rename = "finishReason")]
    finish_reason: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::types::Message;

    #[test]
    fn test_gemini_provider_creation() {
        let provider = GeminiProvider::new("test-key".to_string());
        assert!(provider.is_ok());
    }

    #[test]
    fn test_provider_name() {
        let provider = GeminiProvider::new("test-key".to_string()).unwrap();
        assert_eq!(provider.name(), "gemini");
    }

    #[test]
    fn test_default_model() {
        let provider = GeminiProvider::new("test-key".to_string()).unwrap();
        assert_eq!(provider.default_model(), "gemini-2.5-flash");
    }

    #[test]
    fn test_custom_model() {
        let provider = GeminiProvider::new("test-key".to_string())
            .unwrap()
            .with_model("gemini-pro");
        assert_eq!(provider.default_model(), "gemini-pro");
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let provider = GeminiProvider::new("k".to_string())
            .unwrap()
            .with_base_url("http://localhost:1234/");
        assert_eq!(provider.base_url, "http://localhost:1234");
    }

    #[test]
    fn test_request_body_shape() {
        let provider = GeminiProvider::new("k".to_string()).unwrap();
        let request = ProviderRequest::new(vec![Message::user("2+2?")])
            .with_max_tokens(2000)
            .with_temperature(0.1);

        let body = serde_json::to_value(provider.to_gemini_request(&request)).unwrap();

        assert_eq!(body["contents"][0]["role"], "user");
        assert_eq!(body["contents"][0]["parts"][0]["text"], "2+2?");
        assert_eq!(body["generationConfig"]["maxOutputTokens"], 2000);
        assert!((body["generationConfig"]["temperature"].as_f64().unwrap() - 0.1).abs() < 1e-6);
        assert!(body.get("model").is_none());
    }

    #[test]
    fn test_response_without_candidates_has_no_text() {
        let response: GeminiResponse = serde_json::from_str(r#"{"candidates": []}"#).unwrap();
        let converted = GeminiProvider::from_gemini_response(response, "m".to_string());
        assert_eq!(converted.text, None);
    }

    #[test]
    fn test_response_joins_text_parts() {
        let response: GeminiResponse = serde_json::from_str(
            r#"{"candidates": [{"content": {"role": "model", "parts": [{"text": "a"}, {"text": "b"}]}, "finishReason": "STOP"}]}"#,
        )
        .unwrap();
        let converted = GeminiProvider::from_gemini_response(response, "m".to_string());
        assert_eq!(converted.text.as_deref(), Some("ab"));
        assert_eq!(converted.finish_reason.as_deref(), Some("STOP"));
    }

    #[test]
    fn test_blocked_candidate_without_content() {
        let response: GeminiResponse =
            serde_json::from_str(r#"{"candidates": [{"finishReason": "SAFETY"}]}"#).unwrap();
        let converted = GeminiProvider::from_gemini_response(response, "m".to_string());
        assert_eq!(converted.text, None);
        assert_eq!(converted.finish_reason.as_deref(), Some("SAFETY"));
    }
}
