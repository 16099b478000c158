// Unified request/response types for the generation provider
//
// Providers translate these into their own wire formats.

use serde::{Deserialize, Serialize};

/// A single conversational turn sent to the model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// "user" or "assistant"
    pub role: String,
    pub text: String,
}

impl Message {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            text: text.into(),
        }
    }
}

/// Provider-agnostic generation request
#[derive(Debug, Clone, Serialize)]
pub struct ProviderRequest {
    pub messages: Vec<Message>,

    /// Model name (provider-specific); empty means the provider default
    pub model: String,

    /// Maximum tokens to generate
    pub max_tokens: u32,

    /// Temperature (0.0 to 1.0, optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
}

impl ProviderRequest {
    /// Create a new request from messages
    pub fn new(messages: Vec<Message>) -> Self {
        Self {
            messages,
            model: String::new(),
            max_tokens: 1024,
            temperature: None,
        }
    }

    /// Single user turn carrying the whole prompt
    pub fn from_prompt(prompt: impl Into<String>) -> Self {
        Self::new(vec![Message::user(prompt)])
    }

    /// Set the model name
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set max tokens
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// Set temperature
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }
}

/// Provider-agnostic generation response
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderResponse {
    pub model: String,

    /// Generated text, `None` when the service returned nothing usable
    pub text: Option<String>,

    pub finish_reason: Option<String>,

    /// Provider name ("gemini", ...)
    pub provider: String,
}

impl ProviderResponse {
    /// Text with surrounding whitespace removed, if any remains
    pub fn non_empty_text(&self) -> Option<&str> {
        self.text
            .as_deref()
            .map(str::trim)
            .filter(|text| !text.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_builder() {
        let request = ProviderRequest::from_prompt("hello")
            .with_model("gemini-2.5-flash")
            .with_max_tokens(2000)
            .with_temperature(0.1);

        assert_eq!(request.messages, vec![Message::user("hello")]);
        assert_eq!(request.model, "gemini-2.5-flash");
        assert_eq!(request.max_tokens, 2000);
        assert_eq!(request.temperature, Some(0.1));
    }

    #[test]
    fn test_non_empty_text() {
        let mut response = ProviderResponse {
            model: "m".to_string(),
            text: Some("  \n".to_string()),
            finish_reason: None,
            provider: "gemini".to_string(),
        };
        assert_eq!(response.non_empty_text(), None);

        response.text = Some("x = 5".to_string());
        assert_eq!(response.non_empty_text(), Some("x = 5"));

        response.text = None;
        assert_eq!(response.non_empty_text(), None);
    }
}
