// Provider factory
//
// Creates the generation provider from configuration

use anyhow::Result;
use std::sync::Arc;

use super::gemini::GeminiProvider;
use super::LlmProvider;
use crate::config::Config;

/// Create the configured provider. Expects a validated `Config`.
pub fn create_provider(config: &Config) -> Result<Arc<dyn LlmProvider>> {
    let mut provider = GeminiProvider::new(config.api_key().to_string())?
        .with_model(config.provider.model.clone())
        .with_base_url(config.provider.base_url.clone());

    if let Some(timeout) = config.provider.request_timeout() {
        provider = provider.with_timeout(timeout)?;
    }

    tracing::info!(
        provider = provider.name(),
        model = provider.default_model(),
        "Provider ready"
    );

    Ok(Arc::new(provider))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_provider_uses_configured_model() {
        let mut config = Config::default();
        config.provider.api_key = Some("key".to_string());
        config.provider.model = "gemini-pro".to_string();
        config.provider.request_timeout_secs = Some(30);

        let provider = create_provider(&config).unwrap();
        assert_eq!(provider.name(), "gemini");
        assert_eq!(provider.default_model(), "gemini-pro");
    }
}
