// Generation provider abstraction
//
// The solver only talks to `LlmProvider`, so the hosted service can be
// swapped (or mocked in tests) without touching call sites.

use anyhow::Result;
use async_trait::async_trait;

pub mod factory;
pub mod gemini;
pub mod types;

pub use factory::create_provider;
pub use gemini::GeminiProvider;
pub use types::{Message, ProviderRequest, ProviderResponse};

/// Trait for text generation providers
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Send a request and wait for the complete response
    async fn send_message(&self, request: &ProviderRequest) -> Result<ProviderResponse>;

    /// Provider name (e.g. "gemini")
    fn name(&self) -> &str;

    /// Model used when the request does not name one
    fn default_model(&self) -> &str;
}
