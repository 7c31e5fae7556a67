//! LLM integration for SPM Consult.
//!
//! The wizard and the consulting tools only see the `LlmProvider` trait.
//! `OpenAiProvider` is the concrete chat-completions backend; any gateway
//! speaking the same wire format works by pointing `api_base` at it.

pub mod openai;
pub mod provider;

pub use openai::OpenAiProvider;
pub use provider::*;

use std::sync::Arc;
use std::time::Duration;

/// Configuration for creating an LLM provider.
#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub api_base: String,
    pub api_key: secrecy::SecretString,
    pub model: String,
    pub timeout: Duration,
}

/// Create an LLM provider from configuration.
pub fn create_provider(config: &LlmConfig) -> Arc<dyn LlmProvider> {
    tracing::info!("Using OpenAI-compatible API at {} (model: {})", config.api_base, config.model);
    Arc::new(OpenAiProvider::new(
        &config.api_base,
        config.api_key.clone(),
        &config.model,
        config.timeout,
    ))
}
