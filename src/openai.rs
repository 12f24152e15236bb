//! OpenAI-compatible client construction.
//!
//! The chat endpoint defaults to Gemini's OpenAI-compatibility proxy; any
//! chat-completions-compatible base URL works. The client is built from
//! settings by the caller that needs it, never held in process-wide state.

use crate::config::Settings;
use crate::error::Result;
use async_openai::{config::OpenAIConfig, Client};
use std::time::Duration;

/// Create a chat client for the configured endpoint.
///
/// Resolves the API key from the configured environment variable; a missing
/// key is a configuration error surfaced to the caller.
pub fn create_client(settings: &Settings) -> Result<Client<OpenAIConfig>> {
    let api_key = settings.model_api_key()?;

    let http_client = reqwest::Client::builder()
        .timeout(Duration::from_secs(settings.model.timeout_secs))
        .build()
        .map_err(|e| crate::error::LeseError::Config(e.to_string()))?;

    let config = OpenAIConfig::new()
        .with_api_base(settings.model.base_url.trim_end_matches('/'))
        .with_api_key(api_key);

    Ok(Client::with_config(config).with_http_client(http_client))
}
