pub mod gemini;
pub mod mock;
pub mod openai;

use crate::llm::TextGenerator;
use anyhow::Result;
use std::sync::Arc;
use wellboard_core::config::LlmConfig;

pub use gemini::GeminiClient;
pub use mock::MockProvider;
pub use openai::OpenAiClient;

/// Build the text generator named by `config.provider`.
///
/// A hosted provider whose API key is not set degrades to the mock provider.
pub fn create_client(config: &LlmConfig) -> Result<Arc<dyn TextGenerator>> {
    let provider = config.provider.to_ascii_lowercase();
    let key_var = match provider.as_str() {
        "mock" => return Ok(Arc::new(MockProvider::new())),
        "gemini" => "GEMINI_API_KEY",
        "openai" => "OPENAI_API_KEY",
        other => anyhow::bail!("Unknown LLM provider '{}' (expected gemini, openai or mock)", other),
    };

    let api_key = match std::env::var(key_var) {
        Ok(key) if !key.trim().is_empty() => key,
        _ => {
            tracing::warn!("{} is not set, using the mock provider", key_var);
            return Ok(Arc::new(MockProvider::new()));
        }
    };

    tracing::info!("Using {} provider with model {}", provider, config.model);
    Ok(match provider.as_str() {
        "openai" => Arc::new(OpenAiClient::new(config, &api_key)?),
        _ => Arc::new(GeminiClient::new(config, &api_key)?),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(provider: &str) -> LlmConfig {
        LlmConfig {
            provider: provider.to_string(),
            ..LlmConfig::default()
        }
    }

    #[test]
    fn test_mock_provider_selected() {
        assert_eq!(create_client(&config("mock")).unwrap().name(), "mock");
        assert_eq!(create_client(&config("MOCK")).unwrap().name(), "mock");
    }

    #[test]
    fn test_unknown_provider_rejected() {
        let err = create_client(&config("carrier-pigeon")).err().unwrap();
        assert!(err.to_string().contains("carrier-pigeon"));
    }
}
