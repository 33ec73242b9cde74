//! OpenAI-compatible chat completions provider.

use crate::llm::TextGenerator;
use anyhow::{Context, Result};
use reqwest::Client;
use serde_json::{json, Value};
use std::time::Duration;
use wellboard_core::config::LlmConfig;

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

#[derive(Debug, Clone)]
pub struct OpenAiClient {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
    temperature: f32,
    top_p: f32,
    max_tokens: u32,
}

impl OpenAiClient {
    pub fn new(config: &LlmConfig, api_key: &str) -> Result<Self> {
        let base_url = config
            .base_url
            .as_deref()
            .unwrap_or(DEFAULT_BASE_URL)
            .trim_end_matches('/')
            .to_string();

        Ok(Self {
            client: Client::builder()
                .timeout(config.timeout() + Duration::from_secs(5))
                .build()?,
            api_key: api_key.to_string(),
            base_url,
            model: config.model.clone(),
            temperature: config.temperature,
            top_p: config.top_p,
            max_tokens: config.max_output_tokens,
        })
    }
}

#[async_trait::async_trait]
impl TextGenerator for OpenAiClient {
    async fn generate_text(&self, prompt: &str) -> Result<String> {
        let url = format!("{}/chat/completions", self.base_url);
        let payload = json!({
            "model": self.model,
            "messages": [{"role": "user", "content": prompt}],
            "temperature": self.temperature,
            "top_p": self.top_p,
            "max_tokens": self.max_tokens,
        });

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&payload)
            .send()
            .await
            .context("Failed to send request to OpenAI")?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            anyhow::bail!("OpenAI API Error ({}): {}", status, error_text);
        }

        let body: Value = response.json().await.context("Failed to decode OpenAI response")?;
        let content = body["choices"][0]["message"]["content"]
            .as_str()
            .context("OpenAI response has no message content")?;
        Ok(content.to_string())
    }

    fn name(&self) -> &str {
        "openai"
    }
}
