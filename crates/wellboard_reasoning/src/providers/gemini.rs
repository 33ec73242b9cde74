//! Google Gemini `generateContent` provider.

use crate::llm::TextGenerator;
use anyhow::{Context, Result};
use reqwest::Client;
use serde_json::{json, Value};
use std::time::Duration;
use wellboard_core::config::LlmConfig;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
    temperature: f32,
    top_k: u32,
    top_p: f32,
    max_output_tokens: u32,
}

impl GeminiClient {
    pub fn new(config: &LlmConfig, api_key: &str) -> Result<Self> {
        let base_url = config
            .base_url
            .as_deref()
            .unwrap_or(DEFAULT_BASE_URL)
            .trim_end_matches('/')
            .to_string();

        Ok(Self {
            // Transport ceiling only; the orchestrator applies the real timeout.
            client: Client::builder()
                .timeout(config.timeout() + Duration::from_secs(5))
                .build()?,
            api_key: api_key.to_string(),
            base_url,
            model: config.model.clone(),
            temperature: config.temperature,
            top_k: config.top_k,
            top_p: config.top_p,
            max_output_tokens: config.max_output_tokens,
        })
    }
}

#[async_trait::async_trait]
impl TextGenerator for GeminiClient {
    async fn generate_text(&self, prompt: &str) -> Result<String> {
        let url = format!("{}/models/{}:generateContent", self.base_url, self.model);
        let payload = json!({
            "contents": [
                {"role": "user", "parts": [{"text": prompt}]}
            ],
            "generationConfig": {
                "temperature": self.temperature,
                "topK": self.top_k,
                "topP": self.top_p,
                "maxOutputTokens": self.max_output_tokens,
            }
        });

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&payload)
            .send()
            .await
            .context("Failed to send request to Gemini")?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            anyhow::bail!("Gemini API Error ({}): {}", status, error_text);
        }

        let body: Value = response.json().await.context("Failed to decode Gemini response")?;
        let parts = body["candidates"][0]["content"]["parts"]
            .as_array()
            .context("Gemini response has no content parts")?;
        let text = parts
            .iter()
            .filter_map(|p| p["text"].as_str())
            .collect::<Vec<_>>()
            .join("");
        Ok(text)
    }

    fn name(&self) -> &str {
        "gemini"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn config(base_url: &str) -> LlmConfig {
        LlmConfig {
            base_url: Some(base_url.to_string()),
            model: "gemini-test".to_string(),
            ..LlmConfig::default()
        }
    }

    #[tokio::test]
    async fn test_generate_text_joins_parts() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/models/gemini-test:generateContent"))
            .and(header("x-goog-api-key", "secret"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "candidates": [{
                    "content": {"parts": [{"text": "[{\"title\":"}, {"text": " \"Walk\"}]"}]}
                }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = GeminiClient::new(&config(&server.uri()), "secret").unwrap();
        let text = client.generate_text("prompt").await.unwrap();
        assert_eq!(text, "[{\"title\": \"Walk\"}]");
    }

    #[tokio::test]
    async fn test_http_error_is_reported() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(429).set_body_string("quota exceeded"))
            .mount(&server)
            .await;

        let client = GeminiClient::new(&config(&server.uri()), "secret").unwrap();
        let err = client.generate_text("prompt").await.unwrap_err();
        assert!(format!("{err:#}").contains("quota exceeded"));
    }

    #[tokio::test]
    async fn test_missing_candidates_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"candidates": []})))
            .mount(&server)
            .await;

        let client = GeminiClient::new(&config(&server.uri()), "secret").unwrap();
        assert!(client.generate_text("prompt").await.is_err());
    }
}
