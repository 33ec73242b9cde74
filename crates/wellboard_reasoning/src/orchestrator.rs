//! Generation orchestrator: prompt -> model -> normalizer, under a timeout.

use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use wellboard_core::config::LlmConfig;
use wellboard_core::{Profile, Tip};

use crate::fallback::fallback_tips;
use crate::llm::TextGenerator;
use crate::normalizer::{normalize_tip_detail, normalize_tips_list, MAX_TIPS};
use crate::prompts::{build_detail_prompt, build_tips_prompt, session_token};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GenerationError {
    #[error("generation timed out after {0:?}")]
    Timeout(Duration),

    #[error("upstream error: {0}")]
    Upstream(String),

    #[error("model returned an empty response")]
    EmptyResponse,
}

pub struct TipGenerator {
    client: Arc<dyn TextGenerator>,
    timeout: Duration,
    max_tips: usize,
}

impl TipGenerator {
    pub fn new(client: Arc<dyn TextGenerator>, timeout: Duration) -> Self {
        Self {
            client,
            timeout,
            max_tips: MAX_TIPS,
        }
    }

    pub fn from_config(client: Arc<dyn TextGenerator>, config: &LlmConfig, max_tips: usize) -> Self {
        Self::new(client, config.timeout()).with_max_tips(max_tips)
    }

    /// Cap the list size; clamped to `1..=MAX_TIPS`.
    pub fn with_max_tips(mut self, max_tips: usize) -> Self {
        self.max_tips = max_tips.clamp(1, MAX_TIPS);
        self
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Produce tips for `profile`. Never fails: any upstream problem yields
    /// the fallback selection.
    pub async fn generate(&self, profile: &Profile) -> Vec<Tip> {
        let prompt = build_tips_prompt(profile, &session_token());
        let mut tips = match self.request(&prompt).await {
            Ok(raw) => normalize_tips_list(&raw, profile),
            Err(e) => {
                tracing::warn!("Tip generation via {} failed ({}), using fallback tips", self.client.name(), e);
                fallback_tips(profile)
            }
        };
        tips.truncate(self.max_tips);
        tracing::info!("Generated {} tips for goals [{}]", tips.len(), profile.goal_signature());
        tips
    }

    /// Expand `tip` with a full description and steps. Unlike [`generate`],
    /// upstream failures are reported to the caller.
    ///
    /// [`generate`]: TipGenerator::generate
    pub async fn generate_detail(&self, tip: &Tip, profile: &Profile) -> Result<Tip, GenerationError> {
        let prompt = build_detail_prompt(tip, profile);
        let raw = self.request(&prompt).await?;
        Ok(normalize_tip_detail(&raw, tip))
    }

    async fn request(&self, prompt: &str) -> Result<String, GenerationError> {
        tracing::debug!("Calling {} ({} prompt chars)", self.client.name(), prompt.len());
        let text = match tokio::time::timeout(self.timeout, self.client.generate_text(prompt)).await {
            Err(_) => return Err(GenerationError::Timeout(self.timeout)),
            Ok(Err(e)) => return Err(GenerationError::Upstream(format!("{e:#}"))),
            Ok(Ok(text)) => text,
        };
        if text.trim().is_empty() {
            return Err(GenerationError::EmptyResponse);
        }
        Ok(text)
    }
}
