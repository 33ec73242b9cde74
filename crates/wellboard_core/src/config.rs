use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

// ============================================================================
// Top-level config
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct WellboardConfig {
    pub llm: LlmConfig,
    pub app: AppConfig,
    pub storage: StorageConfig,
}

impl WellboardConfig {
    /// Load config from a TOML file, falling back to defaults for missing fields.
    /// After loading, env var overrides are applied.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;
        let mut config: WellboardConfig =
            toml::from_str(&content).with_context(|| "Failed to parse TOML config")?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Try to load from path; if the file is missing or invalid, return defaults with env overrides.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        match Self::load(path) {
            Ok(cfg) => cfg,
            Err(e) => {
                tracing::info!("Config file not found or invalid ({}), using defaults", e);
                let mut cfg = Self::default();
                cfg.apply_env_overrides();
                cfg
            }
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(v) = std::env::var("LLM_PROVIDER") {
            self.llm.provider = v;
        }
        if let Ok(v) = std::env::var("LLM_MODEL") {
            self.llm.model = v;
        }
        if let Ok(v) = std::env::var("LLM_BASE_URL") {
            self.llm.base_url = Some(v);
        }
        if let Ok(v) = std::env::var("LLM_TIMEOUT_SECS") {
            if let Ok(n) = v.parse() {
                self.llm.timeout_secs = n;
            }
        }
        if let Ok(v) = std::env::var("WELLBOARD_STORAGE_DIR") {
            self.storage.dir = Some(PathBuf::from(v));
        }
    }
}

// ============================================================================
// Sub-configs
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    /// "gemini", "openai" or "mock".
    pub provider: String,
    pub model: String,
    pub base_url: Option<String>,
    pub temperature: f32,
    pub top_k: u32,
    pub top_p: f32,
    pub max_output_tokens: u32,
    /// Upper bound on a single generation call. Exceeding it counts as failure.
    pub timeout_secs: u64,
}

impl LlmConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            provider: "gemini".to_string(),
            model: "gemini-1.5-pro".to_string(),
            base_url: None,
            // High temperature keeps repeated generations varied.
            temperature: 0.9,
            top_k: 60,
            top_p: 0.9,
            max_output_tokens: 2048,
            timeout_secs: 30,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub name: String,
    pub max_tips: usize,
    pub max_favorites: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            name: "AI Wellness Board".to_string(),
            max_tips: 5,
            max_favorites: 50,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory for persisted state. `None` means the platform data dir.
    pub dir: Option<PathBuf>,
    /// Substring shared by every key this application writes.
    pub namespace: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            dir: None,
            namespace: crate::store::NAMESPACE.to_string(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
