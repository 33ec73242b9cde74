use anyhow::Result;
use async_trait::async_trait;

/// Hosted text-completion capability: one prompt in, free text out.
///
/// Output carries no schema guarantee and may be wrapped in code fences;
/// callers treat it as untrusted.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate_text(&self, prompt: &str) -> Result<String>;

    /// Short provider label for logs.
    fn name(&self) -> &str;
}
