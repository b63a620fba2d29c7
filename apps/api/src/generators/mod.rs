//! Generation backends — pluggable, trait-based text generation.
//!
//! Default when an API key is configured: `LlmOutlineGenerator` (Anthropic).
//! Fallback (and test double): `TemplateOutlineGenerator`, the deterministic
//! sample outline the upstream static handler served.
//!
//! `AppState` holds an `Arc<dyn OutlineGenerator>`, picked once at startup.

use async_trait::async_trait;

use crate::errors::AppError;
use crate::llm_client::LlmClient;
use crate::models::request::OutlineRequest;
use crate::outline::prompts::OUTLINE_SYSTEM;

pub mod template;

pub use template::TemplateOutlineGenerator;

/// The generation backend trait. Implement this to swap providers without
/// touching the pipeline or handlers.
#[async_trait]
pub trait OutlineGenerator: Send + Sync {
    /// Produces raw outline text (Markdown, ending in an SEO Analysis
    /// section) for the assembled prompt. The request is available for
    /// backends that template on its fields instead of using the prompt.
    async fn generate(&self, prompt: &str, request: &OutlineRequest) -> Result<String, AppError>;
}

/// Anthropic-backed generator.
pub struct LlmOutlineGenerator {
    llm: LlmClient,
}

impl LlmOutlineGenerator {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl OutlineGenerator for LlmOutlineGenerator {
    async fn generate(&self, prompt: &str, _request: &OutlineRequest) -> Result<String, AppError> {
        self.llm
            .generate(prompt, OUTLINE_SYSTEM)
            .await
            .map_err(|e| AppError::Generation(format!("Outline LLM call failed: {e}")))
    }
}
