use std::sync::Arc;

use crate::config::Config;
use crate::generators::OutlineGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable generation backend. LLM when an API key is configured,
    /// otherwise the deterministic template generator.
    pub generator: Arc<dyn OutlineGenerator>,
    pub config: Config,
}
