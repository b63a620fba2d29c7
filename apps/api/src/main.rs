mod config;
mod errors;
mod generators;
mod llm_client;
mod models;
mod outline;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::generators::{LlmOutlineGenerator, OutlineGenerator, TemplateOutlineGenerator};
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(format!("outline_api={}", &config.rust_log))),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Outline API v{}", env!("CARGO_PKG_VERSION"));

    // Pick the generation backend once, from config — never from ambient env
    let generator: Arc<dyn OutlineGenerator> = match &config.anthropic_api_key {
        Some(key) => {
            info!("Generation backend: Anthropic (model: {})", llm_client::MODEL);
            Arc::new(LlmOutlineGenerator::new(LlmClient::new(key.clone())))
        }
        None => {
            info!("Generation backend: template (ANTHROPIC_API_KEY not set)");
            Arc::new(TemplateOutlineGenerator)
        }
    };

    if let Some(dir) = &config.output_dir {
        info!("Result files will be written to {}", dir.display());
    }

    let state = AppState {
        generator,
        config: config.clone(),
    };

    // The content tool calls this API from the browser; CORS stays open
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
