use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration loaded once at startup and injected everywhere.
/// Core pipeline code never reads the environment directly.
#[derive(Debug, Clone)]
pub struct Config {
    /// When absent the service falls back to the template generator.
    pub anthropic_api_key: Option<String>,
    /// When set, each completed result is also written here as `<eventId>.json`.
    pub output_dir: Option<PathBuf>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            anthropic_api_key: optional_env("ANTHROPIC_API_KEY"),
            output_dir: optional_env("OUTLINE_OUTPUT_DIR").map(PathBuf::from),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// Reads an env var, treating unset and blank identically.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
