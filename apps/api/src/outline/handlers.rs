//! Axum route handlers for the Outline API.

use std::path::Path;

use anyhow::Context;
use axum::extract::rejection::JsonRejection;
use axum::{extract::State, Json};
use serde_json::{json, Value};
use tracing::info;

use crate::errors::AppError;
use crate::models::request::OutlineRequest;
use crate::models::result::OutlineResult;
use crate::outline::pipeline::generate_outline;
use crate::state::AppState;

/// POST /api/outline
///
/// Validates the request, runs the generation pipeline and returns the
/// completed result. When a results directory is configured the result is
/// also written there as `<eventId>.json`.
pub async fn handle_generate_outline(
    State(state): State<AppState>,
    payload: Result<Json<OutlineRequest>, JsonRejection>,
) -> Result<Json<OutlineResult>, AppError> {
    let Json(request) = payload.map_err(|rejection| AppError::Serialization(rejection.body_text()))?;
    request.validate()?;

    info!("Processing outline request {}", request.event_id);
    let result = generate_outline(state.generator.as_ref(), &request).await?;

    if let Some(dir) = &state.config.output_dir {
        write_result_file(dir, &result).await?;
    }

    Ok(Json(result))
}

/// GET /api/outline
///
/// Liveness message for the content tool's parameterless probe.
pub async fn handle_outline_status() -> Json<Value> {
    Json(json!({
        "status": "success",
        "message": "Outline API is running. Send a POST request with your outline parameters."
    }))
}

async fn write_result_file(dir: &Path, result: &OutlineResult) -> Result<(), AppError> {
    let path = dir.join(format!("{}.json", result.event_id));
    let body = serde_json::to_string_pretty(result)
        .context("Failed to serialize outline result")
        .map_err(AppError::Internal)?;

    tokio::fs::create_dir_all(dir)
        .await
        .with_context(|| format!("Failed to create results directory {}", dir.display()))?;
    tokio::fs::write(&path, body)
        .await
        .with_context(|| format!("Failed to write result file {}", path.display()))?;

    info!("Wrote result file {}", path.display());
    Ok(())
}
