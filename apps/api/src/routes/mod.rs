pub mod health;

use axum::{routing::get, Router};

use crate::outline::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/outline",
            get(handlers::handle_outline_status).post(handlers::handle_generate_outline),
        )
        .with_state(state)
}
