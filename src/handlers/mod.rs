pub mod analyzer;
pub mod api;

use axum::response::Redirect;
use axum::routing::{get, post};
use axum::Router;

use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        // Pages
        .route("/", get(home))
        .route("/analyzer", get(analyzer::index))
        .route("/analyzer", post(analyzer::submit))
        // API (JSON for charts)
        .route("/api/analyzer/state", get(api::analyzer_state))
        .route("/api/analyzer/submit", post(api::analyzer_submit))
        .route("/api/analyzer/reset", post(api::analyzer_reset))
        // Health check
        .route("/health", get(health))
}

async fn home() -> Redirect {
    Redirect::to("/analyzer")
}

async fn health() -> &'static str {
    "OK"
}
