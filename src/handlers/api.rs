use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::Serialize;
use tower_cookies::Cookies;

use crate::models::RawInput;
use crate::session::{session_id, AnalyzerState};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct RejectedSubmission {
    pub error: String,
    /// The session's state, unchanged by the rejected submission.
    pub state: AnalyzerState,
}

pub async fn analyzer_state(
    State(state): State<AppState>,
    cookies: Cookies,
) -> Json<AnalyzerState> {
    let id = session_id(&cookies);
    Json(state.sessions.current(&id))
}

pub async fn analyzer_submit(
    State(state): State<AppState>,
    cookies: Cookies,
    Json(input): Json<RawInput>,
) -> Response {
    let id = session_id(&cookies);

    match state.sessions.submit(&id, &input, &state.config.analyzer) {
        Ok(analyzer) => Json(analyzer).into_response(),
        Err((e, prior)) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(RejectedSubmission {
                error: e.to_string(),
                state: prior,
            }),
        )
            .into_response(),
    }
}

pub async fn analyzer_reset(
    State(state): State<AppState>,
    cookies: Cookies,
) -> Json<AnalyzerState> {
    let id = session_id(&cookies);
    Json(state.sessions.reset(&id))
}
