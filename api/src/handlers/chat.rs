//! Chat handlers
//!
//! Free-text utterances answered through the configured (or requested) front end.

use axum::{
    extract::State,
    http::{header, HeaderMap},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

use super::respond;
use crate::app::{help_text, FrontEnd};
use crate::AppState;

/// Request body for POST /chat
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    /// Overrides the server's front end for this message
    #[serde(default)]
    pub front_end: Option<FrontEnd>,
}

/// POST /chat
///
/// - Accept: application/json → `{kind, payload}`
/// - Otherwise → rendered text
pub async fn post_chat(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<ChatRequest>,
) -> Response {
    let front_end = body.front_end.unwrap_or(state.assistant.front_end());
    let response = state.assistant.answer_with(&body.message, front_end);
    respond(&headers, response)
}

/// GET /help
pub async fn get_help() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/markdown; charset=utf-8")],
        help_text(),
    )
}
