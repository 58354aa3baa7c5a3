//! Dataset handlers
//!
//! Load report and the JSON export of the raw tables.

use axum::{
    extract::State,
    http::{header, HeaderMap},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use super::wants_json;
use crate::adapters::export_document;
use crate::app::DatasetReport;
use crate::domain::StoreCounts;
use crate::error::AppError;
use crate::render::render_load_report;
use crate::AppState;

#[derive(Serialize)]
pub struct DatasetsResponse<'a> {
    pub datasets: &'a [DatasetReport],
    pub counts: StoreCounts,
}

/// GET /datasets
pub async fn get_datasets(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let report = &state.data.report;
    let counts = state.assistant.store().counts();

    if wants_json(&headers) {
        Json(DatasetsResponse {
            datasets: report,
            counts,
        })
        .into_response()
    } else {
        (
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            render_load_report(report, &counts),
        )
            .into_response()
    }
}

/// GET /export
///
/// The same document the file export writes.
pub async fn get_export(State(state): State<AppState>) -> Result<Response, AppError> {
    let document = export_document(&state.data.tables)?;
    Ok((
        [(header::CONTENT_TYPE, "application/json")],
        document,
    )
        .into_response())
}
