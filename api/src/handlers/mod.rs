//! HTTP handlers
//!
//! Axum request handlers for the chat and form endpoints.
//! Supports content negotiation: Accept: application/json for JSON, otherwise text/plain.

use axum::{
    http::{header, HeaderMap},
    response::{IntoResponse, Response},
    Json,
};

use crate::app;
use crate::render::render_response;

pub mod chat;
pub mod datasets;
pub mod lookups;

pub use chat::{get_help, post_chat};
pub use datasets::{get_datasets, get_export};
pub use lookups::{
    branches, budget, count_stores, customer_order_status, find_products, last_order,
    low_stock, product_availability, promotions, track_order,
};

/// Check if the client wants JSON response
fn wants_json(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.contains("application/json"))
        .unwrap_or(false)
}

/// Formatted response as JSON or rendered text
fn respond(headers: &HeaderMap, response: app::Response) -> Response {
    if wants_json(headers) {
        Json(response).into_response()
    } else {
        (
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            render_response(&response),
        )
            .into_response()
    }
}
