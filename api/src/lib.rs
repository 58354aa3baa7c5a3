//! RetailX assistant
//!
//! Answers free-text retail questions (products, stock, orders, promotions,
//! stores) over four spreadsheet datasets loaded once per session.
//! Uses hexagonal (ports & adapters) architecture: the dataset loader sits
//! behind a port, lookups are pure functions over an immutable data store.

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod adapters;
pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod handlers;
pub mod render;

#[cfg(test)]
mod test_utils;


use app::{AssistantService, LoadedData};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub assistant: Arc<AssistantService>,
    pub data: Arc<LoadedData>,
}

impl AppState {
    pub fn new(assistant: AssistantService, data: LoadedData) -> Self {
        Self {
            assistant: Arc::new(assistant),
            data: Arc::new(data),
        }
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Build the HTTP router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/help", get(handlers::get_help))
        // Chat
        .route("/chat", post(handlers::post_chat))
        // Forms
        .route("/products", get(handlers::find_products))
        .route("/products/availability", get(handlers::product_availability))
        .route("/products/budget", get(handlers::budget))
        .route("/orders/status", get(handlers::customer_order_status))
        .route("/orders/:id", get(handlers::track_order))
        .route("/customers/last-order", get(handlers::last_order))
        .route("/customers/:id/promotions", get(handlers::promotions))
        .route("/stores/count", get(handlers::count_stores))
        .route("/stores/branches", get(handlers::branches))
        .route("/inventory/low-stock", get(handlers::low_stock))
        // Datasets
        .route("/datasets", get(handlers::get_datasets))
        .route("/export", get(handlers::get_export))
        // Middleware
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
