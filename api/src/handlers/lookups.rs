//! Form handlers
//!
//! One endpoint per lookup, taking explicit parameters. Parameters arrive as
//! raw strings and are validated by the query constructors, so a malformed
//! number produces the invalid-format message rather than a rejection.

use axum::{
    extract::{Path, Query, State},
    http::HeaderMap,
    response::Response,
};
use serde::Deserialize;

use super::respond;
use crate::app::Query as Lookup;
use crate::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct BudgetParams {
    #[serde(default)]
    pub q: String,
    #[serde(default)]
    pub low: String,
    #[serde(default)]
    pub high: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct OrderStatusParams {
    #[serde(default)]
    pub customer_id: String,
    pub product: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct NameParams {
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct StateParams {
    #[serde(default)]
    pub state: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct CityParams {
    #[serde(default)]
    pub city: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct ThresholdParams {
    pub threshold: Option<String>,
}

/// GET /products?q=
pub async fn find_products(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<SearchParams>,
) -> Response {
    respond(&headers, state.assistant.submit(Lookup::find_product(&params.q)))
}

/// GET /products/availability?q=
pub async fn product_availability(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<SearchParams>,
) -> Response {
    respond(
        &headers,
        state.assistant.submit(Lookup::check_availability(&params.q)),
    )
}

/// GET /products/budget?q=&low=&high=
pub async fn budget(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<BudgetParams>,
) -> Response {
    let query = Lookup::filter_by_budget(&params.q, &params.low, &params.high);
    respond(&headers, state.assistant.submit(query))
}

/// GET /orders/:id
pub async fn track_order(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Response {
    respond(&headers, state.assistant.submit(Lookup::track_order(&id)))
}

/// GET /orders/status?customer_id=&product=
pub async fn customer_order_status(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<OrderStatusParams>,
) -> Response {
    let query = Lookup::customer_order_status(&params.customer_id, params.product.as_deref());
    respond(&headers, state.assistant.submit(query))
}

/// GET /customers/:id/promotions
pub async fn promotions(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Response {
    respond(&headers, state.assistant.submit(Lookup::promotions(&id)))
}

/// GET /customers/last-order?name=
pub async fn last_order(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<NameParams>,
) -> Response {
    respond(
        &headers,
        state.assistant.submit(Lookup::last_order_date(&params.name)),
    )
}

/// GET /stores/count?state=
pub async fn count_stores(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<StateParams>,
) -> Response {
    respond(
        &headers,
        state.assistant.submit(Lookup::count_stores(&params.state)),
    )
}

/// GET /stores/branches?city=
pub async fn branches(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<CityParams>,
) -> Response {
    respond(
        &headers,
        state.assistant.submit(Lookup::branch_availability(&params.city)),
    )
}

/// GET /inventory/low-stock?threshold=
pub async fn low_stock(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<ThresholdParams>,
) -> Response {
    respond(
        &headers,
        state
            .assistant
            .submit(Lookup::low_stock(params.threshold.as_deref())),
    )
}
