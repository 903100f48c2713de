mod contract;
mod fa;
mod fyi;
mod market_data;
mod orders;
mod portfolio;
mod watchlists;

use crate::state::AppState;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use std::sync::Arc;

pub fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        // Health
        .route("/health", get(health_check))
        .merge(contract::routes())
        .merge(fa::routes())
        .merge(fyi::routes())
        .merge(market_data::routes())
        .merge(orders::routes())
        .merge(portfolio::routes())
        .merge(watchlists::routes())
}

// ---------------------------------------------------------------------------
// Inventory
// ---------------------------------------------------------------------------

/// One exposed route, as listed by `ibgate routes`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RouteInfo {
    pub method: &'static str,
    pub path: &'static str,
    pub domain: &'static str,
    pub summary: &'static str,
}

impl RouteInfo {
    const fn new(method: &'static str, path: &'static str, summary: &'static str) -> Self {
        Self {
            method,
            path,
            domain: "",
            summary,
        }
    }
}

const DOMAINS: &[(&str, &[RouteInfo])] = &[
    ("gateway", &[RouteInfo::new("GET", "/health", "Gateway Health")]),
    ("contract", contract::ROUTES),
    ("fa", fa::ROUTES),
    ("fyi", fyi::ROUTES),
    ("market_data", market_data::ROUTES),
    ("orders", orders::ROUTES),
    ("portfolio", portfolio::ROUTES),
    ("watchlists", watchlists::ROUTES),
];

/// Every route served by [`api_routes`], grouped by domain.
pub fn inventory() -> Vec<RouteInfo> {
    DOMAINS
        .iter()
        .flat_map(|&(domain, routes)| {
            routes.iter().map(move |route| RouteInfo { domain, ..*route })
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Health
// ---------------------------------------------------------------------------

async fn health_check(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "upstream": state.forwarder.base_url(),
        "started_at": state.started_at.to_rfc3339(),
    }))
}
