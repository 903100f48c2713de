//! HTTP surface of the ibgate gateway.
//!
//! Every route validates its inputs, describes the upstream call, and hands it
//! to the shared [`ibgate_forwarder::Forwarder`] held in [`state::AppState`].

pub mod error;
pub mod extract;
pub mod routes;
pub mod state;

use axum::Router;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub use routes::{inventory, RouteInfo};
pub use state::{AppState, ErrorStatusMode};

/// Build the Axum application router.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(routes::api_routes())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the API server.
pub async fn start_server(state: Arc<AppState>, bind_addr: &str) -> anyhow::Result<()> {
    let app = build_router(state);
    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    tracing::info!("gateway listening on {}", bind_addr);
    axum::serve(listener, app).await?;
    Ok(())
}
