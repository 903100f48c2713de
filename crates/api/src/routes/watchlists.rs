use super::RouteInfo;
use crate::error::ApiError;
use crate::extract::{ValidJson, ValidPath};
use crate::state::AppState;
use axum::extract::State;
use axum::response::Response;
use axum::routing::{delete, get, post};
use axum::Router;
use ibgate_core::requests::watchlists::{WatchlistContractsRequest, WatchlistCreateRequest};
use ibgate_core::PathSegment;
use ibgate_forwarder::OutboundRequest;
use std::sync::Arc;

pub const ROUTES: &[RouteInfo] = &[
    RouteInfo::new("GET", "/iserver/account/watchlists", "List Watchlists"),
    RouteInfo::new("GET", "/iserver/account/watchlist/{watchlistId}", "Get Watchlist"),
    RouteInfo::new("POST", "/iserver/account/{accountId}/watchlist", "Create Watchlist"),
    RouteInfo::new("POST", "/iserver/account/watchlist/{watchlistId}/contract", "Add Contracts"),
    RouteInfo::new("DELETE", "/iserver/account/watchlist/{watchlistId}", "Delete Watchlist"),
    RouteInfo::new(
        "DELETE",
        "/iserver/account/watchlist/{watchlistId}/contract/{conid}",
        "Remove Contract",
    ),
];

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/iserver/account/watchlists", get(list_watchlists))
        .route(
            "/iserver/account/watchlist/{watchlistId}",
            get(get_watchlist).delete(delete_watchlist),
        )
        .route("/iserver/account/{accountId}/watchlist", post(create_watchlist))
        .route(
            "/iserver/account/watchlist/{watchlistId}/contract",
            post(add_contracts),
        )
        .route(
            "/iserver/account/watchlist/{watchlistId}/contract/{conid}",
            delete(remove_contract),
        )
}

async fn list_watchlists(State(state): State<Arc<AppState>>) -> Response {
    state.relay(OutboundRequest::get("/iserver/account/watchlists")).await
}

async fn get_watchlist(
    State(state): State<Arc<AppState>>,
    ValidPath(watchlist_id): ValidPath<PathSegment>,
) -> Response {
    state
        .relay(OutboundRequest::get(format!("/iserver/account/watchlist/{}", watchlist_id)))
        .await
}

async fn create_watchlist(
    State(state): State<Arc<AppState>>,
    ValidPath(account_id): ValidPath<PathSegment>,
    ValidJson(body): ValidJson<WatchlistCreateRequest>,
) -> Result<Response, ApiError> {
    let request = OutboundRequest::post(format!("/iserver/account/{}/watchlist", account_id))
        .json(&body)?;
    Ok(state.relay(request).await)
}

async fn add_contracts(
    State(state): State<Arc<AppState>>,
    ValidPath(watchlist_id): ValidPath<PathSegment>,
    ValidJson(body): ValidJson<WatchlistContractsRequest>,
) -> Result<Response, ApiError> {
    let request = OutboundRequest::post(format!(
        "/iserver/account/watchlist/{}/contract",
        watchlist_id
    ))
    .json(&body)?;
    Ok(state.relay(request).await)
}

async fn delete_watchlist(
    State(state): State<Arc<AppState>>,
    ValidPath(watchlist_id): ValidPath<PathSegment>,
) -> Response {
    state
        .relay(OutboundRequest::delete(format!(
            "/iserver/account/watchlist/{}",
            watchlist_id
        )))
        .await
}

async fn remove_contract(
    State(state): State<Arc<AppState>>,
    ValidPath((watchlist_id, conid)): ValidPath<(PathSegment, PathSegment)>,
) -> Response {
    state
        .relay(OutboundRequest::delete(format!(
            "/iserver/account/watchlist/{}/contract/{}",
            watchlist_id, conid
        )))
        .await
}
