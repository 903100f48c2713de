use super::RouteInfo;
use crate::error::ApiError;
use crate::extract::{ValidJson, ValidQuery};
use crate::state::AppState;
use axum::extract::State;
use axum::response::Response;
use axum::routing::{get, post};
use axum::{Json, Router};
use ibgate_core::reference::{
    market_data_availability, AvailabilityTable, HmdsHistoryRules, IserverHistoryRules,
    MarketDataField, HMDS_HISTORY_RULES, ISERVER_HISTORY_RULES, MARKET_DATA_FIELDS,
};
use ibgate_core::requests::market_data::*;
use ibgate_forwarder::{CallTimeout, OutboundRequest};
use std::sync::Arc;

pub const ROUTES: &[RouteInfo] = &[
    RouteInfo::new("GET", "/iserver/marketdata/fields", "Market Data Field Codes"),
    RouteInfo::new("GET", "/iserver/marketdata/availability", "Market Data Availability Codes"),
    RouteInfo::new("GET", "/hmds/history/rules", "HMDS History Rules"),
    RouteInfo::new("GET", "/iserver/marketdata/history/rules", "Market Data History Rules"),
    RouteInfo::new("GET", "/iserver/marketdata/snapshot", "Market Data Snapshot"),
    RouteInfo::new("GET", "/md/snapshot", "Regulatory Snapshot"),
    RouteInfo::new("GET", "/iserver/marketdata/history", "Market Data History"),
    RouteInfo::new("GET", "/hmds/history", "HMDS Market Data History"),
    RouteInfo::new("POST", "/iserver/marketdata/unsubscribe", "Unsubscribe Instrument"),
    RouteInfo::new("POST", "/iserver/marketdata/unsubscribeall", "Unsubscribe All"),
];

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/iserver/marketdata/fields", get(fields))
        .route("/iserver/marketdata/availability", get(availability))
        .route("/hmds/history/rules", get(hmds_history_rules))
        .route("/iserver/marketdata/history/rules", get(iserver_history_rules))
        .route("/iserver/marketdata/snapshot", get(snapshot))
        .route("/md/snapshot", get(md_snapshot))
        .route("/iserver/marketdata/history", get(history))
        .route("/hmds/history", get(hmds_history))
        .route("/iserver/marketdata/unsubscribe", post(unsubscribe))
        .route("/iserver/marketdata/unsubscribeall", post(unsubscribe_all))
}

// Static tables, served without an upstream call.

async fn fields() -> Json<&'static [MarketDataField]> {
    Json(MARKET_DATA_FIELDS)
}

async fn availability() -> Json<AvailabilityTable> {
    Json(market_data_availability())
}

async fn hmds_history_rules() -> Json<HmdsHistoryRules> {
    Json(HMDS_HISTORY_RULES)
}

async fn iserver_history_rules() -> Json<IserverHistoryRules> {
    Json(ISERVER_HISTORY_RULES)
}

/// The upstream answers the first snapshot request for a contract with an
/// empty payload while it opens the subscription, so the call is made twice.
async fn snapshot(
    State(state): State<Arc<AppState>>,
    ValidQuery(q): ValidQuery<SnapshotQuery>,
) -> Response {
    state
        .relay_warmed(OutboundRequest::get("/iserver/marketdata/snapshot").query(q.to_params()))
        .await
}

async fn md_snapshot(
    State(state): State<Arc<AppState>>,
    ValidQuery(q): ValidQuery<MdSnapshotQuery>,
) -> Response {
    state
        .relay(OutboundRequest::get("/md/snapshot").query(q.to_params()))
        .await
}

async fn history(
    State(state): State<Arc<AppState>>,
    ValidQuery(q): ValidQuery<HistoryQuery>,
) -> Response {
    state
        .relay(
            OutboundRequest::get("/iserver/marketdata/history")
                .query(q.to_params())
                .timeout(CallTimeout::Extended),
        )
        .await
}

async fn hmds_history(
    State(state): State<Arc<AppState>>,
    ValidQuery(q): ValidQuery<HmdsHistoryQuery>,
) -> Response {
    let history = OutboundRequest::get("/hmds/history")
        .query(q.to_params())
        .timeout(CallTimeout::Long);
    state
        .relay_after_init(OutboundRequest::get("/hmds/auth/init"), history)
        .await
}

async fn unsubscribe(
    State(state): State<Arc<AppState>>,
    ValidJson(body): ValidJson<UnsubscribeRequest>,
) -> Result<Response, ApiError> {
    let request = OutboundRequest::post("/iserver/marketdata/unsubscribe").json(&body)?;
    Ok(state.relay(request).await)
}

async fn unsubscribe_all(State(state): State<Arc<AppState>>) -> Response {
    state
        .relay(OutboundRequest::post("/iserver/marketdata/unsubscribeall"))
        .await
}
