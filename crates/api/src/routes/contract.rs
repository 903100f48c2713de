use super::RouteInfo;
use crate::error::ApiError;
use crate::extract::{ValidJson, ValidPath, ValidQuery};
use crate::state::AppState;
use axum::extract::State;
use axum::response::Response;
use axum::routing::{get, post};
use axum::Router;
use ibgate_core::requests::contract::*;
use ibgate_forwarder::OutboundRequest;
use std::sync::Arc;

pub const ROUTES: &[RouteInfo] = &[
    RouteInfo::new("GET", "/iserver/contract/{conid}/algos", "Get IB Algos"),
    RouteInfo::new("GET", "/iserver/contract/{conid}/info-and-rules", "Get Contract Info and Rules"),
    RouteInfo::new("GET", "/iserver/contract/{conid}/info", "Contract Information"),
    RouteInfo::new("POST", "/iserver/contract/rules", "Contract Rules"),
    RouteInfo::new("GET", "/iserver/secdef/bond-filters", "Get Bond Filters"),
    RouteInfo::new("GET", "/iserver/secdef/currency", "Search Currency Pairs"),
    RouteInfo::new("GET", "/iserver/secdef/info", "Secdef Info"),
    RouteInfo::new("GET", "/iserver/secdef/search", "Search by Symbol or Name"),
    RouteInfo::new("GET", "/iserver/secdef/strikes", "Option Strikes"),
    RouteInfo::new("GET", "/trsrv/futures", "Futures Details by Symbol"),
    RouteInfo::new("GET", "/trsrv/secdef", "Security Definitions by Conid"),
    RouteInfo::new("GET", "/trsrv/stocks", "Stocks by Symbol"),
    RouteInfo::new("GET", "/trsrv/secdef/schedule", "Trading Schedule"),
];

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/iserver/contract/{conid}/algos", get(get_contract_algos))
        .route("/iserver/contract/{conid}/info-and-rules", get(get_contract_info_and_rules))
        .route("/iserver/contract/{conid}/info", get(get_contract_info))
        .route("/iserver/contract/rules", post(get_contract_rules))
        .route("/iserver/secdef/bond-filters", get(get_bond_filters))
        .route("/iserver/secdef/currency", get(search_currency_pairs))
        .route("/iserver/secdef/info", get(get_secdef_info))
        .route("/iserver/secdef/search", get(search_contracts))
        .route("/iserver/secdef/strikes", get(get_strikes))
        .route("/trsrv/futures", get(get_futures_by_symbol))
        .route("/trsrv/secdef", get(get_secdef_by_conids))
        .route("/trsrv/stocks", get(get_stocks_by_symbol))
        .route("/trsrv/secdef/schedule", get(get_trading_schedule))
}

async fn get_contract_algos(
    State(state): State<Arc<AppState>>,
    ValidPath(conid): ValidPath<i64>,
    ValidQuery(q): ValidQuery<AlgosQuery>,
) -> Response {
    state
        .relay(OutboundRequest::get(format!("/iserver/contract/{}/algos", conid)).query(q.to_params()))
        .await
}

async fn get_contract_info_and_rules(
    State(state): State<Arc<AppState>>,
    ValidPath(conid): ValidPath<i64>,
    ValidQuery(q): ValidQuery<InfoAndRulesQuery>,
) -> Response {
    state
        .relay(
            OutboundRequest::get(format!("/iserver/contract/{}/info-and-rules", conid))
                .query(q.to_params()),
        )
        .await
}

async fn get_contract_info(
    State(state): State<Arc<AppState>>,
    ValidPath(conid): ValidPath<i64>,
) -> Response {
    state
        .relay(OutboundRequest::get(format!("/iserver/contract/{}/info", conid)))
        .await
}

async fn get_contract_rules(
    State(state): State<Arc<AppState>>,
    ValidJson(body): ValidJson<ContractRulesRequest>,
) -> Result<Response, ApiError> {
    let request = OutboundRequest::post("/iserver/contract/rules").json(&body)?;
    Ok(state.relay(request).await)
}

async fn get_bond_filters(
    State(state): State<Arc<AppState>>,
    ValidQuery(q): ValidQuery<BondFiltersQuery>,
) -> Response {
    state
        .relay(OutboundRequest::get("/iserver/secdef/bond-filters").query(q.to_params()))
        .await
}

async fn search_currency_pairs(
    State(state): State<Arc<AppState>>,
    ValidQuery(q): ValidQuery<CurrencyQuery>,
) -> Response {
    state
        .relay(OutboundRequest::get("/iserver/secdef/currency").query(q.to_params()))
        .await
}

async fn get_secdef_info(
    State(state): State<Arc<AppState>>,
    ValidQuery(q): ValidQuery<SecdefInfoQuery>,
) -> Response {
    state
        .relay(OutboundRequest::get("/iserver/secdef/info").query(q.to_params()))
        .await
}

async fn search_contracts(
    State(state): State<Arc<AppState>>,
    ValidQuery(q): ValidQuery<SecdefSearchQuery>,
) -> Response {
    state
        .relay(OutboundRequest::get("/iserver/secdef/search").query(q.to_params()))
        .await
}

async fn get_strikes(
    State(state): State<Arc<AppState>>,
    ValidQuery(q): ValidQuery<StrikesQuery>,
) -> Response {
    state
        .relay(OutboundRequest::get("/iserver/secdef/strikes").query(q.to_params()))
        .await
}

async fn get_futures_by_symbol(
    State(state): State<Arc<AppState>>,
    ValidQuery(q): ValidQuery<SymbolsQuery>,
) -> Response {
    state
        .relay(OutboundRequest::get("/trsrv/futures").query(q.to_params()))
        .await
}

async fn get_secdef_by_conids(
    State(state): State<Arc<AppState>>,
    ValidQuery(q): ValidQuery<ConidsQuery>,
) -> Response {
    state
        .relay(OutboundRequest::get("/trsrv/secdef").query(q.to_params()))
        .await
}

async fn get_stocks_by_symbol(
    State(state): State<Arc<AppState>>,
    ValidQuery(q): ValidQuery<SymbolsQuery>,
) -> Response {
    state
        .relay(OutboundRequest::get("/trsrv/stocks").query(q.to_params()))
        .await
}

async fn get_trading_schedule(
    State(state): State<Arc<AppState>>,
    ValidQuery(q): ValidQuery<ScheduleQuery>,
) -> Response {
    state
        .relay(OutboundRequest::get("/trsrv/secdef/schedule").query(q.to_params()))
        .await
}
