use super::RouteInfo;
use crate::error::ApiError;
use crate::extract::{ValidJson, ValidPath, ValidQuery};
use crate::state::AppState;
use axum::extract::State;
use axum::response::Response;
use axum::routing::{get, post};
use axum::Router;
use ibgate_core::requests::portfolio::{AccountAllocationRequest, PositionsQuery};
use ibgate_core::PathSegment;
use ibgate_forwarder::{CallTimeout, OutboundRequest};
use std::sync::Arc;

pub const ROUTES: &[RouteInfo] = &[
    RouteInfo::new("GET", "/portfolio/accounts", "Portfolio Accounts"),
    RouteInfo::new("GET", "/portfolio/subaccounts", "Sub-Accounts"),
    RouteInfo::new("GET", "/portfolio/subaccounts2", "Sub-Accounts (large)"),
    RouteInfo::new("GET", "/portfolio/{accountId}/meta", "Account Metadata"),
    RouteInfo::new("GET", "/portfolio/{accountId}/allocation", "Account Allocation"),
    RouteInfo::new("GET", "/portfolio/{accountId}/combo/positions", "Combo Positions"),
    RouteInfo::new("POST", "/portfolio/allocation", "Allocation for Accounts"),
    RouteInfo::new("GET", "/portfolio/{accountId}/positions/{pageId}", "Positions Page"),
    RouteInfo::new("GET", "/portfolio/{accountId}/position/{conid}", "Position by Conid"),
    RouteInfo::new("POST", "/portfolio/{accountId}/positions/invalidate", "Invalidate Positions Cache"),
    RouteInfo::new("GET", "/portfolio/{accountId}/summary", "Account Summary"),
    RouteInfo::new("GET", "/portfolio/{accountId}/ledger", "Account Ledger"),
    RouteInfo::new("GET", "/portfolio/positions/{conid}", "Positions by Conid"),
];

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/portfolio/accounts", get(accounts))
        .route("/portfolio/subaccounts", get(subaccounts))
        .route("/portfolio/subaccounts2", get(subaccounts_large))
        .route("/portfolio/{accountId}/meta", get(account_meta))
        .route("/portfolio/{accountId}/allocation", get(account_allocation))
        .route("/portfolio/{accountId}/combo/positions", get(combo_positions))
        .route("/portfolio/allocation", post(allocation_for_accounts))
        .route("/portfolio/{accountId}/positions/{pageId}", get(positions_page))
        .route("/portfolio/{accountId}/position/{conid}", get(position_by_conid))
        .route(
            "/portfolio/{accountId}/positions/invalidate",
            post(invalidate_positions),
        )
        .route("/portfolio/{accountId}/summary", get(account_summary))
        .route("/portfolio/{accountId}/ledger", get(account_ledger))
        .route("/portfolio/positions/{conid}", get(positions_by_conid))
}

async fn accounts(State(state): State<Arc<AppState>>) -> Response {
    state.relay(OutboundRequest::get("/portfolio/accounts")).await
}

async fn subaccounts(State(state): State<Arc<AppState>>) -> Response {
    state.relay(OutboundRequest::get("/portfolio/subaccounts")).await
}

async fn subaccounts_large(State(state): State<Arc<AppState>>) -> Response {
    state
        .relay(OutboundRequest::get("/portfolio/subaccounts2").timeout(CallTimeout::Long))
        .await
}

async fn account_meta(
    State(state): State<Arc<AppState>>,
    ValidPath(account_id): ValidPath<PathSegment>,
) -> Response {
    state
        .relay(OutboundRequest::get(format!("/portfolio/{}/meta", account_id)))
        .await
}

async fn account_allocation(
    State(state): State<Arc<AppState>>,
    ValidPath(account_id): ValidPath<PathSegment>,
) -> Response {
    state
        .relay(OutboundRequest::get(format!("/portfolio/{}/allocation", account_id)))
        .await
}

async fn combo_positions(
    State(state): State<Arc<AppState>>,
    ValidPath(account_id): ValidPath<PathSegment>,
) -> Response {
    state
        .relay(OutboundRequest::get(format!("/portfolio/{}/combo/positions", account_id)))
        .await
}

async fn allocation_for_accounts(
    State(state): State<Arc<AppState>>,
    ValidJson(body): ValidJson<AccountAllocationRequest>,
) -> Result<Response, ApiError> {
    let request = OutboundRequest::post("/portfolio/allocation")
        .json(&body)?
        .timeout(CallTimeout::Extended);
    Ok(state.relay(request).await)
}

async fn positions_page(
    State(state): State<Arc<AppState>>,
    ValidPath((account_id, page_id)): ValidPath<(PathSegment, i64)>,
    ValidQuery(q): ValidQuery<PositionsQuery>,
) -> Response {
    state
        .relay(
            OutboundRequest::get(format!("/portfolio/{}/positions/{}", account_id, page_id))
                .query(q.to_params()),
        )
        .await
}

async fn position_by_conid(
    State(state): State<Arc<AppState>>,
    ValidPath((account_id, conid)): ValidPath<(PathSegment, i64)>,
) -> Response {
    state
        .relay(OutboundRequest::get(format!("/portfolio/{}/position/{}", account_id, conid)))
        .await
}

async fn invalidate_positions(
    State(state): State<Arc<AppState>>,
    ValidPath(account_id): ValidPath<PathSegment>,
) -> Response {
    state
        .relay(OutboundRequest::post(format!(
            "/portfolio/{}/positions/invalidate",
            account_id
        )))
        .await
}

async fn account_summary(
    State(state): State<Arc<AppState>>,
    ValidPath(account_id): ValidPath<PathSegment>,
) -> Response {
    state
        .relay(OutboundRequest::get(format!("/portfolio/{}/summary", account_id)))
        .await
}

async fn account_ledger(
    State(state): State<Arc<AppState>>,
    ValidPath(account_id): ValidPath<PathSegment>,
) -> Response {
    state
        .relay(OutboundRequest::get(format!("/portfolio/{}/ledger", account_id)))
        .await
}

async fn positions_by_conid(
    State(state): State<Arc<AppState>>,
    ValidPath(conid): ValidPath<i64>,
) -> Response {
    state
        .relay(OutboundRequest::get(format!("/portfolio/positions/{}", conid)))
        .await
}
