use super::RouteInfo;
use crate::error::ApiError;
use crate::extract::ValidJson;
use crate::state::AppState;
use axum::extract::State;
use axum::response::Response;
use axum::routing::get;
use axum::Router;
use ibgate_core::requests::fa::FaGroup;
use ibgate_forwarder::OutboundRequest;
use std::sync::Arc;

pub const ROUTES: &[RouteInfo] = &[
    RouteInfo::new("GET", "/fa/groups", "List FA Groups"),
    RouteInfo::new("POST", "/fa/groups", "Create FA Group"),
];

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/fa/groups", get(list_groups).post(create_group))
}

async fn list_groups(State(state): State<Arc<AppState>>) -> Response {
    state.relay(OutboundRequest::get("/fa/groups")).await
}

async fn create_group(
    State(state): State<Arc<AppState>>,
    ValidJson(group): ValidJson<FaGroup>,
) -> Result<Response, ApiError> {
    let request = OutboundRequest::post("/fa/groups").json(&group.into_upstream_body())?;
    Ok(state.relay(request).await)
}
