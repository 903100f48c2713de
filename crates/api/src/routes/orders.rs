use super::RouteInfo;
use crate::error::ApiError;
use crate::extract::{ValidJson, ValidPath};
use crate::state::AppState;
use axum::extract::State;
use axum::response::Response;
use axum::routing::post;
use axum::Router;
use ibgate_core::requests::orders::{Order, OrdersRequest, ReplyRequest};
use ibgate_core::PathSegment;
use ibgate_forwarder::OutboundRequest;
use std::sync::Arc;

pub const ROUTES: &[RouteInfo] = &[
    RouteInfo::new("POST", "/iserver/account/{accountId}/orders", "Place Orders"),
    RouteInfo::new("POST", "/iserver/account/{accountId}/orders/whatif", "Preview Orders"),
    RouteInfo::new("POST", "/iserver/account/{accountId}/order/{orderId}", "Modify Order"),
    RouteInfo::new("DELETE", "/iserver/account/{accountId}/order/{orderId}", "Cancel Order"),
    RouteInfo::new("POST", "/iserver/reply/{replyId}", "Reply to Order Message"),
];

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/iserver/account/{accountId}/orders", post(place_orders))
        .route("/iserver/account/{accountId}/orders/whatif", post(preview_orders))
        .route(
            "/iserver/account/{accountId}/order/{orderId}",
            post(modify_order).delete(cancel_order),
        )
        .route("/iserver/reply/{replyId}", post(reply))
}

async fn place_orders(
    State(state): State<Arc<AppState>>,
    ValidPath(account_id): ValidPath<PathSegment>,
    ValidJson(body): ValidJson<OrdersRequest>,
) -> Result<Response, ApiError> {
    let request =
        OutboundRequest::post(format!("/iserver/account/{}/orders", account_id)).json(&body)?;
    Ok(state.relay(request).await)
}

async fn preview_orders(
    State(state): State<Arc<AppState>>,
    ValidPath(account_id): ValidPath<PathSegment>,
    ValidJson(body): ValidJson<OrdersRequest>,
) -> Result<Response, ApiError> {
    let request = OutboundRequest::post(format!("/iserver/account/{}/orders/whatif", account_id))
        .json(&body)?;
    Ok(state.relay(request).await)
}

async fn modify_order(
    State(state): State<Arc<AppState>>,
    ValidPath((account_id, order_id)): ValidPath<(PathSegment, PathSegment)>,
    ValidJson(order): ValidJson<Order>,
) -> Result<Response, ApiError> {
    let request = OutboundRequest::post(format!(
        "/iserver/account/{}/order/{}",
        account_id, order_id
    ))
    .json(&order)?;
    Ok(state.relay(request).await)
}

async fn cancel_order(
    State(state): State<Arc<AppState>>,
    ValidPath((account_id, order_id)): ValidPath<(PathSegment, PathSegment)>,
) -> Response {
    state
        .relay(OutboundRequest::delete(format!(
            "/iserver/account/{}/order/{}",
            account_id, order_id
        )))
        .await
}

async fn reply(
    State(state): State<Arc<AppState>>,
    ValidPath(reply_id): ValidPath<PathSegment>,
    ValidJson(body): ValidJson<ReplyRequest>,
) -> Result<Response, ApiError> {
    let request = OutboundRequest::post(format!("/iserver/reply/{}", reply_id)).json(&body)?;
    Ok(state.relay(request).await)
}
