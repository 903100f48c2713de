use super::RouteInfo;
use crate::error::ApiError;
use crate::extract::{ValidJson, ValidPath, ValidQuery};
use crate::state::AppState;
use axum::extract::State;
use axum::response::Response;
use axum::routing::{get, post, put};
use axum::Router;
use ibgate_core::requests::fyi::*;
use ibgate_core::PathSegment;
use ibgate_forwarder::OutboundRequest;
use std::sync::Arc;

pub const ROUTES: &[RouteInfo] = &[
    RouteInfo::new("GET", "/fyi/unreadnumber", "Unread Notification Count"),
    RouteInfo::new("GET", "/fyi/deliveryoptions", "Get Delivery Options"),
    RouteInfo::new("POST", "/fyi/deliveryoptions", "Toggle Email Delivery"),
    RouteInfo::new("PUT", "/fyi/deliveryoptions/device", "Toggle Device Delivery"),
    RouteInfo::new("POST", "/fyi/settings", "Get Notification Settings"),
    RouteInfo::new("PUT", "/fyi/settings/{typecode}", "Toggle Notification Type"),
    RouteInfo::new("GET", "/fyi/notifications", "List Notifications"),
    RouteInfo::new("DELETE", "/fyi/notifications", "Mark Notifications Read"),
];

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/fyi/unreadnumber", get(unread_count))
        .route(
            "/fyi/deliveryoptions",
            get(delivery_options).post(toggle_email_delivery),
        )
        .route("/fyi/deliveryoptions/device", put(toggle_device_delivery))
        .route("/fyi/settings", post(notification_settings))
        .route("/fyi/settings/{typecode}", put(toggle_notification_type))
        .route(
            "/fyi/notifications",
            get(list_notifications).delete(mark_notifications_read),
        )
}

async fn unread_count(State(state): State<Arc<AppState>>) -> Response {
    state.relay(OutboundRequest::get("/fyi/unreadnumber")).await
}

async fn delivery_options(State(state): State<Arc<AppState>>) -> Response {
    state.relay(OutboundRequest::get("/fyi/deliveryoptions")).await
}

async fn toggle_email_delivery(
    State(state): State<Arc<AppState>>,
    ValidJson(body): ValidJson<EnabledRequest>,
) -> Result<Response, ApiError> {
    let request = OutboundRequest::post("/fyi/deliveryoptions").json(&body)?;
    Ok(state.relay(request).await)
}

async fn toggle_device_delivery(
    State(state): State<Arc<AppState>>,
    ValidJson(body): ValidJson<DeviceDeliveryRequest>,
) -> Result<Response, ApiError> {
    let request = OutboundRequest::put("/fyi/deliveryoptions/device").json(&body)?;
    Ok(state.relay(request).await)
}

async fn notification_settings(
    State(state): State<Arc<AppState>>,
    ValidJson(body): ValidJson<FyiSettingsRequest>,
) -> Result<Response, ApiError> {
    let request = OutboundRequest::post("/fyi/settings").json(&body)?;
    Ok(state.relay(request).await)
}

async fn toggle_notification_type(
    State(state): State<Arc<AppState>>,
    ValidPath(typecode): ValidPath<PathSegment>,
    ValidJson(body): ValidJson<EnabledRequest>,
) -> Result<Response, ApiError> {
    let request = OutboundRequest::put(format!("/fyi/settings/{}", typecode)).json(&body)?;
    Ok(state.relay(request).await)
}

async fn list_notifications(
    State(state): State<Arc<AppState>>,
    ValidQuery(q): ValidQuery<NotificationsQuery>,
) -> Response {
    state
        .relay(OutboundRequest::get("/fyi/notifications").query(q.to_params()))
        .await
}

// DELETE with a JSON body.
async fn mark_notifications_read(
    State(state): State<Arc<AppState>>,
    ValidJson(body): ValidJson<MarkReadRequest>,
) -> Result<Response, ApiError> {
    let request = OutboundRequest::delete("/fyi/notifications").json(&body)?;
    Ok(state.relay(request).await)
}
