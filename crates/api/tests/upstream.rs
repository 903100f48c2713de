//! End-to-end tests against a mock upstream over real HTTP.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use ibgate_api::{build_router, AppState, ErrorStatusMode};
use ibgate_forwarder::{Forwarder, ForwarderConfig};
use serde_json::{json, Value};
use tower::ServiceExt;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn router_for(server: &MockServer) -> axum::Router {
    let forwarder = Forwarder::http(ForwarderConfig::new(server.uri())).unwrap();
    build_router(Arc::new(AppState::new(forwarder, ErrorStatusMode::Compat)))
}

async fn send(router: axum::Router, req: Request<Body>) -> (StatusCode, Value) {
    let resp = router.oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn mark_read_reaches_upstream_as_delete_with_body() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/fyi/notifications"))
        .and(body_json(json!({"notificationIds": ["n1"]})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"V": 1, "T": 10})))
        .expect(1)
        .mount(&server)
        .await;

    let req = Request::builder()
        .method("DELETE")
        .uri("/fyi/notifications")
        .header("content-type", "application/json")
        .body(Body::from(json!({"notificationIds": ["n1"]}).to_string()))
        .unwrap();
    let (status, body) = send(router_for(&server), req).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"V": 1, "T": 10}));
}

#[tokio::test]
async fn invalid_request_never_reaches_upstream() {
    let server = MockServer::start().await;
    Mock::given(path("/iserver/secdef/search"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let req = Request::builder()
        .uri("/iserver/secdef/search")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(router_for(&server), req).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "Validation Error");
}

#[tokio::test]
async fn query_and_upstream_error_pass_through() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/iserver/secdef/search"))
        .and(query_param("symbol", "AAPL"))
        .and(query_param("name", "false"))
        .respond_with(ResponseTemplate::new(401).set_body_string("unauthorized"))
        .expect(1)
        .mount(&server)
        .await;

    let req = Request::builder()
        .uri("/iserver/secdef/search?symbol=AAPL")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(router_for(&server), req).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"error": "Upstream API Error", "status_code": 401, "detail": "unauthorized"})
    );
}

#[tokio::test]
async fn snapshot_hits_upstream_twice() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/iserver/marketdata/snapshot"))
        .and(query_param("conids", "265598"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([{"conid": 265598, "31": "189.50"}])),
        )
        .expect(2)
        .mount(&server)
        .await;

    let req = Request::builder()
        .uri("/iserver/marketdata/snapshot?conids=265598&fields=31")
        .body(Body::empty())
        .unwrap();
    let (_, body) = send(router_for(&server), req).await;
    assert_eq!(body[0]["31"], "189.50");
}

#[tokio::test]
async fn encoded_path_parameter_cannot_reach_another_endpoint() {
    let server = MockServer::start().await;
    Mock::given(path("/iserver/account/DU1/order/42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"msg": "cancelled"})))
        .expect(0)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/iserver/account/watchlist/..%2F..%2Faccount%2FDU1%2Forder%2F42"))
        .respond_with(ResponseTemplate::new(404).set_body_string("no such watchlist"))
        .expect(1)
        .mount(&server)
        .await;

    let req = Request::builder()
        .method("DELETE")
        .uri("/iserver/account/watchlist/..%2F..%2Faccount%2FDU1%2Forder%2F42")
        .body(Body::empty())
        .unwrap();
    let (_, body) = send(router_for(&server), req).await;

    assert_eq!(body["status_code"], 404);
    let received = server.received_requests().await.unwrap();
    assert_eq!(received.len(), 1);
    assert!(received[0].url.query().is_none());
}
