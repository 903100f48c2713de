use crate::request::PreparedRequest;
use async_trait::async_trait;
use std::error::Error as StdError;

/// Errors raised before a complete upstream response was received.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    #[error("{0}")]
    Timeout(String),
    #[error("{0}")]
    Connect(String),
    #[error("{0}")]
    Other(String),
}

impl TransportError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, TransportError::Timeout(_))
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        let detail = describe(&err);
        if err.is_timeout() {
            TransportError::Timeout(detail)
        } else if err.is_connect() {
            TransportError::Connect(detail)
        } else {
            TransportError::Other(detail)
        }
    }
}

/// The error message followed by its source chain, joined with ": ".
pub fn describe(err: &(dyn StdError + 'static)) -> String {
    let mut parts = vec![err.to_string()];
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !parts.iter().any(|p| p.contains(&text)) {
            parts.push(text);
        }
        source = cause.source();
    }
    parts.join(": ")
}

/// Status and raw body text of an upstream response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn json(status: u16, value: &serde_json::Value) -> Self {
        Self::new(status, value.to_string())
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Executes one prepared request against the upstream.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: &PreparedRequest) -> Result<RawResponse, TransportError>;
}

/// reqwest-backed transport.
///
/// Every request, including DELETE with a body, is built through the generic
/// `Client::request` builder.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(insecure_tls: bool) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .danger_accept_invalid_certs(insecure_tls)
            .build()
            .map_err(|e| TransportError::Other(describe(&e)))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: &PreparedRequest) -> Result<RawResponse, TransportError> {
        let mut builder = self
            .client
            .request(request.method.clone(), &request.url)
            .timeout(request.timeout);

        if !request.query.is_empty() {
            builder = builder.query(request.query.as_pairs());
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(RawResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ibgate_core::QueryParams;
    use reqwest::Method;
    use serde_json::json;
    use std::time::Duration;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn prepared(method: Method, url: String) -> PreparedRequest {
        PreparedRequest {
            method,
            url,
            query: QueryParams::new(),
            body: None,
            timeout: Duration::from_secs(5),
        }
    }

    #[tokio::test]
    async fn test_delete_carries_json_body() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/fyi/notifications"))
            .and(body_json(json!({"notificationIds": ["101", "102"]})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"V": 1})))
            .expect(1)
            .mount(&server)
            .await;

        let transport = HttpTransport::new(false).unwrap();
        let mut req = prepared(Method::DELETE, format!("{}/fyi/notifications", server.uri()));
        req.body = Some(json!({"notificationIds": ["101", "102"]}));

        let resp = transport.send(&req).await.unwrap();
        assert_eq!(resp.status, 200);
        assert_eq!(resp.body, r#"{"V":1}"#);
    }

    #[tokio::test]
    async fn test_query_contains_only_set_params() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/md/snapshot"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;

        let transport = HttpTransport::new(false).unwrap();
        let mut req = prepared(Method::GET, format!("{}/md/snapshot", server.uri()));
        req.query = QueryParams::new()
            .with("conids", "265598,8314")
            .with_opt::<&str>("fields", None);
        transport.send(&req).await.unwrap();

        let received = server.received_requests().await.unwrap();
        assert_eq!(received.len(), 1);
        let pairs: Vec<(String, String)> = received[0]
            .url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert_eq!(
            pairs,
            vec![("conids".to_string(), "265598,8314".to_string())]
        );
    }

    #[tokio::test]
    async fn test_error_status_is_returned_not_raised() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(401).set_body_string("unauthorized"))
            .mount(&server)
            .await;

        let transport = HttpTransport::new(false).unwrap();
        let resp = transport
            .send(&prepared(Method::GET, format!("{}/portfolio/accounts", server.uri())))
            .await
            .unwrap();
        assert_eq!(resp, RawResponse::new(401, "unauthorized"));
        assert!(!resp.is_success());
    }

    #[tokio::test]
    async fn test_connection_refused_is_connect_error() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let transport = HttpTransport::new(false).unwrap();
        let err = transport
            .send(&prepared(Method::GET, format!("http://127.0.0.1:{}/fa/groups", port)))
            .await
            .unwrap_err();
        assert!(matches!(err, TransportError::Connect(_)));
        assert!(!err.to_string().is_empty());
    }

    #[tokio::test]
    async fn test_slow_upstream_times_out() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_millis(500)))
            .mount(&server)
            .await;

        let transport = HttpTransport::new(false).unwrap();
        let mut req = prepared(Method::GET, format!("{}/hmds/history", server.uri()));
        req.timeout = Duration::from_millis(50);
        let err = transport.send(&req).await.unwrap_err();
        assert!(err.is_timeout());
    }
}
