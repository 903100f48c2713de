use crate::config::ForwarderConfig;
use crate::envelope::Envelope;
use crate::request::{OutboundRequest, PreparedRequest};
use crate::transport::{HttpTransport, Transport, TransportError};
use std::sync::Arc;
use tracing::{debug, warn};
use uuid::Uuid;

/// Forwards outbound requests to the configured upstream and normalizes
/// every outcome into an `Envelope`.
///
/// Never retries. Each call is executed exactly once; the two sequenced
/// variants (`forward_warmed`, `forward_after_init`) discard the outcome of
/// their first call unconditionally.
#[derive(Clone)]
pub struct Forwarder {
    config: ForwarderConfig,
    transport: Arc<dyn Transport>,
}

impl Forwarder {
    pub fn new(config: ForwarderConfig, transport: Arc<dyn Transport>) -> Self {
        Self { config, transport }
    }

    /// Build a forwarder backed by a reqwest client.
    pub fn http(config: ForwarderConfig) -> Result<Self, TransportError> {
        let transport = HttpTransport::new(config.insecure_tls)?;
        Ok(Self::new(config, Arc::new(transport)))
    }

    pub fn config(&self) -> &ForwarderConfig {
        &self.config
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    pub fn prepare(&self, request: &OutboundRequest) -> PreparedRequest {
        PreparedRequest {
            method: request.method.clone(),
            url: self.config.url_for(&request.path),
            query: request.query.clone(),
            body: request.body.clone(),
            timeout: self.config.timeouts.duration(request.timeout),
        }
    }

    /// Execute a single upstream call.
    pub async fn forward(&self, request: OutboundRequest) -> Envelope {
        let prepared = self.prepare(&request);
        self.execute(&prepared).await
    }

    /// Issue the same call twice in sequence and return only the second
    /// outcome. The upstream only serves a snapshot once the subscription has
    /// been opened by a prior request.
    pub async fn forward_warmed(&self, request: OutboundRequest) -> Envelope {
        let prepared = self.prepare(&request);
        let warmup = self.execute(&prepared).await;
        debug!(outcome = warmup.kind(), path = %request.path, "discarding warm-up response");
        self.execute(&prepared).await
    }

    /// Issue `init`, ignore whatever it returns, then issue `request`.
    pub async fn forward_after_init(
        &self,
        init: OutboundRequest,
        request: OutboundRequest,
    ) -> Envelope {
        let init_outcome = self.execute(&self.prepare(&init)).await;
        debug!(outcome = init_outcome.kind(), path = %init.path, "discarding init response");
        self.forward(request).await
    }

    async fn execute(&self, prepared: &PreparedRequest) -> Envelope {
        let call_id = Uuid::new_v4();
        debug!(
            %call_id,
            method = %prepared.method,
            url = %prepared.url,
            params = prepared.query.len(),
            has_body = prepared.body.is_some(),
            "forwarding upstream"
        );

        match self.transport.send(prepared).await {
            Ok(response) if response.is_success() => {
                if response.body.trim().is_empty() {
                    return Envelope::Success(serde_json::Value::Null);
                }
                match serde_json::from_str(&response.body) {
                    Ok(value) => Envelope::Success(value),
                    Err(e) => {
                        warn!(%call_id, status = response.status, error = %e, "upstream returned non-JSON body");
                        Envelope::RequestError {
                            detail: format!("invalid JSON in upstream response: {}", e),
                            timed_out: false,
                        }
                    }
                }
            }
            Ok(response) => {
                warn!(%call_id, status = response.status, url = %prepared.url, "upstream API error");
                Envelope::UpstreamError {
                    status_code: response.status,
                    detail: response.body,
                }
            }
            Err(e) => {
                warn!(%call_id, url = %prepared.url, error = %e, "upstream request failed");
                Envelope::RequestError {
                    timed_out: e.is_timeout(),
                    detail: e.to_string(),
                }
            }
        }
    }
}
