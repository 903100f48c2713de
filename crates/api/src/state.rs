use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::{DateTime, Utc};
use ibgate_forwarder::{Envelope, Forwarder, OutboundRequest};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// HTTP status used when relaying an error envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorStatusMode {
    /// Error envelopes go out with 200, like successful calls.
    #[default]
    Compat,
    /// Upstream errors keep the upstream status; transport errors become
    /// 502, or 504 on timeout.
    Mapped,
}

impl FromStr for ErrorStatusMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "compat" => Ok(ErrorStatusMode::Compat),
            "mapped" => Ok(ErrorStatusMode::Mapped),
            other => Err(format!("unknown error status mode {:?} (expected compat or mapped)", other)),
        }
    }
}

impl ErrorStatusMode {
    pub fn status_for(self, envelope: &Envelope) -> StatusCode {
        match (self, envelope) {
            (_, Envelope::Success(_)) | (ErrorStatusMode::Compat, _) => StatusCode::OK,
            (ErrorStatusMode::Mapped, Envelope::UpstreamError { status_code, .. }) => {
                StatusCode::from_u16(*status_code)
                    .ok()
                    .filter(|s| s.is_client_error() || s.is_server_error())
                    .unwrap_or(StatusCode::BAD_GATEWAY)
            }
            (ErrorStatusMode::Mapped, Envelope::RequestError { timed_out, .. }) => {
                if *timed_out {
                    StatusCode::GATEWAY_TIMEOUT
                } else {
                    StatusCode::BAD_GATEWAY
                }
            }
        }
    }
}

/// Shared application state accessible by all route handlers. Read-only
/// after startup.
pub struct AppState {
    pub forwarder: Forwarder,
    pub error_status: ErrorStatusMode,
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(forwarder: Forwarder, error_status: ErrorStatusMode) -> Self {
        Self {
            forwarder,
            error_status,
            started_at: Utc::now(),
        }
    }

    pub fn respond(&self, envelope: Envelope) -> Response {
        let status = self.error_status.status_for(&envelope);
        (status, Json(envelope)).into_response()
    }

    pub async fn relay(&self, request: OutboundRequest) -> Response {
        let envelope = self.forwarder.forward(request).await;
        self.respond(envelope)
    }

    pub async fn relay_warmed(&self, request: OutboundRequest) -> Response {
        let envelope = self.forwarder.forward_warmed(request).await;
        self.respond(envelope)
    }

    pub async fn relay_after_init(&self, init: OutboundRequest, request: OutboundRequest) -> Response {
        let envelope = self.forwarder.forward_after_init(init, request).await;
        self.respond(envelope)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upstream(status_code: u16) -> Envelope {
        Envelope::UpstreamError {
            status_code,
            detail: String::new(),
        }
    }

    #[test]
    fn test_compat_always_ok() {
        let mode = ErrorStatusMode::Compat;
        assert_eq!(mode.status_for(&upstream(401)), StatusCode::OK);
        assert_eq!(
            mode.status_for(&Envelope::RequestError {
                detail: "refused".into(),
                timed_out: false
            }),
            StatusCode::OK
        );
    }

    #[test]
    fn test_mapped_statuses() {
        let mode = ErrorStatusMode::Mapped;
        assert_eq!(mode.status_for(&upstream(401)), StatusCode::UNAUTHORIZED);
        assert_eq!(mode.status_for(&upstream(302)), StatusCode::BAD_GATEWAY);
        assert_eq!(
            mode.status_for(&Envelope::RequestError {
                detail: "timed out".into(),
                timed_out: true
            }),
            StatusCode::GATEWAY_TIMEOUT
        );
        assert_eq!(
            mode.status_for(&Envelope::Success(serde_json::Value::Null)),
            StatusCode::OK
        );
    }

    #[test]
    fn test_parse_mode() {
        assert_eq!("mapped".parse::<ErrorStatusMode>(), Ok(ErrorStatusMode::Mapped));
        assert_eq!("COMPAT".parse::<ErrorStatusMode>(), Ok(ErrorStatusMode::Compat));
        assert!("strict".parse::<ErrorStatusMode>().is_err());
    }
}
