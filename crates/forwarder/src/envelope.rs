use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use serde_json::Value;

pub const UPSTREAM_API_ERROR: &str = "Upstream API Error";
pub const REQUEST_ERROR: &str = "Request Error";

/// Outcome of a forwarded call, as relayed to the caller.
///
/// Serializes to the raw upstream JSON on success, otherwise to
/// `{"error", "status_code", "detail"}` or `{"error", "detail"}`.
#[derive(Debug, Clone, PartialEq)]
pub enum Envelope {
    Success(Value),
    /// The upstream answered with a non-2xx status.
    UpstreamError { status_code: u16, detail: String },
    /// No usable response was received.
    RequestError { detail: String, timed_out: bool },
}

impl Envelope {
    pub fn is_success(&self) -> bool {
        matches!(self, Envelope::Success(_))
    }

    /// Short label for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Envelope::Success(_) => "success",
            Envelope::UpstreamError { .. } => "upstream_error",
            Envelope::RequestError { .. } => "request_error",
        }
    }

    pub fn into_value(self) -> Value {
        match self {
            Envelope::Success(value) => value,
            Envelope::UpstreamError {
                status_code,
                detail,
            } => serde_json::json!({
                "error": UPSTREAM_API_ERROR,
                "status_code": status_code,
                "detail": detail,
            }),
            Envelope::RequestError { detail, .. } => serde_json::json!({
                "error": REQUEST_ERROR,
                "detail": detail,
            }),
        }
    }
}

impl Serialize for Envelope {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Envelope::Success(value) => value.serialize(serializer),
            Envelope::UpstreamError {
                status_code,
                detail,
            } => {
                let mut map = serializer.serialize_map(Some(3))?;
                map.serialize_entry("error", UPSTREAM_API_ERROR)?;
                map.serialize_entry("status_code", status_code)?;
                map.serialize_entry("detail", detail)?;
                map.end()
            }
            Envelope::RequestError { detail, .. } => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("error", REQUEST_ERROR)?;
                map.serialize_entry("detail", detail)?;
                map.end()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_is_passed_through() {
        let payload = json!([{"conid": 265598, "31": "189.50"}]);
        let env = Envelope::Success(payload.clone());
        assert_eq!(serde_json::to_value(&env).unwrap(), payload);
    }

    #[test]
    fn test_upstream_error_shape() {
        let env = Envelope::UpstreamError {
            status_code: 401,
            detail: "unauthorized".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&env).unwrap(),
            json!({"error": "Upstream API Error", "status_code": 401, "detail": "unauthorized"})
        );
    }

    #[test]
    fn test_request_error_has_no_status_code() {
        let env = Envelope::RequestError {
            detail: "connection refused".to_string(),
            timed_out: false,
        };
        let json = serde_json::to_value(&env).unwrap();
        assert_eq!(json["error"], "Request Error");
        assert!(json.get("status_code").is_none());
        assert_eq!(json, env.into_value());
    }
}
