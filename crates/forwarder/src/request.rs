use ibgate_core::QueryParams;
use reqwest::Method;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;

/// Timeout class of an outbound call. Durations come from `TimeoutConfig`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CallTimeout {
    #[default]
    Standard,
    Extended,
    Long,
}

/// An upstream call described relative to the base URL.
#[derive(Debug, Clone, PartialEq)]
pub struct OutboundRequest {
    pub method: Method,
    /// Path suffix, e.g. `/iserver/contract/265598/info`. Caller-supplied
    /// segments must already be percent-encoded (`ibgate_core::PathSegment`).
    pub path: String,
    pub query: QueryParams,
    pub body: Option<Value>,
    pub timeout: CallTimeout,
}

impl OutboundRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: QueryParams::new(),
            body: None,
            timeout: CallTimeout::Standard,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    pub fn query(mut self, query: QueryParams) -> Self {
        self.query = query;
        self
    }

    /// Attach a JSON body. Field skipping is decided by `body`'s own
    /// `Serialize` impl.
    pub fn json<T: Serialize + ?Sized>(mut self, body: &T) -> Result<Self, serde_json::Error> {
        self.body = Some(serde_json::to_value(body)?);
        Ok(self)
    }

    pub fn timeout(mut self, timeout: CallTimeout) -> Self {
        self.timeout = timeout;
        self
    }
}

/// An outbound request resolved against the configured upstream.
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedRequest {
    pub method: Method,
    pub url: String,
    pub query: QueryParams,
    pub body: Option<Value>,
    pub timeout: Duration,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_builder_defaults() {
        let req = OutboundRequest::get("/fyi/unreadnumber");
        assert_eq!(req.method, Method::GET);
        assert!(req.query.is_empty());
        assert!(req.body.is_none());
        assert_eq!(req.timeout, CallTimeout::Standard);
    }

    #[test]
    fn test_json_body_attached() {
        let req = OutboundRequest::delete("/fyi/notifications")
            .json(&json!({"notificationIds": ["1", "2"]}))
            .unwrap();
        assert_eq!(req.method, Method::DELETE);
        assert_eq!(req.body, Some(json!({"notificationIds": ["1", "2"]})));
    }
}
