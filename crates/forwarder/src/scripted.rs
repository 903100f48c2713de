use crate::request::PreparedRequest;
use crate::transport::{RawResponse, Transport, TransportError};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

type Outcome = Result<RawResponse, TransportError>;

/// An in-memory transport that replays scripted outcomes in order.
///
/// Every request it sees is recorded, so callers can assert on exactly what
/// would have gone upstream. Once the script runs out the fallback outcome is
/// returned; without a fallback the call fails with `TransportError::Other`.
#[derive(Debug, Default)]
pub struct ScriptedTransport {
    script: Mutex<VecDeque<Outcome>>,
    fallback: Option<Outcome>,
    calls: Mutex<Vec<PreparedRequest>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer every unscripted call with `status` and a JSON body.
    pub fn with_fallback_json(mut self, status: u16, value: serde_json::Value) -> Self {
        self.fallback = Some(Ok(RawResponse::json(status, &value)));
        self
    }

    pub fn then_json(self, status: u16, value: serde_json::Value) -> Self {
        self.push(Ok(RawResponse::json(status, &value)));
        self
    }

    pub fn then_text(self, status: u16, body: &str) -> Self {
        self.push(Ok(RawResponse::new(status, body)));
        self
    }

    pub fn then_fail(self, err: TransportError) -> Self {
        self.push(Err(err));
        self
    }

    pub fn push(&self, outcome: Outcome) {
        lock(&self.script).push_back(outcome);
    }

    /// Requests received so far, oldest first.
    pub fn calls(&self) -> Vec<PreparedRequest> {
        lock(&self.calls).clone()
    }

    pub fn call_count(&self) -> usize {
        lock(&self.calls).len()
    }

    pub fn last_call(&self) -> Option<PreparedRequest> {
        lock(&self.calls).last().cloned()
    }
}

fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn send(&self, request: &PreparedRequest) -> Result<RawResponse, TransportError> {
        lock(&self.calls).push(request.clone());
        let next = lock(&self.script).pop_front();
        match next {
            Some(outcome) => outcome,
            None => self.fallback.clone().unwrap_or_else(|| {
                Err(TransportError::Other(format!(
                    "no scripted reply for {} {}",
                    request.method, request.url
                )))
            }),
        }
    }
}
