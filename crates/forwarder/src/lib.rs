//! Upstream forwarding for the ibgate gateway.
//!
//! A route handler describes its upstream call as an [`OutboundRequest`];
//! the [`Forwarder`] resolves it against the configured base URL, executes it
//! through a [`Transport`], and folds the outcome into an [`Envelope`].

pub mod config;
pub mod envelope;
pub mod forwarder;
pub mod request;
pub mod scripted;
pub mod transport;

pub use config::{ConfigError, ForwarderConfig, TimeoutConfig, DEFAULT_BASE_URL};
pub use envelope::{Envelope, REQUEST_ERROR, UPSTREAM_API_ERROR};
pub use forwarder::Forwarder;
pub use request::{CallTimeout, OutboundRequest, PreparedRequest};
pub use reqwest::Method;
pub use scripted::ScriptedTransport;
pub use transport::{HttpTransport, RawResponse, Transport, TransportError};
