use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

/// Errors raised by the gateway itself, never by the upstream.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),
    #[error("failed to encode upstream body: {0}")]
    Encode(#[from] serde_json::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error) = match &self {
            ApiError::Validation(_) => (StatusCode::UNPROCESSABLE_ENTITY, "Validation Error"),
            ApiError::Encode(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Internal Error"),
        };
        tracing::debug!(%status, error = %self, "rejecting request");
        (
            status,
            Json(serde_json::json!({
                "error": error,
                "detail": self.to_string(),
            })),
        )
            .into_response()
    }
}
