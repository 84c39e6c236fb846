//! API error type with IntoResponse
//!
//! Every error body is `{"error": "<message>"}`. Which status a domain error
//! gets depends on the route, so handlers pick the constructor.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::error::QuoteError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Client error (400)
    BadRequest { message: String },

    /// Resource not found (404)
    NotFound { message: String },

    /// Route exists, method does not (405)
    MethodNotAllowed,

    /// Request deadline exceeded (408)
    RequestTimeout,

    /// Anything else (500, logged)
    Internal { message: String },
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// 500 whatever the error kind.
    pub fn internal(err: &QuoteError) -> Self {
        Self::Internal {
            message: client_message(err),
        }
    }

    /// 400 for invalid input, 500 for everything else.
    pub fn invalid_or_internal(err: &QuoteError) -> Self {
        if err.is_invalid_input() {
            Self::bad_request(client_message(err))
        } else {
            Self::internal(err)
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::RequestTimeout => StatusCode::REQUEST_TIMEOUT,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::BadRequest { message }
            | Self::NotFound { message }
            | Self::Internal { message } => message,
            Self::MethodNotAllowed => "method not allowed",
            Self::RequestTimeout => "request timed out",
        }
    }
}

/// Message shown to the client. Storage failures expose the backend's own
/// error string without the operation name, which stays in the logs.
fn client_message(err: &QuoteError) -> String {
    match err {
        QuoteError::Storage { source, .. } => source.to_string(),
        other => other.to_string(),
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), "Internal error: {}", self.message());
        }

        let body = Json(json!({ "error": self.message() }));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ValidationError;
    use axum::body::to_bytes;

    #[test]
    fn invalid_input_is_400_other_is_500() {
        let invalid = QuoteError::from(ValidationError::Empty { field: "author" });
        assert_eq!(
            ApiError::invalid_or_internal(&invalid).status(),
            StatusCode::BAD_REQUEST
        );

        assert_eq!(
            ApiError::invalid_or_internal(&QuoteError::NotFound).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError::invalid_or_internal(&QuoteError::Conflict { id: 3 }).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(ApiError::internal(&invalid).status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn storage_message_hides_operation() {
        let err = QuoteError::storage("list_all")(sqlx::Error::PoolTimedOut);
        let api = ApiError::internal(&err);
        assert_eq!(api.message(), sqlx::Error::PoolTimedOut.to_string());
    }

    #[tokio::test]
    async fn body_is_error_envelope() {
        let response = ApiError::not_found("Quote not found").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, json!({ "error": "Quote not found" }));
    }
}
