//! Custom Axum extractors

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;

use super::error::ApiError;
use crate::models::QuoteId;

/// Extract a decimal quote id from the `{id}` path segment.
///
/// A segment that is not an integer is rejected with 400 before any handler
/// runs. Zero and negative ids parse here and are rejected by the service.
pub struct QuoteIdPath(pub QuoteId);

impl<S> FromRequestParts<S> for QuoteIdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::bad_request("invalid input: missing id"))?;

        let id = raw.parse::<QuoteId>().map_err(|e| {
            tracing::error!(err = %e, id = %raw, "invalid quote id format");
            ApiError::bad_request("invalid input: id must be an integer")
        })?;

        Ok(Self(id))
    }
}
