//! Quote endpoints
//!
//! - `POST   /quotes`         create (rejects exact duplicates)
//! - `GET    /quotes`         list all, or `?author=` to filter
//!
//! `/quotes/` is served the same as `/quotes`.
//! - `GET    /quotes/random`  one random quote
//! - `DELETE /quotes/{id}`    delete by id

use axum::{
    body::Bytes,
    extract::{Query, State},
    http::StatusCode,
    routing::{delete, get},
    Json, Router,
};
use serde::Serialize;

use crate::error::QuoteError;
use crate::http::error::ApiError;
use crate::http::extractors::QuoteIdPath;
use crate::models::{NewQuote, Quote};
use crate::state::AppState;

/// Success envelope for quote payloads
#[derive(Debug, Serialize)]
pub struct DataResponse<T> {
    pub data: T,
}

/// Success envelope for operations without a payload
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// First `author` value in the query string; repeats are ignored.
fn author_param(params: &[(String, String)]) -> Option<&str> {
    params
        .iter()
        .find(|(key, _)| key == "author")
        .map(|(_, value)| value.as_str())
}

/// POST /quotes
///
/// The body is decoded by hand so that a missing or wrong content type is
/// treated the same as any other malformed body.
#[tracing::instrument(skip_all)]
async fn create_quote(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<DataResponse<Quote>>), ApiError> {
    tracing::debug!(body = %String::from_utf8_lossy(&body), "create quote request body");

    let new_quote: NewQuote = serde_json::from_slice(&body).map_err(|e| {
        tracing::error!(err = %e, "an error occurred when decoding create quote request");
        ApiError::bad_request("invalid input")
    })?;

    let service = state.service();

    // Check-then-insert is not atomic; two identical concurrent creates can
    // both pass this check.
    let exists = service
        .exists(&new_quote.author, &new_quote.text)
        .await
        .map_err(|e| {
            tracing::error!(err = %e, "an error occurred when checking for an existing quote");
            ApiError::invalid_or_internal(&e)
        })?;

    if exists {
        tracing::info!(author = %new_quote.author, "quote already exists");
        return Err(ApiError::bad_request("Quote already exists"));
    }

    let quote = service.create(new_quote).await.map_err(|e| {
        tracing::error!(err = %e, "an error occurred when creating quote");
        ApiError::invalid_or_internal(&e)
    })?;

    tracing::info!(id = quote.id, author = %quote.author, "created quote");
    Ok((StatusCode::CREATED, Json(DataResponse { data: quote })))
}

/// GET /quotes and GET /quotes?author=...
///
/// An empty author filter lists everything. A non-empty filter with no
/// matches is a 404, while an empty store without a filter is a 200.
#[tracing::instrument(skip(state))]
async fn list_quotes(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<DataResponse<Vec<Quote>>>, ApiError> {
    let service = state.service();

    let author = match author_param(&params) {
        Some(author) if !author.is_empty() => author,
        _ => {
            let quotes = service.list_all().await.map_err(|e| {
                tracing::error!(err = %e, "an error occurred when fetching quotes");
                ApiError::internal(&e)
            })?;
            return Ok(Json(DataResponse { data: quotes }));
        }
    };

    let quotes = service.list_by_author(author).await.map_err(|e| {
        tracing::error!(err = %e, author = %author, "an error occurred when fetching quotes by author");
        ApiError::invalid_or_internal(&e)
    })?;

    if quotes.is_empty() {
        return Err(ApiError::not_found("No quotes found for the specified author"));
    }

    Ok(Json(DataResponse { data: quotes }))
}

/// GET /quotes/random
#[tracing::instrument(skip_all)]
async fn random_quote(
    State(state): State<AppState>,
) -> Result<Json<DataResponse<Quote>>, ApiError> {
    match state.service().get_random().await {
        Ok(quote) => Ok(Json(DataResponse { data: quote })),
        Err(QuoteError::NotFound) => {
            tracing::warn!("random quote requested from an empty store");
            Err(ApiError::not_found("No quotes found"))
        }
        Err(e) => {
            tracing::error!(err = %e, "an error occurred when fetching a random quote");
            Err(ApiError::internal(&e))
        }
    }
}

/// DELETE /quotes/{id}
#[tracing::instrument(skip(state))]
async fn delete_quote(
    State(state): State<AppState>,
    QuoteIdPath(id): QuoteIdPath,
) -> Result<Json<MessageResponse>, ApiError> {
    match state.service().delete_by_id(id).await {
        Ok(()) => {
            tracing::info!(id, "deleted quote");
            Ok(Json(MessageResponse {
                message: format!("Quote with ID {id} deleted successfully"),
            }))
        }
        Err(QuoteError::NotFound) => Err(ApiError::not_found("Quote not found")),
        Err(e) => {
            tracing::error!(err = %e, id, "an error occurred when deleting quote");
            Err(ApiError::invalid_or_internal(&e))
        }
    }
}

/// Quote routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/quotes", get(list_quotes).post(create_quote))
        .route("/quotes/", get(list_quotes).post(create_quote))
        .route("/quotes/random", get(random_quote))
        .route("/quotes/{id}", delete(delete_quote))
}
