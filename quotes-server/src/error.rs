//! Error types for quotes-server
//!
//! `QuoteError` is the taxonomy shared by the store and the service layer.
//! The HTTP layer decides which status code each variant gets per route.

use thiserror::Error;

use crate::models::{QuoteId, ValidationError};

pub type Result<T, E = QuoteError> = std::result::Result<T, E>;

#[derive(Error, Debug)]
pub enum QuoteError {
    /// Client-caused; never reaches the store when raised by the service.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] ValidationError),

    #[error("quote not found")]
    NotFound,

    /// The gap-filling id was taken between the scan and the insert.
    #[error("ID {id} already exists")]
    Conflict { id: QuoteId },

    #[error("{op} failed: {source}")]
    Storage {
        op: &'static str,
        #[source]
        source: sqlx::Error,
    },
}

impl QuoteError {
    /// Wrap a backend error with the name of the store operation.
    pub fn storage(op: &'static str) -> impl FnOnce(sqlx::Error) -> Self {
        move |source| Self::Storage { op, source }
    }

    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }
}
