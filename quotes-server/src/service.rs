//! Quote service - validation in front of the store
//!
//! Every operation validates its input first and returns
//! `QuoteError::InvalidInput` without touching the store when that fails.
//! Errors from the store pass through unchanged.

use std::sync::Arc;

use crate::db::QuoteStore;
use crate::error::Result;
use crate::models::validation::{require_non_empty, require_positive_id};
use crate::models::{NewQuote, Quote, QuoteId};

/// Stateless orchestration over a shared store handle.
#[derive(Clone)]
pub struct QuoteService {
    store: Arc<dyn QuoteStore>,
}

impl QuoteService {
    pub fn new(store: Arc<dyn QuoteStore>) -> Self {
        Self { store }
    }

    /// Store a new quote. Does not check for duplicates; see [`Self::exists`].
    pub async fn create(&self, new_quote: NewQuote) -> Result<Quote> {
        new_quote.validate()?;
        self.store.create(&new_quote).await
    }

    pub async fn list_all(&self) -> Result<Vec<Quote>> {
        self.store.list_all().await
    }

    pub async fn list_by_author(&self, author: &str) -> Result<Vec<Quote>> {
        require_non_empty("author", author)?;
        self.store.list_by_author(author).await
    }

    pub async fn get_random(&self) -> Result<Quote> {
        self.store.random().await
    }

    pub async fn delete_by_id(&self, id: QuoteId) -> Result<()> {
        require_positive_id(id)?;
        self.store.delete(id).await
    }

    pub async fn exists(&self, author: &str, text: &str) -> Result<bool> {
        require_non_empty("author", author)?;
        require_non_empty("quote", text)?;
        self.store.exists(author, text).await
    }
}
