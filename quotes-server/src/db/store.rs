//! The persistence boundary
//!
//! Every implementation must:
//! - assign the smallest positive id not in use on insert
//! - return lists ordered by ascending id
//! - compare author and text exactly (case-sensitive, no trimming)
//! - report a missing row as `QuoteError::NotFound`

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{NewQuote, Quote, QuoteId};

#[async_trait]
pub trait QuoteStore: Send + Sync + 'static {
    /// Insert with a gap-filling id; the store sets `created_at`.
    async fn create(&self, new_quote: &NewQuote) -> Result<Quote>;

    async fn list_all(&self) -> Result<Vec<Quote>>;

    async fn list_by_author(&self, author: &str) -> Result<Vec<Quote>>;

    /// One uniformly chosen quote, `NotFound` when the store is empty.
    async fn random(&self) -> Result<Quote>;

    async fn delete(&self, id: QuoteId) -> Result<()>;

    async fn exists(&self, author: &str, text: &str) -> Result<bool>;
}
