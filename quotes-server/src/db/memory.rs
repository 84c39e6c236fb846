//! In-memory quote store.
//!
//! Same contract as the PostgreSQL store. Id search and insert happen under a
//! single lock, so this store never reports a conflict.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use rand::seq::IteratorRandom;
use tokio::sync::RwLock;

use super::store::QuoteStore;
use crate::error::{QuoteError, Result};
use crate::models::validation::require_positive_id;
use crate::models::{NewQuote, Quote, QuoteId};

/// Quote store kept in process memory. Contents are lost on restart.
#[derive(Debug, Default)]
pub struct MemoryQuoteStore {
    /// Ordered by id so iteration matches `ORDER BY id`.
    quotes: RwLock<BTreeMap<QuoteId, Quote>>,
}

impl MemoryQuoteStore {
    pub fn new() -> Self {
        Self::default()
    }
}

/// First gap in an ascending id sequence, starting at 1.
fn first_free_id<'a>(ids: impl Iterator<Item = &'a QuoteId>) -> QuoteId {
    let mut candidate = 1;
    for &id in ids {
        if id != candidate {
            break;
        }
        candidate += 1;
    }
    candidate
}

#[async_trait]
impl QuoteStore for MemoryQuoteStore {
    async fn create(&self, new_quote: &NewQuote) -> Result<Quote> {
        new_quote.validate()?;

        let mut quotes = self.quotes.write().await;
        let id = first_free_id(quotes.keys().filter(|id| **id > 0));

        let quote = Quote {
            id,
            author: new_quote.author.clone(),
            text: new_quote.text.clone(),
            created_at: Utc::now(),
        };
        quotes.insert(id, quote.clone());

        Ok(quote)
    }

    async fn list_all(&self) -> Result<Vec<Quote>> {
        Ok(self.quotes.read().await.values().cloned().collect())
    }

    async fn list_by_author(&self, author: &str) -> Result<Vec<Quote>> {
        Ok(self
            .quotes
            .read()
            .await
            .values()
            .filter(|q| q.author == author)
            .cloned()
            .collect())
    }

    async fn random(&self) -> Result<Quote> {
        let quotes = self.quotes.read().await;
        quotes
            .values()
            .choose(&mut rand::thread_rng())
            .cloned()
            .ok_or(QuoteError::NotFound)
    }

    async fn delete(&self, id: QuoteId) -> Result<()> {
        require_positive_id(id)?;

        match self.quotes.write().await.remove(&id) {
            Some(_) => Ok(()),
            None => Err(QuoteError::NotFound),
        }
    }

    async fn exists(&self, author: &str, text: &str) -> Result<bool> {
        Ok(self
            .quotes
            .read()
            .await
            .values()
            .any(|q| q.author == author && q.text == text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_free_id_fills_gaps() {
        assert_eq!(first_free_id([].iter()), 1);
        assert_eq!(first_free_id([1, 2, 3].iter()), 4);
        assert_eq!(first_free_id([2, 3].iter()), 1);
        assert_eq!(first_free_id([1, 2, 4, 5].iter()), 3);
    }

    #[tokio::test]
    async fn create_assigns_dense_ids() {
        let store = MemoryQuoteStore::new();
        for expected in 1..=3 {
            let q = store
                .create(&NewQuote::new("Seneca", format!("letter {expected}")))
                .await
                .unwrap();
            assert_eq!(q.id, expected);
        }

        store.delete(2).await.unwrap();
        let q = store.create(&NewQuote::new("Seneca", "letter 4")).await.unwrap();
        assert_eq!(q.id, 2);

        let q = store.create(&NewQuote::new("Seneca", "letter 5")).await.unwrap();
        assert_eq!(q.id, 4);
    }

    #[tokio::test]
    async fn lists_are_ordered_by_id() {
        let store = MemoryQuoteStore::new();
        store.create(&NewQuote::new("Plato", "a")).await.unwrap();
        store.create(&NewQuote::new("Aristotle", "b")).await.unwrap();
        store.create(&NewQuote::new("Plato", "c")).await.unwrap();
        store.delete(1).await.unwrap();
        store.create(&NewQuote::new("Plato", "d")).await.unwrap();

        let all: Vec<_> = store.list_all().await.unwrap().into_iter().map(|q| q.id).collect();
        assert_eq!(all, vec![1, 2, 3]);

        let plato: Vec<_> = store
            .list_by_author("Plato")
            .await
            .unwrap()
            .into_iter()
            .map(|q| q.text)
            .collect();
        assert_eq!(plato, vec!["d", "c"]);
    }

    #[tokio::test]
    async fn exists_is_exact_match() {
        let store = MemoryQuoteStore::new();
        store
            .create(&NewQuote::new("Confucius", "Life is simple"))
            .await
            .unwrap();

        assert!(store.exists("Confucius", "Life is simple").await.unwrap());
        assert!(!store.exists("confucius", "Life is simple").await.unwrap());
        assert!(!store.exists("Confucius", "Life is simple ").await.unwrap());
    }

    #[tokio::test]
    async fn random_and_delete_report_not_found() {
        let store = MemoryQuoteStore::new();
        assert!(matches!(store.random().await, Err(QuoteError::NotFound)));
        assert!(matches!(store.delete(1).await, Err(QuoteError::NotFound)));

        let q = store.create(&NewQuote::new("Lao Tzu", "Be still")).await.unwrap();
        assert_eq!(store.random().await.unwrap(), q);
    }

    #[tokio::test]
    async fn defensive_checks() {
        let store = MemoryQuoteStore::new();
        assert!(store
            .create(&NewQuote::new("", "text"))
            .await
            .unwrap_err()
            .is_invalid_input());
        assert!(store.delete(0).await.unwrap_err().is_invalid_input());
    }
}
