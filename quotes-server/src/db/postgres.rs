//! PostgreSQL quote store
//!
//! Id allocation is a scan for the smallest free positive id followed by a
//! separate INSERT. The two statements are not atomic: a concurrent insert
//! can take the id first, in which case the primary key rejects ours and the
//! caller gets `QuoteError::Conflict`. Nothing is retried.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

use super::store::QuoteStore;
use crate::error::{QuoteError, Result};
use crate::models::validation::require_positive_id;
use crate::models::{NewQuote, Quote, QuoteId};

/// Quote record as stored in the `quotes` table
#[derive(Debug, Clone, FromRow)]
struct QuoteRow {
    id: i32,
    author: String,
    quote: String,
    created_at: DateTime<Utc>,
}

impl From<QuoteRow> for Quote {
    fn from(row: QuoteRow) -> Self {
        Self {
            id: row.id,
            author: row.author,
            text: row.quote,
            created_at: row.created_at,
        }
    }
}

/// Quote store backed by a PostgreSQL pool
#[derive(Debug, Clone)]
pub struct PgQuoteStore {
    pool: PgPool,
}

impl PgQuoteStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Smallest positive integer not used as an id.
    ///
    /// Full scan of the id column on every call.
    async fn next_free_id(&self) -> Result<QuoteId> {
        let (id,): (i32,) = sqlx::query_as(
            r#"
            SELECT COALESCE(MIN(s.id), 1)
            FROM generate_series(1, (SELECT COALESCE(MAX(id), 0) + 1 FROM quotes)) AS s(id)
            WHERE NOT EXISTS (SELECT 1 FROM quotes q WHERE q.id = s.id)
            "#,
        )
        .fetch_one(&self.pool)
        .await
        .map_err(QuoteError::storage("next_free_id"))?;

        Ok(id)
    }
}

#[async_trait]
impl QuoteStore for PgQuoteStore {
    async fn create(&self, new_quote: &NewQuote) -> Result<Quote> {
        new_quote.validate()?;

        let id = self.next_free_id().await.inspect_err(
            |e| tracing::error!(err = %e, "an error occurred when searching for a free quote id"),
        )?;

        let created_at: DateTime<Utc> = sqlx::query_scalar(
            r#"
            INSERT INTO quotes (id, author, quote)
            VALUES ($1, $2, $3)
            RETURNING created_at
            "#,
        )
        .bind(id)
        .bind(&new_quote.author)
        .bind(&new_quote.text)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if e.as_database_error().is_some_and(|db| db.is_unique_violation()) {
                tracing::error!(id, "quote id was taken before insert");
                QuoteError::Conflict { id }
            } else {
                tracing::error!(err = %e, id, "an error occurred when inserting quote");
                QuoteError::storage("create")(e)
            }
        })?;

        Ok(Quote {
            id,
            author: new_quote.author.clone(),
            text: new_quote.text.clone(),
            created_at,
        })
    }

    async fn list_all(&self) -> Result<Vec<Quote>> {
        let rows: Vec<QuoteRow> = sqlx::query_as(
            r#"
            SELECT id, author, quote, created_at
            FROM quotes
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .inspect_err(|e| tracing::error!(err = %e, "an error occurred when fetching quotes"))
        .map_err(QuoteError::storage("list_all"))?;

        Ok(rows.into_iter().map(Quote::from).collect())
    }

    async fn list_by_author(&self, author: &str) -> Result<Vec<Quote>> {
        let rows: Vec<QuoteRow> = sqlx::query_as(
            r#"
            SELECT id, author, quote, created_at
            FROM quotes
            WHERE author = $1
            ORDER BY id
            "#,
        )
        .bind(author)
        .fetch_all(&self.pool)
        .await
        .inspect_err(|e| {
            tracing::error!(err = %e, author = %author, "an error occurred when fetching quotes by author")
        })
        .map_err(QuoteError::storage("list_by_author"))?;

        Ok(rows.into_iter().map(Quote::from).collect())
    }

    async fn random(&self) -> Result<Quote> {
        let row: Option<QuoteRow> = sqlx::query_as(
            r#"
            SELECT id, author, quote, created_at
            FROM quotes
            ORDER BY RANDOM()
            LIMIT 1
            "#,
        )
        .fetch_optional(&self.pool)
        .await
        .inspect_err(|e| tracing::error!(err = %e, "an error occurred when fetching a random quote"))
        .map_err(QuoteError::storage("random"))?;

        row.map(Quote::from).ok_or(QuoteError::NotFound)
    }

    async fn delete(&self, id: QuoteId) -> Result<()> {
        require_positive_id(id)?;

        let result = sqlx::query("DELETE FROM quotes WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .inspect_err(|e| tracing::error!(err = %e, id, "an error occurred when deleting quote"))
            .map_err(QuoteError::storage("delete"))?;

        if result.rows_affected() == 0 {
            return Err(QuoteError::NotFound);
        }

        Ok(())
    }

    async fn exists(&self, author: &str, text: &str) -> Result<bool> {
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM quotes WHERE author = $1 AND quote = $2)")
            .bind(author)
            .bind(text)
            .fetch_one(&self.pool)
            .await
            .inspect_err(
                |e| tracing::error!(err = %e, "an error occurred when checking for an existing quote"),
            )
            .map_err(QuoteError::storage("exists"))
    }
}
