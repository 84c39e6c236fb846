//! Table bootstrap for the quotes store
//!
//! Creates the table when it is missing and never alters an existing one.

use sqlx::PgPool;

/// DDL for the `quotes` table.
pub const QUOTES_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS quotes (
    id INTEGER PRIMARY KEY,
    author TEXT NOT NULL,
    quote TEXT NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
)
"#;

/// Create the `quotes` table if it does not exist.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    tracing::info!("ensuring quotes table exists...");
    sqlx::query(QUOTES_TABLE).execute(pool).await?;
    Ok(())
}
