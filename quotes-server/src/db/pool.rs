//! Database connection pool management
//!
//! Uses sqlx PgPool with explicit connection limits.

use std::str::FromStr;

use sqlx::postgres::{PgConnectOptions, PgPoolOptions, PgSslMode};
use sqlx::PgPool;

use crate::config::DatabaseConfig;

/// Default maximum connections for the pool.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Build connection options from config.
///
/// A configured `url` wins over the discrete host/port/user fields.
pub fn connect_options(config: &DatabaseConfig) -> Result<PgConnectOptions, sqlx::Error> {
    if let Some(url) = config.url.as_deref() {
        return PgConnectOptions::from_str(url);
    }

    let ssl_mode = PgSslMode::from_str(&config.sslmode)?;
    let mut options = PgConnectOptions::new()
        .host(&config.host)
        .port(config.port)
        .username(&config.user)
        .database(&config.dbname)
        .ssl_mode(ssl_mode);

    if !config.password.is_empty() {
        options = options.password(&config.password);
    }

    Ok(options)
}

/// Create a PostgreSQL connection pool.
///
/// # Errors
///
/// Returns an error if the options are invalid or the connection fails.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool(&DatabaseConfig::default()).await?;
/// ```
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    let options = connect_options(config)?;
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(options)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_from_discrete_fields() {
        let config = DatabaseConfig {
            host: "db.internal".into(),
            port: 6543,
            user: "quotes".into(),
            password: "secret".into(),
            dbname: "quotes_test".into(),
            ..DatabaseConfig::default()
        };

        let options = connect_options(&config).unwrap();
        assert_eq!(options.get_host(), "db.internal");
        assert_eq!(options.get_port(), 6543);
        assert_eq!(options.get_username(), "quotes");
        assert_eq!(options.get_database(), Some("quotes_test"));
    }

    #[test]
    fn url_overrides_fields() {
        let config = DatabaseConfig {
            url: Some("postgres://alice@elsewhere:7000/archive".into()),
            ..DatabaseConfig::default()
        };

        let options = connect_options(&config).unwrap();
        assert_eq!(options.get_host(), "elsewhere");
        assert_eq!(options.get_port(), 7000);
        assert_eq!(options.get_username(), "alice");
        assert_eq!(options.get_database(), Some("archive"));
    }

    #[test]
    fn rejects_unknown_sslmode() {
        let config = DatabaseConfig {
            sslmode: "sometimes".into(),
            ..DatabaseConfig::default()
        };
        assert!(connect_options(&config).is_err());
    }

    // Integration tests require a real database
    // Run with: DATABASE_URL=postgres://... cargo test -p quotes-server -- --ignored

    #[tokio::test]
    #[ignore = "requires database"]
    async fn pool_acquires_connection() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let config = DatabaseConfig {
            url: Some(url),
            ..DatabaseConfig::default()
        };
        let pool = create_pool(&config).await.expect("pool creation failed");

        let result: (i32,) = sqlx::query_as("SELECT 1")
            .fetch_one(&pool)
            .await
            .expect("query failed");

        assert_eq!(result.0, 1);
    }
}
