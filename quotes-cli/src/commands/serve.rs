//! HTTP server command
//!
//! Resolves config, builds the store, and runs the quotes API until
//! shutdown.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

use quotes_server::db::{create_pool, ensure_schema, MemoryQuoteStore, PgQuoteStore};
use quotes_server::http::{run_server, ServerConfig};
use quotes_server::QuoteService;

use super::ConfigArgs;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    #[command(flatten)]
    pub config: ConfigArgs,

    /// Address to bind to (overrides server.host/server.port)
    #[arg(long, short = 'b', env = "QUOTES_BIND")]
    pub bind: Option<SocketAddr>,

    /// Request timeout in seconds (overrides server.request_timeout_secs)
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Keep quotes in process memory instead of PostgreSQL
    #[arg(long, conflicts_with = "init_schema")]
    pub memory: bool,

    /// Create the quotes table before serving if it does not exist
    #[arg(long)]
    pub init_schema: bool,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let config = args.config.load()?;

    let mut server_config =
        ServerConfig::try_from(&config.server).context("Invalid server configuration")?;
    if let Some(bind) = args.bind {
        server_config.bind_addr = bind;
    }
    if let Some(secs) = args.timeout {
        server_config.request_timeout = Duration::from_secs(secs);
    }

    if args.memory {
        tracing::warn!("using in-memory store - quotes will be lost on shutdown");
        let service = QuoteService::new(Arc::new(MemoryQuoteStore::new()));
        return run_server(service, server_config)
            .await
            .context("Server error");
    }

    tracing::info!("initializing database connection...");
    let pool = create_pool(&config.database)
        .await
        .context("Failed to create database pool")?;

    if args.init_schema {
        ensure_schema(&pool)
            .await
            .context("Failed to create quotes table")?;
    }

    let service = QuoteService::new(Arc::new(PgQuoteStore::new(pool.clone())));

    tracing::info!("Starting quotes server on {}", server_config.bind_addr);
    let result = run_server(service, server_config).await;

    tracing::info!("closing database pool...");
    pool.close().await;

    result.context("Server error")
}
