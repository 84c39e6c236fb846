//! One-shot table bootstrap

use anyhow::{Context, Result};
use clap::Parser;

use quotes_server::db::{create_pool, ensure_schema};

use super::ConfigArgs;

#[derive(Parser, Debug)]
pub struct InitSchemaArgs {
    #[command(flatten)]
    pub config: ConfigArgs,
}

pub async fn run_init_schema(args: InitSchemaArgs) -> Result<()> {
    let config = args.config.load()?;

    let pool = create_pool(&config.database)
        .await
        .context("Failed to create database pool")?;

    ensure_schema(&pool)
        .await
        .context("Failed to create quotes table")?;
    pool.close().await;

    tracing::info!("quotes table is ready");
    Ok(())
}
