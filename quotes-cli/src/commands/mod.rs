//! Command implementations for the quotes CLI

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use quotes_server::QuotesConfig;

pub mod init_schema;
pub mod serve;

pub use init_schema::run_init_schema;
pub use serve::run_serve;

/// Config file and database options shared by every command
#[derive(Args, Debug, Clone)]
pub struct ConfigArgs {
    /// Path to the YAML config file
    #[arg(long, short = 'c', env = "QUOTES_CONFIG", default_value = QuotesConfig::DEFAULT_PATH)]
    pub config: PathBuf,

    /// Database URL (overrides the database section of the config file)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,
}

impl ConfigArgs {
    /// Load the config file (defaults if missing) and apply overrides.
    pub fn load(&self) -> Result<QuotesConfig> {
        let mut config = QuotesConfig::load_or_default(&self.config)
            .with_context(|| format!("Failed to load config from {}", self.config.display()))?;

        if let Some(url) = &self.database_url {
            config.database.url = Some(url.clone());
        }

        Ok(config)
    }
}
