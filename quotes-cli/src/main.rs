//! quotes - HTTP service for storing and serving quotes
//!
//! - `quotes serve`: run the HTTP API
//! - `quotes init-schema`: create the `quotes` table if it is missing

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "quotes",
    author,
    version,
    about = "Store, list, and serve quotes over HTTP"
)]
struct Cli {
    /// Enable debug logging (ignored when RUST_LOG is set)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API server
    Serve(commands::serve::ServeArgs),
    /// Create the quotes table if it does not exist
    InitSchema(commands::init_schema::InitSchemaArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // .env is optional
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();
    tracing_setup::init_tracing(cli.debug).ok();

    match cli.command {
        Commands::Serve(args) => commands::run_serve(args).await?,
        Commands::InitSchema(args) => commands::run_init_schema(args).await?,
    }

    Ok(())
}
