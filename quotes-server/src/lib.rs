//! quotes-server: HTTP service for quotes
//!
//! Layers, leaf-first:
//! - `models`: the quote record and input validation
//! - `db`: the `QuoteStore` boundary with PostgreSQL and in-memory stores
//! - `service`: validation in front of the store
//! - `http`: axum routes mapping outcomes to status codes

pub mod config;
pub mod db;
pub mod error;
pub mod http;
pub mod models;
pub mod service;
pub mod state;

pub use config::{ConfigError, QuotesConfig};
pub use error::{QuoteError, Result};
pub use service::QuoteService;
pub use state::AppState;
