//! Database layer - connection pool and quote stores
//!
//! - `QuoteStore` is the seam the service depends on
//! - `PgQuoteStore` is the production implementation
//! - `MemoryQuoteStore` backs tests and `serve --memory`

pub mod memory;
pub mod pool;
pub mod postgres;
pub mod schema;
pub mod store;

pub use memory::MemoryQuoteStore;
pub use pool::{connect_options, create_pool};
pub use postgres::PgQuoteStore;
pub use schema::ensure_schema;
pub use store::QuoteStore;
