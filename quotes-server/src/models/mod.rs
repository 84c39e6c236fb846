//! Domain models
//!
//! Invalid input returns ValidationError, not panic.

pub mod quote;
pub mod validation;

pub use quote::{NewQuote, Quote, QuoteId};
pub use validation::ValidationError;
