//! Application state shared across handlers

use crate::service::QuoteService;

/// Shared application state. Cloned per request; the store behind the
/// service is reference-counted.
#[derive(Clone)]
pub struct AppState {
    service: QuoteService,
}

impl AppState {
    pub fn new(service: QuoteService) -> Self {
        Self { service }
    }

    pub fn service(&self) -> &QuoteService {
        &self.service
    }
}
