//! Shared application state for the HTTP layer

use std::sync::Arc;

use rolodex_core::PersonService;

/// State handed to every handler: the service, behind an Arc so the router
/// can be cloned freely
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<PersonService>,
}

impl AppState {
    /// Wrap a service for use as router state
    pub fn new(service: PersonService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }
}
