//! Shared application state injected into all handlers.

use std::sync::Arc;

use crate::application::services::LinkService;
use crate::domain::repositories::UrlStore;

/// State cloned into every request handler.
///
/// Built explicitly at startup (or per test) around a chosen store, so no
/// handler reaches for process-wide globals.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService>,
    /// Base URL for returned short links. Derived from each request when `None`.
    pub public_base_url: Option<Arc<str>>,
}

impl AppState {
    /// Creates state over the given store.
    pub fn new(store: Arc<dyn UrlStore>, public_base_url: Option<String>) -> Self {
        Self {
            link_service: Arc::new(LinkService::new(store)),
            public_base_url: public_base_url.map(Arc::from),
        }
    }
}
