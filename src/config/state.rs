// Application state module
// Immutable runtime state shared across connection tasks

use std::sync::atomic::AtomicBool;

use super::types::Config;
use crate::descriptor::DescriptorStore;

/// Shared application state
///
/// Everything here is read-only after startup, so the state is shared
/// across concurrent requests without synchronization. Holding an
/// already-loaded `DescriptorStore` is what makes the router safe to start:
/// no handler path can observe the store mid-initialization.
pub struct AppState {
    pub config: Config,
    pub store: DescriptorStore,
    /// Resolved once so the manifest and `/openapi.json` fallback agree
    pub base_url: String,
    /// Cached flag for lock-free reads on the request path
    pub cached_access_log: AtomicBool,
}

impl AppState {
    pub fn new(config: Config, store: DescriptorStore) -> Self {
        let base_url = config.base_url();
        let cached_access_log = AtomicBool::new(config.logging.access_log);
        Self {
            config,
            store,
            base_url,
            cached_access_log,
        }
    }
}
