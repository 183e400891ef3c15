//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the meme store behind a trait object and the parsed configuration.

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::services::store::MemeStore;

/// Shared application state, injected into Axum handlers via State extractor.
/// Cheap to clone: every field is an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn MemeStore>,
    pub config: Arc<ServerConfig>,
}

impl AppState {
    #[must_use]
    pub fn new(store: Arc<dyn MemeStore>, config: ServerConfig) -> Self {
        Self { store, config: Arc::new(config) }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
