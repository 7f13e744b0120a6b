//! Shared application state.
//!
//! `AppState` is injected into Axum handlers via the `State` extractor. It only
//! carries the immutable configuration; the board itself lives in the browser.

use std::sync::Arc;

use crate::config::ServerConfig;

/// Clone is required by Axum; the config is behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
}

impl AppState {
    #[must_use]
    pub fn new(config: ServerConfig) -> Self {
        Self { config: Arc::new(config) }
    }
}
