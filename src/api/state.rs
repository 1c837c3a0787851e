//! Application state for the shipping calculator API.
//!
//! This module defines the shared application state that is available
//! to all request handlers. It is read-only after startup.

use std::sync::Arc;

use crate::config::{ConfigLoader, RateTable};

/// Shared application state.
#[derive(Clone, Default)]
pub struct AppState {
    /// The loaded service configuration.
    config: Arc<ConfigLoader>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns the rates applied to every quote.
    pub fn rates(&self) -> &RateTable {
        self.config.rates()
    }
}
