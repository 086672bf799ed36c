//! Application state for the budget API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::ConfigLoader;
use crate::storage::BudgetStore;

/// Shared application state.
///
/// Holds the loaded configuration and the store submitted budgets are
/// persisted to. The store is injected so handlers never reach for
/// ambient global state.
#[derive(Clone)]
pub struct AppState {
    /// The loaded engine configuration.
    config: Arc<ConfigLoader>,
    /// Where submitted budgets are saved.
    store: Arc<dyn BudgetStore>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(config: ConfigLoader, store: impl BudgetStore + 'static) -> Self {
        Self {
            config: Arc::new(config),
            store: Arc::new(store),
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns the budget store.
    pub fn store(&self) -> &dyn BudgetStore {
        self.store.as_ref()
    }

    /// Returns an owned handle to the budget store, for use off the
    /// request task.
    pub fn shared_store(&self) -> Arc<dyn BudgetStore> {
        Arc::clone(&self.store)
    }
}
