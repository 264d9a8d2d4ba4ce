//! Application state for the Overtime Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::ConfigLoader;
use crate::store::{EntryLedger, InMemoryStore};

/// Shared application state.
///
/// Contains resources that are shared across all request handlers: the
/// loaded policy and the entry ledger.
#[derive(Clone)]
pub struct AppState {
    /// The loaded overtime policy.
    config: Arc<ConfigLoader>,
    /// Stored entries.
    ledger: Arc<EntryLedger<InMemoryStore>>,
}

impl AppState {
    /// Creates application state with an empty in-memory ledger.
    pub fn new(config: ConfigLoader) -> Self {
        let ledger = EntryLedger::new(InMemoryStore::default(), config.policy().clone());
        Self {
            config: Arc::new(config),
            ledger: Arc::new(ledger),
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns the entry ledger.
    pub fn ledger(&self) -> &EntryLedger<InMemoryStore> {
        &self.ledger
    }
}
