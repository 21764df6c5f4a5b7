//! Runtime Store
//!
//! Holds the client name and the runtime configuration document. The store
//! has no actions: any component holding it may read or overwrite either
//! field, and signal propagation is the only change notification.

use leptos::*;

use crate::config::RuntimeConfig;

/// Runtime state shared with every view
#[derive(Clone, Copy)]
pub struct RuntimeStore {
    /// Name of the client this dashboard is deployed for
    pub client_name: RwSignal<String>,
    /// Runtime configuration document, replaced once after mount
    pub config_options: RwSignal<RuntimeConfig>,
}

impl RuntimeStore {
    pub fn new() -> Self {
        Self {
            client_name: create_rw_signal(String::new()),
            config_options: create_rw_signal(RuntimeConfig::default()),
        }
    }
}

impl Default for RuntimeStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Provide the store to the component tree
pub fn provide_runtime_store(store: RuntimeStore) {
    provide_context(store);
}
