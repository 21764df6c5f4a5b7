//! # Client Dashboard
//!
//! Single-page client dashboard built with Leptos (WASM).
//!
//! ## Modules
//!
//! - [`bootstrap`]: Startup sequence (fetch runtime config, mount, publish)
//! - [`router`]: Route table, navigation state and transition selection
//! - [`state`]: Runtime store shared with every view
//! - [`theme`]: Transition stylesheet, dark mode and chart palette
//! - [`charts`]: Canvas bar charts
//! - [`views`]: Components rendered by the routes
//!
//! ## Startup
//!
//! ```rust,no_run
//! // In the wasm binary
//! client_dashboard::run();
//! ```

pub mod api;
pub mod app;
pub mod bootstrap;
pub mod charts;
pub mod components;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod router;
pub mod routes;
pub mod state;
pub mod theme;
pub mod views;

pub use bootstrap::{bootstrap, AppContext, ConfigSource, MountTarget};
pub use config::{AppConfig, RuntimeConfig};
pub use error::{BootstrapError, ConfigError, RouterError};

/// Start the dashboard in the browser
pub fn run() {
    console_error_panic_hook::set_once();

    let config = AppConfig::from_env();
    logging::init(&config.log_filter);
    tracing::info!(
        config_url = %config.config_url,
        mount_id = %config.mount_id,
        "Starting client dashboard v{}",
        env!("CARGO_PKG_VERSION")
    );

    wasm_bindgen_futures::spawn_local(async move {
        let source = api::HttpConfigSource::new(&config.config_url);
        let mut target = app::DomMount::new(&config.mount_id);

        match bootstrap(&source, &mut target, routes::app_routes()).await {
            Ok(_) => tracing::info!("Dashboard mounted"),
            Err(e) => tracing::error!("Startup failed: {}", e),
        }
    });
}
