//! App Bootstrap
//!
//! Startup sequence: fetch the runtime configuration, build the app
//! context (store, router, chart plugin), mount the root component, then
//! publish the fetched configuration into the store.
//!
//! Nothing is mounted until the fetch resolves. A failed fetch aborts the
//! sequence before the store is written.

use leptos::SignalSet;

use crate::charts::ChartPlugin;
use crate::config::RuntimeConfig;
use crate::error::{BootstrapResult, ConfigError};
use crate::router::{AppRouter, RouteDef, RouteTable};
use crate::state::RuntimeStore;

/// Where the runtime configuration comes from
#[allow(async_fn_in_trait)]
pub trait ConfigSource {
    async fn load(&self) -> Result<RuntimeConfig, ConfigError>;
}

/// Where the application is mounted
pub trait MountTarget {
    fn mount(&mut self, context: AppContext) -> BootstrapResult<()>;
}

/// Everything installed into the root component
#[derive(Clone)]
pub struct AppContext {
    pub store: RuntimeStore,
    pub router: AppRouter,
    pub charts: ChartPlugin,
}

impl AppContext {
    pub fn new(routes: Vec<RouteDef>) -> BootstrapResult<Self> {
        let table = RouteTable::new(routes)?;
        Ok(Self {
            store: RuntimeStore::new(),
            router: AppRouter::new(table),
            charts: ChartPlugin::default(),
        })
    }
}

/// Run the startup sequence
pub async fn bootstrap<S, M>(
    source: &S,
    target: &mut M,
    routes: Vec<RouteDef>,
) -> BootstrapResult<AppContext>
where
    S: ConfigSource,
    M: MountTarget,
{
    let config = source.load().await?;
    tracing::info!(client = ?config.client_name(), "runtime configuration loaded");

    let context = AppContext::new(routes)?;
    target.mount(context.clone())?;

    // Replaces the default document wholesale
    context.store.config_options.set(config);
    Ok(context)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BootstrapError;
    use crate::routes::app_routes;
    use futures::executor::block_on;
    use leptos::*;
    use serde_json::json;

    struct StaticSource(Result<serde_json::Value, ConfigError>);

    impl ConfigSource for StaticSource {
        async fn load(&self) -> Result<RuntimeConfig, ConfigError> {
            self.0.clone().map(RuntimeConfig)
        }
    }

    #[derive(Default)]
    struct RecordingMount {
        mounted: bool,
        config_at_mount: Option<RuntimeConfig>,
        context: Option<AppContext>,
        fail_with: Option<BootstrapError>,
    }

    impl MountTarget for RecordingMount {
        fn mount(&mut self, context: AppContext) -> BootstrapResult<()> {
            self.context = Some(context.clone());
            if let Some(err) = self.fail_with.take() {
                return Err(err);
            }
            self.mounted = true;
            self.config_at_mount = Some(context.store.config_options.get_untracked());
            Ok(())
        }
    }

    #[test]
    fn test_config_published_after_mount() {
        let runtime = create_runtime();

        let source = StaticSource(Ok(json!({ "clientName": "Acme" })));
        let mut target = RecordingMount::default();
        let context = block_on(bootstrap(&source, &mut target, app_routes())).unwrap();

        assert!(target.mounted);
        assert_eq!(target.config_at_mount, Some(RuntimeConfig::default()));
        assert_eq!(
            context.store.config_options.get_untracked().value(),
            &json!({ "clientName": "Acme" })
        );

        runtime.dispose();
    }

    #[test]
    fn test_default_is_discarded_entirely() {
        let runtime = create_runtime();

        let source = StaticSource(Ok(json!({ "features": ["charts"] })));
        let mut target = RecordingMount::default();
        let context = block_on(bootstrap(&source, &mut target, app_routes())).unwrap();

        let config = context.store.config_options.get_untracked();
        assert_eq!(config.client_name(), None);
        assert_eq!(config.value(), &json!({ "features": ["charts"] }));

        runtime.dispose();
    }

    #[test]
    fn test_http_error_aborts_before_mount() {
        let runtime = create_runtime();

        let source = StaticSource(Err(ConfigError::Status {
            status: 500,
            status_text: "Internal Server Error".to_string(),
        }));
        let mut target = RecordingMount::default();
        let result = block_on(bootstrap(&source, &mut target, app_routes()));

        assert!(matches!(
            result,
            Err(BootstrapError::Config(ConfigError::Status { status: 500, .. }))
        ));
        assert!(!target.mounted);
        assert!(target.config_at_mount.is_none());
        assert!(target.context.is_none());

        runtime.dispose();
    }

    #[test]
    fn test_parse_error_aborts() {
        let runtime = create_runtime();

        let source = StaticSource(Err(ConfigError::Parse("expected value".to_string())));
        let mut target = RecordingMount::default();
        let result = block_on(bootstrap(&source, &mut target, app_routes()));

        assert!(matches!(result, Err(BootstrapError::Config(ConfigError::Parse(_)))));
        assert!(!target.mounted);

        runtime.dispose();
    }

    #[test]
    fn test_mount_failure_leaves_store_untouched() {
        let runtime = create_runtime();

        let source = StaticSource(Ok(json!({ "clientName": "Acme" })));
        let mut target = RecordingMount {
            fail_with: Some(BootstrapError::MountPointMissing("app".to_string())),
            ..Default::default()
        };
        let result = block_on(bootstrap(&source, &mut target, app_routes()));

        assert!(matches!(result, Err(BootstrapError::MountPointMissing(_))));
        assert!(!target.mounted);

        let context = target.context.take().unwrap();
        assert_eq!(
            context.store.config_options.get_untracked(),
            RuntimeConfig::default()
        );
        assert_eq!(context.store.client_name.get_untracked(), "");

        runtime.dispose();
    }
}
