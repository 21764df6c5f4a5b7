//! Configuration System
//!
//! Build-time application settings (where to fetch the runtime document,
//! where to mount, how much to log) and the opaque runtime configuration
//! document fetched at startup.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Build-time application settings
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// URL of the runtime configuration document
    pub config_url: String,
    /// Id of the element the app mounts into
    pub mount_id: String,
    /// `EnvFilter` directives for the console logger
    pub log_filter: String,
}

fn default_config_url() -> String {
    "/config.json".to_string()
}

fn default_mount_id() -> String {
    "app".to_string()
}

fn default_log_filter() -> String {
    "client_dashboard=info".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            config_url: default_config_url(),
            mount_id: default_mount_id(),
            log_filter: default_log_filter(),
        }
    }
}

impl AppConfig {
    /// Load settings baked in at compile time, falling back to defaults
    pub fn from_env() -> Self {
        Self::from_lookup(|key| match key {
            "DASHBOARD_CONFIG_URL" => option_env!("DASHBOARD_CONFIG_URL"),
            "DASHBOARD_MOUNT_ID" => option_env!("DASHBOARD_MOUNT_ID"),
            "DASHBOARD_LOG" => option_env!("DASHBOARD_LOG"),
            _ => None,
        })
    }

    fn from_lookup<'a>(lookup: impl Fn(&str) -> Option<&'a str>) -> Self {
        let read = |key: &str, default: fn() -> String| {
            lookup(key)
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_string)
                .unwrap_or_else(default)
        };

        Self {
            config_url: read("DASHBOARD_CONFIG_URL", default_config_url),
            mount_id: read("DASHBOARD_MOUNT_ID", default_mount_id),
            log_filter: read("DASHBOARD_LOG", default_log_filter),
        }
    }
}

/// Runtime configuration document
///
/// Any JSON value is accepted and kept verbatim; consumers pick the keys
/// they understand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuntimeConfig(pub Value);

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self(serde_json::json!({ "clientName": "New Client" }))
    }
}

impl RuntimeConfig {
    /// The `clientName` key, when present and a string
    pub fn client_name(&self) -> Option<&str> {
        self.0.get("clientName").and_then(Value::as_str)
    }

    pub fn value(&self) -> &Value {
        &self.0
    }
}

impl From<Value> for RuntimeConfig {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.config_url, "/config.json");
        assert_eq!(config.mount_id, "app");
        assert_eq!(config.log_filter, "client_dashboard=info");
    }

    #[test]
    fn test_lookup_overrides_and_blank_values() {
        let config = AppConfig::from_lookup(|key| match key {
            "DASHBOARD_CONFIG_URL" => Some("/static/runtime.json"),
            "DASHBOARD_MOUNT_ID" => Some("   "),
            _ => None,
        });
        assert_eq!(config.config_url, "/static/runtime.json");
        assert_eq!(config.mount_id, "app");
        assert_eq!(config.log_filter, "client_dashboard=info");
    }

    #[test]
    fn test_runtime_config_default() {
        let config = RuntimeConfig::default();
        assert_eq!(config.client_name(), Some("New Client"));
    }

    #[test]
    fn test_runtime_config_is_opaque() {
        let config: RuntimeConfig = serde_json::from_str("[1, 2, 3]").unwrap();
        assert_eq!(config.value(), &serde_json::json!([1, 2, 3]));
        assert_eq!(config.client_name(), None);

        let config: RuntimeConfig =
            serde_json::from_str(r#"{"clientName": "Acme", "extra": {"a": 1}}"#).unwrap();
        assert_eq!(config.client_name(), Some("Acme"));
        assert_eq!(config.value()["extra"]["a"], 1);
    }
}
