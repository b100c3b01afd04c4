//! Configuration schema definitions.
//!
//! Every section is optional; a missing file section takes its defaults.

use serde::{Deserialize, Serialize};

use crate::routing::RouterOptions;

/// Root configuration for the `hsh` runtime.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Prefix, index path and dispatch mode.
    pub router: RouterOptions,

    /// Route table, in priority order.
    pub routes: Vec<RouteConfig>,

    /// Fragment polling.
    pub runtime: RuntimeConfig,

    /// Logging and metrics.
    pub observability: ObservabilityConfig,
}

/// One entry of the route table.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct RouteConfig {
    /// Label used in logs. Defaults to the pattern.
    #[serde(default)]
    pub name: Option<String>,

    /// Path template, or a regular expression when `raw` is set.
    pub pattern: String,

    /// Treat `pattern` as a regular expression.
    #[serde(default)]
    pub raw: bool,

    /// What the handler does.
    #[serde(default)]
    pub action: RouteAction,

    /// Continue to the next route after the action (chain mode only).
    #[serde(default)]
    pub next: bool,
}

impl RouteConfig {
    pub fn label(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.pattern)
    }
}

/// Built-in handler behaviours available from configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RouteAction {
    /// Log the dispatch.
    #[default]
    Log,
    /// Redirect inside the application.
    Redirect { to: String },
    /// Leave the application.
    External { url: String },
}

/// Fragment polling configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct RuntimeConfig {
    /// How often the location is checked for a new fragment.
    pub poll_interval_ms: u64,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: 500,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable the Prometheus endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "127.0.0.1:9090".to_string(),
        }
    }
}
