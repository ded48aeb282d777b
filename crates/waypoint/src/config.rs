//! Route planner configuration.
//!
//! Configuration is read from TOML. Every key is optional:
//!
//! ```toml
//! endpoint = "http://127.0.0.1:8000"
//! timeout_secs = 30
//! default_priority = "T"
//! from_placeholder = "Start typing a city…"
//! to_placeholder = "Search destination…"
//! ```

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;
use waypoint_net::{Priority, RouteSearchClient};

use crate::error::ConfigError;

/// Settings for a [`RoutePlanner`](crate::planner::RoutePlanner).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlannerConfig {
    /// Base URL of the route-search endpoint.
    pub endpoint: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
    /// Priority selected when the page opens.
    pub default_priority: Priority,
    /// Placeholder for the origin input.
    pub from_placeholder: String,
    /// Placeholder for the destination input.
    pub to_placeholder: String,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://127.0.0.1:8000".to_string(),
            timeout_secs: 30,
            default_priority: Priority::Time,
            from_placeholder: "Start typing a city…".to_string(),
            to_placeholder: "Search destination…".to_string(),
        }
    }
}

impl PlannerConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(
            target: waypoint_core::logging::targets::PLANNER,
            path = %path.display(),
            endpoint = %config.endpoint,
            "loaded planner config"
        );
        Ok(config)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// The request timeout.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Build a route-search client for the configured endpoint.
    pub fn route_client(&self) -> waypoint_net::Result<RouteSearchClient> {
        RouteSearchClient::new(&self.endpoint, self.timeout())
    }
}
