//! Error types for the Waypoint widgets and planner.

use std::path::PathBuf;

use thiserror::Error;
use waypoint_net::NetworkError;

/// Errors from loading a [`PlannerConfig`](crate::config::PlannerConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The file is not valid TOML or has values of the wrong type.
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Errors surfaced by the Waypoint crate.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// The route-search client could not be set up.
    #[error(transparent)]
    Network(#[from] NetworkError),
    /// A core subsystem reported a failure.
    #[error(transparent)]
    Core(#[from] waypoint_core::Error),
}

/// A specialized Result type for Waypoint operations.
pub type Result<T> = std::result::Result<T, Error>;
