//! Error types for Waypoint core systems.

/// Signal-specific errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SignalError {
    /// The connection ID is invalid or has already been disconnected.
    #[error("Invalid or disconnected connection ID")]
    InvalidConnection,
    /// The signal has been dropped and is no longer available.
    #[error("Signal has been dropped")]
    SignalDropped,
}

/// The main error type for Waypoint core operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Signal-related error.
    #[error("Signal error: {0}")]
    Signal(#[from] SignalError),
}

/// A specialized Result type for Waypoint core operations.
pub type Result<T> = std::result::Result<T, Error>;
