//! Logging facilities for Waypoint.
//!
//! Waypoint uses the `tracing` crate for instrumentation. To see logs,
//! install a tracing subscriber in your application:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("waypoint=debug,waypoint_core=trace")
//!     .init();
//! ```
//!
//! The constants in [`targets`] name the subsystems so they can be used in
//! filter directives. [`waypoint_debug!`](crate::waypoint_debug) and
//! [`waypoint_warn!`](crate::waypoint_warn) log on the core target itself.

/// Span names used throughout Waypoint for tracing.
pub mod span_names {
    /// Pointer event dispatch span.
    pub const POINTER: &str = "waypoint::pointer";
    /// Route search span.
    pub const SEARCH: &str = "waypoint::search";
}

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core framework target.
    pub const CORE: &str = "waypoint_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "waypoint_core::signal";
    /// Pointer event hub target.
    pub const POINTER: &str = "waypoint_core::pointer";
    /// Combo box widget target.
    pub const COMBO_BOX: &str = "waypoint::combo_box";
    /// Route planner page target.
    pub const PLANNER: &str = "waypoint::planner";
    /// HTTP client target.
    pub const HTTP: &str = "waypoint_net::http";
}

/// Log on the core target.
///
/// Used for hub and subscription lifecycle events that are not tied to one
/// subsystem target.
#[macro_export]
macro_rules! waypoint_debug {
    ($($arg:tt)*) => {
        tracing::debug!(target: "waypoint_core", $($arg)*)
    };
}

/// Warn on the core target.
#[macro_export]
macro_rules! waypoint_warn {
    ($($arg:tt)*) => {
        tracing::warn!(target: "waypoint_core", $($arg)*)
    };
}
