//! Waypoint - headless searchable selection widgets and a route planner page.
//!
//! This is the main crate that re-exports the core systems and adds:
//!
//! - [`widget`]: Input events, the [`Widget`](widget::Widget) trait and the
//!   standard widgets ([`ComboBox`](widget::widgets::ComboBox),
//!   [`PrioritySelect`](widget::widgets::PrioritySelect))
//! - [`planner`]: The travel-search page that owns two city pickers
//! - [`config`]: TOML configuration for the page
//!
//! # Example
//!
//! ```no_run
//! use waypoint::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut planner = RoutePlanner::new(&PlannerConfig::default())?;
//!     planner.from_box_mut().set_query("atl");
//!     planner.from_box_mut().commit(0);
//!     planner.to_box_mut().set_query("den");
//!     planner.to_box_mut().commit(0);
//!
//!     println!("{}", planner.summary());
//!     planner.search().await;
//!     Ok(())
//! }
//! ```

pub use waypoint_core::*;

/// Networking: HTTP client and route search.
pub mod net {
    pub use waypoint_net::*;
}

pub mod config;
mod error;
pub mod planner;
pub mod prelude;
pub mod widget;

pub use config::PlannerConfig;
pub use error::{ConfigError, Error, Result};
