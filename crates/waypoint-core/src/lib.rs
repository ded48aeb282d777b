//! Core systems for Waypoint.
//!
//! This crate provides the foundational pieces the Waypoint widgets are built
//! on:
//!
//! - **Signal/Slot System**: Type-safe notification from widgets to their owners
//! - **Pointer Event Hub**: A process-wide stream of pointer presses with scoped subscriptions
//! - **Geometry**: Points, sizes and rectangles for layout and hit testing
//! - **Logging**: Tracing targets and helper macros
//!
//! # Signal/Slot Example
//!
//! ```
//! use waypoint_core::Signal;
//!
//! let value_changed = Signal::<String>::new();
//!
//! let conn_id = value_changed.connect(|value| {
//!     println!("Value changed to: {}", value);
//! });
//!
//! value_changed.emit("Denver (DEN)".to_string());
//! value_changed.disconnect(conn_id);
//! ```

mod error;
pub mod geometry;
pub mod logging;
pub mod pointer;
pub mod signal;

pub use error::{Error, Result, SignalError};
pub use geometry::{Point, Rect, Size};
pub use pointer::{MouseButton, PointerEventHub, PointerPressEvent, PointerSubscription};
pub use signal::{ConnectionGuard, ConnectionId, Signal};
