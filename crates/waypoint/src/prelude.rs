//! Prelude module for Waypoint.
//!
//! ```ignore
//! use waypoint::prelude::*;
//! ```
//!
//! This provides access to:
//! - Signal/slot system and the pointer event hub
//! - Widget foundation (`Widget`, `WidgetEvent`, key and pointer events)
//! - The standard widgets (`ComboBox`, `PrioritySelect`)
//! - The route planner page and its configuration
//! - Geometry types (`Point`, `Size`, `Rect`)

// ============================================================================
// Core
// ============================================================================

pub use waypoint_core::{
    ConnectionGuard, ConnectionId, MouseButton, Point, PointerEventHub, PointerPressEvent, Rect,
    Signal, Size,
};

// ============================================================================
// Widgets
// ============================================================================

pub use crate::widget::widgets::{
    ComboBox, ComboBoxProps, ComboBoxState, ComboBoxView, DropdownRow, MAX_RESULTS,
    PrioritySelect, filter,
};
pub use crate::widget::{Key, KeyPressEvent, KeyboardModifiers, Widget, WidgetEvent};

// ============================================================================
// Planner
// ============================================================================

pub use crate::config::PlannerConfig;
pub use crate::planner::{CITIES, PlannerAction, RoutePlanner, SearchState};
pub use waypoint_net::{Priority, RouteQuery, RouteResult};
