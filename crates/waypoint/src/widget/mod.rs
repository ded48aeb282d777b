//! Widget system for Waypoint.
//!
//! Widgets here are headless: they keep their own state, react to typed input
//! events and describe what should be drawn through a view model instead of
//! painting. The host owns layout and rendering.
//!
//! # Core Concepts
//!
//! - [`Widget`]: The trait every interactive control implements
//! - [`WidgetEvent`]: Keyboard, pointer and focus input delivered to a widget
//! - Geometry: each widget occupies a rectangle in window coordinates; its
//!   [`hit_region`](Widget::hit_region) may extend past that rectangle while
//!   a popup is showing
//!
//! # Event Handling
//!
//! [`Widget::event`] returns `true` when the widget consumed the event. For
//! key presses this tells the host to suppress its default handling.

mod events;
pub mod widgets;

pub use events::{
    Key, KeyPressEvent, KeyboardModifiers, MouseMoveEvent, MousePressEvent, WidgetEvent,
};

use waypoint_core::Rect;

/// The interface shared by all interactive controls.
pub trait Widget {
    /// The widget's rectangle in window coordinates.
    fn geometry(&self) -> Rect;

    /// Place the widget.
    fn set_geometry(&mut self, rect: Rect);

    /// The area in window coordinates that belongs to the widget.
    ///
    /// Defaults to [`geometry`](Widget::geometry). Widgets with popups return
    /// the union of their geometry and the visible popup.
    fn hit_region(&self) -> Rect {
        self.geometry()
    }

    /// Handle an input event, returning whether it was consumed.
    fn event(&mut self, event: &WidgetEvent) -> bool;
}
