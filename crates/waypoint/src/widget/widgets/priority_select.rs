//! Route priority selector.

use waypoint_core::logging::targets;
use waypoint_core::{MouseButton, Rect, Signal};
use waypoint_net::Priority;

use crate::widget::{Key, Widget, WidgetEvent};

/// A two-way choice between the fastest and the cheapest route.
///
/// Arrow keys step through [`Priority::ALL`]; a primary press cycles to the
/// next choice.
///
/// # Signals
///
/// - `priority_changed(Priority)`: Emitted when the selection changes
#[derive(Debug)]
pub struct PrioritySelect {
    geometry: Rect,
    value: Priority,

    /// Signal emitted when the selected priority changes.
    pub priority_changed: Signal<Priority>,
}

impl PrioritySelect {
    /// Create a selector showing `value`.
    pub fn new(value: Priority) -> Self {
        Self {
            geometry: Rect::ZERO,
            value,
            priority_changed: Signal::new(),
        }
    }

    /// The caption shown above the selector.
    pub fn label(&self) -> &'static str {
        "Priority"
    }

    /// The selected priority.
    pub fn value(&self) -> Priority {
        self.value
    }

    /// The choices with their display labels, in order.
    pub fn choices(&self) -> [(Priority, &'static str); 2] {
        Priority::ALL.map(|p| (p, p.label()))
    }

    /// Select `value`, emitting `priority_changed` if it differs.
    pub fn set_value(&mut self, value: Priority) {
        if self.value == value {
            return;
        }
        self.value = value;
        tracing::trace!(target: targets::PLANNER, priority = value.token(), "priority changed");
        self.priority_changed.emit(value);
    }

    fn position(&self) -> usize {
        Priority::ALL
            .iter()
            .position(|p| *p == self.value)
            .unwrap_or_default()
    }

    fn step(&mut self, forward: bool) {
        let index = self.position();
        let next = if forward {
            (index + 1).min(Priority::ALL.len() - 1)
        } else {
            index.saturating_sub(1)
        };
        self.set_value(Priority::ALL[next]);
    }
}

impl Default for PrioritySelect {
    fn default() -> Self {
        Self::new(Priority::default())
    }
}

impl Widget for PrioritySelect {
    fn geometry(&self) -> Rect {
        self.geometry
    }

    fn set_geometry(&mut self, rect: Rect) {
        self.geometry = rect;
    }

    fn event(&mut self, event: &WidgetEvent) -> bool {
        match event {
            WidgetEvent::KeyPress(e) => match e.key {
                Key::ArrowDown => {
                    self.step(true);
                    true
                }
                Key::ArrowUp => {
                    self.step(false);
                    true
                }
                _ => false,
            },
            WidgetEvent::MousePress(e) if e.button == MouseButton::Left => {
                let next = (self.position() + 1) % Priority::ALL.len();
                self.set_value(Priority::ALL[next]);
                true
            }
            _ => false,
        }
    }
}
