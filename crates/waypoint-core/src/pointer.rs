//! Process-wide pointer event stream.
//!
//! Widgets that need to react to pointer presses anywhere in the window (for
//! example a dropdown that closes when the user clicks elsewhere) subscribe to
//! a [`PointerEventHub`]. The host feeds every raw press into the hub with
//! [`PointerEventHub::dispatch`] before routing it to the widget under the
//! pointer.
//!
//! Subscriptions are scoped: [`PointerEventHub::subscribe`] returns a
//! [`PointerSubscription`] that unsubscribes when dropped, so a widget that is
//! torn down can never receive a late event.
//!
//! ```
//! use waypoint_core::{MouseButton, Point, PointerEventHub, PointerPressEvent};
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use std::sync::Arc;
//!
//! let hub = PointerEventHub::new();
//! let presses = Arc::new(AtomicUsize::new(0));
//!
//! let presses_clone = presses.clone();
//! let subscription = hub.subscribe(move |_| {
//!     presses_clone.fetch_add(1, Ordering::SeqCst);
//! });
//!
//! hub.dispatch(PointerPressEvent::new(MouseButton::Left, Point::new(5.0, 5.0)));
//! drop(subscription);
//! hub.dispatch(PointerPressEvent::new(MouseButton::Left, Point::new(5.0, 5.0)));
//!
//! assert_eq!(presses.load(Ordering::SeqCst), 1);
//! ```

use std::sync::{Arc, OnceLock};

use crate::error::SignalError;
use crate::geometry::Point;
use crate::logging::{span_names, targets};
use crate::signal::{ConnectionGuard, Signal};

/// The process-wide hub shared by widgets that do not bring their own.
static POINTER_HUB: OnceLock<Arc<PointerEventHub>> = OnceLock::new();

/// Mouse buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum MouseButton {
    /// Primary button (usually left).
    Left = 0,
    /// Secondary button (usually right).
    Right = 1,
    /// Middle button (scroll wheel click).
    Middle = 2,
}

/// A pointer press anywhere in the window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerPressEvent {
    /// The button that was pressed.
    pub button: MouseButton,
    /// Position in window coordinates.
    pub pos: Point,
}

impl PointerPressEvent {
    /// Create a new pointer press event.
    pub fn new(button: MouseButton, pos: Point) -> Self {
        Self { button, pos }
    }
}

/// Broadcasts pointer presses to every live subscription.
#[derive(Debug, Default)]
pub struct PointerEventHub {
    presses: Signal<PointerPressEvent>,
}

impl PointerEventHub {
    /// Create a standalone hub.
    ///
    /// Most applications use [`PointerEventHub::global`]; a standalone hub is
    /// useful for tests and embedded views with their own input routing.
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// The process-wide hub.
    pub fn global() -> &'static Arc<PointerEventHub> {
        POINTER_HUB.get_or_init(|| {
            crate::waypoint_debug!("process-wide pointer hub created");
            PointerEventHub::new()
        })
    }

    /// Subscribe to pointer presses for as long as the returned guard lives.
    pub fn subscribe<F>(&self, handler: F) -> PointerSubscription
    where
        F: Fn(&PointerPressEvent) + Send + Sync + 'static,
    {
        let guard = self.presses.connect_scoped(handler);
        tracing::trace!(
            target: targets::POINTER,
            subscribers = self.presses.connection_count(),
            "pointer subscription acquired"
        );
        PointerSubscription { guard }
    }

    /// Deliver a press to every subscriber, in subscription order.
    pub fn dispatch(&self, event: PointerPressEvent) {
        let _span =
            tracing::trace_span!(target: targets::POINTER, "dispatch", subsystem = span_names::POINTER)
                .entered();
        tracing::trace!(target: targets::POINTER, x = event.pos.x, y = event.pos.y, button = ?event.button, "pointer press");
        self.presses.emit(event);
    }

    /// Number of live subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.presses.connection_count()
    }
}

/// A scoped subscription to a [`PointerEventHub`].
///
/// Dropping the subscription unsubscribes; this happens on every exit path,
/// including unwinding.
#[derive(Debug)]
pub struct PointerSubscription {
    guard: ConnectionGuard<PointerPressEvent>,
}

impl PointerSubscription {
    /// Whether the subscription is still registered on a live hub.
    pub fn is_active(&self) -> bool {
        self.guard.is_connected()
    }

    /// Unsubscribe explicitly, reporting a hub that is already gone.
    pub fn release(self) -> Result<(), SignalError> {
        let result = self.guard.disconnect();
        match &result {
            Ok(()) => tracing::trace!(target: targets::POINTER, "pointer subscription released"),
            Err(err) => crate::waypoint_warn!(error = %err, "pointer subscription release failed"),
        }
        result
    }
}
