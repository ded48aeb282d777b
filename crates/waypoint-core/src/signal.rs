//! Signal/slot system for Waypoint.
//!
//! This module provides a type-safe, Qt-inspired signal/slot mechanism for
//! notifying owners about widget state changes. Signals are emitted by widgets
//! when something observable happens (a combo box commits a value, a selector
//! changes priority), and connected slots (callbacks) are invoked in response.
//!
//! # Key Types
//!
//! - [`Signal<Args>`] - The main signal type for emitting notifications
//! - [`ConnectionId`] - Unique identifier returned when connecting a slot
//! - [`ConnectionGuard`] - RAII guard that disconnects when dropped
//!
//! # Delivery
//!
//! Waypoint is single-threaded and event-driven: every slot runs directly on
//! the emitting thread, in connection order, before `emit` returns. The
//! connection table is not locked while slots run, so a slot may connect,
//! disconnect or call back into the widget that emitted it.
//!
//! # Example
//!
//! ```
//! use waypoint_core::Signal;
//!
//! // Create a signal that passes a string argument
//! let value_changed = Signal::<String>::new();
//!
//! // Connect a slot (closure)
//! let conn_id = value_changed.connect(|city| {
//!     println!("Selected: {}", city);
//! });
//!
//! // Emit the signal
//! value_changed.emit("Austin (AUS)".to_string());
//!
//! // Disconnect when done
//! value_changed.disconnect(conn_id);
//! ```

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Weak};

use parking_lot::Mutex;
use slotmap::{SlotMap, new_key_type};

use crate::error::SignalError;
use crate::logging::targets;

new_key_type! {
    /// A unique identifier for a signal-slot connection.
    ///
    /// Use this ID to disconnect a specific connection via [`Signal::disconnect`].
    /// The ID remains valid until the connection is explicitly disconnected or
    /// the signal is dropped.
    pub struct ConnectionId;
}

type Slot<Args> = Arc<dyn Fn(&Args) + Send + Sync>;
type ConnectionTable<Args> = Mutex<SlotMap<ConnectionId, Slot<Args>>>;

/// A type-safe signal that can have multiple connected slots.
///
/// When a signal is emitted, all connected slots are invoked with a reference
/// to the provided arguments.
///
/// # Type Parameter
///
/// - `Args`: The argument type passed to connected slots. Use `()` for signals
///   with no arguments, or a tuple like `(String, i32)` for multiple arguments.
pub struct Signal<Args> {
    /// All active connections. Shared with [`ConnectionGuard`]s by weak reference.
    connections: Arc<ConnectionTable<Args>>,
    /// Whether signal emission is temporarily blocked.
    blocked: AtomicBool,
}

impl<Args: 'static> Default for Signal<Args> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Args: 'static> Signal<Args> {
    /// Create a new signal with no connections.
    pub fn new() -> Self {
        Self {
            connections: Arc::new(Mutex::new(SlotMap::with_key())),
            blocked: AtomicBool::new(false),
        }
    }

    /// Connect a slot (closure) to this signal.
    ///
    /// Returns a `ConnectionId` that can be used to disconnect the slot later.
    ///
    /// # Example
    ///
    /// ```
    /// use waypoint_core::Signal;
    ///
    /// let signal = Signal::<String>::new();
    /// let id = signal.connect(|s| println!("Got: {}", s));
    /// signal.emit("Hello".to_string());
    /// ```
    pub fn connect<F>(&self, slot: F) -> ConnectionId
    where
        F: Fn(&Args) + Send + Sync + 'static,
    {
        self.connections.lock().insert(Arc::new(slot))
    }

    /// Connect a slot with automatic disconnection when the guard is dropped.
    ///
    /// The guard only holds a weak reference to the connection table, so it
    /// may safely outlive the signal; dropping it afterwards is a no-op.
    ///
    /// ```
    /// use waypoint_core::Signal;
    /// use std::sync::atomic::{AtomicI32, Ordering};
    /// use std::sync::Arc;
    ///
    /// let signal = Signal::<i32>::new();
    /// let counter = Arc::new(AtomicI32::new(0));
    /// {
    ///     let counter_clone = counter.clone();
    ///     let _guard = signal.connect_scoped(move |&n| {
    ///         counter_clone.fetch_add(n, Ordering::SeqCst);
    ///     });
    ///     signal.emit(42);
    /// }
    /// signal.emit(43);  // Nothing happens - connection was dropped
    /// assert_eq!(counter.load(Ordering::SeqCst), 42);
    /// ```
    pub fn connect_scoped<F>(&self, slot: F) -> ConnectionGuard<Args>
    where
        F: Fn(&Args) + Send + Sync + 'static,
    {
        let id = self.connect(slot);
        ConnectionGuard {
            connections: Arc::downgrade(&self.connections),
            id: Some(id),
        }
    }

    /// Disconnect a specific slot by its connection ID.
    ///
    /// Returns `true` if the connection was found and removed, `false` otherwise.
    pub fn disconnect(&self, id: ConnectionId) -> bool {
        self.connections.lock().remove(id).is_some()
    }

    /// Disconnect all slots from this signal.
    pub fn disconnect_all(&self) {
        self.connections.lock().clear();
    }

    /// Get the number of connected slots.
    pub fn connection_count(&self) -> usize {
        self.connections.lock().len()
    }

    /// Block signal emission temporarily.
    ///
    /// While blocked, calls to `emit()` will do nothing. This is useful
    /// during initialization or batch updates to prevent cascading notifications.
    pub fn set_blocked(&self, blocked: bool) {
        self.blocked.store(blocked, Ordering::SeqCst);
    }

    /// Check if signal emission is currently blocked.
    pub fn is_blocked(&self) -> bool {
        self.blocked.load(Ordering::SeqCst)
    }

    /// Emit the signal, invoking all connected slots in connection order.
    ///
    /// If the signal is blocked, this does nothing.
    #[tracing::instrument(skip_all, target = "waypoint_core::signal", level = "trace")]
    pub fn emit(&self, args: Args) {
        if self.is_blocked() {
            tracing::trace!(target: targets::SIGNAL, "signal blocked, skipping emit");
            return;
        }

        // Snapshot the slots so the table is unlocked while they run.
        let slots: Vec<Slot<Args>> = self.connections.lock().values().cloned().collect();
        tracing::trace!(target: targets::SIGNAL, connection_count = slots.len(), "emitting signal");

        for slot in slots {
            slot(&args);
        }
    }
}

impl<Args> std::fmt::Debug for Signal<Args> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Signal")
            .field("connections", &self.connections.lock().len())
            .field("blocked", &self.blocked.load(Ordering::SeqCst))
            .finish()
    }
}

/// A connection guard that automatically disconnects when dropped.
///
/// Created via [`Signal::connect_scoped`]. This is the building block for
/// scoped subscriptions such as the pointer hub's
/// [`PointerSubscription`](crate::PointerSubscription).
pub struct ConnectionGuard<Args> {
    connections: Weak<ConnectionTable<Args>>,
    id: Option<ConnectionId>,
}

impl<Args> ConnectionGuard<Args> {
    /// The connection this guard owns, if it is still held.
    pub fn id(&self) -> Option<ConnectionId> {
        self.id
    }

    /// Whether the guarded connection is still registered on a live signal.
    pub fn is_connected(&self) -> bool {
        match (self.id, self.connections.upgrade()) {
            (Some(id), Some(connections)) => connections.lock().contains_key(id),
            _ => false,
        }
    }

    /// Disconnect explicitly, reporting why the disconnect could not happen.
    ///
    /// Dropping the guard does the same thing silently.
    pub fn disconnect(mut self) -> Result<(), SignalError> {
        let id = self.id.take().ok_or(SignalError::InvalidConnection)?;
        let connections = self
            .connections
            .upgrade()
            .ok_or(SignalError::SignalDropped)?;
        connections
            .lock()
            .remove(id)
            .map(|_| ())
            .ok_or(SignalError::InvalidConnection)
    }
}

impl<Args> Drop for ConnectionGuard<Args> {
    fn drop(&mut self) {
        if let Some(id) = self.id.take()
            && let Some(connections) = self.connections.upgrade()
        {
            connections.lock().remove(id);
        }
    }
}

impl<Args> std::fmt::Debug for ConnectionGuard<Args> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConnectionGuard")
            .field("id", &self.id)
            .field("connected", &self.is_connected())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    #[test]
    fn test_signal_connect_emit() {
        let signal = Signal::<i32>::new();
        let received = Arc::new(Mutex::new(Vec::new()));

        let received_clone = received.clone();
        signal.connect(move |&value| {
            received_clone.lock().push(value);
        });

        signal.emit(42);
        signal.emit(100);

        let values = received.lock();
        assert_eq!(*values, vec![42, 100]);
    }

    #[test]
    fn test_signal_disconnect() {
        let signal = Signal::<i32>::new();
        let received = Arc::new(Mutex::new(Vec::new()));

        let received_clone = received.clone();
        let conn_id = signal.connect(move |&value| {
            received_clone.lock().push(value);
        });

        signal.emit(1);
        assert!(signal.disconnect(conn_id));
        assert!(!signal.disconnect(conn_id));
        signal.emit(2);

        let values = received.lock();
        assert_eq!(*values, vec![1]);
    }

    #[test]
    fn test_signal_blocked() {
        let signal = Signal::<i32>::new();
        let received = Arc::new(Mutex::new(Vec::new()));

        let received_clone = received.clone();
        signal.connect(move |&value| {
            received_clone.lock().push(value);
        });

        signal.emit(1);
        signal.set_blocked(true);
        signal.emit(2);
        signal.set_blocked(false);
        signal.emit(3);

        let values = received.lock();
        assert_eq!(*values, vec![1, 3]);
    }

    #[test]
    fn test_multiple_connections() {
        let signal = Signal::<String>::new();
        let count = Arc::new(Mutex::new(0));

        for _ in 0..3 {
            let count_clone = count.clone();
            signal.connect(move |_| {
                *count_clone.lock() += 1;
            });
        }

        assert_eq!(signal.connection_count(), 3);
        signal.emit("test".to_string());
        assert_eq!(*count.lock(), 3);
    }

    #[test]
    fn test_disconnect_all() {
        let signal = Signal::<()>::new();

        for _ in 0..5 {
            signal.connect(|_| {});
        }

        assert_eq!(signal.connection_count(), 5);
        signal.disconnect_all();
        assert_eq!(signal.connection_count(), 0);
    }

    #[test]
    fn test_connection_guard() {
        let signal = Signal::<i32>::new();
        let received = Arc::new(Mutex::new(Vec::new()));

        {
            let received_clone = received.clone();
            let guard = signal.connect_scoped(move |&value| {
                received_clone.lock().push(value);
            });
            assert!(guard.is_connected());
            signal.emit(1);
        }

        signal.emit(2);

        assert_eq!(*received.lock(), vec![1]);
        assert_eq!(signal.connection_count(), 0);
    }

    #[test]
    fn test_guard_outlives_signal() {
        let signal = Signal::<i32>::new();
        let guard = signal.connect_scoped(|_| {});
        drop(signal);

        assert!(!guard.is_connected());
        assert_eq!(guard.disconnect(), Err(SignalError::SignalDropped));
    }

    #[test]
    fn test_guard_explicit_disconnect() {
        let signal = Signal::<i32>::new();
        let guard = signal.connect_scoped(|_| {});
        assert_eq!(guard.disconnect(), Ok(()));
        assert_eq!(signal.connection_count(), 0);

        let guard = signal.connect_scoped(|_| {});
        signal.disconnect_all();
        assert_eq!(guard.disconnect(), Err(SignalError::InvalidConnection));
    }

    #[test]
    fn test_slot_may_reenter_signal() {
        let signal = Arc::new(Signal::<i32>::new());
        let calls = Arc::new(AtomicUsize::new(0));

        let signal_clone = signal.clone();
        let calls_clone = calls.clone();
        signal.connect(move |_| {
            calls_clone.fetch_add(1, Ordering::SeqCst);
            // Connecting from inside a slot must not deadlock.
            signal_clone.connect(|_| {});
        });

        signal.emit(0);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(signal.connection_count(), 2);
    }

    #[test]
    fn test_signal_with_multiple_args() {
        let signal = Signal::<(String, i32)>::new();
        let received = Arc::new(Mutex::new(None));

        let received_clone = received.clone();
        signal.connect(move |args| {
            *received_clone.lock() = Some(args.clone());
        });

        signal.emit(("hello".to_string(), 42));

        let value = received.lock().clone();
        assert_eq!(value, Some(("hello".to_string(), 42)));
    }
}
