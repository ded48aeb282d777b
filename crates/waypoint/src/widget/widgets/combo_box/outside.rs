//! Closes the dropdown when a press lands outside the control.

use std::sync::Weak;

use parking_lot::Mutex;
use waypoint_core::logging::targets;
use waypoint_core::{PointerEventHub, PointerSubscription};

use super::state::Controller;

/// Subscribe `controller` to presses on `hub`.
///
/// The subscription only holds a weak reference, so it never keeps a
/// destroyed control alive and a late event after teardown is a no-op.
pub(super) fn watch(hub: &PointerEventHub, controller: Weak<Mutex<Controller>>) -> PointerSubscription {
    hub.subscribe(move |event| {
        let Some(controller) = controller.upgrade() else {
            return;
        };
        let mut controller = controller.lock();
        if controller.region().contains(event.pos) {
            return;
        }
        if controller.request_close() {
            tracing::trace!(
                target: targets::COMBO_BOX,
                x = event.pos.x,
                y = event.pos.y,
                "press outside closed dropdown"
            );
        }
    })
}
