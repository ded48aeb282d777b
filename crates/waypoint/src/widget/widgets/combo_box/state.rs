//! Combo box state and the controller that mutates it.

use std::sync::Arc;

use waypoint_core::logging::targets;
use waypoint_core::{Point, Rect};

use super::filtering::filter;
use super::navigator::{self, Direction};

/// Height of one dropdown row.
pub(super) const ITEM_HEIGHT: f32 = 24.0;

/// Vertical space between the input and the dropdown.
pub(super) const POPUP_GAP: f32 = 2.0;

/// A snapshot of a combo box's state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ComboBoxState {
    /// Whether the dropdown is open.
    pub is_open: bool,
    /// The text in the input, which may differ from the committed value.
    pub query: String,
    /// Index of the highlighted entry in the filtered list.
    pub highlight: usize,
    /// The last value chosen through the control.
    pub committed: Option<String>,
}

/// The parts of a combo box a local position can land on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComboBoxPart {
    /// The text input.
    Input,
    /// A dropdown row (index into the filtered list).
    PopupItem(usize),
    /// Nothing.
    None,
}

/// Owns the state; shared between the widget and its outside-press watcher.
#[derive(Debug)]
pub(super) struct Controller {
    state: ComboBoxState,
    options: Arc<[String]>,
    geometry: Rect,
}

impl Controller {
    pub(super) fn new(options: Arc<[String]>, value: Option<String>) -> Self {
        Self {
            state: ComboBoxState {
                query: value.unwrap_or_default(),
                ..ComboBoxState::default()
            },
            options,
            geometry: Rect::ZERO,
        }
    }

    pub(super) fn state(&self) -> &ComboBoxState {
        &self.state
    }

    pub(super) fn options(&self) -> &Arc<[String]> {
        &self.options
    }

    pub(super) fn filtered(&self) -> Vec<&str> {
        filter(&self.state.query, &self.options)
    }

    pub(super) fn is_dropdown_visible(&self) -> bool {
        self.state.is_open && !self.filtered().is_empty()
    }

    // =========================================================================
    // Operations
    // =========================================================================

    pub(super) fn set_query(&mut self, text: String) {
        self.state.query = text;
        self.state.is_open = true;
        self.state.highlight = 0;
        tracing::trace!(target: targets::COMBO_BOX, query = %self.state.query, "query changed");
    }

    pub(super) fn focus(&mut self) {
        if !self.state.is_open {
            tracing::trace!(target: targets::COMBO_BOX, "opened");
        }
        self.state.is_open = true;
        self.clamp_highlight();
    }

    /// Returns whether the dropdown was open.
    pub(super) fn request_close(&mut self) -> bool {
        let was_open = self.state.is_open;
        self.state.is_open = false;
        if was_open {
            tracing::trace!(target: targets::COMBO_BOX, "closed");
        }
        was_open
    }

    pub(super) fn move_highlight(&mut self, direction: Direction) {
        if !self.state.is_open {
            self.focus();
            return;
        }
        let len = self.filtered().len();
        if len == 0 {
            tracing::trace!(target: targets::COMBO_BOX, "highlight move on empty list ignored");
            return;
        }
        self.set_highlight(navigator::step(self.state.highlight, len, direction));
    }

    pub(super) fn set_highlight(&mut self, index: usize) {
        self.state.highlight = index;
        tracing::trace!(target: targets::COMBO_BOX, highlight = index, "highlight moved");
    }

    /// Commit the filtered entry at `index`, returning its label.
    pub(super) fn commit(&mut self, index: usize) -> Option<String> {
        let Some(label) = self.filtered().get(index).map(|label| label.to_string()) else {
            tracing::trace!(target: targets::COMBO_BOX, index, "commit of missing entry ignored");
            return None;
        };

        self.state.committed = Some(label.clone());
        self.state.query = label.clone();
        self.state.is_open = false;
        Some(label)
    }

    /// Returns whether the query was overwritten.
    pub(super) fn sync_external_value(&mut self, value: Option<&str>) -> bool {
        let value = value.unwrap_or_default();
        if value == self.state.query {
            return false;
        }
        self.state.query = value.to_string();
        self.clamp_highlight();
        tracing::trace!(target: targets::COMBO_BOX, query = %self.state.query, "query synced from owner");
        true
    }

    /// Returns whether the highlight moved.
    pub(super) fn hover(&mut self, index: usize) -> bool {
        if !self.state.is_open || index >= self.filtered().len() || index == self.state.highlight {
            return false;
        }
        self.set_highlight(index);
        true
    }

    fn clamp_highlight(&mut self) {
        let len = self.filtered().len();
        if len > 0 && self.state.highlight >= len {
            self.state.highlight = len - 1;
        }
    }

    // =========================================================================
    // Geometry
    // =========================================================================

    pub(super) fn geometry(&self) -> Rect {
        self.geometry
    }

    pub(super) fn set_geometry(&mut self, rect: Rect) {
        self.geometry = rect;
    }

    /// The dropdown rectangle in local coordinates, empty when hidden.
    pub(super) fn popup_rect(&self) -> Rect {
        if !self.state.is_open {
            return Rect::ZERO;
        }
        let rows = self.filtered().len();
        if rows == 0 {
            return Rect::ZERO;
        }
        Rect::new(
            0.0,
            self.geometry.height() + POPUP_GAP,
            self.geometry.width(),
            rows as f32 * ITEM_HEIGHT,
        )
    }

    /// The input plus the visible dropdown, in window coordinates.
    pub(super) fn region(&self) -> Rect {
        let popup = self.popup_rect();
        let popup = Rect::new(
            popup.left() + self.geometry.left(),
            popup.top() + self.geometry.top(),
            popup.width(),
            popup.height(),
        );
        self.geometry.union(&popup)
    }

    pub(super) fn hit_test(&self, pos: Point) -> ComboBoxPart {
        let input = Rect::new(0.0, 0.0, self.geometry.width(), self.geometry.height());
        if input.contains(pos) {
            return ComboBoxPart::Input;
        }

        let popup = self.popup_rect();
        if popup.contains(pos) {
            let index = ((pos.y - popup.top()) / ITEM_HEIGHT) as usize;
            if index < self.filtered().len() {
                return ComboBoxPart::PopupItem(index);
            }
        }
        ComboBoxPart::None
    }
}
