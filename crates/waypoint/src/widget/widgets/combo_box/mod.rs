//! ComboBox widget: a text input with a filtered dropdown.
//!
//! The ComboBox lets the user pick one entry from a fixed option list by
//! typing part of it:
//! - Typing filters the options by case-insensitive substring, showing at
//!   most [`MAX_RESULTS`] matches
//! - Arrow keys move the highlight, Enter commits, Escape closes
//! - Pointer hover highlights a row and a press commits it
//! - A press anywhere outside the control closes the dropdown
//!
//! The owner hears about commits through [`ComboBox::value_changed`] and
//! pushes its own value back with [`ComboBox::sync_external_value`].
//!
//! # Example
//!
//! ```
//! use waypoint::widget::widgets::{ComboBox, ComboBoxProps};
//! use waypoint::widget::{Key, KeyPressEvent};
//! use waypoint_core::PointerEventHub;
//!
//! let options = vec!["Austin (AUS)".to_string(), "Atlanta (ATL)".to_string()];
//! let hub = PointerEventHub::new();
//! let mut combo = ComboBox::with_hub(ComboBoxProps::new("From", options), &hub);
//!
//! combo.value_changed.connect(|city| {
//!     println!("Selected: {}", city);
//! });
//!
//! combo.handle_key_press(&KeyPressEvent::key(Key::ArrowDown));
//! combo.handle_key_press(&KeyPressEvent::key(Key::ArrowDown));
//! combo.handle_key_press(&KeyPressEvent::key(Key::Enter));
//! assert_eq!(combo.query(), "Atlanta (ATL)");
//! ```

mod filtering;
pub mod navigator;
mod outside;
mod state;

use std::sync::Arc;

use parking_lot::Mutex;
use unicode_segmentation::UnicodeSegmentation;
use waypoint_core::logging::targets;
use waypoint_core::{MouseButton, PointerEventHub, PointerSubscription, Rect, Signal};

use crate::widget::{Key, KeyPressEvent, MouseMoveEvent, MousePressEvent, Widget, WidgetEvent};

pub use filtering::{MAX_RESULTS, filter};
pub use navigator::{Direction, NavAction};
pub use state::{ComboBoxPart, ComboBoxState};

use state::Controller;

// ============================================================================
// Props and View
// ============================================================================

/// Construction parameters for a [`ComboBox`].
#[derive(Debug, Clone)]
pub struct ComboBoxProps {
    /// Caption shown above the input.
    pub label: String,
    /// The owner's current value, shown in the input on mount.
    pub value: Option<String>,
    /// The options to choose from; fixed for the control's lifetime.
    pub options: Arc<[String]>,
    /// Text shown while the input is empty.
    pub placeholder: String,
}

impl ComboBoxProps {
    /// Create props with no value and no placeholder.
    pub fn new(label: impl Into<String>, options: impl Into<Arc<[String]>>) -> Self {
        Self {
            label: label.into(),
            value: None,
            options: options.into(),
            placeholder: String::new(),
        }
    }

    /// Set the initial value using builder pattern.
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Set the placeholder using builder pattern.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }
}

/// One dropdown row in a [`ComboBoxView`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropdownRow {
    pub label: String,
    pub highlighted: bool,
}

/// What a combo box should look like right now.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComboBoxView {
    /// Caption above the input.
    pub label: String,
    /// Text in the input.
    pub text: String,
    /// Placeholder to draw, present only while the input is empty.
    pub placeholder: Option<String>,
    /// Dropdown rows, present only while open with at least one match.
    pub dropdown: Option<Vec<DropdownRow>>,
}

// ============================================================================
// ComboBox Widget
// ============================================================================

/// A searchable selection control over a fixed option list.
///
/// # Signals
///
/// - `value_changed(String)`: Emitted once per committed selection
#[derive(Debug)]
pub struct ComboBox {
    label: String,
    placeholder: String,
    controller: Arc<Mutex<Controller>>,
    /// Outside-press watcher, held for as long as the control is mounted.
    subscription: Option<PointerSubscription>,

    /// Signal emitted with the label of each committed selection.
    pub value_changed: Signal<String>,
}

impl ComboBox {
    /// Mount a combo box on the process-wide pointer hub.
    pub fn new(props: ComboBoxProps) -> Self {
        Self::with_hub(props, PointerEventHub::global())
    }

    /// Mount a combo box on a specific pointer hub.
    pub fn with_hub(props: ComboBoxProps, hub: &PointerEventHub) -> Self {
        let ComboBoxProps {
            label,
            value,
            options,
            placeholder,
        } = props;

        let controller = Arc::new(Mutex::new(Controller::new(options, value)));
        let subscription = outside::watch(hub, Arc::downgrade(&controller));
        tracing::debug!(target: targets::COMBO_BOX, label = %label, "combo box mounted");

        Self {
            label,
            placeholder,
            controller,
            subscription: Some(subscription),
            value_changed: Signal::new(),
        }
    }

    /// Release the outside-press subscription.
    ///
    /// Dropping the combo box does the same; this variant reports a hub that
    /// went away first.
    pub fn unmount(mut self) -> waypoint_core::Result<()> {
        if let Some(subscription) = self.subscription.take() {
            subscription.release()?;
        }
        tracing::debug!(target: targets::COMBO_BOX, label = %self.label, "combo box unmounted");
        Ok(())
    }

    /// Whether the outside-press watcher is still subscribed.
    pub fn is_mounted(&self) -> bool {
        self.subscription
            .as_ref()
            .is_some_and(PointerSubscription::is_active)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// The caption.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The placeholder text.
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// The full option list.
    pub fn options(&self) -> Arc<[String]> {
        self.controller.lock().options().clone()
    }

    /// A snapshot of the current state.
    pub fn state(&self) -> ComboBoxState {
        self.controller.lock().state().clone()
    }

    /// The text in the input.
    pub fn query(&self) -> String {
        self.controller.lock().state().query.clone()
    }

    /// Whether the dropdown is open.
    pub fn is_open(&self) -> bool {
        self.controller.lock().state().is_open
    }

    /// Index of the highlighted entry in the filtered list.
    pub fn highlighted_index(&self) -> usize {
        self.controller.lock().state().highlight
    }

    /// The last value chosen through this control.
    pub fn committed_value(&self) -> Option<String> {
        self.controller.lock().state().committed.clone()
    }

    /// The options matching the current query.
    pub fn filtered(&self) -> Vec<String> {
        let controller = self.controller.lock();
        controller.filtered().into_iter().map(String::from).collect()
    }

    /// Whether the dropdown is drawn (open with at least one match).
    pub fn is_dropdown_visible(&self) -> bool {
        self.controller.lock().is_dropdown_visible()
    }

    /// The input plus the visible dropdown, in window coordinates.
    pub fn region(&self) -> Rect {
        self.controller.lock().region()
    }

    // =========================================================================
    // Operations
    // =========================================================================

    /// Replace the query, opening the dropdown with the first match highlighted.
    pub fn set_query(&mut self, text: impl Into<String>) {
        self.controller.lock().set_query(text.into());
    }

    /// Open the dropdown without touching the query or highlight.
    pub fn focus(&mut self) {
        self.controller.lock().focus();
    }

    /// Close the dropdown, keeping the query and the committed value.
    pub fn request_close(&mut self) {
        self.controller.lock().request_close();
    }

    /// Move the highlight one step; a closed dropdown only opens.
    pub fn move_highlight(&mut self, direction: Direction) {
        self.controller.lock().move_highlight(direction);
    }

    /// Commit the filtered entry at `index`.
    ///
    /// Returns `false` without side effects when there is no such entry.
    pub fn commit(&mut self, index: usize) -> bool {
        // The guard is released before emitting so slots may call back in.
        let committed = self.controller.lock().commit(index);
        match committed {
            Some(label) => {
                tracing::debug!(target: targets::COMBO_BOX, label = %self.label, value = %label, "value committed");
                self.value_changed.emit(label);
                true
            }
            None => false,
        }
    }

    /// Show the owner's value in the input when it differs from the query.
    ///
    /// An absent value clears the input. The dropdown is never reopened.
    pub fn sync_external_value(&mut self, value: Option<&str>) {
        self.controller.lock().sync_external_value(value);
    }

    /// Highlight the dropdown row under the pointer.
    pub fn hover_item(&mut self, index: usize) {
        self.controller.lock().hover(index);
    }

    /// Place the input in window coordinates.
    ///
    /// Pointer input relies on this: until the control is placed its region
    /// is empty, so every press on the hub counts as outside and closes it.
    pub fn set_geometry(&mut self, rect: Rect) {
        self.controller.lock().set_geometry(rect);
    }

    /// The input rectangle in window coordinates.
    pub fn geometry(&self) -> Rect {
        self.controller.lock().geometry()
    }

    /// Build the render model.
    pub fn view(&self) -> ComboBoxView {
        let controller = self.controller.lock();
        let state = controller.state();

        let placeholder = (state.query.is_empty() && !self.placeholder.is_empty())
            .then(|| self.placeholder.clone());

        let dropdown = controller.is_dropdown_visible().then(|| {
            controller
                .filtered()
                .into_iter()
                .enumerate()
                .map(|(index, label)| DropdownRow {
                    label: label.to_string(),
                    highlighted: index == state.highlight,
                })
                .collect()
        });

        ComboBoxView {
            label: self.label.clone(),
            text: state.query.clone(),
            placeholder,
            dropdown,
        }
    }

    // =========================================================================
    // Event Handlers
    // =========================================================================

    /// Handle a key press, returning whether the host should suppress its
    /// default handling.
    pub fn handle_key_press(&mut self, event: &KeyPressEvent) -> bool {
        let action = {
            let controller = self.controller.lock();
            let state = controller.state();
            navigator::navigate(
                event.key,
                state.is_open,
                state.highlight,
                controller.filtered().len(),
            )
        };

        match action {
            NavAction::Open => self.focus(),
            NavAction::Highlight(index) => self.controller.lock().set_highlight(index),
            NavAction::Commit(index) => {
                self.commit(index);
            }
            NavAction::Close => self.request_close(),
            NavAction::Stay => {}
            NavAction::PassThrough => return self.handle_text_input(event),
        }
        true
    }

    fn handle_text_input(&mut self, event: &KeyPressEvent) -> bool {
        match event.key {
            Key::Backspace => {
                let query = self.query();
                let Some((start, _)) = query.grapheme_indices(true).next_back() else {
                    return false;
                };
                self.set_query(&query[..start]);
                true
            }
            _ if is_text_input(event) => {
                let mut query = self.query();
                query.push_str(&event.text);
                self.set_query(query);
                true
            }
            _ => false,
        }
    }

    fn handle_mouse_press(&mut self, event: &MousePressEvent) -> bool {
        if event.button != MouseButton::Left {
            return false;
        }

        let part = self.controller.lock().hit_test(event.local_pos);
        match part {
            ComboBoxPart::Input => {
                self.focus();
                true
            }
            ComboBoxPart::PopupItem(index) => self.commit(index),
            ComboBoxPart::None => false,
        }
    }

    fn handle_mouse_move(&mut self, event: &MouseMoveEvent) -> bool {
        let mut controller = self.controller.lock();
        match controller.hit_test(event.local_pos) {
            ComboBoxPart::PopupItem(index) => controller.hover(index),
            _ => false,
        }
    }
}

fn is_text_input(event: &KeyPressEvent) -> bool {
    !event.text.is_empty()
        && !event.modifiers.is_shortcut()
        && !event.text.chars().any(char::is_control)
}

impl Widget for ComboBox {
    fn geometry(&self) -> Rect {
        ComboBox::geometry(self)
    }

    fn set_geometry(&mut self, rect: Rect) {
        ComboBox::set_geometry(self, rect);
    }

    fn hit_region(&self) -> Rect {
        self.region()
    }

    fn event(&mut self, event: &WidgetEvent) -> bool {
        match event {
            WidgetEvent::KeyPress(e) => self.handle_key_press(e),
            WidgetEvent::MousePress(e) => self.handle_mouse_press(e),
            WidgetEvent::MouseMove(e) => self.handle_mouse_move(e),
            WidgetEvent::FocusIn => {
                self.focus();
                true
            }
        }
    }
}
