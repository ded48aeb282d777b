//! Widget-specific event types.
//!
//! This module defines the input events the host delivers to widgets:
//! keyboard presses, pointer presses and moves, and focus changes.
//!
//! Pointer positions are carried twice: `local_pos` is relative to the
//! widget's geometry origin and is what widgets hit-test against, while
//! `window_pos` is the same point in window coordinates.

use waypoint_core::{MouseButton, Point};

/// Keyboard modifiers that may be held during input events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct KeyboardModifiers {
    /// The Shift key is held.
    pub shift: bool,
    /// The Control key is held (Cmd on macOS).
    pub control: bool,
    /// The Alt key is held (Option on macOS).
    pub alt: bool,
    /// The Meta/Super key is held (Windows key, Cmd on macOS).
    pub meta: bool,
}

impl KeyboardModifiers {
    /// No modifiers pressed.
    pub const NONE: Self = Self {
        shift: false,
        control: false,
        alt: false,
        meta: false,
    };

    /// Shift modifier only.
    pub const SHIFT: Self = Self {
        shift: true,
        control: false,
        alt: false,
        meta: false,
    };

    /// Control modifier only.
    pub const CTRL: Self = Self {
        shift: false,
        control: true,
        alt: false,
        meta: false,
    };

    /// Check if any modifier is pressed.
    pub fn any(&self) -> bool {
        self.shift || self.control || self.alt || self.meta
    }

    /// Whether a shortcut modifier (Control or Meta) is held.
    ///
    /// Text produced while one of these is held is a shortcut, not input.
    pub fn is_shortcut(&self) -> bool {
        self.control || self.meta
    }
}

/// Keyboard key identifiers.
///
/// Only keys with widget behavior are named; any key that produces printable
/// text is reported as [`Key::Character`] with the text in
/// [`KeyPressEvent::text`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    // Navigation
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Home,
    End,
    PageUp,
    PageDown,

    // Editing
    Backspace,
    Delete,
    Enter,
    Tab,

    // Whitespace
    Space,

    // Control
    Escape,

    /// A key that produced printable text.
    Character,

    /// Unknown/unmapped key.
    Unknown(u16),
}

impl Key {
    /// Check if this is a navigation key.
    pub fn is_navigation(&self) -> bool {
        matches!(
            self,
            Key::ArrowUp
                | Key::ArrowDown
                | Key::ArrowLeft
                | Key::ArrowRight
                | Key::Home
                | Key::End
                | Key::PageUp
                | Key::PageDown
        )
    }
}

/// Key press event, sent when a key is pressed.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyPressEvent {
    /// The key that was pressed.
    pub key: Key,
    /// Keyboard modifiers held during the event.
    pub modifiers: KeyboardModifiers,
    /// The text input from this key press (if any).
    ///
    /// For printable keys, this contains the character that would be typed.
    /// For non-printable keys, this is empty.
    pub text: String,
    /// Whether this is a key repeat event (key held down).
    pub is_repeat: bool,
}

impl KeyPressEvent {
    /// Create a new key press event.
    pub fn new(
        key: Key,
        modifiers: KeyboardModifiers,
        text: impl Into<String>,
        is_repeat: bool,
    ) -> Self {
        Self {
            key,
            modifiers,
            text: text.into(),
            is_repeat,
        }
    }

    /// A press of a non-printing key with no modifiers.
    pub fn key(key: Key) -> Self {
        Self::new(key, KeyboardModifiers::NONE, "", false)
    }

    /// A press that types `text`.
    pub fn typed(text: impl Into<String>) -> Self {
        Self::new(Key::Character, KeyboardModifiers::NONE, text, false)
    }
}

/// Mouse press event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MousePressEvent {
    /// The button that was pressed.
    pub button: MouseButton,
    /// Position in widget-local coordinates.
    pub local_pos: Point,
    /// Position in window coordinates.
    pub window_pos: Point,
    /// Keyboard modifiers held during the event.
    pub modifiers: KeyboardModifiers,
}

impl MousePressEvent {
    /// Create a new mouse press event.
    pub fn new(
        button: MouseButton,
        local_pos: Point,
        window_pos: Point,
        modifiers: KeyboardModifiers,
    ) -> Self {
        Self {
            button,
            local_pos,
            window_pos,
            modifiers,
        }
    }
}

/// Mouse move event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MouseMoveEvent {
    /// Position in widget-local coordinates.
    pub local_pos: Point,
    /// Position in window coordinates.
    pub window_pos: Point,
}

impl MouseMoveEvent {
    /// Create a new mouse move event.
    pub fn new(local_pos: Point, window_pos: Point) -> Self {
        Self {
            local_pos,
            window_pos,
        }
    }
}

/// Events delivered to a widget through [`Widget::event`](super::Widget::event).
#[derive(Debug, Clone, PartialEq)]
pub enum WidgetEvent {
    /// A key was pressed while the widget had focus.
    KeyPress(KeyPressEvent),
    /// A mouse button was pressed over the widget.
    MousePress(MousePressEvent),
    /// The pointer moved over the widget.
    MouseMove(MouseMoveEvent),
    /// The widget gained keyboard focus.
    FocusIn,
}
