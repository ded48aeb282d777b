//! Keyboard decision table for the combo box.
//!
//! [`navigate`] is a pure function of the key, the open flag, the current
//! highlight and the length of the filtered list. The controller applies the
//! resulting [`NavAction`].

use crate::widget::Key;

/// Direction of a highlight move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Towards the first entry.
    Up,
    /// Towards the last entry.
    Down,
}

impl Direction {
    /// The direction an arrow key moves in, if any.
    pub fn from_key(key: Key) -> Option<Self> {
        match key {
            Key::ArrowUp => Some(Direction::Up),
            Key::ArrowDown => Some(Direction::Down),
            _ => None,
        }
    }
}

/// What the controller should do in response to a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    /// Open the dropdown without moving the highlight.
    Open,
    /// Move the highlight to the given index.
    Highlight(usize),
    /// Commit the entry at the given index.
    Commit(usize),
    /// Close the dropdown.
    Close,
    /// The key is handled but nothing changes.
    Stay,
    /// The key is not a navigation key; let text editing have it.
    PassThrough,
}

impl NavAction {
    /// Whether the key should be reported as consumed to the host.
    pub fn is_consumed(&self) -> bool {
        !matches!(self, NavAction::PassThrough)
    }
}

/// One highlight step, clamped to `[0, len - 1]`.
///
/// On an empty list the highlight is returned unchanged.
pub fn step(highlight: usize, len: usize, direction: Direction) -> usize {
    if len == 0 {
        return highlight;
    }
    match direction {
        Direction::Down => (highlight + 1).min(len - 1),
        Direction::Up => highlight.saturating_sub(1).min(len - 1),
    }
}

/// Decide the response to `key`.
pub fn navigate(key: Key, is_open: bool, highlight: usize, len: usize) -> NavAction {
    if let Some(direction) = Direction::from_key(key) {
        if !is_open {
            return NavAction::Open;
        }
        let next = step(highlight, len, direction);
        return if next == highlight {
            NavAction::Stay
        } else {
            NavAction::Highlight(next)
        };
    }

    match key {
        Key::Enter if is_open && highlight < len => NavAction::Commit(highlight),
        Key::Enter => NavAction::Stay,
        Key::Escape => NavAction::Close,
        _ => NavAction::PassThrough,
    }
}
