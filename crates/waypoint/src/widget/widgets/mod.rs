//! Standard widgets.
//!
//! - [`ComboBox`]: Text input with a filtered dropdown of a fixed option list
//! - [`PrioritySelect`]: Choice between the fastest and the cheapest route

pub mod combo_box;
mod priority_select;

pub use combo_box::{
    ComboBox, ComboBoxPart, ComboBoxProps, ComboBoxState, ComboBoxView, DropdownRow, MAX_RESULTS,
    filter,
};
pub use priority_select::PrioritySelect;
