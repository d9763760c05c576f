//! Action enum - every state change the display engine understands
//!
//! Key strings are resolved into Actions through the [`KeyMap`](crate::keymap::KeyMap),
//! and components turn Actions into new state values.

use std::fmt;

/// All possible actions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // ─────────────────────────────────────────────────────────────────────────
    // Lifecycle
    // ─────────────────────────────────────────────────────────────────────────
    /// Terminal was resized
    Resize(u16, u16),
    /// Leave the program
    Quit,

    // ─────────────────────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────────────────────
    /// Move selection up one item
    MoveUp,
    /// Move selection down one item
    MoveDown,
    /// Show the next page
    NextPage,
    /// Show the previous page
    PrevPage,
    /// Shift visible columns left
    ScrollLeft,
    /// Shift visible columns right
    ScrollRight,

    // ─────────────────────────────────────────────────────────────────────────
    // Overlays
    // ─────────────────────────────────────────────────────────────────────────
    /// Close the popup or suggestion list on top
    Dismiss,
    /// Accept the current selection
    Confirm,
    /// Open the column suggestion list
    OpenSuggestions,

    // ─────────────────────────────────────────────────────────────────────────
    // Filter
    // ─────────────────────────────────────────────────────────────────────────
    /// Start typing a row filter
    Filter,
    /// Add a character to the filter query
    FilterInput(char),
    /// Remove the last character of the filter query
    FilterBackspace,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Resize(w, h) => write!(f, "Resize({}, {})", w, h),
            Action::Quit => write!(f, "Quit"),
            Action::MoveUp => write!(f, "MoveUp"),
            Action::MoveDown => write!(f, "MoveDown"),
            Action::NextPage => write!(f, "NextPage"),
            Action::PrevPage => write!(f, "PrevPage"),
            Action::ScrollLeft => write!(f, "ScrollLeft"),
            Action::ScrollRight => write!(f, "ScrollRight"),
            Action::Dismiss => write!(f, "Dismiss"),
            Action::Confirm => write!(f, "Confirm"),
            Action::OpenSuggestions => write!(f, "OpenSuggestions"),
            Action::Filter => write!(f, "Filter"),
            Action::FilterInput(c) => write!(f, "FilterInput('{}')", c),
            Action::FilterBackspace => write!(f, "FilterBackspace"),
        }
    }
}
