//! Action enum - All possible application actions
//!
//! Actions are discrete operations that the application can perform.
//! Components emit Actions in response to events, and the App processes
//! them to update state.

use std::fmt;

/// All possible actions in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    // ─────────────────────────────────────────────────────────────────────────
    // App Lifecycle
    // ─────────────────────────────────────────────────────────────────────────
    /// Regular tick while no input is pending
    Tick,
    /// Terminal was resized
    Resize(u16, u16),
    /// Quit the application
    Quit,

    // ─────────────────────────────────────────────────────────────────────────
    // Scrolling
    // ─────────────────────────────────────────────────────────────────────────
    /// Scroll the roster up one line
    ScrollUp,
    /// Scroll the roster down one line
    ScrollDown,
    /// Scroll the roster up one page
    PageUp,
    /// Scroll the roster down one page
    PageDown,
    /// Jump to the top of the roster
    ScrollTop,
    /// Jump to the bottom of the roster
    ScrollBottom,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Tick => write!(f, "Tick"),
            Action::Resize(w, h) => write!(f, "Resize({}, {})", w, h),
            Action::Quit => write!(f, "Quit"),
            Action::ScrollUp => write!(f, "ScrollUp"),
            Action::ScrollDown => write!(f, "ScrollDown"),
            Action::PageUp => write!(f, "PageUp"),
            Action::PageDown => write!(f, "PageDown"),
            Action::ScrollTop => write!(f, "ScrollTop"),
            Action::ScrollBottom => write!(f, "ScrollBottom"),
        }
    }
}
