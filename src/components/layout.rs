//! Layout calculations for the UI

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Main screen layout areas
pub struct PageLayout {
    /// Roster page (heading + table)
    pub page: Rect,
    /// One-line help bar at the bottom
    pub help: Rect,
}

/// Calculate the main screen layout
pub fn calculate_page_layout(area: Rect) -> PageLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);

    PageLayout {
        page: chunks[0],
        help: chunks[1],
    }
}

/// Split a page area into heading and body
pub fn split_heading(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(0)])
        .split(area);

    (chunks[0], chunks[1])
}
