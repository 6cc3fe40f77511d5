//! Records component - the renter roster page
//!
//! Renders the "Renters" heading and the roster table. The roster itself is
//! fixed; the only view state is a scroll offset for short terminals.

use crate::action::Action;
use crate::component::Component;
use crate::components::layout::split_heading;
use crate::components::table::build_table_lines;
use crate::model::RenterRecord;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

/// Lines scrolled by one page step
const PAGE_STEP: usize = 10;

/// Roster page component
pub struct RecordsComponent {
    /// The fixed roster, loaded once at construction
    roster: Vec<RenterRecord>,
    /// Scroll offset into the table lines
    scroll: usize,
    /// Column width cap, from config
    max_col_width: usize,
}

impl RecordsComponent {
    /// Heading shown above the table
    pub const HEADING: &'static str = "Renters";

    pub fn new(max_col_width: usize) -> Self {
        Self {
            roster: RenterRecord::roster(),
            scroll: 0,
            max_col_width,
        }
    }

    /// Render the roster table as lines
    pub fn table_lines(&self) -> Vec<Line<'static>> {
        let rows: Vec<Vec<String>> = self.roster.iter().map(|r| r.cells()).collect();
        build_table_lines(&RenterRecord::COLUMNS, &rows, self.max_col_width)
    }

    /// Current scroll offset
    pub fn scroll(&self) -> usize {
        self.scroll
    }

    fn max_scroll(&self) -> usize {
        self.table_lines().len().saturating_sub(1)
    }
}

impl Component for RecordsComponent {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Char('j') | KeyCode::Down => Some(Action::ScrollDown),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::ScrollUp),
            KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Action::PageDown)
            }
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Action::PageUp)
            }
            KeyCode::Char('g') => Some(Action::ScrollTop),
            KeyCode::Char('G') => Some(Action::ScrollBottom),
            _ => None,
        };
        Ok(action)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::ScrollDown => {
                if self.scroll < self.max_scroll() {
                    self.scroll += 1;
                }
            }
            Action::ScrollUp => {
                self.scroll = self.scroll.saturating_sub(1);
            }
            Action::PageDown => {
                self.scroll = (self.scroll + PAGE_STEP).min(self.max_scroll());
            }
            Action::PageUp => {
                self.scroll = self.scroll.saturating_sub(PAGE_STEP);
            }
            Action::ScrollTop => {
                self.scroll = 0;
            }
            Action::ScrollBottom => {
                self.scroll = self.max_scroll();
            }
            _ => {}
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let (heading_area, table_area) = split_heading(area);

        let heading = Paragraph::new(Line::from(Span::styled(
            Self::HEADING,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )));
        frame.render_widget(heading, heading_area);

        let content = self.table_lines();
        let visible_height = table_area.height.saturating_sub(2) as usize;

        let paragraph = Paragraph::new(content.clone())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .scroll((self.scroll as u16, 0));

        frame.render_widget(paragraph, table_area);

        // Render scrollbar if content exceeds visible area
        let total = content.len();
        if total > visible_height {
            let mut scrollbar_state =
                ScrollbarState::new(total.saturating_sub(visible_height)).position(self.scroll);

            frame.render_stateful_widget(
                Scrollbar::new(ScrollbarOrientation::VerticalRight)
                    .begin_symbol(Some("↑"))
                    .end_symbol(Some("↓")),
                table_area.inner(ratatui::layout::Margin {
                    vertical: 1,
                    horizontal: 0,
                }),
                &mut scrollbar_state,
            );
        }

        Ok(())
    }
}
