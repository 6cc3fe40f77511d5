//! Root application component
//!
//! The App struct implements the Component trait, acting as the root
//! component that delegates event handling and rendering to the roster page.
//! App owns the application-level concerns: quitting, the help bar, and the
//! loaded config.

use crate::action::Action;
use crate::component::Component;
use crate::components::{calculate_page_layout, RecordsComponent};
use crate::config::Config;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Main application state - coordinates between components
pub struct App {
    /// Flag to indicate the app should quit
    pub should_quit: bool,

    /// Loaded configuration (defaults when no file exists)
    pub config: Config,

    /// The roster page
    pub records: RecordsComponent,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// Create a new App instance
    pub fn new() -> App {
        let config = Config::load().unwrap_or_default();
        let records = RecordsComponent::new(config.max_column_width);

        App {
            should_quit: false,
            config,
            records,
        }
    }
}

impl Component for App {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Ok(Some(Action::Quit)),
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Ok(Some(Action::Quit))
            }
            _ => self.records.handle_key_event(key),
        }
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        let action = match mouse.kind {
            MouseEventKind::ScrollDown => Some(Action::ScrollDown),
            MouseEventKind::ScrollUp => Some(Action::ScrollUp),
            _ => None,
        };
        Ok(action)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::Quit => {
                self.should_quit = true;
                Ok(None)
            }
            // Resize triggers a redraw through the main loop
            Action::Tick | Action::Resize(_, _) => Ok(None),
            _ => self.records.update(action),
        }
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let layout = calculate_page_layout(area);

        self.records.draw(frame, layout.page)?;
        render_help_bar(frame, layout.help);

        Ok(())
    }
}

fn render_help_bar(frame: &mut Frame, area: Rect) {
    let help_spans = vec![
        Span::styled(
            " q ",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("Quit "),
        Span::styled(
            " j/k ",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("Scroll "),
        Span::styled(
            " C-d/C-u ",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("Page "),
        Span::styled(
            " g/G ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("Top/Bottom"),
    ];

    let paragraph = Paragraph::new(Line::from(help_spans));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quit_keys_map_to_quit() {
        let mut app = App::default();
        for key in [
            KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE),
            KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE),
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        ] {
            assert_eq!(app.handle_key_event(key).unwrap(), Some(Action::Quit));
        }
    }

    #[test]
    fn test_quit_action_sets_flag() {
        let mut app = App::default();
        assert!(!app.should_quit);
        app.update(Action::Quit).unwrap();
        assert!(app.should_quit);
    }

    #[test]
    fn test_scroll_keys_reach_the_roster_page() {
        let mut app = App::default();
        let action = app
            .handle_key_event(KeyEvent::new(KeyCode::Char('j'), KeyModifiers::NONE))
            .unwrap();
        assert_eq!(action, Some(Action::ScrollDown));

        app.update(Action::ScrollDown).unwrap();
        assert_eq!(app.records.scroll(), 1);
    }

    #[test]
    fn test_tick_is_a_no_op() {
        let mut app = App::default();
        let follow_up = app.update(Action::Tick).unwrap();
        assert_eq!(follow_up, None);
        assert!(!app.should_quit);
        assert_eq!(app.records.scroll(), 0);
    }
}
