use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    Frame,
};

use super::{
    Component, HelpBar, HelpBarProps, SearchBar, SearchBarProps, WeatherBody, WeatherBodyProps,
};
use crate::action::Action;
use crate::state::AppState;

pub const ERROR_ICON: &str = "\u{26a0}\u{fe0f}";

/// Frames for the in-flight spinner
pub const SPINNERS: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// The whole panel: search input, weather body, key hints
#[derive(Default)]
pub struct WeatherDisplay {
    search: SearchBar,
    body: WeatherBody,
    help: HelpBar,
}

pub struct WeatherDisplayProps<'a> {
    pub state: &'a AppState,
}

impl WeatherDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    fn search_props<'a>(&self, state: &'a AppState) -> SearchBarProps<'a> {
        SearchBarProps {
            query: &state.query,
            is_fetching: state.is_fetching(),
            tick_count: state.tick_count,
            on_change: Action::QueryChange,
            on_submit: Action::QuerySubmit,
        }
    }
}

impl Component<Action> for WeatherDisplay {
    type Props<'a> = WeatherDisplayProps<'a>;

    fn handle_event(&mut self, event: &KeyEvent, props: Self::Props<'_>) -> Vec<Action> {
        match event.code {
            KeyCode::Esc => return vec![Action::Quit],
            KeyCode::Char('c') if event.modifiers.contains(KeyModifiers::CONTROL) => {
                return vec![Action::Quit]
            }
            _ => {}
        }

        // The search field owns every other key
        let search_props = self.search_props(props.state);
        self.search.handle_event(event, search_props)
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let chunks = Layout::vertical([
            Constraint::Length(3), // search input
            Constraint::Min(1),    // weather panel
            Constraint::Length(1), // help bar
        ])
        .split(area);

        let search_props = self.search_props(props.state);
        self.search.render(frame, chunks[0], search_props);
        self.body
            .render(frame, chunks[1], WeatherBodyProps { state: props.state });
        self.help.render(frame, chunks[2], HelpBarProps);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_enter_submits_the_query() {
        let mut display = WeatherDisplay::new();
        let state = AppState {
            query: "Kyiv".into(),
            ..AppState::new()
        };

        let actions = display.handle_event(&key(KeyCode::Enter), WeatherDisplayProps {
            state: &state,
        });

        assert_eq!(actions, vec![Action::QuerySubmit("Kyiv".into())]);
    }

    #[test]
    fn test_esc_quits() {
        let mut display = WeatherDisplay::new();
        let state = AppState::new();

        let actions = display.handle_event(&key(KeyCode::Esc), WeatherDisplayProps {
            state: &state,
        });

        assert_eq!(actions, vec![Action::Quit]);
    }

    #[test]
    fn test_ctrl_c_quits() {
        let mut display = WeatherDisplay::new();
        let state = AppState::new();
        let event = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);

        let actions = display.handle_event(&event, WeatherDisplayProps { state: &state });

        assert_eq!(actions, vec![Action::Quit]);
    }

    #[test]
    fn test_printable_keys_edit_the_query() {
        let mut display = WeatherDisplay::new();
        let state = AppState {
            query: "Ky".into(),
            ..AppState::new()
        };

        let actions = display.handle_event(&key(KeyCode::Char('i')), WeatherDisplayProps {
            state: &state,
        });

        assert_eq!(actions, vec![Action::QueryChange("Kyi".into())]);
    }

    #[test]
    fn test_render_composes_the_panel() {
        let backend = TestBackend::new(46, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut display = WeatherDisplay::new();
        let state = AppState::new();

        terminal
            .draw(|frame| {
                display.render(frame, frame.area(), WeatherDisplayProps { state: &state });
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer.cell((x, y)).map(|cell| cell.symbol()).unwrap_or(" "));
            }
            out.push('\n');
        }

        assert!(out.contains("City"), "{out}");
        assert!(out.contains("Enter city name..."), "{out}");
        assert!(out.contains("quit"), "{out}");
    }
}
