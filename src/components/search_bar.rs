use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{Component, SPINNERS};
use crate::action::Action;

/// Single-line city input, always focused
#[derive(Default)]
pub struct SearchBar;

pub struct SearchBarProps<'a> {
    pub query: &'a str,
    pub is_fetching: bool,
    pub tick_count: u32,
    // Action constructors
    pub on_change: fn(String) -> Action,
    pub on_submit: fn(String) -> Action,
}

impl Component<Action> for SearchBar {
    type Props<'a> = SearchBarProps<'a>;

    fn handle_event(&mut self, event: &KeyEvent, props: Self::Props<'_>) -> Vec<Action> {
        match event.code {
            KeyCode::Enter => vec![(props.on_submit)(props.query.to_string())],
            KeyCode::Backspace => {
                let mut value = props.query.to_string();
                if value.pop().is_some() {
                    vec![(props.on_change)(value)]
                } else {
                    Vec::new()
                }
            }
            KeyCode::Char(c) if !event.modifiers.contains(KeyModifiers::CONTROL) => {
                let mut value = props.query.to_string();
                value.push(c);
                vec![(props.on_change)(value)]
            }
            _ => Vec::new(),
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let title = if props.is_fetching {
            format!(" City {} ", SPINNERS[props.tick_count as usize % SPINNERS.len()])
        } else {
            " City ".to_string()
        };
        let block = Block::default().borders(Borders::ALL).title(title);
        let inner = block.inner(area);

        let content = if props.query.is_empty() {
            Line::from(Span::styled(
                "Enter city name...",
                Style::default().fg(Color::DarkGray),
            ))
        } else {
            Line::from(props.query.to_string())
        };
        frame.render_widget(Paragraph::new(content).block(block), area);

        // Block cursor after the last typed character
        if inner.width > 0 && inner.height > 0 {
            let x = inner.x + (props.query.chars().count() as u16).min(inner.width - 1);
            frame.set_cursor_position((x, inner.y));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn props(query: &str) -> SearchBarProps<'_> {
        SearchBarProps {
            query,
            is_fetching: false,
            tick_count: 0,
            on_change: Action::QueryChange,
            on_submit: Action::QuerySubmit,
        }
    }

    #[test]
    fn test_typing_appends_to_the_query() {
        let mut bar = SearchBar;
        let actions = bar.handle_event(&key(KeyCode::Char('s')), props("Pari"));
        assert_eq!(actions, vec![Action::QueryChange("Paris".into())]);
    }

    #[test]
    fn test_enter_submits_the_current_value() {
        let mut bar = SearchBar;
        let actions = bar.handle_event(&key(KeyCode::Enter), props("Paris"));
        assert_eq!(actions, vec![Action::QuerySubmit("Paris".into())]);
    }

    #[test]
    fn test_backspace_pops_the_last_character() {
        let mut bar = SearchBar;
        let actions = bar.handle_event(&key(KeyCode::Backspace), props("Paris"));
        assert_eq!(actions, vec![Action::QueryChange("Pari".into())]);
    }

    #[test]
    fn test_backspace_on_empty_emits_nothing() {
        let mut bar = SearchBar;
        let actions = bar.handle_event(&key(KeyCode::Backspace), props(""));
        assert!(actions.is_empty());
    }

    #[test]
    fn test_control_chords_do_not_edit() {
        let mut bar = SearchBar;
        let event = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        let actions = bar.handle_event(&event, props("Paris"));
        assert!(actions.is_empty());
    }
}
