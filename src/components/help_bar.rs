use ratatui::{
    layout::Rect,
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::Component;
use crate::action::Action;

/// One-line key hints
#[derive(Default)]
pub struct HelpBar;

pub struct HelpBarProps;

impl Component<Action> for HelpBar {
    type Props<'a> = HelpBarProps;

    fn render(&mut self, frame: &mut Frame, area: Rect, _props: Self::Props<'_>) {
        let dim = Style::default().fg(Color::DarkGray);
        let key = Style::default().fg(Color::Cyan).bold();
        let line = Line::from(vec![
            Span::styled("enter", key),
            Span::styled(" search", dim),
            Span::styled("  ·  ", dim),
            Span::styled("esc", key),
            Span::styled(" quit", dim),
        ])
        .centered();
        frame.render_widget(Paragraph::new(line), area);
    }
}
