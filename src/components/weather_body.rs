use ratatui::{
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{Component, ERROR_ICON, SPINNERS};
use crate::action::Action;
use crate::icons;
use crate::state::{AppState, WeatherReport};
use crate::store::DataResource;

/// The weather panel proper: placeholder, spinner, report, or error
#[derive(Default)]
pub struct WeatherBody;

pub struct WeatherBodyProps<'a> {
    pub state: &'a AppState,
}

/// Fixed rows around the icon: heading, blanks, temperature, condition, tiles.
const LAYOUT_FIXED: u16 = 14;

/// Metric tiles: two bordered rows of two, plus the feels-like strip.
const TILE_ROWS: u16 = 9;

impl Component<Action> for WeatherBody {
    type Props<'a> = WeatherBodyProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        match WeatherView::from_state(props.state) {
            WeatherView::Ready(report) => render_ready(frame, area, report),
            WeatherView::Error(message) => render_error(frame, area, message),
            WeatherView::Loading => render_loading(frame, area, props.state.tick_count),
            WeatherView::Empty => render_empty(frame, area),
        }
    }
}

// ============================================================================
// View dispatch
// ============================================================================

enum WeatherView<'a> {
    Ready(&'a WeatherReport),
    Error(&'a str),
    Loading,
    Empty,
}

impl<'a> WeatherView<'a> {
    fn from_state(state: &'a AppState) -> Self {
        match &state.weather {
            DataResource::Loaded(report) => WeatherView::Ready(report),
            DataResource::Failed(message) => WeatherView::Error(message),
            DataResource::Loading => WeatherView::Loading,
            DataResource::Empty => WeatherView::Empty,
        }
    }
}

// ============================================================================
// Views
// ============================================================================

fn render_ready(frame: &mut Frame, area: Rect, report: &WeatherReport) {
    let icon = icons::condition_art(&report.condition, area.height.saturating_sub(LAYOUT_FIXED));
    let icon_height = icon.lines.len() as u16;

    let chunks = Layout::vertical([
        Constraint::Length(1), // location heading
        Constraint::Length(1),
        Constraint::Length(icon_height),
        Constraint::Length(1), // temperature
        Constraint::Length(1), // condition text
        Constraint::Length(1),
        Constraint::Length(TILE_ROWS),
    ])
    .flex(Flex::Center)
    .split(area);

    let heading = Line::from(Span::styled(
        format!("{}, {}", report.name, report.country),
        Style::default().bold(),
    ))
    .centered();
    frame.render_widget(Paragraph::new(heading), chunks[0]);

    frame.render_widget(Paragraph::new(icon).alignment(Alignment::Center), chunks[2]);

    let temperature = Line::from(Span::styled(
        report.temperature_label(),
        Style::default()
            .fg(temperature_color(report.temperature))
            .bold(),
    ))
    .centered();
    frame.render_widget(Paragraph::new(temperature), chunks[3]);

    let condition = Line::from(Span::styled(
        report.condition.clone(),
        Style::default().fg(Color::Gray),
    ))
    .centered();
    frame.render_widget(Paragraph::new(condition), chunks[4]);

    render_tiles(frame, chunks[6], report);
}

fn render_tiles(frame: &mut Frame, area: Rect, report: &WeatherReport) {
    let rows = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(3),
    ])
    .split(area);
    let top =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).split(rows[0]);
    let bottom =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).split(rows[1]);

    render_tile(frame, top[0], "Humidity", report.humidity_label());
    render_tile(frame, top[1], "Wind Speed", report.wind_label());
    render_tile(frame, bottom[0], "Pressure", report.pressure_label());
    render_tile(frame, bottom[1], "Visibility", report.visibility_label());
    render_tile(frame, rows[2], "Feels Like", report.feels_like_label());
}

fn render_tile(frame: &mut Frame, area: Rect, label: &str, value: String) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {label} "))
        .title_style(Style::default().fg(Color::DarkGray));
    frame.render_widget(Paragraph::new(Line::from(value).centered()).block(block), area);
}

fn render_loading(frame: &mut Frame, area: Rect, tick_count: u32) {
    let chunks = Layout::vertical([Constraint::Length(1), Constraint::Length(1)])
        .flex(Flex::Center)
        .split(area);

    let spinner = SPINNERS[tick_count as usize % SPINNERS.len()];
    frame.render_widget(Paragraph::new(Line::from(spinner).centered()), chunks[0]);
    frame.render_widget(
        Paragraph::new(
            Line::from(Span::styled(
                "Loading...",
                Style::default().fg(Color::DarkGray),
            ))
            .centered(),
        ),
        chunks[1],
    );
}

fn render_empty(frame: &mut Frame, area: Rect) {
    let icon = icons::Icon::Cloud;
    let art = if area.height > icons::ART_HEIGHT + 2 {
        icon.art()
    } else {
        Text::from(Line::from(icon.emoji()))
    };
    let art_height = art.lines.len() as u16;

    let chunks = Layout::vertical([
        Constraint::Length(art_height),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .flex(Flex::Center)
    .split(area);

    frame.render_widget(Paragraph::new(art).alignment(Alignment::Center), chunks[0]);
    frame.render_widget(
        Paragraph::new(
            Line::from(Span::styled(
                "Enter a city name to get weather information",
                Style::default().fg(Color::DarkGray),
            ))
            .centered(),
        ),
        chunks[2],
    );
}

fn render_error(frame: &mut Frame, area: Rect, message: &str) {
    let chunks = Layout::vertical([
        Constraint::Length(1), // icon
        Constraint::Length(1), // "Error"
        Constraint::Length(1), // message
        Constraint::Length(1),
        Constraint::Length(1), // hint
    ])
    .flex(Flex::Center)
    .split(area);

    frame.render_widget(Paragraph::new(Line::from(ERROR_ICON).centered()), chunks[0]);
    frame.render_widget(
        Paragraph::new(
            Line::from(Span::styled(
                "Error",
                Style::default().fg(Color::Red).bold(),
            ))
            .centered(),
        ),
        chunks[1],
    );
    frame.render_widget(
        Paragraph::new(
            Line::from(Span::styled(
                message.to_string(),
                Style::default().fg(Color::Rgb(200, 100, 100)),
            ))
            .centered(),
        ),
        chunks[2],
    );
    frame.render_widget(
        Paragraph::new(
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::DarkGray)),
                Span::styled("Enter", Style::default().fg(Color::Cyan).bold()),
                Span::styled(" to try again", Style::default().fg(Color::DarkGray)),
            ])
            .centered(),
        ),
        chunks[4],
    );
}

fn temperature_color(celsius: f64) -> Color {
    match celsius {
        t if t < 0.0 => Color::Rgb(150, 200, 255),
        t if t < 15.0 => Color::Rgb(100, 180, 255),
        t if t < 25.0 => Color::Rgb(100, 200, 150),
        t if t < 35.0 => Color::Rgb(255, 180, 80),
        _ => Color::Rgb(255, 100, 80),
    }
}
