pub mod help_bar;
pub mod search_bar;
pub mod weather_body;
pub mod weather_display;

use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};

pub use help_bar::{HelpBar, HelpBarProps};
pub use search_bar::{SearchBar, SearchBarProps};
pub use weather_body::{WeatherBody, WeatherBodyProps};
pub use weather_display::{WeatherDisplay, WeatherDisplayProps, ERROR_ICON, SPINNERS};

/// A view over read-only props: translates key events into actions and renders
pub trait Component<A> {
    type Props<'a>;

    fn handle_event(&mut self, _event: &KeyEvent, _props: Self::Props<'_>) -> Vec<A> {
        Vec::new()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>);
}
