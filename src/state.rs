//! Application state - single source of truth

use serde::{Deserialize, Serialize};

use crate::store::DataResource;

/// How often the spinner advances while a fetch is in flight
pub const SPINNER_TICK_MS: u64 = 100;

/// Current conditions as reported by the backend
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherReport {
    pub name: String,
    pub country: String,
    /// °C
    pub temperature: f64,
    /// Free-text description, e.g. "Light rain showers"
    pub condition: String,
    /// Percent
    pub humidity: u32,
    /// m/s
    pub wind_speed: f64,
    /// hPa
    pub pressure: f64,
    /// Meters
    pub visibility: f64,
    /// °C
    pub feels_like: f64,
}

impl WeatherReport {
    /// "18°C" - nearest whole degree
    pub fn temperature_label(&self) -> String {
        format!("{}°C", self.temperature.round() as i64)
    }

    pub fn feels_like_label(&self) -> String {
        format!("{}°C", self.feels_like.round() as i64)
    }

    /// "10.0 km" - meters to kilometers, one decimal
    pub fn visibility_label(&self) -> String {
        format!("{:.1} km", self.visibility / 1000.0)
    }

    pub fn humidity_label(&self) -> String {
        format!("{}%", self.humidity)
    }

    pub fn wind_label(&self) -> String {
        format!("{} m/s", self.wind_speed)
    }

    pub fn pressure_label(&self) -> String {
        format!("{} hPa", self.pressure)
    }
}

/// Application state - everything the UI needs to render
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AppState {
    /// Text in the search field
    pub query: String,

    /// Weather lifecycle: Empty → Loading → Loaded/Failed
    pub weather: DataResource<WeatherReport>,

    /// A fetch is in flight while a previous report stays on screen
    pub is_refreshing: bool,

    /// Spinner frame counter
    pub tick_count: u32,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// True strictly between request start and resolution
    pub fn is_fetching(&self) -> bool {
        self.weather.is_loading() || self.is_refreshing
    }
}
