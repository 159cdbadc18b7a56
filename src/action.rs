//! Actions - every event that can change state

use crate::state::WeatherReport;

/// Application actions
#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    // ===== Query category =====
    /// Search field text changed
    QueryChange(String),

    /// Submit the search field (Enter)
    QuerySubmit(String),

    // ===== Weather category =====
    /// Result: report fetched successfully
    WeatherDidLoad(WeatherReport),

    /// Result: fetch failed
    WeatherDidError(String),

    // ===== Global =====
    /// Periodic tick for the loading spinner
    Tick,

    /// Exit the application
    Quit,
}
