//! Reducer - pure function: (state, action) -> DispatchResult

use crate::action::Action;
use crate::effect::Effect;
use crate::state::AppState;
use crate::store::{DataResource, DispatchResult};

/// The reducer handles all state transitions
pub fn reducer(state: &mut AppState, action: Action) -> DispatchResult<Effect> {
    match action {
        // ===== Query actions =====
        Action::QueryChange(query) => {
            state.query = query;
            DispatchResult::changed()
        }

        Action::QuerySubmit(query) => {
            let city = query.trim().to_string();
            if city.is_empty() {
                return DispatchResult::unchanged();
            }
            state.query = query;
            if state.weather.is_loaded() {
                // Keep the stale report on screen until the new outcome lands
                state.is_refreshing = true;
            } else {
                state.weather = DataResource::Loading;
            }
            state.tick_count = 0;
            DispatchResult::changed_with(Effect::FetchWeather { city })
        }

        // ===== Weather actions =====
        Action::WeatherDidLoad(report) => {
            state.weather = DataResource::Loaded(report);
            state.is_refreshing = false;
            DispatchResult::changed()
        }

        Action::WeatherDidError(message) => {
            state.weather = DataResource::Failed(message);
            state.is_refreshing = false;
            DispatchResult::changed()
        }

        // ===== Global actions =====
        Action::Tick => {
            if state.is_fetching() {
                state.tick_count = state.tick_count.wrapping_add(1);
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }

        Action::Quit => DispatchResult::unchanged(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::WeatherReport;
    use pretty_assertions::assert_eq;

    fn paris() -> WeatherReport {
        WeatherReport {
            name: "Paris".into(),
            country: "FR".into(),
            temperature: 18.4,
            condition: "Clear sky".into(),
            humidity: 60,
            wind_speed: 3.2,
            pressure: 1012.0,
            visibility: 10000.0,
            feels_like: 17.1,
        }
    }

    #[test]
    fn test_submit_sets_loading_and_requests_fetch() {
        let mut state = AppState {
            query: "Paris".into(),
            ..AppState::new()
        };

        let result = reducer(&mut state, Action::QuerySubmit("Paris".into()));

        assert!(result.changed);
        assert!(state.weather.is_loading());
        assert!(state.is_fetching());
        assert_eq!(
            result.effects,
            vec![Effect::FetchWeather {
                city: "Paris".into()
            }]
        );
    }

    #[test]
    fn test_submit_trims_the_city() {
        let mut state = AppState::new();

        let result = reducer(&mut state, Action::QuerySubmit("  Paris  ".into()));

        assert_eq!(
            result.effects,
            vec![Effect::FetchWeather {
                city: "Paris".into()
            }]
        );
    }

    #[test]
    fn test_empty_submit_is_a_no_op() {
        let mut state = AppState::new();
        let before = state.clone();

        for query in ["", "   ", "\t"] {
            let result = reducer(&mut state, Action::QuerySubmit(query.into()));
            assert!(!result.changed);
            assert!(result.effects.is_empty());
            assert_eq!(state, before);
        }
    }

    #[test]
    fn test_load_replaces_loading_with_the_report() {
        let mut state = AppState {
            weather: DataResource::Loading,
            ..AppState::new()
        };

        let result = reducer(&mut state, Action::WeatherDidLoad(paris()));

        assert!(result.changed);
        assert_eq!(state.weather.data(), Some(&paris()));
        assert!(!state.is_fetching());
    }

    #[test]
    fn test_error_clears_the_report() {
        let mut state = AppState {
            weather: DataResource::Loaded(paris()),
            is_refreshing: true,
            ..AppState::new()
        };

        let result = reducer(&mut state, Action::WeatherDidError("City not found".into()));

        assert!(result.changed);
        assert_eq!(state.weather.data(), None);
        assert_eq!(state.weather.error(), Some("City not found"));
        assert!(!state.is_fetching());
    }

    #[test]
    fn test_refresh_keeps_the_stale_report_visible() {
        let mut state = AppState {
            weather: DataResource::Loaded(paris()),
            ..AppState::new()
        };

        let result = reducer(&mut state, Action::QuerySubmit("Lyon".into()));

        assert!(result.changed);
        assert!(state.is_refreshing);
        assert_eq!(state.weather.data(), Some(&paris()));
        assert_eq!(
            result.effects,
            vec![Effect::FetchWeather {
                city: "Lyon".into()
            }]
        );
    }

    #[test]
    fn test_resubmit_after_failure_clears_the_error() {
        let mut state = AppState {
            weather: DataResource::Failed("City not found".into()),
            ..AppState::new()
        };

        reducer(&mut state, Action::QuerySubmit("Paris".into()));

        assert!(state.weather.is_loading());
        assert_eq!(state.weather.error(), None);
    }

    #[test]
    fn test_every_resolution_clears_the_fetching_flag() {
        // First load path
        let mut state = AppState {
            weather: DataResource::Loading,
            ..AppState::new()
        };
        reducer(&mut state, Action::WeatherDidError("no route to host".into()));
        assert!(!state.is_fetching());

        // Refresh path
        let mut state = AppState {
            weather: DataResource::Loaded(paris()),
            is_refreshing: true,
            ..AppState::new()
        };
        reducer(&mut state, Action::WeatherDidLoad(paris()));
        assert!(!state.is_fetching());
    }

    #[test]
    fn test_tick_animates_only_while_fetching() {
        let mut state = AppState::new();

        let result = reducer(&mut state, Action::Tick);
        assert!(!result.changed);
        assert_eq!(state.tick_count, 0);

        state.weather = DataResource::Loading;
        let result = reducer(&mut state, Action::Tick);
        assert!(result.changed);
        assert_eq!(state.tick_count, 1);
    }
}
