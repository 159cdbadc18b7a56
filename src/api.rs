//! HTTP client for the weather backend

use serde::Deserialize;
use thiserror::Error;

use crate::state::WeatherReport;

/// Default base endpoint of the weather service
pub const DEFAULT_ENDPOINT: &str = "http://localhost:3000/weather";

/// Fallback when a failure response carries no usable message
pub const GENERIC_FETCH_ERROR: &str = "Failed to fetch weather data";

/// Failure body shape: `{ "message": "..." }`, everything optional
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

#[derive(Debug, Error)]
pub enum FetchError {
    /// The backend answered with a failure status
    #[error("{0}")]
    Api(String),

    /// The request never completed
    #[error("{0}")]
    Request(#[from] reqwest::Error),

    /// A success response whose body did not match the expected shape
    #[error("unexpected response body: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Client for the weather backend
#[derive(Debug, Clone)]
pub struct Client {
    endpoint: String,
    http: reqwest::Client,
}

impl Client {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            http: reqwest::Client::new(),
        }
    }

    /// `{endpoint}/{city}` with the city percent-encoded as one path segment
    pub fn weather_url(&self, city: &str) -> String {
        format!(
            "{}/{}",
            self.endpoint.trim_end_matches('/'),
            urlencoding::encode(city)
        )
    }

    /// Fetch current conditions for a city.
    ///
    /// Any non-2xx status is a failure; its body's `message` field is
    /// surfaced when present, otherwise [`GENERIC_FETCH_ERROR`].
    pub async fn fetch_weather(&self, city: &str) -> Result<WeatherReport, FetchError> {
        let response = self.http.get(self.weather_url(city)).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorBody>(&body)
                .ok()
                .and_then(|body| body.message)
                .unwrap_or_else(|| GENERIC_FETCH_ERROR.to_string());
            return Err(FetchError::Api(message));
        }

        Ok(serde_json::from_str(&body)?)
    }
}
