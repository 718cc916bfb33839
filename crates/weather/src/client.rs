//! OpenWeatherMap One Call client and the provider trait the API layer
//! depends on.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;

use crate::error::WeatherError;
use crate::retry::{with_retry, RetryConfig};
use crate::types::{OneCallResponse, WeatherSnapshot};

/// One Call 3.0 endpoint.
pub const ONECALL_URL: &str = "https://api.openweathermap.org/data/3.0/onecall";

/// Blocks excluded from the response; only `current` is consumed.
const DEFAULT_EXCLUDE: &str = "minutely,hourly,daily,alerts";

/// Per-request timeout.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Source of current weather conditions for a coordinate pair.
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    /// Fetch a complete snapshot of the current conditions.
    async fn current(&self, lat: f64, lon: f64) -> Result<WeatherSnapshot, WeatherError>;
}

/// OpenWeatherMap-backed [`WeatherProvider`].
#[derive(Debug, Clone)]
pub struct OpenWeatherClient {
    client: reqwest::Client,
    api_key: String,
    retry: RetryConfig,
}

impl OpenWeatherClient {
    /// Build a client for the given API key.
    ///
    /// An empty key is rejected up front so misconfiguration fails at
    /// startup rather than on the first request.
    pub fn new(api_key: impl Into<String>, retry: RetryConfig) -> Result<Self, WeatherError> {
        let api_key = api_key.into();
        if api_key.is_empty() {
            return Err(WeatherError::MissingApiKey);
        }

        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(WeatherError::Client)?;

        Ok(Self {
            client,
            api_key,
            retry,
        })
    }

    async fn fetch_onecall(&self, lat: f64, lon: f64) -> Result<OneCallResponse, WeatherError> {
        let response = with_retry(&self.retry, || {
            self.client
                .get(ONECALL_URL)
                .query(&[
                    ("lat", lat.to_string()),
                    ("lon", lon.to_string()),
                    ("appid", self.api_key.clone()),
                    ("units", "imperial".to_string()),
                    ("exclude", DEFAULT_EXCLUDE.to_string()),
                ])
                .send()
        })
        .await?;

        match response.status() {
            StatusCode::OK => response
                .json::<OneCallResponse>()
                .await
                .map_err(WeatherError::Decode),
            StatusCode::TOO_MANY_REQUESTS => Err(WeatherError::RateLimited),
            status => Err(WeatherError::UnexpectedStatus(status)),
        }
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherClient {
    async fn current(&self, lat: f64, lon: f64) -> Result<WeatherSnapshot, WeatherError> {
        let payload = self.fetch_onecall(lat, lon).await?;
        payload.snapshot()
    }
}
