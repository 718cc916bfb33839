#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    #[error("Weather API key is required")]
    MissingApiKey,

    #[error("Too many requests - API rate limit reached")]
    RateLimited,

    #[error("Weather API returned unexpected status {0}")]
    UnexpectedStatus(reqwest::StatusCode),

    #[error("Weather request failed after {attempts} attempts: {source}")]
    Transport {
        attempts: u32,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to decode weather API response: {0}")]
    Decode(#[source] reqwest::Error),

    #[error("Incomplete weather data received from the API: missing {field}")]
    IncompleteData { field: &'static str },

    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}
