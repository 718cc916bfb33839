//! OpenWeatherMap One Call 3.0 client.
//!
//! Wraps a single HTTP GET in exponential backoff with jitter: transport
//! failures (connect errors, timeouts) are retried, while HTTP status
//! failures surface immediately. The [`WeatherProvider`] trait is the seam
//! the API layer depends on, so handlers can be tested without the network.

pub mod client;
pub mod error;
pub mod retry;
pub mod types;

pub use client::{OpenWeatherClient, WeatherProvider};
pub use error::WeatherError;
pub use retry::RetryConfig;
pub use types::WeatherSnapshot;
