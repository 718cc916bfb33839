//! Shared helpers for API integration tests.
//!
//! Mirrors the router construction in `main.rs` so tests exercise the same
//! middleware stack (request ID, timeout, tracing, panic recovery) that
//! production uses, with the weather provider swapped for a stub.

#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use tower::ServiceExt;

use ouch_api::config::Settings;
use ouch_api::router::build_app_router;
use ouch_api::state::AppState;
use ouch_weather::{WeatherError, WeatherProvider, WeatherSnapshot};

/// Build a test `Settings` with safe defaults.
pub fn test_settings() -> Settings {
    Settings {
        ow_api_key: "test-key".to_string(),
        lat: 44.34,
        lon: 10.99,
        db_path: ":memory:".to_string(),
        host: "127.0.0.1".to_string(),
        port: 0,
        request_timeout_secs: 30,
    }
}

/// A fixed snapshot for tests that log an owie successfully.
pub fn sample_snapshot() -> WeatherSnapshot {
    WeatherSnapshot {
        observed_at: 1_700_000_000,
        temperature: 68.4,
        pressure: 1012.0,
        humidity: 55.0,
        precipitation: 0.3,
        uv_index: 3.2,
        condition_id: 500,
        condition_main: "Rain".to_string(),
        condition_description: "light rain".to_string(),
    }
}

/// Weather provider returning a fixed snapshot.
pub struct StaticWeather(pub WeatherSnapshot);

#[async_trait]
impl WeatherProvider for StaticWeather {
    async fn current(&self, _lat: f64, _lon: f64) -> Result<WeatherSnapshot, WeatherError> {
        Ok(self.0.clone())
    }
}

/// How a [`FailingWeather`] provider should fail.
pub enum FailureMode {
    RateLimited,
    Incomplete,
}

/// Weather provider that always fails.
pub struct FailingWeather(pub FailureMode);

#[async_trait]
impl WeatherProvider for FailingWeather {
    async fn current(&self, _lat: f64, _lon: f64) -> Result<WeatherSnapshot, WeatherError> {
        match self.0 {
            FailureMode::RateLimited => Err(WeatherError::RateLimited),
            FailureMode::Incomplete => Err(WeatherError::IncompleteData {
                field: "current.uvi",
            }),
        }
    }
}

/// Build the application router over the given pool and weather provider.
pub fn build_test_app_with_weather(
    pool: SqlitePool,
    weather: Arc<dyn WeatherProvider>,
) -> Router {
    let settings = test_settings();
    let state = AppState {
        pool,
        config: Arc::new(settings.clone()),
        weather,
    };
    build_app_router(state, &settings)
}

/// Build the application router with a stub weather provider that always
/// returns [`sample_snapshot`].
pub fn build_test_app(pool: SqlitePool) -> Router {
    build_test_app_with_weather(pool, Arc::new(StaticWeather(sample_snapshot())))
}

/// Send a GET request to the app and return the response.
pub async fn get(app: Router, uri: &str) -> Response {
    app.oneshot(
        Request::builder()
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Send a POST request with an empty body to the app and return the response.
pub async fn post(app: Router, uri: &str) -> Response {
    app.oneshot(
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Collect a response body as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
