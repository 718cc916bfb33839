use std::sync::Arc;

use ouch_weather::WeatherProvider;

use crate::config::Settings;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: ouch_db::DbPool,
    /// Server configuration.
    pub config: Arc<Settings>,
    /// Source of current weather conditions.
    pub weather: Arc<dyn WeatherProvider>,
}
