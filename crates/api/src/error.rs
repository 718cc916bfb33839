use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use ouch_core::error::CoreError;
use ouch_weather::WeatherError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors, [`sqlx::Error`] for persistence
/// failures, and [`WeatherError`] for the upstream weather API. Implements
/// [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `ouch_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A failure fetching or decoding upstream weather data.
    #[error("Weather error: {0}")]
    Weather(#[from] WeatherError),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INTERNAL_ERROR",
                        "An internal error occurred".to_string(),
                    )
                }
            },

            AppError::Database(err) => classify_sqlx_error(err),
            AppError::Weather(err) => classify_weather_error(err),
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Classify a sqlx error into an HTTP status, error code, and message.
///
/// `RowNotFound` maps to 404; everything else maps to 500 with a sanitized
/// message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
        ),
        other => {
            tracing::error!(error = %other, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            )
        }
    }
}

/// Classify an upstream weather failure.
///
/// Rate limiting maps to 503 so callers know to retry later; every other
/// upstream failure (transport exhaustion, bad status, undecodable or
/// incomplete payload) maps to 502 with a sanitized message.
fn classify_weather_error(err: &WeatherError) -> (StatusCode, &'static str, String) {
    match err {
        WeatherError::RateLimited => (
            StatusCode::SERVICE_UNAVAILABLE,
            "UPSTREAM_RATE_LIMITED",
            "Weather API rate limit reached, please try again later".to_string(),
        ),
        other => {
            tracing::error!(error = %other, "Weather upstream error");
            (
                StatusCode::BAD_GATEWAY,
                "UPSTREAM_ERROR",
                "Failed to fetch weather data".to_string(),
            )
        }
    }
}
