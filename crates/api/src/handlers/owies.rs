//! Handler for logging owie events.
//!
//! An owie report triggers one upstream weather fetch and one row insert;
//! the row is only written from a complete weather snapshot.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use ouch_core::owie;
use ouch_db::models::owie_log::NewOwieLog;
use ouch_db::repositories::OwieLogRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// Response body for a successfully logged owie.
#[derive(Debug, Serialize)]
pub struct OwieLoggedResponse {
    pub message: &'static str,
    pub body_part: String,
    pub temperature: f64,
    pub pressure: f64,
}

// ---------------------------------------------------------------------------
// POST /owie/{body_part}
// ---------------------------------------------------------------------------

/// Log an owie for the given body part together with current weather.
pub async fn log_owie(
    State(state): State<AppState>,
    Path(body_part): Path<String>,
) -> AppResult<impl IntoResponse> {
    owie::validate_body_part(&body_part)?;

    let snapshot = state
        .weather
        .current(state.config.lat, state.config.lon)
        .await?;

    let log = OwieLogRepo::insert(
        &state.pool,
        &NewOwieLog {
            date_time: snapshot.observed_at,
            body_part,
            temperature: snapshot.temperature,
            pressure: snapshot.pressure,
            humidity: snapshot.humidity,
            precipitation: snapshot.precipitation,
            uv_index: snapshot.uv_index,
            weather_id: Some(snapshot.condition_id),
            weather_main: Some(snapshot.condition_main),
            weather_description: Some(snapshot.condition_description),
        },
    )
    .await?;

    tracing::info!(
        owie_log_id = log.id,
        body_part = %log.body_part,
        temperature = log.temperature,
        pressure = log.pressure,
        "Owie logged",
    );

    Ok(Json(OwieLoggedResponse {
        message: "Logged owie details successfully",
        body_part: log.body_part,
        temperature: log.temperature,
        pressure: log.pressure,
    }))
}
