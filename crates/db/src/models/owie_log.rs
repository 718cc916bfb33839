//! Owie log entity model and insert DTO.

use ouch_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `owie_logs` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct OwieLog {
    pub id: DbId,
    /// Observation time reported by the weather API (epoch seconds).
    pub date_time: i64,
    pub body_part: String,
    pub temperature: f64,
    pub pressure: f64,
    pub humidity: f64,
    pub precipitation: f64,
    pub uv_index: f64,
    pub weather_id: Option<i64>,
    pub weather_main: Option<String>,
    pub weather_description: Option<String>,
    /// Row insertion time.
    pub created_at: Timestamp,
}

/// DTO for inserting a new owie log.
#[derive(Debug, Clone)]
pub struct NewOwieLog {
    pub date_time: i64,
    pub body_part: String,
    pub temperature: f64,
    pub pressure: f64,
    pub humidity: f64,
    pub precipitation: f64,
    pub uv_index: f64,
    pub weather_id: Option<i64>,
    pub weather_main: Option<String>,
    pub weather_description: Option<String>,
}
