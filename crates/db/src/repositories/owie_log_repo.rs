//! Repository for the `owie_logs` table.

use sqlx::SqlitePool;

use crate::models::owie_log::{NewOwieLog, OwieLog};

/// Column list for `owie_logs` queries.
const COLUMNS: &str = "\
    id, date_time, body_part, temperature, pressure, humidity, \
    precipitation, uv_index, weather_id, weather_main, weather_description, \
    created_at";

/// Provides insert and read operations for owie logs.
pub struct OwieLogRepo;

impl OwieLogRepo {
    /// Insert a new owie log, returning the full row.
    pub async fn insert(pool: &SqlitePool, input: &NewOwieLog) -> Result<OwieLog, sqlx::Error> {
        let query = format!(
            "INSERT INTO owie_logs \
                (date_time, body_part, temperature, pressure, humidity, \
                 precipitation, uv_index, weather_id, weather_main, \
                 weather_description) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, OwieLog>(&query)
            .bind(input.date_time)
            .bind(&input.body_part)
            .bind(input.temperature)
            .bind(input.pressure)
            .bind(input.humidity)
            .bind(input.precipitation)
            .bind(input.uv_index)
            .bind(input.weather_id)
            .bind(&input.weather_main)
            .bind(&input.weather_description)
            .fetch_one(pool)
            .await
    }

    /// List the most recent owie logs, newest observation first.
    pub async fn list_recent(pool: &SqlitePool, limit: i64) -> Result<Vec<OwieLog>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM owie_logs \
             ORDER BY date_time DESC, id DESC \
             LIMIT ?1"
        );
        sqlx::query_as::<_, OwieLog>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }
}
