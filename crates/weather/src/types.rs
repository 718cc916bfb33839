//! Wire types for the One Call 3.0 payload and the flattened snapshot the
//! rest of the service consumes.

use serde::Deserialize;

use crate::error::WeatherError;

/// Top-level One Call response. Only the `current` block is requested;
/// minutely/hourly/daily/alerts are excluded in the query.
#[derive(Debug, Clone, Deserialize)]
pub struct OneCallResponse {
    pub current: Option<CurrentConditions>,
}

/// The `current` block. Every field is optional at the wire level; the API
/// omits keys it has no data for.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CurrentConditions {
    /// Observation time, epoch seconds UTC.
    pub dt: Option<i64>,
    pub temp: Option<f64>,
    pub pressure: Option<f64>,
    pub humidity: Option<f64>,
    pub uvi: Option<f64>,
    pub rain: Option<PrecipitationVolume>,
    pub snow: Option<PrecipitationVolume>,
    #[serde(default)]
    pub weather: Vec<WeatherCondition>,
}

/// Rain or snow volume. The API names the field `1h`.
#[derive(Debug, Clone, Deserialize)]
pub struct PrecipitationVolume {
    #[serde(rename = "1h")]
    pub one_hour: Option<f64>,
}

/// One entry of the `weather` condition array.
#[derive(Debug, Clone, Deserialize)]
pub struct WeatherCondition {
    pub id: Option<i64>,
    pub main: Option<String>,
    pub description: Option<String>,
}

/// Flattened, validated view of the current conditions.
///
/// A snapshot only exists when every field the owie log requires was
/// present in the payload; partial data is rejected during extraction.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherSnapshot {
    /// Observation time reported by the API, epoch seconds UTC.
    pub observed_at: i64,
    pub temperature: f64,
    pub pressure: f64,
    pub humidity: f64,
    /// Rain volume over the last hour if non-zero, else snow volume, else 0.
    pub precipitation: f64,
    pub uv_index: f64,
    pub condition_id: i64,
    pub condition_main: String,
    pub condition_description: String,
}

impl OneCallResponse {
    /// Extract a complete [`WeatherSnapshot`], naming the first missing
    /// field on failure.
    pub fn snapshot(self) -> Result<WeatherSnapshot, WeatherError> {
        let current = self.current.ok_or(WeatherError::IncompleteData { field: "current" })?;

        let observed_at = current
            .dt
            .ok_or(WeatherError::IncompleteData { field: "current.dt" })?;
        let temperature = current
            .temp
            .ok_or(WeatherError::IncompleteData { field: "current.temp" })?;
        let pressure = current.pressure.ok_or(WeatherError::IncompleteData {
            field: "current.pressure",
        })?;
        let humidity = current.humidity.ok_or(WeatherError::IncompleteData {
            field: "current.humidity",
        })?;
        let uv_index = current
            .uvi
            .ok_or(WeatherError::IncompleteData { field: "current.uvi" })?;

        let rain = current.rain.as_ref().and_then(|p| p.one_hour).unwrap_or(0.0);
        let snow = current.snow.as_ref().and_then(|p| p.one_hour).unwrap_or(0.0);
        let precipitation = if rain != 0.0 { rain } else { snow };

        let condition =
            current
                .weather
                .into_iter()
                .next()
                .ok_or(WeatherError::IncompleteData {
                    field: "current.weather",
                })?;
        let condition_id = condition.id.ok_or(WeatherError::IncompleteData {
            field: "current.weather[0].id",
        })?;
        let condition_main = condition.main.ok_or(WeatherError::IncompleteData {
            field: "current.weather[0].main",
        })?;
        let condition_description = condition.description.ok_or(WeatherError::IncompleteData {
            field: "current.weather[0].description",
        })?;

        Ok(WeatherSnapshot {
            observed_at,
            temperature,
            pressure,
            humidity,
            precipitation,
            uv_index,
            condition_id,
            condition_main,
            condition_description,
        })
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::error::WeatherError;

    fn full_payload() -> serde_json::Value {
        serde_json::json!({
            "lat": 44.34,
            "lon": 10.99,
            "timezone": "Europe/Rome",
            "current": {
                "dt": 1_700_000_000,
                "temp": 68.4,
                "pressure": 1012,
                "humidity": 55,
                "uvi": 3.2,
                "weather": [
                    { "id": 803, "main": "Clouds", "description": "broken clouds" }
                ]
            }
        })
    }

    fn parse(value: serde_json::Value) -> OneCallResponse {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn full_payload_yields_snapshot() {
        let snapshot = parse(full_payload()).snapshot().unwrap();

        assert_eq!(snapshot.observed_at, 1_700_000_000);
        assert_eq!(snapshot.temperature, 68.4);
        assert_eq!(snapshot.pressure, 1012.0);
        assert_eq!(snapshot.humidity, 55.0);
        assert_eq!(snapshot.uv_index, 3.2);
        assert_eq!(snapshot.precipitation, 0.0);
        assert_eq!(snapshot.condition_id, 803);
        assert_eq!(snapshot.condition_main, "Clouds");
        assert_eq!(snapshot.condition_description, "broken clouds");
    }

    #[test]
    fn rain_volume_wins_over_snow() {
        let mut payload = full_payload();
        payload["current"]["rain"] = serde_json::json!({ "1h": 0.8 });
        payload["current"]["snow"] = serde_json::json!({ "1h": 2.5 });

        let snapshot = parse(payload).snapshot().unwrap();
        assert_eq!(snapshot.precipitation, 0.8);
    }

    #[test]
    fn zero_rain_falls_back_to_snow() {
        let mut payload = full_payload();
        payload["current"]["rain"] = serde_json::json!({ "1h": 0.0 });
        payload["current"]["snow"] = serde_json::json!({ "1h": 2.5 });

        let snapshot = parse(payload).snapshot().unwrap();
        assert_eq!(snapshot.precipitation, 2.5);
    }

    #[test]
    fn missing_uvi_is_incomplete() {
        let mut payload = full_payload();
        payload["current"]
            .as_object_mut()
            .unwrap()
            .remove("uvi");

        let err = parse(payload).snapshot().unwrap_err();
        assert_matches!(err, WeatherError::IncompleteData { field: "current.uvi" });
    }

    #[test]
    fn empty_condition_array_is_incomplete() {
        let mut payload = full_payload();
        payload["current"]["weather"] = serde_json::json!([]);

        let err = parse(payload).snapshot().unwrap_err();
        assert_matches!(
            err,
            WeatherError::IncompleteData {
                field: "current.weather"
            }
        );
    }

    #[test]
    fn missing_current_block_is_incomplete() {
        let payload = serde_json::json!({ "lat": 44.34, "lon": 10.99 });

        let err = parse(payload).snapshot().unwrap_err();
        assert_matches!(err, WeatherError::IncompleteData { field: "current" });
    }
}
