/// Settings loaded from environment variables (optionally via a `.env`
/// file).
///
/// The weather API key and the coordinates are required; everything else
/// has a default suitable for local development.
#[derive(Debug, Clone)]
pub struct Settings {
    /// OpenWeatherMap API key.
    pub ow_api_key: String,
    /// Latitude of the location owies are logged for.
    pub lat: f64,
    /// Longitude of the location owies are logged for.
    pub lon: f64,
    /// SQLite database file path (default: `data/data.db`).
    pub db_path: String,
    /// Bind address (default: `127.0.0.1`).
    pub host: String,
    /// Bind port (default: `8000`).
    pub port: u16,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("Missing required environment variables: {}", .0.join(", "))]
    MissingVars(Vec<&'static str>),

    #[error("Invalid value for {name}: {reason}")]
    InvalidVar { name: &'static str, reason: String },
}

/// Read an environment variable, treating an empty value as unset.
fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

impl Settings {
    /// Load settings from environment variables.
    ///
    /// | Env Var                | Default        |
    /// |------------------------|----------------|
    /// | `OUCH_OW_API_KEY`      | (required)     |
    /// | `OUCH_LAT`             | (required)     |
    /// | `OUCH_LON`             | (required)     |
    /// | `OUCH_DB_PATH`         | `data/data.db` |
    /// | `HOST`                 | `127.0.0.1`    |
    /// | `PORT`                 | `8000`         |
    /// | `REQUEST_TIMEOUT_SECS` | `30`           |
    ///
    /// All missing required variables are reported together so a bad
    /// deployment surfaces the full list at once.
    pub fn from_env() -> Result<Self, SettingsError> {
        let ow_api_key = env_var("OUCH_OW_API_KEY");
        let lat = env_var("OUCH_LAT");
        let lon = env_var("OUCH_LON");

        let mut missing = Vec::new();
        if ow_api_key.is_none() {
            missing.push("OUCH_OW_API_KEY");
        }
        if lat.is_none() {
            missing.push("OUCH_LAT");
        }
        if lon.is_none() {
            missing.push("OUCH_LON");
        }
        if !missing.is_empty() {
            return Err(SettingsError::MissingVars(missing));
        }

        let lat: f64 = lat
            .unwrap()
            .parse()
            .map_err(|e| SettingsError::InvalidVar {
                name: "OUCH_LAT",
                reason: format!("must be a number: {e}"),
            })?;
        let lon: f64 = lon
            .unwrap()
            .parse()
            .map_err(|e| SettingsError::InvalidVar {
                name: "OUCH_LON",
                reason: format!("must be a number: {e}"),
            })?;

        let db_path = env_var("OUCH_DB_PATH").unwrap_or_else(|| "data/data.db".into());
        let host = env_var("HOST").unwrap_or_else(|| "127.0.0.1".into());

        let port: u16 = env_var("PORT")
            .unwrap_or_else(|| "8000".into())
            .parse()
            .map_err(|e| SettingsError::InvalidVar {
                name: "PORT",
                reason: format!("must be a valid u16: {e}"),
            })?;

        let request_timeout_secs: u64 = env_var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|| "30".into())
            .parse()
            .map_err(|e| SettingsError::InvalidVar {
                name: "REQUEST_TIMEOUT_SECS",
                reason: format!("must be a valid u64: {e}"),
            })?;

        Ok(Self {
            ow_api_key: ow_api_key.unwrap(),
            lat,
            lon,
            db_path,
            host,
            port,
            request_timeout_secs,
        })
    }
}
