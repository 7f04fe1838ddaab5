use std::path::PathBuf;
use std::str::FromStr;

use axum::http::HeaderValue;

/// Error raised when an environment variable holds an unusable value.
#[derive(Debug, thiserror::Error)]
#[error("{var} must be {expected}, got '{value}'")]
pub struct ConfigError {
    pub var: &'static str,
    pub expected: &'static str,
    pub value: String,
}

/// Which origins may call the API cross-site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsOrigins {
    /// `CORS_ORIGINS=*`: any origin, without credentials.
    Any,
    /// An explicit allow-list, with credentials.
    List(Vec<HeaderValue>),
}

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Postgres connection string.
    pub database_url: String,
    /// Upper bound on connecting to / acquiring from the database, in seconds.
    pub db_connect_timeout_secs: u64,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    pub cors_origins: CorsOrigins,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Directory holding the dashboard page served at `/`.
    pub static_dir: PathBuf,
    /// When set, a database that is unreachable at startup is fatal instead
    /// of switching the service into demo mode.
    pub strict_persistence: bool,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                   | Default                                  |
    /// |---------------------------|------------------------------------------|
    /// | `HOST`                    | `0.0.0.0`                                |
    /// | `PORT`                    | `3000`                                   |
    /// | `DATABASE_URL`            | `postgres://localhost:5432/contactform`  |
    /// | `DB_CONNECT_TIMEOUT_SECS` | `5`                                      |
    /// | `CORS_ORIGINS`            | `*`                                      |
    /// | `REQUEST_TIMEOUT_SECS`    | `30`                                     |
    /// | `STATIC_DIR`              | `public`                                 |
    /// | `STRICT_PERSISTENCE`      | `false`                                  |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build the configuration from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |var: &str, default: &str| lookup(var).unwrap_or_else(|| default.to_string());

        let host = get("HOST", "0.0.0.0");
        let port = parse("PORT", get("PORT", "3000"), "a valid port number")?;
        let database_url = get("DATABASE_URL", "postgres://localhost:5432/contactform");
        let db_connect_timeout_secs = parse(
            "DB_CONNECT_TIMEOUT_SECS",
            get("DB_CONNECT_TIMEOUT_SECS", "5"),
            "a whole number of seconds",
        )?;
        let cors_origins = parse_cors_origins(&get("CORS_ORIGINS", "*"))?;
        let request_timeout_secs = parse(
            "REQUEST_TIMEOUT_SECS",
            get("REQUEST_TIMEOUT_SECS", "30"),
            "a whole number of seconds",
        )?;
        let static_dir = PathBuf::from(get("STATIC_DIR", "public"));
        let strict_persistence = parse(
            "STRICT_PERSISTENCE",
            get("STRICT_PERSISTENCE", "false"),
            "true or false",
        )?;

        Ok(Self {
            host,
            port,
            database_url,
            db_connect_timeout_secs,
            cors_origins,
            request_timeout_secs,
            static_dir,
            strict_persistence,
        })
    }
}

fn parse<T: FromStr>(var: &'static str, value: String, expected: &'static str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError {
        var,
        expected,
        value,
    })
}

fn parse_cors_origins(raw: &str) -> Result<CorsOrigins, ConfigError> {
    let origins: Vec<&str> = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();

    if origins.is_empty() || origins.contains(&"*") {
        return Ok(CorsOrigins::Any);
    }

    origins
        .into_iter()
        .map(|o| {
            HeaderValue::from_str(o).map_err(|_| ConfigError {
                var: "CORS_ORIGINS",
                expected: "a comma-separated list of origins",
                value: o.to_string(),
            })
        })
        .collect::<Result<Vec<_>, _>>()
        .map(CorsOrigins::List)
}
