use axum::http::HeaderValue;

/// Errors raised while reading configuration from the environment.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{var} has an invalid value '{value}'")]
    Invalid { var: &'static str, value: String },
}

/// Server configuration loaded from environment variables.
///
/// All fields except the database location have defaults suitable for
/// local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<HeaderValue>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// PostgreSQL connection URL.
    pub database_url: String,
}

impl ServerConfig {
    /// Load configuration from the process environment.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT` / `API_PORT`    | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `DATABASE_URL`         | built from `DB_*` vars     |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".into());

        let port: u16 = match lookup("PORT").or_else(|| lookup("API_PORT")) {
            Some(raw) => parse_var("PORT", raw)?,
            None => 3000,
        };

        let cors_origins = lookup("CORS_ORIGINS")
            .unwrap_or_else(|| "http://localhost:5173".into())
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|origin| {
                origin.parse::<HeaderValue>().map_err(|_| ConfigError::Invalid {
                    var: "CORS_ORIGINS",
                    value: origin.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let request_timeout_secs: u64 = match lookup("REQUEST_TIMEOUT_SECS") {
            Some(raw) => parse_var("REQUEST_TIMEOUT_SECS", raw)?,
            None => 30,
        };

        let database_url = database_url(&lookup)?;

        Ok(Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            database_url,
        })
    }
}

fn parse_var<T: std::str::FromStr>(var: &'static str, raw: String) -> Result<T, ConfigError> {
    raw.trim()
        .parse()
        .map_err(|_| ConfigError::Invalid { var, value: raw })
}

/// `DATABASE_URL` wins; otherwise the URL is assembled from `DB_USER`,
/// `DB_PASSWORD`, `DB_HOST`, `DB_PORT` and `DB_NAME`.
fn database_url<F>(lookup: &F) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(url) = lookup("DATABASE_URL") {
        return Ok(url);
    }

    let name = lookup("DB_NAME").ok_or(ConfigError::Missing("DATABASE_URL"))?;
    let user = lookup("DB_USER").unwrap_or_else(|| "postgres".into());
    let password = lookup("DB_PASSWORD").unwrap_or_default();
    let host = lookup("DB_HOST").unwrap_or_else(|| "localhost".into());
    let port = lookup("DB_PORT").unwrap_or_else(|| "5432".into());

    let credentials = if password.is_empty() {
        user
    } else {
        format!("{user}:{password}")
    };
    Ok(format!("postgres://{credentials}@{host}:{port}/{name}"))
}
