use std::env;
use std::time::Duration;

use crate::error::AppError;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;

/// Lobby view cache tuning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheSettings {
    /// How long a cached view stays readable after it was written
    pub ttl: Duration,
    /// How often expired entries are swept out
    pub sweep_interval: Duration,
    pub max_entries: u64,
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(60),
            sweep_interval: Duration::from_secs(600),
            max_entries: 10_000,
        }
    }
}

/// Process configuration read from `LOBBY_*` environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub cache: CacheSettings,
    pub cors_allowed_origins: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            cache: CacheSettings::default(),
            cors_allowed_origins: Vec::new(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AppError> {
        let defaults = CacheSettings::default();
        Ok(Self {
            host: env::var("LOBBY_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            port: parsed_var("LOBBY_PORT", DEFAULT_PORT)?,
            cache: CacheSettings {
                ttl: Duration::from_secs(parsed_var(
                    "LOBBY_CACHE_TTL_SECS",
                    defaults.ttl.as_secs(),
                )?),
                sweep_interval: Duration::from_secs(parsed_var(
                    "LOBBY_CACHE_SWEEP_SECS",
                    defaults.sweep_interval.as_secs(),
                )?),
                max_entries: parsed_var("LOBBY_CACHE_MAX_ENTRIES", defaults.max_entries)?,
            },
            cors_allowed_origins: origins(
                &env::var("LOBBY_CORS_ALLOWED_ORIGINS").unwrap_or_default(),
            ),
        })
    }
}

/// Read `name` and parse it, falling back to `default` when unset.
fn parsed_var<T>(name: &str, default: T) -> Result<T, AppError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|e| AppError::config(format!("{name}={raw:?} is invalid: {e}"))),
        Err(env::VarError::NotPresent) => Ok(default),
        Err(e) => Err(e.into()),
    }
}

/// Comma-separated http(s) origins; blanks and "null" are dropped.
fn origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty() && *s != "null")
        .filter(|s| s.starts_with("http://") || s.starts_with("https://"))
        .map(str::to_string)
        .collect()
}
