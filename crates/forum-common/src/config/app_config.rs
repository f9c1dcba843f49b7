//! Application configuration structs
//!
//! Loads configuration from environment variables (optionally seeded from a
//! `.env` file).

use serde::Deserialize;
use std::env;
use std::time::Duration;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub api: ServerConfig,
    pub store: StoreBackend,
    pub database: Option<DatabaseConfig>,
    pub cors: CorsConfig,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    pub moderation: ModerationConfig,
}

/// General application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default = "default_env")]
    pub env: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }

    fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "production" => Some(Self::Production),
            "staging" => Some(Self::Staging),
            "development" => Some(Self::Development),
            _ => None,
        }
    }
}

/// Which storage backend the server runs against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    #[default]
    Postgres,
    Memory,
}

impl StoreBackend {
    fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "postgres" | "postgresql" => Some(Self::Postgres),
            "memory" | "in-memory" => Some(Self::Memory),
            _ => None,
        }
    }
}

/// Server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Database configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
}

/// CORS configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct CorsConfig {
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

/// Moderation workflow settings
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ModerationConfig {
    /// Suspension length used when a request omits `days`
    #[serde(default = "default_suspension_days")]
    pub default_suspension_days: u32,
    /// Write a notification to the banned author when their id is known
    #[serde(default = "default_notify_on_ban")]
    pub notify_on_ban: bool,
}

impl Default for ModerationConfig {
    fn default() -> Self {
        Self {
            default_suspension_days: default_suspension_days(),
            notify_on_ban: default_notify_on_ban(),
        }
    }
}

// Default value functions
fn default_app_name() -> String {
    "forum-moderation".to_string()
}

fn default_env() -> Environment {
    Environment::Development
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_max_connections() -> u32 {
    20
}

fn default_min_connections() -> u32 {
    5
}

fn default_request_timeout_secs() -> u64 {
    30
}

fn default_suspension_days() -> u32 {
    7
}

fn default_notify_on_ban() -> bool {
    true
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if required environment variables are missing
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let store = match lookup("STORE_BACKEND") {
            Some(raw) => StoreBackend::parse(&raw)
                .ok_or(ConfigError::InvalidValue("STORE_BACKEND", raw))?,
            None => StoreBackend::default(),
        };

        let database = match (store, lookup("DATABASE_URL")) {
            (_, Some(url)) => Some(DatabaseConfig {
                url,
                max_connections: parse_or(&lookup, "DATABASE_MAX_CONNECTIONS", default_max_connections)?,
                min_connections: parse_or(&lookup, "DATABASE_MIN_CONNECTIONS", default_min_connections)?,
            }),
            (StoreBackend::Postgres, None) => return Err(ConfigError::MissingVar("DATABASE_URL")),
            (StoreBackend::Memory, None) => None,
        };

        let default_suspension_days =
            parse_or(&lookup, "MODERATION_DEFAULT_SUSPENSION_DAYS", default_suspension_days)?;
        if default_suspension_days == 0 {
            return Err(ConfigError::InvalidValue(
                "MODERATION_DEFAULT_SUSPENSION_DAYS",
                "0".to_string(),
            ));
        }

        Ok(Self {
            app: AppSettings {
                name: lookup("APP_NAME").unwrap_or_else(default_app_name),
                env: lookup("APP_ENV")
                    .and_then(|s| Environment::parse(&s))
                    .unwrap_or_default(),
            },
            api: ServerConfig {
                host: lookup("API_HOST").unwrap_or_else(default_host),
                port: lookup("API_PORT")
                    .and_then(|s| s.parse().ok())
                    .ok_or(ConfigError::MissingVar("API_PORT"))?,
            },
            store,
            database,
            cors: CorsConfig {
                allowed_origins: lookup("CORS_ALLOWED_ORIGINS")
                    .map(|s| {
                        s.split(',')
                            .map(str::trim)
                            .filter(|o| !o.is_empty())
                            .map(String::from)
                            .collect()
                    })
                    .unwrap_or_default(),
            },
            request_timeout_secs: parse_or(&lookup, "REQUEST_TIMEOUT_SECS", default_request_timeout_secs)?,
            moderation: ModerationConfig {
                default_suspension_days,
                notify_on_ban: parse_or(&lookup, "MODERATION_NOTIFY_ON_BAN", default_notify_on_ban)?,
            },
        })
    }

    /// Request timeout applied by the HTTP layer
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: fn() -> T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue(key, raw)),
        None => Ok(default()),
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
