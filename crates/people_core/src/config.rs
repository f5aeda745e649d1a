//! Process configuration for the people API.
//!
//! # Responsibility
//! - Provide defaults that match the historical hardcoded deployment.
//! - Apply optional overrides from `PEOPLE_API_*` environment variables.
//!
//! # Invariants
//! - Loading configuration never touches the database or the network.
//! - An override that fails to parse is an error, never silently ignored.

use crate::logging::default_log_level;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

pub const ENV_LISTEN_ADDR: &str = "PEOPLE_API_ADDR";
pub const ENV_DB_PATH: &str = "PEOPLE_API_DB";
pub const ENV_DB_READ_ONLY: &str = "PEOPLE_API_DB_READ_ONLY";
pub const ENV_LOG_LEVEL: &str = "PEOPLE_API_LOG_LEVEL";
pub const ENV_LOG_DIR: &str = "PEOPLE_API_LOG_DIR";

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_DB_FILE_NAME: &str = "adventureworks.sqlite3";
const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidValue { key, value, reason } => {
                write!(f, "invalid value `{value}` for {key}: {reason}")
            }
        }
    }
}

impl Error for ConfigError {}

/// Connection parameters for the SQLite database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub path: PathBuf,
    /// Open without write access. Schema must already be at the latest version.
    pub read_only: bool,
    pub busy_timeout_ms: u64,
}

impl DatabaseConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            read_only: false,
            busy_timeout_ms: DEFAULT_BUSY_TIMEOUT_MS,
        }
    }

    pub fn busy_timeout(&self) -> Duration {
        Duration::from_millis(self.busy_timeout_ms)
    }

    /// Renders the effective connection parameters for startup logging.
    pub fn describe(&self) -> String {
        format!(
            "path={};read_only={};busy_timeout_ms={}",
            self.path.display(),
            self.read_only,
            self.busy_timeout_ms
        )
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DB_FILE_NAME)
    }
}

/// Top-level configuration consumed by the server binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub listen_addr: SocketAddr,
    pub database: DatabaseConfig,
    pub log_level: String,
    /// `None` logs to stderr only.
    pub log_dir: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], DEFAULT_PORT)),
            database: DatabaseConfig::default(),
            log_level: default_log_level().to_string(),
            log_dir: None,
        }
    }
}

impl AppConfig {
    /// Loads configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration from an arbitrary key lookup.
    ///
    /// Missing or blank keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let mut config = Self::default();

        if let Some(value) = read(ENV_LISTEN_ADDR) {
            config.listen_addr = value.parse().map_err(|err| ConfigError::InvalidValue {
                key: ENV_LISTEN_ADDR,
                value: value.clone(),
                reason: format!("{err}"),
            })?;
        }

        if let Some(value) = read(ENV_DB_PATH) {
            config.database.path = PathBuf::from(value);
        }

        if let Some(value) = read(ENV_DB_READ_ONLY) {
            config.database.read_only = parse_bool(ENV_DB_READ_ONLY, &value)?;
        }

        if let Some(value) = read(ENV_LOG_LEVEL) {
            config.log_level = value;
        }

        if let Some(value) = read(ENV_LOG_DIR) {
            config.log_dir = Some(PathBuf::from(value));
        }

        Ok(config)
    }
}

fn parse_bool(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            key,
            value: value.to_string(),
            reason: "expected true|false".to_string(),
        }),
    }
}
