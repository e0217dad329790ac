//! Server configuration loading from file and environment variables.

use cadence_types::{Pace, UserPreference};
use serde::Deserialize;
use std::net::{IpAddr, Ipv4Addr};
use thiserror::Error;

/// Top-level server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Server network settings.
    #[serde(default)]
    pub server: ServerConfig,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Registered users and their speaking preferences.
    #[serde(default = "default_users")]
    pub users: Vec<UserEntry>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            logging: LoggingConfig::default(),
            users: default_users(),
        }
    }
}

/// Network configuration for the HTTP server.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host address to bind to.
    #[serde(default = "default_host")]
    pub host: IpAddr,

    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "cadence_server=debug,info").
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Whether to output logs in JSON format.
    #[serde(default)]
    pub json: bool,
}

/// One user record as written in the config file.
#[derive(Debug, Clone, Deserialize)]
pub struct UserEntry {
    /// User identifier presented by clients.
    pub id: String,

    /// The pace this user prefers to speak at.
    #[serde(default)]
    pub pace: Pace,

    /// Filler vocabulary entries this user has opted out of being warned
    /// about. Compared case-insensitively against the detector vocabulary.
    #[serde(default)]
    pub allowed_fillers: Vec<String>,
}

impl From<UserEntry> for UserPreference {
    fn from(entry: UserEntry) -> Self {
        UserPreference {
            user_id: entry.id,
            preferred_pace: entry.pace,
            allowed_fillers: entry
                .allowed_fillers
                .into_iter()
                .map(|f| f.to_lowercase())
                .collect(),
        }
    }
}

fn default_host() -> IpAddr {
    IpAddr::V4(Ipv4Addr::new(127, 0, 0, 1))
}

fn default_port() -> u16 {
    3000
}

fn default_log_level() -> String {
    "info".to_string()
}

/// The users registered out of the box when no config file provides any.
fn default_users() -> Vec<UserEntry> {
    vec![
        UserEntry {
            id: "User1".to_string(),
            pace: Pace::Normal,
            allowed_fillers: Vec::new(),
        },
        UserEntry {
            id: "User2".to_string(),
            pace: Pace::Fast,
            allowed_fillers: vec!["like".to_string(), "you know".to_string()],
        },
    ]
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse the configuration file.
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Loads configuration from a TOML file, falling back to defaults.
///
/// Environment variable overrides:
/// - `CADENCE_HOST` overrides `server.host`
/// - `CADENCE_PORT` overrides `server.port`
/// - `CADENCE_LOG_LEVEL` overrides `logging.level`
/// - `CADENCE_LOG_JSON` overrides `logging.json` (set to "true" to enable)
///
/// # Errors
///
/// Returns `ConfigError` if the file exists but cannot be read or parsed.
pub fn load_config(path: Option<&str>) -> Result<Config, ConfigError> {
    let mut config = match path {
        Some(p) => match std::fs::read_to_string(p) {
            Ok(contents) => toml::from_str(&contents)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!(path = p, "config file not found, using defaults");
                Config::default()
            }
            Err(e) => return Err(ConfigError::FileRead(e)),
        },
        None => Config::default(),
    };

    // Environment variable overrides
    if let Ok(host) = std::env::var("CADENCE_HOST") {
        if let Ok(parsed) = host.parse() {
            config.server.host = parsed;
        }
    }
    if let Ok(port) = std::env::var("CADENCE_PORT") {
        if let Ok(parsed) = port.parse() {
            config.server.port = parsed;
        }
    }
    if let Ok(level) = std::env::var("CADENCE_LOG_LEVEL") {
        config.logging.level = level;
    }
    if let Ok(json) = std::env::var("CADENCE_LOG_JSON") {
        config.logging.json = json == "true" || json == "1";
    }

    Ok(config)
}
