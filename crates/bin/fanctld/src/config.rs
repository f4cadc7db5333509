//! Daemon configuration — TOML file with environment variable overrides.
//!
//! Looks for `fanctl.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// System bus settings.
    pub bus: BusConfig,
    /// Where the entity JSON files live.
    pub entities: EntitiesConfig,
    /// Operating profiles active at startup.
    pub profiles: ProfilesConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// System bus configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct BusConfig {
    /// Bus address, e.g. `unix:path=/var/run/dbus/system_bus_socket`.
    pub address: String,
}

/// Entity configuration location.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct EntitiesConfig {
    /// Directory holding `fans.json`, `groups.json` and `events.json`.
    pub dir: String,
}

/// Active operating profiles.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ProfilesConfig {
    pub active: Vec<String>,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Config {
    /// Load configuration from `fanctl.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or the
    /// resulting configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("fanctl.toml")?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("FANCTL_BUS_ADDRESS") {
            self.bus.address = val;
        }
        if let Ok(val) = std::env::var("FANCTL_CONFIG_DIR") {
            self.entities.dir = val;
        }
        if let Ok(val) = std::env::var("FANCTL_PROFILES") {
            self.profiles.active = parse_profile_list(&val);
        }
        if let Ok(val) = std::env::var("FANCTL_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.bus.address.is_empty() {
            return Err(ConfigError::Validation(
                "bus address must not be empty".to_string(),
            ));
        }
        if self.entities.dir.is_empty() {
            return Err(ConfigError::Validation(
                "entities directory must not be empty".to_string(),
            ));
        }
        if self.profiles.active.iter().any(String::is_empty) {
            return Err(ConfigError::Validation(
                "profile names must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Directory the entity files are read from.
    #[must_use]
    pub fn entities_dir(&self) -> &Path {
        Path::new(&self.entities.dir)
    }

    /// The active profiles as a set, for profile matching.
    #[must_use]
    pub fn active_profiles(&self) -> HashSet<String> {
        self.profiles.active.iter().cloned().collect()
    }
}

fn parse_profile_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}

impl Default for BusConfig {
    fn default() -> Self {
        Self {
            address: fanctl_domain::bus::BusHandle::SYSTEM.to_string(),
        }
    }
}

impl Default for EntitiesConfig {
    fn default() -> Self {
        Self {
            dir: "/usr/share/fanctl".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "fanctld=info,fanctl_app=info".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
