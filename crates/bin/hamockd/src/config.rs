//! Configuration loading: TOML file with environment variable overrides.
//!
//! Looks for `hamock.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use std::path::PathBuf;
use std::str::FromStr;

use serde::Deserialize;

use hamock_domain::system_config::{SystemConfig, UnitSystem};

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Metadata reported by the Home Assistant mock.
    pub home_assistant: HomeAssistantConfig,
    /// Seed data settings.
    pub fixtures: FixturesConfig,
}

/// HTTP listener configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// TCP port.
    pub port: u16,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Base level (`error`, `warn`, `info`, `debug`, `trace`).
    pub level: String,
    /// Full filter directive (`RUST_LOG` syntax), overrides `level`.
    pub filter: Option<String>,
}

/// Home Assistant mock metadata, served by `GET /api/config`.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct HomeAssistantConfig {
    pub version: String,
    pub location_name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub elevation: i64,
    pub unit_system: UnitSystemConfig,
    pub timezone: String,
    pub components: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct UnitSystemConfig {
    pub length: String,
    pub mass: String,
    pub temperature: String,
    pub volume: String,
}

/// Seed data configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct FixturesConfig {
    /// JSON file replacing the built-in home.
    pub states_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from `hamock.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if an
    /// override or the resulting configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("hamock.toml")?;
        config.apply_overrides(|key| std::env::var(key).ok())?;
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

    fn apply_overrides<F>(&mut self, var: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = var("SERVER_HOST") {
            self.server.host = val;
        }
        if let Some(val) = var("SERVER_PORT") {
            self.server.port = parse_var("SERVER_PORT", &val)?;
        }
        if let Some(val) = var("LOG_LEVEL") {
            self.logging.level = val;
        }
        if let Some(val) = var("RUST_LOG") {
            self.logging.filter = Some(val);
        }
        if let Some(val) = var("HAMOCK_STATES_PATH") {
            self.fixtures.states_path = Some(PathBuf::from(val));
        }

        let ha = &mut self.home_assistant;
        if let Some(val) = var("HOME_ASSISTANT_VERSION") {
            ha.version = val;
        }
        if let Some(val) = var("HOME_ASSISTANT_LOCATION_NAME") {
            ha.location_name = val;
        }
        if let Some(val) = var("HOME_ASSISTANT_LATITUDE") {
            ha.latitude = parse_var("HOME_ASSISTANT_LATITUDE", &val)?;
        }
        if let Some(val) = var("HOME_ASSISTANT_LONGITUDE") {
            ha.longitude = parse_var("HOME_ASSISTANT_LONGITUDE", &val)?;
        }
        if let Some(val) = var("HOME_ASSISTANT_ELEVATION") {
            ha.elevation = parse_var("HOME_ASSISTANT_ELEVATION", &val)?;
        }
        if let Some(val) = var("HOME_ASSISTANT_UNIT_SYSTEM_LENGTH") {
            ha.unit_system.length = val;
        }
        if let Some(val) = var("HOME_ASSISTANT_UNIT_SYSTEM_MASS") {
            ha.unit_system.mass = val;
        }
        if let Some(val) = var("HOME_ASSISTANT_UNIT_SYSTEM_TEMPERATURE") {
            ha.unit_system.temperature = val;
        }
        if let Some(val) = var("HOME_ASSISTANT_UNIT_SYSTEM_VOLUME") {
            ha.unit_system.volume = val;
        }
        if let Some(val) = var("HOME_ASSISTANT_TIMEZONE") {
            ha.timezone = val;
        }
        if let Some(val) = var("HOME_ASSISTANT_COMPONENTS") {
            ha.components = val
                .split(',')
                .map(str::trim)
                .filter(|c| !c.is_empty())
                .map(ToString::to_string)
                .collect();
        }
        Ok(())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        Ok(())
    }

    /// Return the `host:port` bind address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Filter directive for `tracing_subscriber::EnvFilter`.
    #[must_use]
    pub fn log_filter(&self) -> &str {
        self.logging.filter.as_deref().unwrap_or(&self.logging.level)
    }

    /// Whether each HTTP request should be logged.
    #[must_use]
    pub fn request_logging(&self) -> bool {
        matches!(
            self.logging.level.to_ascii_lowercase().as_str(),
            "info" | "debug" | "trace"
        )
    }

    /// Build the hub metadata snapshot.
    #[must_use]
    pub fn system_config(&self) -> SystemConfig {
        let ha = &self.home_assistant;
        SystemConfig {
            location_name: ha.location_name.clone(),
            latitude: ha.latitude,
            longitude: ha.longitude,
            elevation: ha.elevation,
            unit_system: UnitSystem {
                length: ha.unit_system.length.clone(),
                mass: ha.unit_system.mass.clone(),
                temperature: ha.unit_system.temperature.clone(),
                volume: ha.unit_system.volume.clone(),
            },
            timezone: ha.timezone.clone(),
            components: ha.components.clone(),
            version: ha.version.clone(),
            ..SystemConfig::default()
        }
    }
}

fn parse_var<T: FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::Validation(format!("invalid value {value:?} for {key}")))
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            filter: None,
        }
    }
}

impl Default for HomeAssistantConfig {
    fn default() -> Self {
        let defaults = SystemConfig::default();
        Self {
            version: defaults.version,
            location_name: defaults.location_name,
            latitude: defaults.latitude,
            longitude: defaults.longitude,
            elevation: defaults.elevation,
            unit_system: UnitSystemConfig::default(),
            timezone: defaults.timezone,
            components: defaults.components,
        }
    }
}

impl Default for UnitSystemConfig {
    fn default() -> Self {
        let UnitSystem {
            length,
            mass,
            temperature,
            volume,
        } = UnitSystem::default();
        Self {
            length,
            mass,
            temperature,
            volume,
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
