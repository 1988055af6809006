//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `petkitd.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Simulated coordinator settings.
    pub simulator: SimulatorConfig,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

/// Simulated coordinator configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SimulatorConfig {
    /// Seconds between simulation steps.
    pub tick_secs: u16,
    /// Seconds between sensor state polls.
    pub poll_secs: u16,
}

impl Config {
    /// Load configuration from `petkitd.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if
    /// a value fails validation.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("petkitd.toml")?;
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
        if let Ok(val) = std::env::var("PETKIT_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("RUST_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("PETKIT_TICK_SECS") {
            if let Ok(secs) = val.parse() {
                self.simulator.tick_secs = secs;
            }
        }
        if let Ok(val) = std::env::var("PETKIT_POLL_SECS") {
            if let Ok(secs) = val.parse() {
                self.simulator.poll_secs = secs;
            }
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.simulator.tick_secs == 0 {
            return Err(ConfigError::Validation(
                "tick_secs must be non-zero".to_string(),
            ));
        }
        if self.simulator.poll_secs == 0 {
            return Err(ConfigError::Validation(
                "poll_secs must be non-zero".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "petkitd=info,petkit=info".to_string(),
        }
    }
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            tick_secs: 5,
            poll_secs: 2,
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config file exists but could not be read.
    #[error("failed to read configuration file")]
    Io(#[from] std::io::Error),

    /// The config file is not valid TOML for this schema.
    #[error("failed to parse configuration file")]
    Parse(#[from] toml::de::Error),

    /// A value is out of range.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
