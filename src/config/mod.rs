//! # Configuration Management Module
//!
//! Typed TOML configuration for the chitchat client, with defaults that
//! work out of the box and validation that fails loudly before a duel
//! ever starts.
//!
//! ## Configuration File Format
//!
//! ```toml
//! [api]
//! base_url = "http://codingforfun.pmdx.me"
//! timeout_seconds = 10
//!
//! [game]
//! default_variant = 1
//!
//! [logging]
//! level = "info"
//! # file = "chitchat.log"
//! ```
//!
//! `chitchat init` writes this starter file; `Config::load` reads and
//! validates it. CLI arguments override config values, which override the
//! defaults.

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use tokio::fs;

use crate::duel::GameVariant;

/// Opponent service endpoint settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the opponent service; variant paths are appended.
    pub base_url: String,
    /// Per-request deadline. A slow service surfaces as a retryable
    /// timeout, never a hung client.
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

fn default_timeout_seconds() -> u64 {
    10
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            base_url: "http://codingforfun.pmdx.me".to_string(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

/// Game preferences.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Variant preselected when the client starts (changeable at the
    /// prompt before a session begins).
    #[serde(default = "default_variant")]
    pub default_variant: u8,
}

fn default_variant() -> u8 {
    1
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            default_variant: default_variant(),
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Base level: error, warn, info, debug, or trace. The CLI `-v`
    /// flags raise it.
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Optional append-only log file alongside console output.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: default_log_level(),
            file: None,
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub game: GameConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load and validate a configuration file.
    pub async fn load(path: &str) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .await
            .map_err(|e| anyhow!("cannot read config file {}: {}", path, e))?;
        let config: Config =
            toml::from_str(&raw).map_err(|e| anyhow!("invalid config file {}: {}", path, e))?;
        config.validate()?;
        Ok(config)
    }

    /// Write a starter configuration file with the defaults.
    pub async fn create_default(path: &str) -> Result<()> {
        let serialized = toml::to_string_pretty(&Config::default())?;
        fs::write(path, serialized).await?;
        Ok(())
    }

    /// Check every section; the messages name the field and the accepted
    /// range so a typo in the TOML is a one-line fix.
    pub fn validate(&self) -> Result<()> {
        if !self.api.base_url.starts_with("http://") && !self.api.base_url.starts_with("https://")
        {
            return Err(anyhow!(
                "api.base_url must start with http:// or https://, got '{}'",
                self.api.base_url
            ));
        }
        if self.api.timeout_seconds == 0 || self.api.timeout_seconds > 120 {
            return Err(anyhow!(
                "api.timeout_seconds must be between 1 and 120, got {}",
                self.api.timeout_seconds
            ));
        }
        GameVariant::try_from(self.game.default_variant).map_err(|_| {
            anyhow!(
                "game.default_variant must be between 1 and 4, got {}",
                self.game.default_variant
            )
        })?;
        match self.logging.level.as_str() {
            "error" | "warn" | "info" | "debug" | "trace" => {}
            other => {
                return Err(anyhow!(
                    "logging.level must be one of error/warn/info/debug/trace, got '{}'",
                    other
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_validates() {
        Config::default().validate().expect("defaults are valid");
    }

    #[test]
    fn bad_base_url_rejected() {
        let mut config = Config::default();
        config.api.base_url = "codingforfun.pmdx.me".into();
        assert!(config.validate().is_err());
    }

    #[test]
    fn zero_timeout_rejected() {
        let mut config = Config::default();
        config.api.timeout_seconds = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn out_of_range_variant_rejected() {
        let mut config = Config::default();
        config.game.default_variant = 5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn unknown_log_level_rejected() {
        let mut config = Config::default();
        config.logging.level = "loud".into();
        assert!(config.validate().is_err());
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let config: Config = toml::from_str("[api]\nbase_url = \"https://duel.example\"\n")
            .expect("partial config parses");
        assert_eq!(config.api.timeout_seconds, 10);
        assert_eq!(config.game.default_variant, 1);
        assert_eq!(config.logging.level, "info");
        config.validate().expect("partial config is valid");
    }
}
