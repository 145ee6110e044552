//! Configuration loading and management.

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Daemon configuration.
///
/// Every key is optional; an empty or absent file leaves the daemon with
/// no lot, no banner, and a stdout that carries nothing but replies.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    /// Lot pre-creation settings.
    #[serde(default)]
    pub lot: LotConfig,
    /// Startup banner settings.
    #[serde(default)]
    pub banner: BannerConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration from a TOML file, treating an absent file as the
    /// default configuration. Any other read failure still errors.
    pub fn load_optional<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => Ok(toml::from_str(&content)?),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(err.into()),
        }
    }
}

/// Lot pre-creation configuration.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct LotConfig {
    /// Create the lot with this capacity at startup, as if a creation
    /// command had run before the first input line. No reply is printed
    /// for it; the creation is only logged.
    pub capacity: Option<u32>,
}

/// Startup banner configuration.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct BannerConfig {
    /// Path to a banner file (one line per output line).
    pub file: Option<String>,
    /// Inline banner lines (used when `file` is not set).
    #[serde(default)]
    pub lines: Vec<String>,
}

impl BannerConfig {
    /// Load banner lines from file, falling back to inline lines.
    pub fn load_lines(&self) -> Vec<String> {
        if let Some(ref path) = self.file {
            match std::fs::read_to_string(path) {
                Ok(content) => {
                    return content.lines().map(|s| s.to_string()).collect();
                }
                Err(e) => {
                    tracing::warn!("Failed to read banner file {}: {}", path, e);
                }
            }
        }

        self.lines.clone()
    }
}
