//! Configuration management for rosteraudit.
//!
//! Provides TOML-based configuration with XDG-compliant paths and
//! environment variable overrides.

use crate::error::{ConfigError, ConfigResult};
use crate::types::TableType;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default career at-bat threshold for minors eligibility.
pub const DEFAULT_AT_BAT_THRESHOLD: u32 = 130;

/// Default career innings threshold for minors eligibility.
pub const DEFAULT_INNINGS_THRESHOLD: u32 = 50;

/// Main application configuration.
///
/// This is loaded from `~/.config/rosteraudit/config.toml` (or platform equivalent).
/// If the file doesn't exist, default values are used.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Which compliance checks run and their thresholds
    pub checks: CheckConfig,
    /// HTTP fetch settings
    pub fetch: FetchConfig,
}

impl AppConfig {
    /// Load configuration from disk, falling back to defaults if not found.
    ///
    /// # Errors
    /// Returns error if:
    /// - Config directory cannot be determined
    /// - File exists but cannot be read
    /// - File contents are not valid TOML
    pub fn load() -> ConfigResult<Self> {
        let config_path = Self::config_path()?;
        Self::load_from(&config_path)
    }

    /// Load configuration from an explicit path, falling back to defaults if absent.
    pub fn load_from(path: &Path) -> ConfigResult<Self> {
        if path.exists() {
            tracing::debug!("Loading config from {}", path.display());
            let contents = fs::read_to_string(path)?;
            let config: Self = toml::from_str(&contents)?;
            config.validate()?;
            Ok(config)
        } else {
            tracing::debug!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Load configuration with environment variable overrides.
    ///
    /// Supports the following environment variables:
    /// - `ROSTERAUDIT_AB_THRESHOLD`: Override the career at-bat threshold
    /// - `ROSTERAUDIT_IP_THRESHOLD`: Override the career innings threshold
    /// - `ROSTERAUDIT_COOKIE`: Session cookie forwarded with every request
    /// - `ROSTERAUDIT_TIMEOUT_SECS`: Override the request timeout
    pub fn load_with_env() -> ConfigResult<Self> {
        let mut config = Self::load()?;
        config.apply_env_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Apply overrides from a key lookup (normally the process environment).
    ///
    /// Values that fail to parse are ignored.
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(threshold) = lookup("ROSTERAUDIT_AB_THRESHOLD").and_then(|v| v.parse().ok()) {
            self.checks.at_bat_threshold = threshold;
            tracing::debug!("Override checks.at_bat_threshold from env: {}", threshold);
        }

        if let Some(threshold) = lookup("ROSTERAUDIT_IP_THRESHOLD").and_then(|v| v.parse().ok()) {
            self.checks.innings_threshold = threshold;
            tracing::debug!("Override checks.innings_threshold from env: {}", threshold);
        }

        if let Some(cookie) = lookup("ROSTERAUDIT_COOKIE").filter(|v| !v.trim().is_empty()) {
            self.fetch.cookie = Some(cookie);
            tracing::debug!("Override fetch.cookie from env");
        }

        if let Some(secs) = lookup("ROSTERAUDIT_TIMEOUT_SECS").and_then(|v| v.parse().ok()) {
            self.fetch.timeout_secs = secs;
            tracing::debug!("Override fetch.timeout_secs from env: {}", secs);
        }
    }

    /// Check values that serde alone cannot constrain.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.fetch.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "fetch.timeout_secs".to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }
        if self.fetch.user_agent.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "fetch.user_agent".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Save configuration to `path`, creating its directory if needed.
    pub fn save_to(&self, path: &Path) -> ConfigResult<()> {
        let config_dir = path.parent().ok_or_else(|| ConfigError::InvalidValue {
            field: "config_path".to_string(),
            reason: "no parent directory".to_string(),
        })?;

        fs::create_dir_all(config_dir)?;
        tracing::debug!("Saving config to {}", path.display());

        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// Get the path to the configuration file.
    ///
    /// Uses XDG base directories: `~/.config/rosteraudit/config.toml`
    pub fn config_path() -> ConfigResult<PathBuf> {
        Ok(project_dirs()?.config_dir().join("config.toml"))
    }

    /// Get the data directory path.
    ///
    /// Uses XDG base directories: `~/.local/share/rosteraudit`
    pub fn data_dir() -> ConfigResult<PathBuf> {
        Ok(project_dirs()?.data_dir().to_path_buf())
    }
}

fn project_dirs() -> ConfigResult<ProjectDirs> {
    ProjectDirs::from("com", "rosteraudit", "rosteraudit").ok_or(ConfigError::NoConfigDir)
}

/// Settings for a single compliance run.
///
/// Field names serialize in camelCase because the config is echoed inside the
/// JSON report; snake_case keys are accepted when reading TOML.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CheckConfig {
    /// Flag injured-slot players without an IL designation
    #[serde(alias = "check_injured_enabled")]
    pub check_injured_enabled: bool,
    /// Flag minors-slot players over the experience thresholds
    #[serde(alias = "check_minors_enabled")]
    pub check_minors_enabled: bool,
    /// Career at-bats at which a batter loses minors eligibility
    #[serde(alias = "at_bat_threshold")]
    pub at_bat_threshold: u32,
    /// Career innings at which a pitcher loses minors eligibility
    #[serde(alias = "innings_threshold")]
    pub innings_threshold: u32,
}

impl CheckConfig {
    /// Threshold that applies to players listed in the given table.
    #[must_use]
    pub const fn threshold_for(&self, table_type: TableType) -> u32 {
        match table_type {
            TableType::Batters => self.at_bat_threshold,
            TableType::Pitchers => self.innings_threshold,
        }
    }
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            check_injured_enabled: true,
            check_minors_enabled: true,
            at_bat_threshold: DEFAULT_AT_BAT_THRESHOLD,
            innings_threshold: DEFAULT_INNINGS_THRESHOLD,
        }
    }
}

/// HTTP fetch settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// User agent string
    pub user_agent: String,
    /// Session cookie for the already-authenticated league session.
    /// Read from config or environment, never written back to disk.
    #[serde(skip_serializing)]
    pub cookie: Option<String>,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            user_agent: concat!("rosteraudit/", env!("CARGO_PKG_VERSION")).to_string(),
            cookie: None,
        }
    }
}
