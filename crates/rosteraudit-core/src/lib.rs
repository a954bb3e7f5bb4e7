//! Rosteraudit Core - Foundation crate for the rosteraudit workspace.
//!
//! This crate provides shared types, error handling and configuration
//! management that the fetch, scanner and CLI crates depend on.
//!
//! # Modules
//!
//! - [`error`] - Central error types using thiserror
//! - [`config`] - TOML-based configuration with XDG paths
//! - [`types`] - Shared newtypes and enums (`LeagueUrl`, `PlayerId`, `TableType`, `StatType`)
//!
//! # Example
//!
//! ```rust
//! use rosteraudit_core::{AppConfig, LeagueUrl};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::default();
//! assert_eq!(config.checks.at_bat_threshold, 130);
//!
//! let league = LeagueUrl::from_page_url("https://mylg.baseball.cbssports.com/teams/3")?;
//! assert_eq!(league.as_str(), "https://mylg.baseball.cbssports.com");
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod config;
pub mod error;
pub mod types;

// Re-export commonly used types
pub use config::{AppConfig, CheckConfig, FetchConfig};
pub use error::{ConfigError, ConfigResult, Result, RosterAuditError};
pub use types::{LeagueUrl, PlayerId, StatType, TableType};
