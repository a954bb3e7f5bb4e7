//! `rosteraudit config`: show or initialize the configuration.

use anyhow::{Context, Result};
use rosteraudit_core::AppConfig;
use std::path::Path;
use std::process::ExitCode;

pub fn run(path_only: bool, init: bool) -> Result<ExitCode> {
    let config_path = AppConfig::config_path()?;

    if path_only {
        println!("{}", config_path.display());
        return Ok(ExitCode::SUCCESS);
    }

    if init {
        if init_config(&config_path)? {
            println!("Wrote default configuration to {}", config_path.display());
        } else {
            println!("Configuration already exists at {}", config_path.display());
        }
        return Ok(ExitCode::SUCCESS);
    }

    let config = AppConfig::load_with_env().context("failed to load configuration")?;
    print!("{}", render_config(&config)?);
    Ok(ExitCode::SUCCESS)
}

/// Write the default configuration to `path` unless a file is already there.
/// Returns whether a file was written.
pub fn init_config(path: &Path) -> Result<bool> {
    if path.exists() {
        return Ok(false);
    }
    AppConfig::default()
        .save_to(path)
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(true)
}

/// TOML rendering of `config`. The session cookie is reported only as
/// present or absent.
pub fn render_config(config: &AppConfig) -> Result<String> {
    let mut out = toml::to_string_pretty(config).context("failed to render configuration")?;
    let cookie = if config.fetch.cookie.is_some() {
        "set"
    } else {
        "not set"
    };
    out.push_str(&format!("\n# session cookie: {cookie}\n"));
    Ok(out)
}
