//! CLI argument definitions using clap derive macros.

use clap::{Args, Parser, Subcommand};
use rosteraudit_core::config::{DEFAULT_AT_BAT_THRESHOLD, DEFAULT_INNINGS_THRESHOLD};
use rosteraudit_core::CheckConfig;
use std::path::PathBuf;

/// Audit a fantasy baseball league's Injured and Minors roster slots.
#[derive(Parser, Debug)]
#[command(name = "rosteraudit")]
#[command(author, version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run a compliance check against a league
    Check(CheckArgs),
    /// Show the stored result of the last check
    Last,
    /// Show the effective configuration
    Config {
        /// Print only the config file location
        #[arg(long)]
        path: bool,

        /// Write a default config file if none exists
        #[arg(long, conflicts_with = "path")]
        init: bool,
    },
}

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Any page URL inside the league, e.g. https://myleague.baseball.cbssports.com/teams
    pub league_url: String,

    /// Skip the Injured-slot check
    #[arg(long)]
    pub skip_injured: bool,

    /// Skip the Minors-eligibility check
    #[arg(long)]
    pub skip_minors: bool,

    /// Career at-bat threshold for minors batters (0 uses the default)
    #[arg(long)]
    pub ab_threshold: Option<u32>,

    /// Career innings threshold for minors pitchers (0 uses the default)
    #[arg(long)]
    pub ip_threshold: Option<u32>,

    /// Write the JSON report to this file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print the JSON report to stdout instead of the summary
    #[arg(long)]
    pub json: bool,
}

impl CheckArgs {
    /// Layer command-line choices over the configured check settings.
    ///
    /// A zero threshold falls back to the built-in default rather than
    /// flagging every minors player.
    pub fn apply_to(&self, base: CheckConfig) -> CheckConfig {
        CheckConfig {
            check_injured_enabled: base.check_injured_enabled && !self.skip_injured,
            check_minors_enabled: base.check_minors_enabled && !self.skip_minors,
            at_bat_threshold: nonzero_or(
                self.ab_threshold.unwrap_or(base.at_bat_threshold),
                DEFAULT_AT_BAT_THRESHOLD,
            ),
            innings_threshold: nonzero_or(
                self.ip_threshold.unwrap_or(base.innings_threshold),
                DEFAULT_INNINGS_THRESHOLD,
            ),
        }
    }
}

fn nonzero_or(value: u32, default: u32) -> u32 {
    if value == 0 {
        default
    } else {
        value
    }
}
