//! Check orchestrator for coordinating a league compliance run.
//!
//! This module provides the `CheckOrchestrator` which fetches the roster page
//! once, applies the injured-slot rule locally, and checks every minors-slot
//! player's career page under a fixed in-flight ceiling. Problems with a
//! single player are recorded in the report and never abort the run.

use crate::career::extract_career_stat;
use crate::error::{Result, ScanError};
use crate::progress::{ProgressSink, TracingProgress};
use crate::report::{CheckError, CheckReport, Violation};
use crate::roster::{parse_roster, MinorsPlayer, Team};
use crate::rules::{check_injured_slots, minors_eligibility_violation};
use crate::url_builder::{career_stats_url, roster_url};
use futures::stream::{FuturesUnordered, StreamExt};
use rosteraudit_core::CheckConfig;
use rosteraudit_fetch::PageFetcher;
use std::sync::Arc;

/// Maximum number of player checks outstanding at once.
pub const MAX_IN_FLIGHT_CHECKS: usize = 10;

/// Progress is reported after this many completed player checks.
const PROGRESS_INTERVAL: usize = 10;

/// Reason recorded when a minors player's link carries no id.
pub const MISSING_PLAYER_ID_REASON: &str = "Could not extract player ID";

/// A minors player queued for checking, with the team that owns them.
#[derive(Debug, Clone)]
struct MinorsWorkItem {
    team: String,
    player: MinorsPlayer,
}

/// Terminal state of a single minors-player check.
#[derive(Debug)]
enum PlayerCheckOutcome {
    /// Career total below the threshold
    Eligible,
    /// Career total met the threshold
    Violation(Violation),
    /// No id, fetch failure or non-success status
    Errored(CheckError),
}

/// Orchestrates compliance runs against a league site.
pub struct CheckOrchestrator {
    /// Authenticated page fetcher
    fetcher: Arc<dyn PageFetcher>,
    /// Where status lines go
    progress: Arc<dyn ProgressSink>,
}

impl CheckOrchestrator {
    /// Create a new orchestrator that logs progress through tracing.
    #[must_use]
    pub fn new(fetcher: Arc<dyn PageFetcher>) -> Self {
        Self {
            fetcher,
            progress: Arc::new(TracingProgress),
        }
    }

    /// Send progress to a different sink.
    #[must_use]
    pub fn with_progress(mut self, progress: Arc<dyn ProgressSink>) -> Self {
        self.progress = progress;
        self
    }

    /// Run one compliance check against `base_address`.
    ///
    /// Always returns a report. When the roster page cannot be fetched the
    /// report carries `fatal_error` and no violations.
    pub async fn run_check(&self, base_address: &str, config: &CheckConfig) -> CheckReport {
        tracing::info!(league = base_address, "starting compliance check");

        match self.execute(base_address, config).await {
            Ok(report) => {
                tracing::info!(
                    teams = report.teams_checked,
                    injured = report.injured_violations.len(),
                    minors = report.minors_violations.len(),
                    errors = report.errors.len(),
                    "compliance check finished"
                );
                self.progress.report("Done!");
                report
            }
            Err(e) => {
                let message = e.to_string();
                tracing::error!("Compliance check for {} failed: {}", base_address, message);
                self.progress.report(&format!("Error: {message}"));
                CheckReport::fatal(base_address, *config, message)
            }
        }
    }

    async fn execute(&self, base_address: &str, config: &CheckConfig) -> Result<CheckReport> {
        self.progress.report("Fetching all teams page...");
        let page = self.fetcher.fetch(&roster_url(base_address)).await?;
        if !page.is_success() {
            return Err(ScanError::RosterUnavailable {
                status: page.status,
            });
        }

        self.progress.report("Parsing teams...");
        let teams = parse_roster(&page.body);
        let mut report = CheckReport::new(base_address, *config, teams.len());

        if config.check_injured_enabled {
            report.injured_violations = check_injured_slots(&teams);
        }

        if config.check_minors_enabled {
            let (violations, errors) = self.check_minors(base_address, config, &teams).await;
            report.minors_violations = violations;
            report.errors = errors;
        }

        Ok(report)
    }

    /// Check every minors player, keeping at most `MAX_IN_FLIGHT_CHECKS`
    /// outstanding. A new check starts as soon as any one completes.
    async fn check_minors(
        &self,
        base_address: &str,
        config: &CheckConfig,
        teams: &[Team],
    ) -> (Vec<Violation>, Vec<CheckError>) {
        let work: Vec<MinorsWorkItem> = teams
            .iter()
            .flat_map(|team| {
                team.minors_players.iter().map(|player| MinorsWorkItem {
                    team: team.name.clone(),
                    player: player.clone(),
                })
            })
            .collect();

        let total = work.len();
        let mut queue = work.into_iter();
        let mut in_flight = FuturesUnordered::new();
        let mut violations = Vec::new();
        let mut errors = Vec::new();
        let mut completed = 0;

        loop {
            while in_flight.len() < MAX_IN_FLIGHT_CHECKS {
                let Some(item) = queue.next() else {
                    break;
                };
                in_flight.push(self.check_minors_player(base_address, config, item));
            }

            let Some(outcome) = in_flight.next().await else {
                break;
            };

            completed += 1;
            match outcome {
                PlayerCheckOutcome::Eligible => {}
                PlayerCheckOutcome::Violation(violation) => violations.push(violation),
                PlayerCheckOutcome::Errored(error) => errors.push(error),
            }

            if completed % PROGRESS_INTERVAL == 0 || completed == total {
                self.progress
                    .report(&format!("Checked {completed} of {total} minors players..."));
            }
        }

        (violations, errors)
    }

    /// Fetch one player's career page and apply the minors rule.
    async fn check_minors_player(
        &self,
        base_address: &str,
        config: &CheckConfig,
        item: MinorsWorkItem,
    ) -> PlayerCheckOutcome {
        let MinorsWorkItem { team, player } = item;

        let Some(player_id) = player.player_id else {
            tracing::warn!(team = %team, player = %player.name, "no player id in profile link");
            return PlayerCheckOutcome::Errored(CheckError::new(
                team,
                player.name,
                MISSING_PLAYER_ID_REASON,
            ));
        };

        let url = career_stats_url(base_address, player_id);
        let page = match self.fetcher.fetch(&url).await {
            Ok(page) => page,
            Err(e) => {
                tracing::warn!(
                    team = %team,
                    player = %player.name,
                    error = %e,
                    "career stats fetch failed"
                );
                return PlayerCheckOutcome::Errored(CheckError::new(
                    team,
                    player.name,
                    e.to_string(),
                ));
            }
        };

        if !page.is_success() {
            tracing::warn!(
                team = %team,
                player = %player.name,
                status = page.status,
                "career stats fetch failed"
            );
            return PlayerCheckOutcome::Errored(CheckError::new(
                team,
                player.name,
                format!("Career stats fetch failed: {}", page.status),
            ));
        }

        let stat = extract_career_stat(&page.body, player.table_type);
        tracing::debug!(
            player = %player.name,
            value = stat.value,
            stat = %stat.stat_type,
            "career stat extracted"
        );

        match minors_eligibility_violation(&team, &player, stat, config) {
            Some(violation) => PlayerCheckOutcome::Violation(violation),
            None => PlayerCheckOutcome::Eligible,
        }
    }
}
