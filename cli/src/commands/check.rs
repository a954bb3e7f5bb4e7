//! `rosteraudit check`: run one compliance check.

use crate::cli::CheckArgs;
use crate::commands::render_report;
use crate::store::ReportStore;
use anyhow::{Context, Result};
use rosteraudit_core::{AppConfig, CheckConfig, LeagueUrl, RosterAuditError};
use rosteraudit_fetch::{HttpFetcher, PageFetcher};
use rosteraudit_scanner::{CheckOrchestrator, CheckReport};
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;
use tokio::sync::mpsc;

pub async fn run(args: CheckArgs) -> Result<ExitCode> {
    let league = LeagueUrl::from_page_url(&args.league_url)?;
    let app_config = AppConfig::load_with_env().context("failed to load configuration")?;
    let config = args.apply_to(app_config.checks);
    tracing::info!("Checking league {}", league.display_name());

    if app_config.fetch.cookie.is_none() {
        tracing::warn!("no session cookie configured; private league pages will not load");
    }

    let fetcher = HttpFetcher::new(&app_config.fetch)
        .map_err(|e| RosterAuditError::Fetch(e.to_string()))?;
    let report = check_with_progress(Arc::new(fetcher), league.as_str(), &config).await?;

    if let Err(e) = ReportStore::default_location().and_then(|store| store.save(&report)) {
        tracing::warn!("Failed to store last results: {}", e);
    }

    if let Some(path) = &args.output {
        write_json(path, &report)?;
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for line in render_report(&report) {
            println!("{line}");
        }
    }

    Ok(if report.is_fatal() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

/// Run a check, streaming progress lines to stderr while it runs.
pub async fn check_with_progress(
    fetcher: Arc<dyn PageFetcher>,
    base_address: &str,
    config: &CheckConfig,
) -> Result<CheckReport> {
    let (tx, mut rx) = mpsc::unbounded_channel::<String>();
    let printer = tokio::spawn(async move {
        while let Some(line) = rx.recv().await {
            eprintln!("{line}");
        }
    });

    // The orchestrator owns the sender; dropping it closes the channel
    let report = CheckOrchestrator::new(fetcher)
        .with_progress(Arc::new(tx))
        .run_check(base_address, config)
        .await;

    printer
        .await
        .map_err(|e| RosterAuditError::Internal(format!("progress printer failed: {e}")))?;
    Ok(report)
}

fn write_json(path: &Path, report: &CheckReport) -> Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    std::fs::write(path, json)
        .with_context(|| format!("failed to write report to {}", path.display()))?;
    tracing::info!(path = %path.display(), "wrote JSON report");
    Ok(())
}
