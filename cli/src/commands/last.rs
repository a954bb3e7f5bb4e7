//! `rosteraudit last`: show the stored result of the previous check.

use crate::commands::render_report;
use crate::store::ReportStore;
use anyhow::Result;
use std::process::ExitCode;

pub fn run() -> Result<ExitCode> {
    let store = ReportStore::default_location()?;
    for line in last_report_lines(&store)? {
        println!("{line}");
    }
    Ok(ExitCode::SUCCESS)
}

/// Lines describing the stored report, or a hint when nothing is stored.
pub fn last_report_lines(store: &ReportStore) -> Result<Vec<String>> {
    Ok(match store.load()? {
        Some(report) => render_report(&report),
        None => vec!["No stored results. Run `rosteraudit check <LEAGUE_URL>` first.".to_string()],
    })
}
