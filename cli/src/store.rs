//! Persistence for the most recent check report.

use rosteraudit_core::{AppConfig, Result, RosterAuditError};
use rosteraudit_scanner::CheckReport;
use std::path::{Path, PathBuf};

/// File name of the stored report inside the data directory.
pub const LAST_RESULTS_FILE: &str = "last_results.json";

/// Keeps the last completed report as JSON on disk.
#[derive(Debug, Clone)]
pub struct ReportStore {
    path: PathBuf,
}

impl ReportStore {
    /// Store reports in `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(LAST_RESULTS_FILE),
        }
    }

    /// Store reports in the platform data directory.
    pub fn default_location() -> Result<Self> {
        Ok(Self::in_dir(AppConfig::data_dir()?))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Replace the stored report.
    pub fn save(&self, report: &CheckReport) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(report)
            .map_err(|e| RosterAuditError::Serialization(e.to_string()))?;

        // Readers only ever see a complete file
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, json)?;
        std::fs::rename(&tmp, &self.path)?;

        tracing::debug!(path = %self.path.display(), "stored last results");
        Ok(())
    }

    /// Load the stored report, if any.
    pub fn load(&self) -> Result<Option<CheckReport>> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        serde_json::from_str(&contents)
            .map(Some)
            .map_err(|e| RosterAuditError::Serialization(e.to_string()))
    }
}
