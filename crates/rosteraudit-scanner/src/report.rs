//! Report types produced by a compliance run.

use chrono::{DateTime, Utc};
use rosteraudit_core::{CheckConfig, StatType};
use serde::{Deserialize, Serialize};

/// Team and player placeholder used for the single error of a fatal run.
pub const FATAL_PLACEHOLDER: &str = "N/A";

/// A roster slot that breaks league rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Violation {
    /// Fantasy team holding the player
    pub team: String,
    /// Player name
    pub name: String,
    /// Eligible positions as listed, e.g. `3B,1B`
    pub position: String,
    /// MLB team abbreviation
    pub mlb_team: String,
    /// Player profile link
    pub player_url: String,
    /// Human-readable reason
    pub reason: String,
    /// Measured statistic, present for minors violations only
    #[serde(flatten)]
    pub measurement: Option<StatMeasurement>,
}

/// Career statistic that exceeded a minors-eligibility threshold.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatMeasurement {
    /// Measured career value
    pub career_stat: f64,
    /// Threshold it met or exceeded
    pub threshold: u32,
    /// Which statistic was measured
    pub stat_type: StatType,
}

/// A player that could not be checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckError {
    /// Fantasy team holding the player
    pub team: String,
    /// Player name
    pub name: String,
    /// What went wrong
    pub reason: String,
}

impl CheckError {
    /// Create a new check error.
    pub fn new(
        team: impl Into<String>,
        name: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            team: team.into(),
            name: name.into(),
            reason: reason.into(),
        }
    }
}

/// Outcome of one compliance run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckReport {
    /// When the run finished
    pub timestamp: DateTime<Utc>,
    /// League base address that was checked
    pub league_address: String,
    /// Settings the run used
    pub config: CheckConfig,
    /// Injured-slot violations, in roster order
    pub injured_violations: Vec<Violation>,
    /// Minors-slot violations, in completion order
    pub minors_violations: Vec<Violation>,
    /// Players that could not be checked
    pub errors: Vec<CheckError>,
    /// Number of teams found on the roster page
    pub teams_checked: usize,
    /// Set only when the run aborted before checking any player
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fatal_error: Option<String>,
}

impl CheckReport {
    /// Create an empty report for a run over `teams_checked` teams.
    #[must_use]
    pub fn new(
        league_address: impl Into<String>,
        config: CheckConfig,
        teams_checked: usize,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            league_address: league_address.into(),
            config,
            injured_violations: Vec::new(),
            minors_violations: Vec::new(),
            errors: Vec::new(),
            teams_checked,
            fatal_error: None,
        }
    }

    /// Create the report for a run that aborted.
    ///
    /// The message is carried both as `fatal_error` and as the only entry of
    /// the error list.
    #[must_use]
    pub fn fatal(
        league_address: impl Into<String>,
        config: CheckConfig,
        message: impl Into<String>,
    ) -> Self {
        let message = message.into();
        let mut report = Self::new(league_address, config, 0);
        report.errors.push(CheckError::new(
            FATAL_PLACEHOLDER,
            FATAL_PLACEHOLDER,
            message.clone(),
        ));
        report.fatal_error = Some(message);
        report
    }

    /// Whether the run aborted.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        self.fatal_error.is_some()
    }

    /// Total violations across both checks.
    #[must_use]
    pub fn violation_count(&self) -> usize {
        self.injured_violations.len() + self.minors_violations.len()
    }

    /// Plain-text summary: header facts, then counts per enabled check.
    #[must_use]
    pub fn summary_lines(&self) -> Vec<String> {
        let league = self
            .league_address
            .trim_start_matches("https://")
            .trim_start_matches("http://");

        let mut checks = Vec::new();
        if self.config.check_injured_enabled {
            checks.push("Injured".to_string());
        }
        if self.config.check_minors_enabled {
            checks.push(format!(
                "Minors (AB >= {}, IP >= {})",
                self.config.at_bat_threshold, self.config.innings_threshold
            ));
        }

        let mut lines = vec![
            format!("League: {league}"),
            format!("Checked: {}", self.timestamp.to_rfc3339()),
            format!("Teams: {}", self.teams_checked),
            format!("Checks: {}", checks.join(", ")),
        ];

        if let Some(fatal) = &self.fatal_error {
            lines.push(format!("Fatal error: {fatal}"));
            return lines;
        }

        if self.config.check_injured_enabled {
            lines.push(format!("Injured violations: {}", self.injured_violations.len()));
        }
        if self.config.check_minors_enabled {
            lines.push(format!("Minors violations: {}", self.minors_violations.len()));
        }
        if !self.errors.is_empty() {
            lines.push(format!("Errors: {}", self.errors.len()));
        }
        lines
    }
}

/// Group violations by team, teams in first-seen order.
pub fn violations_by_team(violations: &[Violation]) -> Vec<(&str, Vec<&Violation>)> {
    let mut groups: Vec<(&str, Vec<&Violation>)> = Vec::new();
    for violation in violations {
        match groups.iter_mut().find(|(team, _)| *team == violation.team) {
            Some((_, members)) => members.push(violation),
            None => groups.push((violation.team.as_str(), vec![violation])),
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn violation(team: &str, name: &str) -> Violation {
        Violation {
            team: team.to_string(),
            name: name.to_string(),
            position: "C".to_string(),
            mlb_team: "BOS".to_string(),
            player_url: format!("/players/playerpage/{}/", name.len()),
            reason: "In Injured slot but not on IL".to_string(),
            measurement: None,
        }
    }

    #[test]
    fn test_fatal_report_shape() {
        let report = CheckReport::fatal(
            "https://lg.baseball.cbssports.com",
            CheckConfig::default(),
            "Failed to fetch all teams page: 500",
        );
        assert!(report.is_fatal());
        assert_eq!(report.teams_checked, 0);
        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.errors[0].team, "N/A");
        assert!(report.injured_violations.is_empty());
        assert!(report.minors_violations.is_empty());
    }

    #[test]
    fn test_report_json_field_names() {
        let mut report =
            CheckReport::new("https://lg.baseball.cbssports.com", CheckConfig::default(), 2);
        let mut minors = violation("Aces", "Prospect");
        minors.measurement = Some(StatMeasurement {
            career_stat: 145.0,
            threshold: 130,
            stat_type: StatType::AB,
        });
        report.minors_violations.push(minors);

        let json = serde_json::to_value(&report).expect("serialize report");
        assert_eq!(json["leagueAddress"], "https://lg.baseball.cbssports.com");
        assert_eq!(json["teamsChecked"], 2);
        assert!(json.get("fatalError").is_none());
        assert_eq!(json["config"]["atBatThreshold"], 130);

        let entry = &json["minorsViolations"][0];
        assert_eq!(entry["mlbTeam"], "BOS");
        assert_eq!(entry["careerStat"], 145.0);
        assert_eq!(entry["threshold"], 130);
        assert_eq!(entry["statType"], "AB");

        let back: CheckReport = serde_json::from_value(json).expect("deserialize report");
        assert_eq!(back, report);
    }

    #[test]
    fn test_injured_violation_has_no_measurement_fields() {
        let json = serde_json::to_value(violation("Aces", "Hurt")).expect("serialize violation");
        assert!(json.get("careerStat").is_none());
        assert!(json.get("statType").is_none());
    }

    #[test]
    fn test_violations_by_team_keeps_first_seen_order() {
        let list = vec![
            violation("Deuces", "A"),
            violation("Aces", "B"),
            violation("Deuces", "C"),
        ];
        let groups = violations_by_team(&list);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, "Deuces");
        assert_eq!(groups[0].1.len(), 2);
        assert_eq!(groups[1].0, "Aces");
    }

    #[test]
    fn test_summary_lines() {
        let mut report =
            CheckReport::new("https://lg.baseball.cbssports.com", CheckConfig::default(), 12);
        report.injured_violations.push(violation("Aces", "Hurt"));
        report.errors.push(CheckError::new("Aces", "Kid", "Could not extract player ID"));

        let lines = report.summary_lines();
        assert_eq!(lines[0], "League: lg.baseball.cbssports.com");
        assert!(lines.contains(&"Teams: 12".to_string()));
        assert!(lines.contains(&"Checks: Injured, Minors (AB >= 130, IP >= 50)".to_string()));
        assert!(lines.contains(&"Injured violations: 1".to_string()));
        assert!(lines.contains(&"Minors violations: 0".to_string()));
        assert!(lines.contains(&"Errors: 1".to_string()));
    }

    #[test]
    fn test_summary_lines_fatal() {
        let report = CheckReport::fatal(
            "https://lg.baseball.cbssports.com",
            CheckConfig::default(),
            "boom",
        );
        let lines = report.summary_lines();
        assert_eq!(lines.last().map(String::as_str), Some("Fatal error: boom"));
    }
}
