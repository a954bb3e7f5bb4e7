//! Subcommand handlers.

pub mod check;
pub mod config;
pub mod last;

use rosteraudit_scanner::{violations_by_team, CheckReport, Violation};

/// Human-readable rendering of a report: summary, then violations grouped by
/// team, then players that could not be checked.
pub fn render_report(report: &CheckReport) -> Vec<String> {
    let mut lines = report.summary_lines();
    if report.is_fatal() {
        return lines;
    }

    if report.config.check_injured_enabled {
        push_section(&mut lines, "Injured slot violations", &report.injured_violations);
    }
    if report.config.check_minors_enabled {
        push_section(&mut lines, "Minors eligibility violations", &report.minors_violations);
    }

    if !report.errors.is_empty() {
        lines.push(String::new());
        lines.push("Could not check:".to_string());
        for error in &report.errors {
            lines.push(format!("  {} ({}): {}", error.name, error.team, error.reason));
        }
    }

    lines
}

fn push_section(lines: &mut Vec<String>, heading: &str, violations: &[Violation]) {
    lines.push(String::new());
    if violations.is_empty() {
        lines.push(format!("{heading}: none"));
        return;
    }

    lines.push(format!("{heading}:"));
    for (team, members) in violations_by_team(violations) {
        lines.push(format!("  {team}"));
        for violation in members {
            lines.push(format!(
                "    {} ({} {}): {}",
                violation.name, violation.position, violation.mlb_team, violation.reason
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rosteraudit_core::CheckConfig;
    use rosteraudit_scanner::CheckError;

    fn violation(team: &str, name: &str, reason: &str) -> Violation {
        Violation {
            team: team.to_string(),
            name: name.to_string(),
            position: "SS".to_string(),
            mlb_team: "TEX".to_string(),
            player_url: "/players/playerpage/1/".to_string(),
            reason: reason.to_string(),
            measurement: None,
        }
    }

    #[test]
    fn test_render_groups_by_team() {
        let mut report =
            CheckReport::new("https://lg.baseball.cbssports.com", CheckConfig::default(), 3);
        report.injured_violations = vec![
            violation("Aces", "One", "In Injured slot but not on IL"),
            violation("Deuces", "Two", "In Injured slot but not on IL"),
            violation("Aces", "Three", "In Injured slot but not on IL"),
        ];
        report.errors.push(CheckError::new("Deuces", "Kid", "Could not extract player ID"));

        let lines = render_report(&report);
        let aces = lines.iter().position(|l| l == "  Aces").unwrap();
        assert_eq!(lines[aces + 1], "    One (SS TEX): In Injured slot but not on IL");
        assert_eq!(lines[aces + 2], "    Three (SS TEX): In Injured slot but not on IL");
        assert!(lines.contains(&"Minors eligibility violations: none".to_string()));
        assert!(lines.contains(&"  Kid (Deuces): Could not extract player ID".to_string()));
    }

    #[test]
    fn test_render_skips_disabled_sections() {
        let config = CheckConfig {
            check_minors_enabled: false,
            ..CheckConfig::default()
        };
        let report = CheckReport::new("https://lg.baseball.cbssports.com", config, 1);
        let lines = render_report(&report);
        assert!(lines.contains(&"Injured slot violations: none".to_string()));
        assert!(!lines.iter().any(|l| l.starts_with("Minors eligibility")));
    }

    #[test]
    fn test_render_fatal_is_summary_only() {
        let report = CheckReport::fatal(
            "https://lg.baseball.cbssports.com",
            CheckConfig::default(),
            "Failed to fetch all teams page: 403",
        );
        assert_eq!(render_report(&report), report.summary_lines());
    }
}
