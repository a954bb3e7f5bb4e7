//! Compliance rules for Injured and Minors roster slots.
//!
//! Both rules are pure: they read parsed roster data and settings and return
//! the violations they find.

use crate::career::CareerStat;
use crate::report::{StatMeasurement, Violation};
use crate::roster::{InjuredPlayer, MinorsPlayer, Team};
use rosteraudit_core::CheckConfig;

/// Reason recorded for an injured-slot violation.
pub const NOT_ON_IL_REASON: &str = "In Injured slot but not on IL";

/// Flag an injured-slot player that has no active IL designation.
pub fn injured_slot_violation(team: &str, player: &InjuredPlayer) -> Option<Violation> {
    if player.has_active_il_status {
        return None;
    }

    Some(Violation {
        team: team.to_string(),
        name: player.name.clone(),
        position: player.position.clone(),
        mlb_team: player.mlb_team.clone(),
        player_url: player.player_url.clone(),
        reason: NOT_ON_IL_REASON.to_string(),
        measurement: None,
    })
}

/// Apply the injured-slot rule to every team, in roster order.
pub fn check_injured_slots(teams: &[Team]) -> Vec<Violation> {
    teams
        .iter()
        .flat_map(|team| {
            team.injured_players
                .iter()
                .filter_map(|player| injured_slot_violation(&team.name, player))
        })
        .collect()
}

/// Flag a minors-slot player whose career total meets the threshold for
/// their table. Meeting the threshold exactly is a violation.
pub fn minors_eligibility_violation(
    team: &str,
    player: &MinorsPlayer,
    stat: CareerStat,
    config: &CheckConfig,
) -> Option<Violation> {
    let threshold = config.threshold_for(player.table_type);
    if stat.value < f64::from(threshold) {
        return None;
    }

    Some(Violation {
        team: team.to_string(),
        name: player.name.clone(),
        position: player.position.clone(),
        mlb_team: player.mlb_team.clone(),
        player_url: player.player_url.clone(),
        reason: format!(
            "{} career {} (threshold: {threshold})",
            stat.value, stat.stat_type
        ),
        measurement: Some(StatMeasurement {
            career_stat: stat.value,
            threshold,
            stat_type: stat.stat_type,
        }),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rosteraudit_core::{PlayerId, StatType, TableType};

    fn injured(name: &str, on_il: bool) -> InjuredPlayer {
        InjuredPlayer {
            name: name.to_string(),
            position: "SS".to_string(),
            mlb_team: "HOU".to_string(),
            player_url: format!("/players/playerpage/{}/", name.len()),
            has_active_il_status: on_il,
        }
    }

    fn minors(table_type: TableType) -> MinorsPlayer {
        MinorsPlayer {
            name: "Prospect".to_string(),
            position: "OF".to_string(),
            mlb_team: "BAL".to_string(),
            player_url: "/players/playerpage/3300/".to_string(),
            player_id: Some(PlayerId::new(3300)),
            table_type,
        }
    }

    fn stat(stat_type: StatType, value: f64) -> CareerStat {
        CareerStat { stat_type, value }
    }

    #[test]
    fn test_injured_without_il_is_violation() {
        let violation =
            injured_slot_violation("Aces", &injured("Healthy Guy", false)).expect("violation");
        assert_eq!(violation.team, "Aces");
        assert_eq!(violation.reason, NOT_ON_IL_REASON);
        assert!(violation.measurement.is_none());
    }

    #[test]
    fn test_injured_with_il_is_clean() {
        assert!(injured_slot_violation("Aces", &injured("Really Hurt", true)).is_none());
    }

    #[test]
    fn test_check_injured_slots_across_teams() {
        let teams = vec![
            Team {
                name: "Aces".to_string(),
                injured_players: vec![injured("A", false), injured("B", true)],
                minors_players: vec![],
            },
            Team {
                name: "Deuces".to_string(),
                injured_players: vec![injured("C", false)],
                minors_players: vec![],
            },
        ];
        let violations = check_injured_slots(&teams);
        let names: Vec<_> = violations
            .iter()
            .map(|v| (v.team.as_str(), v.name.as_str()))
            .collect();
        assert_eq!(names, vec![("Aces", "A"), ("Deuces", "C")]);
    }

    #[test]
    fn test_at_bat_threshold_is_inclusive() {
        let config = CheckConfig::default();
        let player = minors(TableType::Batters);

        let at = minors_eligibility_violation("Aces", &player, stat(StatType::AB, 130.0), &config)
            .expect("130 AB meets threshold");
        assert_eq!(at.reason, "130 career AB (threshold: 130)");
        let measurement = at.measurement.expect("minors measurement");
        assert_eq!(measurement.threshold, 130);
        assert_eq!(measurement.stat_type, StatType::AB);

        assert!(
            minors_eligibility_violation("Aces", &player, stat(StatType::AB, 129.0), &config)
                .is_none()
        );
    }

    #[test]
    fn test_pitcher_uses_innings_threshold() {
        let config = CheckConfig {
            innings_threshold: 50,
            at_bat_threshold: 1,
            ..CheckConfig::default()
        };
        let player = minors(TableType::Pitchers);

        assert!(
            minors_eligibility_violation("Aces", &player, stat(StatType::IP, 49.2), &config)
                .is_none()
        );
        let over = minors_eligibility_violation("Aces", &player, stat(StatType::IP, 61.1), &config)
            .expect("over innings threshold");
        assert_eq!(over.reason, "61.1 career IP (threshold: 50)");
    }

    #[test]
    fn test_zero_threshold_flags_everyone() {
        let config = CheckConfig {
            at_bat_threshold: 0,
            ..CheckConfig::default()
        };
        let player = minors(TableType::Batters);
        assert!(
            minors_eligibility_violation("Aces", &player, stat(StatType::AB, 0.0), &config)
                .is_some()
        );
    }
}
