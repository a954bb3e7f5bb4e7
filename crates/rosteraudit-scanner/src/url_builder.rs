use rosteraudit_core::PlayerId;

/// Address of the league's "all teams" roster page.
pub fn roster_url(base_address: &str) -> String {
    format!("{}/teams/all", base_address.trim_end_matches('/'))
}

/// Address of a player's career-stats page.
pub fn career_stats_url(base_address: &str, player_id: PlayerId) -> String {
    format!(
        "{}/players/playerpage/career-stats/{player_id}/",
        base_address.trim_end_matches('/')
    )
}
