//! Shared types used across the rosteraudit workspace.
//!
//! This module defines common newtypes and enums that provide type safety
//! and clear domain modeling.

use crate::error::RosterAuditError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

/// Which roster table a player was listed in.
///
/// A league's "all teams" page lists every team twice: once in a batters
/// table and once in a pitchers table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TableType {
    /// Position players
    Batters,
    /// Pitchers
    Pitchers,
}

impl TableType {
    /// Suffix that closes a title row for this table, e.g. `"Sluggers Batters"`.
    #[must_use]
    pub const fn title_suffix(self) -> &'static str {
        match self {
            Self::Batters => " Batters",
            Self::Pitchers => " Pitchers",
        }
    }

    /// Header label of the career-stats column measured for this table.
    #[must_use]
    pub const fn career_column(self) -> &'static str {
        match self {
            Self::Batters => "AB",
            Self::Pitchers => "INNs",
        }
    }

    /// Statistic reported for minors-eligibility violations.
    #[must_use]
    pub const fn stat_type(self) -> StatType {
        match self {
            Self::Batters => StatType::AB,
            Self::Pitchers => StatType::IP,
        }
    }

    /// Split a title row's text into the team name and table type.
    ///
    /// Returns `None` when the text ends in neither suffix.
    #[must_use]
    pub fn split_title(title: &str) -> Option<(&str, Self)> {
        [Self::Batters, Self::Pitchers]
            .into_iter()
            .find_map(|t| title.strip_suffix(t.title_suffix()).map(|team| (team, t)))
    }
}

impl fmt::Display for TableType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Batters => write!(f, "Batters"),
            Self::Pitchers => write!(f, "Pitchers"),
        }
    }
}

/// Career statistic used for the minors-eligibility rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatType {
    /// Career at-bats
    AB,
    /// Career innings pitched
    IP,
}

impl fmt::Display for StatType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AB => write!(f, "AB"),
            Self::IP => write!(f, "IP"),
        }
    }
}

/// Numeric player identifier taken from a profile link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(u64);

impl PlayerId {
    /// Create a `PlayerId` from its numeric value.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Extract the identifier following `playerpage/` in a profile link.
    ///
    /// Returns `None` when the link carries no numeric id.
    #[must_use]
    pub fn from_profile_link(link: &str) -> Option<Self> {
        static PLAYER_ID_REGEX: OnceLock<Regex> = OnceLock::new();
        let regex =
            PLAYER_ID_REGEX.get_or_init(|| Regex::new(r"playerpage/(\d+)").expect("valid regex"));

        regex
            .captures(link)
            .and_then(|caps| caps.get(1))
            .and_then(|m| m.as_str().parse().ok())
            .map(Self)
    }

    /// Get the inner numeric value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Newtype for a league base address with validation.
///
/// League addresses are the origin of a fantasy baseball league site, e.g.
/// `https://myleague.baseball.cbssports.com`, without a trailing slash.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LeagueUrl(String);

impl LeagueUrl {
    /// Reduce any page URL of a league site to the league base address.
    ///
    /// # Errors
    /// Returns error if the URL is not on a fantasy baseball league host.
    pub fn from_page_url(url: &str) -> Result<Self, RosterAuditError> {
        static LEAGUE_REGEX: OnceLock<Regex> = OnceLock::new();
        let regex = LEAGUE_REGEX.get_or_init(|| {
            Regex::new(r"^(https://[a-z0-9]+\.baseball\.cbssports\.com)(?:[/?#]|$)")
                .expect("valid regex")
        });

        regex
            .captures(url.trim())
            .and_then(|caps| caps.get(1))
            .map(|m| Self(m.as_str().to_string()))
            .ok_or_else(|| {
                RosterAuditError::Validation(format!(
                    "not a fantasy baseball league page: '{url}'"
                ))
            })
    }

    /// Get the inner string value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// League host without the scheme, for display.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.0.trim_start_matches("https://")
    }
}

impl fmt::Display for LeagueUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_title() {
        assert_eq!(
            TableType::split_title("Bronx Bombers Batters"),
            Some(("Bronx Bombers", TableType::Batters))
        );
        assert_eq!(
            TableType::split_title("Bronx Bombers Pitchers"),
            Some(("Bronx Bombers", TableType::Pitchers))
        );
        assert_eq!(TableType::split_title("Transactions"), None);
        assert_eq!(TableType::split_title("Batters"), None);
    }

    #[test]
    fn test_table_type_labels() {
        assert_eq!(TableType::Batters.career_column(), "AB");
        assert_eq!(TableType::Pitchers.career_column(), "INNs");
        assert_eq!(TableType::Batters.stat_type(), StatType::AB);
        assert_eq!(TableType::Pitchers.stat_type(), StatType::IP);
    }

    #[test]
    fn test_player_id_from_profile_link() {
        assert_eq!(
            PlayerId::from_profile_link("/players/playerpage/2507069/bobby-witt"),
            Some(PlayerId::new(2_507_069))
        );
        assert_eq!(
            PlayerId::from_profile_link("https://x.baseball.cbssports.com/players/playerpage/42"),
            Some(PlayerId::new(42))
        );
        assert_eq!(PlayerId::from_profile_link("/players/playerpage/"), None);
        assert_eq!(PlayerId::from_profile_link(""), None);
        assert_eq!(
            PlayerId::from_profile_link("/players/playerpage/99999999999999999999999"),
            None
        );
    }

    #[test]
    fn test_league_url_from_page_url() {
        let league = LeagueUrl::from_page_url("https://dynasty1.baseball.cbssports.com/teams/all")
            .expect("valid league page");
        assert_eq!(league.as_str(), "https://dynasty1.baseball.cbssports.com");
        assert_eq!(league.display_name(), "dynasty1.baseball.cbssports.com");

        let bare = LeagueUrl::from_page_url("https://dynasty1.baseball.cbssports.com")
            .expect("bare origin");
        assert_eq!(bare, league);
    }

    #[test]
    fn test_league_url_rejects_other_hosts() {
        assert!(LeagueUrl::from_page_url("http://dynasty1.baseball.cbssports.com").is_err());
        assert!(LeagueUrl::from_page_url("https://dynasty1.football.cbssports.com/").is_err());
        assert!(LeagueUrl::from_page_url("https://evil.baseball.cbssports.com.example/").is_err());
        assert!(LeagueUrl::from_page_url("not-a-url").is_err());
    }
}
