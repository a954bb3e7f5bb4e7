//! Roster reconstruction from a league's "all teams" page.
//!
//! The page is a flat run of table rows. Title rows open a team's batters or
//! pitchers block, subtitle rows switch between roster sections, and player
//! rows belong to whatever block and section came last. [`RosterScan`] keeps
//! that scan state explicitly so it can be driven row by row.

use rosteraudit_core::{PlayerId, TableType};
use scraper::{ElementRef, Html, Selector};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::OnceLock;

/// Characters the site renders between position and MLB team. They all look
/// like a bullet; `&#149;` decodes to U+2022 but raw C1 bytes show up too.
const POSITION_TEAM_SEPARATORS: &[char] = &['\u{2022}', '\u{2219}', '\u{00b7}', '\u{0095}'];

fn selector(cell: &'static OnceLock<Selector>, css: &'static str) -> &'static Selector {
    cell.get_or_init(|| Selector::parse(css).expect("valid selector"))
}

fn row_selector() -> &'static Selector {
    static SEL: OnceLock<Selector> = OnceLock::new();
    selector(&SEL, "tr")
}

fn cell_selector() -> &'static Selector {
    static SEL: OnceLock<Selector> = OnceLock::new();
    selector(&SEL, "td")
}

fn player_link_selector() -> &'static Selector {
    static SEL: OnceLock<Selector> = OnceLock::new();
    selector(&SEL, "a.playerLink")
}

fn position_team_selector() -> &'static Selector {
    static SEL: OnceLock<Selector> = OnceLock::new();
    selector(&SEL, "span.playerPositionAndTeam")
}

fn il_status_selector() -> &'static Selector {
    static SEL: OnceLock<Selector> = OnceLock::new();
    selector(&SEL, "span.icon-player-status-dl")
}

/// A player parked in an Injured roster slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InjuredPlayer {
    pub name: String,
    pub position: String,
    pub mlb_team: String,
    pub player_url: String,
    /// Whether the row carries the injured-list status icon
    pub has_active_il_status: bool,
}

/// A player parked in a Minors roster slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinorsPlayer {
    pub name: String,
    pub position: String,
    pub mlb_team: String,
    pub player_url: String,
    /// `None` when the profile link carries no numeric id
    pub player_id: Option<PlayerId>,
    /// Table the player was listed in, which decides the statistic checked
    pub table_type: TableType,
}

/// One fantasy team with the players in its Injured and Minors slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub name: String,
    pub injured_players: Vec<InjuredPlayer>,
    pub minors_players: Vec<MinorsPlayer>,
}

impl Team {
    fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            injured_players: Vec::new(),
            minors_players: Vec::new(),
        }
    }

    fn push_injured(&mut self, player: InjuredPlayer) {
        let seen = self
            .injured_players
            .iter()
            .any(|p| p.name == player.name && p.player_url == player.player_url);
        if !seen {
            self.injured_players.push(player);
        }
    }

    fn push_minors(&mut self, player: MinorsPlayer) {
        let seen = self
            .minors_players
            .iter()
            .any(|p| {
                p.name == player.name
                    && p.player_url == player.player_url
                    && p.table_type == player.table_type
            });
        if !seen {
            self.minors_players.push(player);
        }
    }
}

/// Roster section a player row sits in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    Active,
    Reserves,
    Injured,
    Minors,
}

impl Section {
    /// Section named by a subtitle row. Only the three divider labels switch
    /// sections; anything else is ignored.
    pub fn from_subtitle(text: &str) -> Option<Self> {
        match text {
            "Reserves" => Some(Self::Reserves),
            "Injured" => Some(Self::Injured),
            "Minors" => Some(Self::Minors),
            _ => None,
        }
    }
}

/// Fields read from a player row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerRow {
    pub name: String,
    pub player_url: String,
    pub position: String,
    pub mlb_team: String,
    pub has_il_marker: bool,
}

/// Classification of a single table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterRow {
    /// Opens a team's batters or pitchers block
    Title { team: String, table_type: TableType },
    /// Section divider with its trimmed label
    Subtitle(String),
    /// Player row with a recognizable player link
    Player(PlayerRow),
    /// Anything else, including title rows without a known suffix
    Other,
}

/// Scan state carried from row to row.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScanState {
    pub current_team: Option<String>,
    pub current_table_type: Option<TableType>,
    pub current_section: Section,
}

/// Incremental roster builder driven one classified row at a time.
#[derive(Debug, Default)]
pub struct RosterScan {
    state: ScanState,
    teams: Vec<Team>,
    index: HashMap<String, usize>,
}

impl RosterScan {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ScanState {
        &self.state
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    /// Advance the scan by one row.
    pub fn apply(&mut self, row: RosterRow) {
        match row {
            RosterRow::Title { team, table_type } => {
                if !self.index.contains_key(&team) {
                    tracing::debug!(team = %team, "new team");
                    self.index.insert(team.clone(), self.teams.len());
                    self.teams.push(Team::new(team.clone()));
                }
                self.state = ScanState {
                    current_team: Some(team),
                    current_table_type: Some(table_type),
                    current_section: Section::Active,
                };
            }
            RosterRow::Subtitle(text) => {
                if let Some(section) = Section::from_subtitle(&text) {
                    self.state.current_section = section;
                }
            }
            RosterRow::Player(player) => self.record_player(player),
            RosterRow::Other => {}
        }
    }

    fn record_player(&mut self, row: PlayerRow) {
        let Some(slot) = self
            .state
            .current_team
            .as_ref()
            .and_then(|name| self.index.get(name).copied())
        else {
            return;
        };
        let team = &mut self.teams[slot];

        match (self.state.current_section, self.state.current_table_type) {
            (Section::Injured, _) => team.push_injured(InjuredPlayer {
                name: row.name,
                position: row.position,
                mlb_team: row.mlb_team,
                player_url: row.player_url,
                has_active_il_status: row.has_il_marker,
            }),
            (Section::Minors, Some(table_type)) => team.push_minors(MinorsPlayer {
                player_id: PlayerId::from_profile_link(&row.player_url),
                name: row.name,
                position: row.position,
                mlb_team: row.mlb_team,
                player_url: row.player_url,
                table_type,
            }),
            _ => {}
        }
    }

    /// Teams in the order their first title row appeared.
    pub fn finish(self) -> Vec<Team> {
        self.teams
    }
}

/// Parse a league "all teams" page into its teams.
///
/// A page without title rows yields no teams.
pub fn parse_roster(html: &str) -> Vec<Team> {
    let document = Html::parse_document(html);
    let mut scan = RosterScan::new();

    for row in document.select(row_selector()) {
        scan.apply(classify_row(row));
    }

    let teams = scan.finish();
    tracing::debug!(teams = teams.len(), "parsed roster page");
    teams
}

/// Classify one `<tr>` by its class list and contents.
pub fn classify_row(row: ElementRef<'_>) -> RosterRow {
    let has_class = |name: &str| row.value().classes().any(|c| c == name);

    if has_class("title") {
        let text = first_cell_text(row);
        return match TableType::split_title(&text) {
            Some((team, table_type)) if !team.trim().is_empty() => RosterRow::Title {
                team: team.to_string(),
                table_type,
            },
            _ => RosterRow::Other,
        };
    }

    if has_class("subtitle") {
        return RosterRow::Subtitle(first_cell_text(row));
    }

    if has_class("playerRow") {
        return read_player_row(row).map_or(RosterRow::Other, RosterRow::Player);
    }

    RosterRow::Other
}

fn read_player_row(row: ElementRef<'_>) -> Option<PlayerRow> {
    let link = row.select(player_link_selector()).next()?;
    let name = text_of(link);
    let player_url = link.value().attr("href").unwrap_or_default().to_string();

    let position_team = row
        .select(position_team_selector())
        .next()
        .map(text_of)
        .unwrap_or_default();
    let (position, mlb_team) = split_position_team(&position_team);

    Some(PlayerRow {
        name,
        player_url,
        position,
        mlb_team,
        has_il_marker: row.select(il_status_selector()).next().is_some(),
    })
}

/// Split `"3B,1B • MIL"` into position and MLB team. Missing parts are empty.
pub fn split_position_team(text: &str) -> (String, String) {
    let mut parts = text.split(POSITION_TEAM_SEPARATORS).map(str::trim);
    let position = parts.next().unwrap_or_default().to_string();
    let mlb_team = parts.next().unwrap_or_default().to_string();
    (position, mlb_team)
}

fn first_cell_text(row: ElementRef<'_>) -> String {
    row.select(cell_selector())
        .next()
        .map(text_of)
        .unwrap_or_default()
}

fn text_of(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}
