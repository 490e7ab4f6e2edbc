//! Snapshot of a finished match as supplied by the sports-data feed.

use serde::{Deserialize, Serialize};

use super::selection::Side;

/// Per-player statistics used by player proposition markets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerLine {
    pub name: String,
    #[serde(default)]
    pub goals: u32,
    #[serde(default)]
    pub shots_on_target: u32,
    #[serde(default)]
    pub cards: u32,
}

impl PlayerLine {
    /// Create a stat line with all counts at zero.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            goals: 0,
            shots_on_target: 0,
            cards: 0,
        }
    }

    /// Set the goal count.
    #[must_use]
    pub fn with_goals(mut self, goals: u32) -> Self {
        self.goals = goals;
        self
    }

    /// Set the shots-on-target count.
    #[must_use]
    pub fn with_shots_on_target(mut self, shots: u32) -> Self {
        self.shots_on_target = shots;
        self
    }

    /// Set the card count.
    #[must_use]
    pub fn with_cards(mut self, cards: u32) -> Self {
        self.cards = cards;
        self
    }
}

/// Read-only result of a completed match.
///
/// Only the full-time score is mandatory. Everything else is optional and
/// only required by the markets that read it; a market whose data is absent
/// fails with [`MatchDataError`](crate::error::MatchDataError) rather than
/// settling on a guess.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub full_time_home_score: u32,
    pub full_time_away_score: u32,
    #[serde(default)]
    pub half_time_home_score: Option<u32>,
    #[serde(default)]
    pub half_time_away_score: Option<u32>,
    #[serde(default)]
    pub home_corners: Option<u32>,
    #[serde(default)]
    pub away_corners: Option<u32>,
    #[serde(default)]
    pub players: Option<Vec<PlayerLine>>,
    #[serde(default)]
    pub home_team: Option<String>,
    #[serde(default)]
    pub away_team: Option<String>,
}

impl MatchResult {
    /// Create a result with only the full-time score.
    #[must_use]
    pub const fn full_time(home: u32, away: u32) -> Self {
        Self {
            full_time_home_score: home,
            full_time_away_score: away,
            half_time_home_score: None,
            half_time_away_score: None,
            home_corners: None,
            away_corners: None,
            players: None,
            home_team: None,
            away_team: None,
        }
    }

    /// Attach the half-time score.
    #[must_use]
    pub fn with_half_time(mut self, home: u32, away: u32) -> Self {
        self.half_time_home_score = Some(home);
        self.half_time_away_score = Some(away);
        self
    }

    /// Attach corner counts.
    #[must_use]
    pub fn with_corners(mut self, home: u32, away: u32) -> Self {
        self.home_corners = Some(home);
        self.away_corners = Some(away);
        self
    }

    /// Attach team names.
    #[must_use]
    pub fn with_teams(mut self, home: impl Into<String>, away: impl Into<String>) -> Self {
        self.home_team = Some(home.into());
        self.away_team = Some(away.into());
        self
    }

    /// Add a player stat line.
    #[must_use]
    pub fn with_player(mut self, player: PlayerLine) -> Self {
        self.players.get_or_insert_with(Vec::new).push(player);
        self
    }

    /// Full-time goals for one side.
    #[must_use]
    pub const fn full_time_score(&self, side: Side) -> u32 {
        match side {
            Side::Home => self.full_time_home_score,
            Side::Away => self.full_time_away_score,
        }
    }

    /// Half-time goals for one side, if supplied.
    #[must_use]
    pub const fn half_time_score(&self, side: Side) -> Option<u32> {
        match side {
            Side::Home => self.half_time_home_score,
            Side::Away => self.half_time_away_score,
        }
    }

    /// Team name for one side, if supplied.
    #[must_use]
    pub fn team(&self, side: Side) -> Option<&str> {
        match side {
            Side::Home => self.home_team.as_deref(),
            Side::Away => self.away_team.as_deref(),
        }
    }

    /// Find a player's stat line by case-insensitive name.
    #[must_use]
    pub fn player(&self, name: &str) -> Option<&PlayerLine> {
        let name = name.trim();
        self.players
            .as_deref()?
            .iter()
            .find(|p| p.name.trim().eq_ignore_ascii_case(name))
    }
}
