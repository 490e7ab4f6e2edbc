//! What a bet picked: a side of the match, a direction on a line, or a player.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the two teams in a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Home,
    Away,
}

impl Side {
    /// The other team.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Home => Self::Away,
            Self::Away => Self::Home,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Home => write!(f, "home"),
            Self::Away => write!(f, "away"),
        }
    }
}

/// A parsed selection label.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Selection {
    Home,
    Draw,
    Away,
    Over,
    Under,
    Yes,
    No,
    /// Anything else, usually a player or team name.
    Named(String),
}

impl Selection {
    /// Parse a provider selection label.
    ///
    /// Labels are matched case-insensitively. Team names are not known here;
    /// they parse as [`Selection::Named`] and are resolved against the match
    /// with [`Selection::side`].
    #[must_use]
    pub fn parse(label: &str) -> Self {
        let trimmed = label.trim();
        match trimmed.to_lowercase().as_str() {
            "1" | "home" | "team 1" => Self::Home,
            "x" | "draw" | "tie" => Self::Draw,
            "2" | "away" | "team 2" => Self::Away,
            "over" | "o" => Self::Over,
            "under" | "u" => Self::Under,
            "yes" => Self::Yes,
            "no" => Self::No,
            _ => Self::Named(trimmed.to_string()),
        }
    }

    /// Resolve the selection to a team, using team names for `Named` labels.
    #[must_use]
    pub fn side(&self, home_team: Option<&str>, away_team: Option<&str>) -> Option<Side> {
        match self {
            Self::Home => Some(Side::Home),
            Self::Away => Some(Side::Away),
            Self::Named(name) => side_for_name(name, home_team, away_team),
            _ => None,
        }
    }

    /// True for labels that name nobody: 1/X/2, Over/Under, Yes/No.
    #[must_use]
    pub const fn is_generic(&self) -> bool {
        !matches!(self, Self::Named(_))
    }
}

/// Match a free-text name against the two team names.
pub(crate) fn side_for_name(
    name: &str,
    home_team: Option<&str>,
    away_team: Option<&str>,
) -> Option<Side> {
    let eq = |team: Option<&str>| team.is_some_and(|team| team.trim().eq_ignore_ascii_case(name.trim()));
    match (eq(home_team), eq(away_team)) {
        (true, false) => Some(Side::Home),
        (false, true) => Some(Side::Away),
        _ => None,
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Home => write!(f, "1"),
            Self::Draw => write!(f, "X"),
            Self::Away => write!(f, "2"),
            Self::Over => write!(f, "Over"),
            Self::Under => write!(f, "Under"),
            Self::Yes => write!(f, "Yes"),
            Self::No => write!(f, "No"),
            Self::Named(name) => write!(f, "{name}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_standard_labels() {
        assert_eq!(Selection::parse("1"), Selection::Home);
        assert_eq!(Selection::parse("X"), Selection::Draw);
        assert_eq!(Selection::parse("2"), Selection::Away);
        assert_eq!(Selection::parse(" Over "), Selection::Over);
        assert_eq!(Selection::parse("UNDER"), Selection::Under);
        assert_eq!(Selection::parse("Yes"), Selection::Yes);
    }

    #[test]
    fn player_names_are_kept_verbatim() {
        assert_eq!(
            Selection::parse("Erling Haaland"),
            Selection::Named("Erling Haaland".into())
        );
    }

    #[test]
    fn named_team_resolves_against_match_teams() {
        let sel = Selection::parse("arsenal");
        assert_eq!(sel.side(Some("Arsenal"), Some("Chelsea")), Some(Side::Home));
        assert_eq!(sel.side(Some("Spurs"), Some("Arsenal")), Some(Side::Away));
        assert_eq!(sel.side(None, None), None);
    }

    #[test]
    fn direction_labels_have_no_side() {
        assert_eq!(Selection::Over.side(Some("A"), Some("B")), None);
        assert_eq!(Selection::Draw.side(None, None), None);
    }

    #[test]
    fn side_opposite_round_trips() {
        assert_eq!(Side::Home.opposite(), Side::Away);
        assert_eq!(Side::Away.opposite().opposite(), Side::Away);
    }
}
