//! Normalized view of a bet's market text.
//!
//! All free-text heuristics live here and in the rule predicates. When a
//! provider changes its wording, only this module and the rule table need
//! to change; settlement math never looks at market text.

use crate::domain::{side_for_name, Bet, Selection, Side};

/// Time window named in the market text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeWindow {
    FirstHalf,
    SecondHalf,
    /// Any other window, e.g. "0-15 minutes".
    Minutes,
}

/// Derived boolean hints shared by several rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Hints {
    pub has_time_window: bool,
    /// A player goal count against a line or an "N or more" threshold.
    pub is_player_occurrence_line: bool,
    pub has_explicit_player: bool,
    pub maybe_player_total_goals: bool,
    pub is_player_market: bool,
    /// The text names a single team ("home team", "goals by ...").
    pub is_team_scoped: bool,
}

/// Lower-cased market text plus hints, the only input rules see.
#[derive(Debug, Clone)]
pub struct MarketView {
    name: String,
    criterion: String,
    selection: String,
    participant: Option<String>,
    text: String,
    has_line: bool,
    window: Option<TimeWindow>,
    hints: Hints,
}

const TEAM_CUES: [&str; 5] = ["team", "home", "away", "goals by", "corners by"];
const PLAYER_CUES: [&str; 8] = [
    "player",
    "scorer",
    "to score",
    "shots on target",
    "card",
    "booked",
    "hat-trick",
    "hat trick",
];
const OCCURRENCE_CUES: [&str; 3] = ["or more", "at least", "or over"];
const MULTI_GOAL_CUES: [&str; 3] = ["hat-trick", "hat trick", "brace"];

impl MarketView {
    /// Build the view for a bet.
    #[must_use]
    pub fn from_bet(bet: &Bet) -> Self {
        Self::new(
            bet.market_name(),
            bet.market_criterion(),
            bet.selection_label(),
            bet.participant(),
            bet.handicap_line().is_some(),
        )
    }

    /// Build the view from raw parts.
    #[must_use]
    pub fn new(
        market_name: &str,
        criterion: &str,
        selection_label: &str,
        participant: Option<&str>,
        has_line: bool,
    ) -> Self {
        let name = normalize(market_name);
        let criterion = normalize(criterion);
        let selection = normalize(selection_label);
        let text = format!("{name} {criterion}");
        let window = time_window(&text);

        let mut view = Self {
            name,
            criterion,
            selection,
            participant: participant.map(normalize),
            text,
            has_line,
            window,
            hints: Hints::default(),
        };
        view.hints = view.derive_hints(selection_label, participant);
        view
    }

    fn derive_hints(&self, selection_label: &str, participant: Option<&str>) -> Hints {
        let named_selection = !Selection::parse(selection_label).is_generic();
        // A participant can be a team or a player; only the text or a named
        // selection tells them apart.
        let player_participant =
            participant.is_some() && (named_selection || self.mentions_any(&PLAYER_CUES));
        let team_participant = participant.is_some() && !player_participant;
        let is_team_scoped = (self.mentions_any(&TEAM_CUES) || team_participant)
            && !self.mentions("both teams");
        let has_explicit_player = self.mentions("player")
            || (!is_team_scoped && (player_participant || named_selection));

        let about_goals = (self.mentions("goal") || self.mentions("score"))
            && !self.mentions("shot")
            && !self.mentions("card")
            && !self.mentions("corner");
        let is_player_occurrence_line = has_explicit_player
            && (self.mentions_any(&MULTI_GOAL_CUES)
                || (about_goals
                    && (self.mentions_any(&OCCURRENCE_CUES) || has_plus_count(&self.text) || self.has_line)));

        let maybe_player_total_goals =
            self.mentions("goals") && (self.mentions("player") || (has_explicit_player && self.has_line));
        let is_player_market =
            has_explicit_player || maybe_player_total_goals || self.mentions("scorer");

        Hints {
            has_time_window: self.window.is_some(),
            is_player_occurrence_line,
            has_explicit_player,
            maybe_player_total_goals,
            is_player_market,
            is_team_scoped,
        }
    }

    /// Lower-cased market name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Lower-cased criterion text.
    #[must_use]
    pub fn criterion(&self) -> &str {
        &self.criterion
    }

    /// Lower-cased selection label.
    #[must_use]
    pub fn selection(&self) -> &str {
        &self.selection
    }

    #[must_use]
    pub const fn has_line(&self) -> bool {
        self.has_line
    }

    #[must_use]
    pub const fn window(&self) -> Option<TimeWindow> {
        self.window
    }

    #[must_use]
    pub const fn hints(&self) -> &Hints {
        &self.hints
    }

    /// Resolve which team a team-scoped market refers to.
    ///
    /// Tries the participant first, then "home"/"away" cues in the market
    /// text, then the team names themselves. Returns `None` unless exactly
    /// one side is indicated.
    #[must_use]
    pub fn team_side(&self, home_team: Option<&str>, away_team: Option<&str>) -> Option<Side> {
        if let Some(participant) = self.participant.as_deref() {
            match participant {
                "home" | "1" | "team 1" | "home team" => return Some(Side::Home),
                "away" | "2" | "team 2" | "away team" => return Some(Side::Away),
                name => {
                    if let Some(side) = side_for_name(name, home_team, away_team) {
                        return Some(side);
                    }
                }
            }
        }

        let home_cue = self.mentions_any(&["home", "team 1"]);
        let away_cue = self.mentions_any(&["away", "team 2"]);
        match (home_cue, away_cue) {
            (true, false) => return Some(Side::Home),
            (false, true) => return Some(Side::Away),
            _ => {}
        }

        let named = |team: Option<&str>| {
            team.map(normalize)
                .is_some_and(|team| !team.is_empty() && self.text.contains(&team))
        };
        match (named(home_team), named(away_team)) {
            (true, false) => Some(Side::Home),
            (false, true) => Some(Side::Away),
            _ => None,
        }
    }

    /// Count threshold named in the text: "2 or more", "3+", "at least 2",
    /// "hat-trick" (3), "brace" (2).
    #[must_use]
    pub fn occurrence_threshold(&self) -> Option<u32> {
        if self.mentions_any(&["hat-trick", "hat trick"]) {
            return Some(3);
        }
        if self.mentions("brace") {
            return Some(2);
        }

        let tokens: Vec<&str> = self.text.split_whitespace().collect();
        tokens.iter().enumerate().find_map(|(i, token)| {
            if let Some(count) = token.strip_suffix('+') {
                return count.parse().ok();
            }
            let count: u32 = token.parse().ok()?;
            let followed_by_or_more = tokens.get(i + 1) == Some(&"or")
                && matches!(tokens.get(i + 2), Some(&"more") | Some(&"over"));
            let preceded_by_at_least =
                i >= 2 && tokens[i - 2] == "at" && tokens[i - 1] == "least";
            (followed_by_or_more || preceded_by_at_least).then_some(count)
        })
    }

    /// True if the market name or criterion contains `needle`.
    #[must_use]
    pub fn mentions(&self, needle: &str) -> bool {
        self.text.contains(needle)
    }

    /// True if the market name or criterion contains any of `needles`.
    #[must_use]
    pub fn mentions_any(&self, needles: &[&str]) -> bool {
        needles.iter().any(|n| self.text.contains(n))
    }
}

fn normalize(raw: &str) -> String {
    raw.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

fn time_window(text: &str) -> Option<TimeWindow> {
    const SECOND_HALF: [&str; 3] = ["2nd half", "second half", "2nd-half"];
    const FIRST_HALF: [&str; 5] = ["1st half", "first half", "half time", "half-time", "halftime"];

    if SECOND_HALF.iter().any(|cue| text.contains(cue)) {
        Some(TimeWindow::SecondHalf)
    } else if FIRST_HALF.iter().any(|cue| text.contains(cue)) {
        Some(TimeWindow::FirstHalf)
    } else if text.contains("minute") || text.contains(" min") || has_clock(text) {
        Some(TimeWindow::Minutes)
    } else {
        None
    }
}

/// Matches clock ranges such as "00:00 - 14:59".
fn has_clock(text: &str) -> bool {
    text.as_bytes()
        .windows(3)
        .any(|w| w[0].is_ascii_digit() && w[1] == b':' && w[2].is_ascii_digit())
}

/// Matches counts such as "2+".
fn has_plus_count(text: &str) -> bool {
    text.as_bytes()
        .windows(2)
        .any(|w| w[0].is_ascii_digit() && w[1] == b'+')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view(name: &str, criterion: &str, selection: &str) -> MarketView {
        MarketView::new(name, criterion, selection, None, false)
    }

    #[test]
    fn normalizes_case_and_whitespace() {
        let v = view("  Asian   HANDICAP ", "Asian Handicap", "1");
        assert_eq!(v.name(), "asian handicap");
        assert!(v.mentions("handicap"));
    }

    #[test]
    fn detects_half_windows() {
        assert_eq!(view("Total Goals - 1st Half", "", "Over").window(), Some(TimeWindow::FirstHalf));
        assert_eq!(view("Total Goals", "Second Half", "Over").window(), Some(TimeWindow::SecondHalf));
        assert_eq!(view("Total Goals", "", "Over").window(), None);
    }

    #[test]
    fn detects_minute_windows() {
        assert_eq!(
            view("Total Goals", "00:00 - 14:59", "Over").window(),
            Some(TimeWindow::Minutes)
        );
        assert_eq!(
            view("Goals between 0-15 minutes", "", "Over").window(),
            Some(TimeWindow::Minutes)
        );
    }

    #[test]
    fn named_selection_marks_explicit_player() {
        let v = view("Anytime Goalscorer", "To Score", "Bukayo Saka");
        assert!(v.hints().has_explicit_player);
        assert!(v.hints().is_player_market);
    }

    #[test]
    fn team_cue_suppresses_player_hint() {
        let v = MarketView::new("Total Goals by Arsenal", "Home Team Goals", "Over", Some("Arsenal"), true);
        assert!(v.hints().is_team_scoped);
        assert!(!v.hints().has_explicit_player);
        assert!(!v.hints().is_player_market);
    }

    #[test]
    fn bare_participant_is_a_team() {
        let v = MarketView::new("Total Goals", "Arsenal Total Goals", "Over", Some("Arsenal"), true);
        assert!(v.hints().is_team_scoped);
        assert!(!v.hints().has_explicit_player);
        assert!(!v.hints().is_player_occurrence_line);
        assert!(!v.hints().is_player_market);
    }

    #[test]
    fn participant_with_player_cue_is_a_player() {
        let v = MarketView::new("Anytime Goalscorer", "", "Yes", Some("Bukayo Saka"), false);
        assert!(v.hints().has_explicit_player);
        assert!(!v.hints().is_team_scoped);
    }

    #[test]
    fn occurrence_line_needs_player_and_goal_phrase() {
        let v = view("Player to score 2 or more goals", "", "Haaland");
        assert!(v.hints().is_player_occurrence_line);

        let v = view("Player to have 2 or more shots on target", "", "Haaland");
        assert!(!v.hints().is_player_occurrence_line);

        let v = view("Total Goals", "2+ goals", "Yes");
        assert!(!v.hints().is_player_occurrence_line);
    }

    #[test]
    fn team_side_prefers_participant() {
        let v = MarketView::new("Total Goals by Team", "", "Over", Some("Chelsea"), true);
        assert_eq!(v.team_side(Some("Arsenal"), Some("Chelsea")), Some(Side::Away));
    }

    #[test]
    fn team_side_falls_back_to_text_cues() {
        let v = view("Total Goals", "Home Team Total Goals", "Over");
        assert_eq!(v.team_side(None, None), Some(Side::Home));

        let v = view("Total Goals by Arsenal", "", "Under");
        assert_eq!(v.team_side(Some("Arsenal"), Some("Chelsea")), Some(Side::Home));

        let v = view("Team Total Goals", "", "Under");
        assert_eq!(v.team_side(Some("Arsenal"), Some("Chelsea")), None);
    }

    #[test]
    fn parses_occurrence_thresholds() {
        assert_eq!(view("To score 2 or more goals", "", "Kane").occurrence_threshold(), Some(2));
        assert_eq!(view("Player 3+ goals", "", "Kane").occurrence_threshold(), Some(3));
        assert_eq!(view("To score at least 2", "", "Kane").occurrence_threshold(), Some(2));
        assert_eq!(view("To score a hat-trick", "", "Kane").occurrence_threshold(), Some(3));
        assert_eq!(view("Anytime Goalscorer", "", "Kane").occurrence_threshold(), None);
    }

    #[test]
    fn player_goals_with_line_is_total_goals_hint() {
        let v = MarketView::new("Player Goals", "Kane goals", "Over", Some("Harry Kane"), true);
        assert!(v.hints().maybe_player_total_goals);
        assert!(v.hints().is_player_occurrence_line);
    }
}
