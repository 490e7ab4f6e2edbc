//! Builtin classification rules.
//!
//! Precedence, highest first:
//!
//! 1. player multi-occurrence props (goal lines, "2 or more", hat-tricks)
//! 2. single player props: scorer, shots on target, cards
//! 3. canonical match result
//! 4. Asian handicaps (half-scoped before full match)
//! 5. team-scoped goal totals
//! 6. time-windowed goal totals
//! 7. generic match goal totals, never for player markets
//! 8. corners: team totals, then totals / most / 3-way handicap, then first-to-X
//! 9. `UNKNOWN`
//!
//! Reordering priorities changes how ambiguous bets settle. New rules need
//! a priority no existing rule uses.

use super::registry::{Rule, RuleRegistry};
use super::view::{MarketView, TimeWindow};
use crate::domain::MarketCode;

/// The builtin rule table. Priorities are unique.
pub const BUILTIN_RULES: [Rule; 19] = [
    Rule::new("player-goals-line", MarketCode::PlayerGoalsLine, 1000, player_goals_line),
    Rule::new("player-to-score", MarketCode::PlayerToScore, 900, player_to_score),
    Rule::new(
        "player-shots-on-target",
        MarketCode::PlayerShotsOnTarget,
        850,
        player_shots_on_target,
    ),
    Rule::new("player-cards", MarketCode::PlayerCards, 800, player_cards),
    Rule::new("match-result", MarketCode::MatchResult, 700, match_result),
    Rule::new(
        "asian-handicap-first-half",
        MarketCode::AsianHandicapFirstHalf,
        650,
        asian_handicap_first_half,
    ),
    Rule::new(
        "asian-handicap-second-half",
        MarketCode::AsianHandicapSecondHalf,
        640,
        asian_handicap_second_half,
    ),
    Rule::new("asian-handicap", MarketCode::AsianHandicap, 630, asian_handicap),
    Rule::new("team-total-goals", MarketCode::TeamTotalGoals, 600, team_total_goals),
    Rule::new(
        "total-goals-first-half",
        MarketCode::TotalGoalsFirstHalf,
        500,
        total_goals_first_half,
    ),
    Rule::new(
        "total-goals-second-half",
        MarketCode::TotalGoalsSecondHalf,
        490,
        total_goals_second_half,
    ),
    Rule::new(
        "total-goals-interval",
        MarketCode::TotalGoalsInterval,
        480,
        total_goals_interval,
    ),
    Rule::new("total-goals", MarketCode::TotalGoals, 400, total_goals),
    Rule::new("corners-team-total", MarketCode::CornersTeamTotal, 300, corners_team_total),
    Rule::new("corners-total", MarketCode::CornersTotal, 250, corners_total),
    Rule::new("most-corners", MarketCode::MostCorners, 240, most_corners),
    Rule::new(
        "corners-handicap-3-way",
        MarketCode::CornersHandicap3Way,
        230,
        corners_handicap_3_way,
    ),
    Rule::new("corners-first-to-x", MarketCode::CornersFirstToX, 200, corners_first_to_x),
    Rule::new("unknown", MarketCode::Unknown, 0, catch_all),
];

impl RuleRegistry {
    /// Registry holding [`BUILTIN_RULES`], highest priority first.
    #[must_use]
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for rule in BUILTIN_RULES {
            // Priorities in the builtin table are unique; the test suite
            // rejects any edit that breaks that.
            if registry.register(rule).is_err() {
                debug_assert!(false, "duplicate builtin priority for {}", rule.name());
            }
        }
        registry
    }
}

fn is_corner(v: &MarketView) -> bool {
    v.mentions("corner")
}

fn is_handicap(v: &MarketView) -> bool {
    v.mentions("handicap") || v.mentions("spread")
}

fn player_goals_line(v: &MarketView) -> bool {
    v.hints().is_player_occurrence_line && !is_corner(v)
}

fn player_to_score(v: &MarketView) -> bool {
    let h = v.hints();
    h.is_player_market
        && !h.is_team_scoped
        && !h.has_time_window
        && (v.mentions("scorer") || v.mentions("to score"))
        && !v.mentions_any(&["both teams", "first", "last", "1st", "own goal"])
        && !is_corner(v)
}

fn player_shots_on_target(v: &MarketView) -> bool {
    let h = v.hints();
    h.is_player_market && !h.is_team_scoped && !h.has_time_window && v.mentions("shots on target")
}

fn player_cards(v: &MarketView) -> bool {
    let h = v.hints();
    h.is_player_market
        && !h.is_team_scoped
        && !h.has_time_window
        && (v.mentions("card") || v.mentions("booked"))
        && !is_corner(v)
}

fn match_result(v: &MarketView) -> bool {
    !v.hints().has_time_window
        && !v.has_line()
        && !is_corner(v)
        && !is_handicap(v)
        && v.mentions_any(&["full time", "match result", "1x2", "match odds", "3-way result"])
        && !v.mentions_any(&["double chance", "draw no bet", "half time"])
}

fn asian_handicap_in(v: &MarketView, window: Option<TimeWindow>) -> bool {
    is_handicap(v)
        && !is_corner(v)
        && !v.mentions_any(&["3-way", "3 way", "european"])
        && v.window() == window
}

fn asian_handicap_first_half(v: &MarketView) -> bool {
    asian_handicap_in(v, Some(TimeWindow::FirstHalf))
}

fn asian_handicap_second_half(v: &MarketView) -> bool {
    asian_handicap_in(v, Some(TimeWindow::SecondHalf))
}

fn asian_handicap(v: &MarketView) -> bool {
    asian_handicap_in(v, None)
}

fn is_goal_total(v: &MarketView) -> bool {
    v.mentions("goals") && !is_corner(v) && !is_handicap(v)
}

fn team_total_goals(v: &MarketView) -> bool {
    let h = v.hints();
    is_goal_total(v) && h.is_team_scoped && !h.has_time_window && !h.is_player_occurrence_line
}

fn windowed_goal_total(v: &MarketView, window: TimeWindow) -> bool {
    let h = v.hints();
    is_goal_total(v) && v.window() == Some(window) && !h.is_team_scoped && !h.is_player_market
}

fn total_goals_first_half(v: &MarketView) -> bool {
    windowed_goal_total(v, TimeWindow::FirstHalf)
}

fn total_goals_second_half(v: &MarketView) -> bool {
    windowed_goal_total(v, TimeWindow::SecondHalf)
}

fn total_goals_interval(v: &MarketView) -> bool {
    windowed_goal_total(v, TimeWindow::Minutes)
}

fn total_goals(v: &MarketView) -> bool {
    let h = v.hints();
    is_goal_total(v) && !h.has_time_window && !h.is_player_market && !h.is_team_scoped
}

fn corner_market(v: &MarketView) -> bool {
    is_corner(v) && !v.hints().has_time_window
}

fn is_corner_race(v: &MarketView) -> bool {
    v.mentions_any(&["first to", "race to"])
}

fn corners_team_total(v: &MarketView) -> bool {
    corner_market(v)
        && v.hints().is_team_scoped
        && !is_handicap(v)
        && !is_corner_race(v)
        && !v.mentions("most")
}

fn corners_total(v: &MarketView) -> bool {
    corner_market(v)
        && (v.mentions("total") || v.mentions("over/under") || v.has_line())
        && !is_handicap(v)
        && !is_corner_race(v)
        && !v.mentions("most")
}

fn most_corners(v: &MarketView) -> bool {
    corner_market(v) && v.mentions("most")
}

fn corners_handicap_3_way(v: &MarketView) -> bool {
    corner_market(v) && is_handicap(v)
}

fn corners_first_to_x(v: &MarketView) -> bool {
    corner_market(v) && is_corner_race(v)
}

fn catch_all(_: &MarketView) -> bool {
    true
}
