//! Builders for bets and match results used across tests.
//!
//! Every bet stakes 100 at odds 1.95 unless the test says otherwise, so
//! expected payouts read as 195 (win), 100 (push) and 0 (loss).

use rust_decimal::Decimal;

use crate::domain::{Bet, BetBuilder, BetId, MatchResult, PlayerLine};

/// Default stake for test bets.
pub const STAKE: Decimal = Decimal::ONE_HUNDRED;

/// Default odds for test bets, 1.95.
pub const ODDS: Decimal = Decimal::from_parts(195, 0, 0, false, 2);

/// Start a bet with the default stake and odds.
pub fn bet(id: &str, market_name: &str, selection: &str) -> BetBuilder {
    Bet::builder(BetId::new(id), market_name, selection)
        .stake(STAKE)
        .odds(ODDS)
}

/// Full-match Asian handicap bet with a textual line such as `"+1.25"`.
pub fn asian_handicap(id: &str, selection: &str, line: &str) -> Bet {
    build(
        bet(id, "Asian Handicap", selection)
            .criterion("Asian Handicap")
            .line_text(line),
    )
}

/// Half-scoped Asian handicap bet. `half` is `1` or `2`.
pub fn asian_handicap_half(id: &str, half: u8, selection: &str, line: &str) -> Bet {
    let criterion = if half == 1 {
        "Asian Handicap - 1st Half"
    } else {
        "Asian Handicap - 2nd Half"
    };
    build(
        bet(id, "Asian Handicap", selection)
            .criterion(criterion)
            .line_text(line),
    )
}

/// Full-match goal total.
pub fn total_goals(id: &str, selection: &str, line: Decimal) -> Bet {
    build(bet(id, "Total Goals", selection).line(line))
}

/// Finish a builder; test inputs are always valid.
pub fn build(builder: BetBuilder) -> Bet {
    builder.build().expect("test bet is valid")
}

/// Match result with full-time and half-time scores.
pub fn result(ft_home: u32, ft_away: u32, ht_home: u32, ht_away: u32) -> MatchResult {
    MatchResult::full_time(ft_home, ft_away).with_half_time(ht_home, ht_away)
}

/// Player stat line with goals only.
pub fn scorer(name: &str, goals: u32) -> PlayerLine {
    PlayerLine::new(name).with_goals(goals)
}
