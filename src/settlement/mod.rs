//! Bet settlement.
//!
//! [`Settler`] classifies each bet, then routes it to the handicap
//! calculator or to the per-market rules. Both are pure functions of the
//! bet and the match result, so settling the same inputs twice yields the
//! same outcome.

pub mod handicap;
mod line;
pub mod market;
mod settler;

pub use line::{settle_on_line, settle_over_under};
pub use settler::{SettledBet, SettledBetRecord, Settler};

use crate::domain::{Bet, MatchResult, Odds, SettlementOutcome, Stake};
use crate::error::SettlementError;

/// Settle one bet with the builtin rule table.
///
/// Shorthand for [`Settler::settle_bet`] on a default [`Settler`].
///
/// # Errors
///
/// Returns the [`SettlementError`] that makes the bet unsettleable.
pub fn settle(bet: &Bet, result: &MatchResult) -> Result<SettlementOutcome, SettlementError> {
    Settler::new().settle_bet(bet, result)
}

/// Stake and odds of a bet, the only economics settlement needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Wager {
    pub stake: Stake,
    pub odds: Odds,
}

impl Wager {
    #[must_use]
    pub const fn new(stake: Stake, odds: Odds) -> Self {
        Self { stake, odds }
    }
}
