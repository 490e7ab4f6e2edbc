//! Settlement outcomes.

use std::cmp::Ordering;
use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::money::{Odds, Payout, Stake};

/// Coarse result label.
///
/// Quarter-line bets can end half won or half lost; those still map onto
/// these three labels and the exact economics live in
/// [`SettlementOutcome::payout`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SettlementResult {
    Won,
    Lost,
    Push,
}

impl fmt::Display for SettlementResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Won => write!(f, "WON"),
            Self::Lost => write!(f, "LOST"),
            Self::Push => write!(f, "PUSH"),
        }
    }
}

/// Result and payout of settling one bet against one match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SettlementOutcome {
    result: SettlementResult,
    payout: Payout,
}

impl SettlementOutcome {
    /// A win: the full return, `stake * odds`.
    #[must_use]
    pub fn won(stake: Stake, odds: Odds) -> Self {
        Self {
            result: SettlementResult::Won,
            payout: stake * odds,
        }
    }

    /// A loss: nothing returned.
    #[must_use]
    pub const fn lost() -> Self {
        Self {
            result: SettlementResult::Lost,
            payout: Decimal::ZERO,
        }
    }

    /// A push: stake refunded.
    #[must_use]
    pub const fn push(stake: Stake) -> Self {
        Self {
            result: SettlementResult::Push,
            payout: stake,
        }
    }

    /// Settle from a comparison of the selected side against the other.
    ///
    /// `Greater` wins, `Less` loses, `Equal` pushes.
    #[must_use]
    pub fn from_ordering(ordering: Ordering, stake: Stake, odds: Odds) -> Self {
        match ordering {
            Ordering::Greater => Self::won(stake, odds),
            Ordering::Less => Self::lost(),
            Ordering::Equal => Self::push(stake),
        }
    }

    /// Settle a yes/no proposition that has no push case.
    #[must_use]
    pub fn from_hit(hit: bool, stake: Stake, odds: Odds) -> Self {
        if hit {
            Self::won(stake, odds)
        } else {
            Self::lost()
        }
    }

    /// Recombine the two half-stake legs of a quarter-line bet.
    ///
    /// Matching labels carry over. Mixed legs are labelled by comparing the
    /// summed payout with the original stake: above is `Won`, equal is
    /// `Push`, below is `Lost`.
    #[must_use]
    pub fn combine(first: Self, second: Self, stake: Stake) -> Self {
        let payout = first.payout + second.payout;
        let result = if first.result == second.result {
            first.result
        } else {
            match payout.cmp(&stake) {
                Ordering::Greater => SettlementResult::Won,
                Ordering::Equal => SettlementResult::Push,
                Ordering::Less => SettlementResult::Lost,
            }
        };
        Self { result, payout }
    }

    #[must_use]
    pub const fn result(&self) -> SettlementResult {
        self.result
    }

    /// Amount returned to the bettor, stake included.
    #[must_use]
    pub const fn payout(&self) -> Payout {
        self.payout
    }

    /// Profit or loss relative to the stake.
    #[must_use]
    pub fn net(&self, stake: Stake) -> Decimal {
        self.payout - stake
    }

    #[must_use]
    pub fn is_won(&self) -> bool {
        self.result == SettlementResult::Won
    }

    #[must_use]
    pub fn is_lost(&self) -> bool {
        self.result == SettlementResult::Lost
    }

    #[must_use]
    pub fn is_push(&self) -> bool {
        self.result == SettlementResult::Push
    }
}

impl fmt::Display for SettlementOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.result, self.payout.normalize())
    }
}
