//! Settlement domain types.
//!
//! Everything here is plain data plus pure functions: bets, match results,
//! market codes, lines and outcomes. Nothing performs I/O.

mod bet;
pub mod error;
mod id;
pub mod line;
mod market;
mod match_result;
mod money;
mod outcome;
mod period;
pub mod score;
mod selection;

pub use bet::{Bet, BetBuilder, BetRecord};
pub use id::BetId;
pub use line::{HandicapLine, LineInput, LineLegs};
pub use market::MarketCode;
pub use match_result::{MatchResult, PlayerLine};
pub use money::{Odds, Payout, Stake};
pub use outcome::{SettlementOutcome, SettlementResult};
pub use period::PeriodScope;
pub use score::Score;
pub use selection::{Selection, Side};

pub(crate) use selection::side_for_name;
