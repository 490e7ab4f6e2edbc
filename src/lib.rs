//! Betsettle - settle sports bets against final match results.
//!
//! Odds feeds describe markets only in free text. This crate maps each bet
//! onto a canonical market code and settles it against the final score,
//! including Asian handicap quarter lines and half-scoped markets.
//!
//! # Architecture
//!
//! - **`classifier`** - Priority-ordered rule table over normalized market text
//!   - `MarketView` - lower-cased text plus derived hints
//!   - `RuleRegistry` - unique priorities, highest match wins
//! - **`domain::score`** - Period score extraction (full time, halves)
//! - **`settlement`** - Handicap calculator, per-market rules, batch settler
//!
//! Settlement is pure: the same bet and match result always give the same
//! outcome, and nothing in the core performs I/O.
//!
//! # Modules
//!
//! - [`config`] - TOML configuration for logging and batch settlement
//! - [`domain`] - Bets, match results, market codes, lines and outcomes
//! - [`classifier`] - Market classification
//! - [`settlement`] - Settlement engine
//! - [`error`] - Error types for the crate
//! - [`cli`] - Command-line harness
//!
//! # Example
//!
//! ```
//! use betsettle::domain::{Bet, BetId, MatchResult, SettlementResult};
//! use betsettle::settlement::Settler;
//! use rust_decimal_macros::dec;
//!
//! let bet = Bet::builder(BetId::new("b-1"), "Asian Handicap", "2")
//!     .line_text("+1.25")
//!     .stake(dec!(100))
//!     .odds(dec!(1.95))
//!     .build()
//!     .unwrap();
//!
//! let outcome = Settler::new()
//!     .settle_bet(&bet, &MatchResult::full_time(1, 0))
//!     .unwrap();
//!
//! assert_eq!(outcome.result(), SettlementResult::Won);
//! assert_eq!(outcome.payout(), dec!(147.5));
//! ```

pub mod classifier;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod settlement;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
