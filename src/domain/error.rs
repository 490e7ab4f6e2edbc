//! Domain validation errors for core domain types.
//!
//! These errors are returned by `try_new` constructors when a bet or line
//! violates an invariant at construction time. Problems that only surface
//! while settling (missing scores, absent lines) are reported through
//! [`SettlementError`](crate::error::SettlementError) instead.
//!
//! # Examples
//!
//! ```
//! use betsettle::domain::error::DomainError;
//! use betsettle::domain::{Bet, BetId};
//! use rust_decimal_macros::dec;
//!
//! let result = Bet::builder(BetId::new("b-1"), "Full Time", "1")
//!     .stake(dec!(0))
//!     .odds(dec!(2.0))
//!     .build();
//!
//! assert!(matches!(result, Err(DomainError::NonPositiveStake { .. })));
//! ```

use thiserror::Error;

/// Errors that occur when domain invariants are violated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Stake must be strictly positive.
    #[error("stake must be positive, got {stake}")]
    NonPositiveStake {
        /// The invalid stake that was provided.
        stake: rust_decimal::Decimal,
    },

    /// Decimal odds below 1.0 would pay back less than the stake on a win.
    #[error("odds must be at least 1.0, got {odds}")]
    OddsBelowOne {
        /// The invalid odds that were provided.
        odds: rust_decimal::Decimal,
    },

    /// Stake times odds must be representable, or settling would overflow.
    #[error("payout for stake {stake} at odds {odds} is out of range")]
    PayoutOverflow {
        stake: rust_decimal::Decimal,
        odds: rust_decimal::Decimal,
    },

    /// Bets must carry an identifier.
    #[error("bet id cannot be empty")]
    EmptyBetId,

    /// A required field was not supplied to a builder.
    #[error("missing required field: {field}")]
    MissingField {
        /// Name of the missing field.
        field: &'static str,
    },
}
