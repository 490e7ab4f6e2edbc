//! Asian handicap settlement.
//!
//! The line is added to the selected side's score for the market's period.
//! Positive lines favour the selection. Quarter lines split the stake
//! across the two adjacent lines; see [`settle_on_line`].
//!
//! ```
//! use betsettle::domain::{HandicapLine, MarketCode, MatchResult, PeriodScope, Side};
//! use betsettle::settlement::{handicap, Wager};
//! use rust_decimal_macros::dec;
//!
//! let line = HandicapLine::try_new(dec!(1.25)).unwrap();
//! let outcome = handicap::settle(
//!     MarketCode::AsianHandicap,
//!     PeriodScope::FullTime,
//!     Side::Away,
//!     Some(line),
//!     Wager::new(dec!(100), dec!(1.95)),
//!     &MatchResult::full_time(1, 0),
//! )
//! .unwrap();
//!
//! assert_eq!(outcome.payout(), dec!(147.5));
//! ```

use rust_decimal::Decimal;
use tracing::trace;

use super::line::settle_on_line;
use super::Wager;
use crate::domain::score;
use crate::domain::{HandicapLine, MarketCode, MatchResult, PeriodScope, SettlementOutcome, Side};
use crate::error::{HandicapError, SettlementError};

/// Settle a handicap bet on `side` for the given period.
///
/// # Errors
///
/// - [`SettlementError::UnsupportedMarket`] if `code` is not a handicap code
///   or `scope` is not the period `code` settles on
/// - [`SettlementError::InvalidHandicap`] if `line` is `None`
/// - [`SettlementError::InvalidMatchData`] if the period score cannot be
///   derived, e.g. missing or inconsistent half-time data
pub fn settle(
    code: MarketCode,
    scope: PeriodScope,
    side: Side,
    line: Option<HandicapLine>,
    wager: Wager,
    result: &MatchResult,
) -> Result<SettlementOutcome, SettlementError> {
    if !code.is_handicap() {
        return Err(SettlementError::unsupported(code, "not a handicap market"));
    }
    if scope != code.period_scope() {
        return Err(SettlementError::unsupported(
            code,
            format!("market settles on {}, not {scope}", code.period_scope()),
        ));
    }
    let line = line.ok_or(HandicapError::Missing { code })?;
    let score = score::extract(result, scope)?;

    let selected = Decimal::from(score.of(side));
    let other = Decimal::from(score.of(side.opposite()));
    let outcome = settle_on_line(line, wager, |leg| (selected + leg).cmp(&other));

    trace!(%code, %scope, %side, %line, home = score.home, away = score.away, %outcome, "Handicap settled");
    Ok(outcome)
}
