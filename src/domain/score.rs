//! Period-scoped score extraction.
//!
//! Markets settle against the full match, the first half, or the second
//! half. The second half is not reported by feeds; it is derived as
//! full time minus half time, and a negative result means the feed sent
//! inconsistent data.
//!
//! # Examples
//!
//! ```
//! use betsettle::domain::score::extract;
//! use betsettle::domain::{MatchResult, PeriodScope};
//!
//! let result = MatchResult::full_time(2, 1).with_half_time(1, 0);
//!
//! let second_half = extract(&result, PeriodScope::SecondHalf).unwrap();
//! assert_eq!((second_half.home, second_half.away), (1, 1));
//! ```

use super::match_result::MatchResult;
use super::period::PeriodScope;
use super::selection::Side;
use crate::error::MatchDataError;

/// Goals scored by each side within one period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Score {
    pub home: u32,
    pub away: u32,
}

impl Score {
    #[must_use]
    pub const fn new(home: u32, away: u32) -> Self {
        Self { home, away }
    }

    /// Goals for one side.
    #[must_use]
    pub const fn of(&self, side: Side) -> u32 {
        match side {
            Side::Home => self.home,
            Side::Away => self.away,
        }
    }

    /// Combined goals.
    #[must_use]
    pub const fn total(&self) -> u32 {
        self.home + self.away
    }
}

/// Extract the score for `scope` from a match result.
///
/// Half-time data, when present, is checked against the full-time score
/// for every scope, so a corrupt result never settles a full-match market.
///
/// # Errors
///
/// Returns [`MatchDataError::MissingHalfTime`] when a half-scoped period is
/// requested without half-time data, [`MatchDataError::NegativeSecondHalf`]
/// when the derived second half would be negative, and
/// [`MatchDataError::HalfTimeExceedsFullTime`] when the half-time score is
/// larger than the full-time score for any other scope. Values are never
/// clamped.
pub fn extract(result: &MatchResult, scope: PeriodScope) -> Result<Score, MatchDataError> {
    match scope {
        PeriodScope::FullTime => {
            check_half_time(result)?;
            Ok(Score::new(
                result.full_time_home_score,
                result.full_time_away_score,
            ))
        }
        PeriodScope::FirstHalf => {
            let half = half_time(result)?;
            check_half_time(result)?;
            Ok(half)
        }
        PeriodScope::SecondHalf => {
            let half = half_time(result)?;
            let second = |side: Side| {
                let full_time = result.full_time_score(side);
                let half_time = half.of(side);
                full_time
                    .checked_sub(half_time)
                    .ok_or(MatchDataError::NegativeSecondHalf {
                        side,
                        full_time,
                        half_time,
                    })
            };
            Ok(Score::new(second(Side::Home)?, second(Side::Away)?))
        }
    }
}

/// Reject a result whose supplied half-time score exceeds full time.
///
/// Sides without half-time data are not checked.
///
/// # Errors
///
/// Returns [`MatchDataError::HalfTimeExceedsFullTime`] for the first
/// offending side, home before away.
pub fn check_half_time(result: &MatchResult) -> Result<(), MatchDataError> {
    for side in [Side::Home, Side::Away] {
        let full_time = result.full_time_score(side);
        match result.half_time_score(side) {
            Some(half_time) if half_time > full_time => {
                return Err(MatchDataError::HalfTimeExceedsFullTime {
                    side,
                    full_time,
                    half_time,
                });
            }
            _ => {}
        }
    }
    Ok(())
}

fn half_time(result: &MatchResult) -> Result<Score, MatchDataError> {
    match (result.half_time_home_score, result.half_time_away_score) {
        (Some(home), Some(away)) => Ok(Score::new(home, away)),
        _ => Err(MatchDataError::MissingHalfTime),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_time_is_returned_verbatim() {
        let result = MatchResult::full_time(3, 2);
        assert_eq!(extract(&result, PeriodScope::FullTime).unwrap(), Score::new(3, 2));
    }

    #[test]
    fn full_time_does_not_need_half_time_data() {
        let result = MatchResult::full_time(1, 0);
        assert!(extract(&result, PeriodScope::FullTime).is_ok());
    }

    #[test]
    fn first_half_is_half_time_score() {
        let result = MatchResult::full_time(2, 1).with_half_time(1, 0);
        assert_eq!(extract(&result, PeriodScope::FirstHalf).unwrap(), Score::new(1, 0));
    }

    #[test]
    fn second_half_is_difference() {
        let result = MatchResult::full_time(2, 1).with_half_time(1, 0);
        assert_eq!(extract(&result, PeriodScope::SecondHalf).unwrap(), Score::new(1, 1));
    }

    #[test]
    fn negative_second_half_is_rejected_not_clamped() {
        let result = MatchResult::full_time(1, 1).with_half_time(2, 0);
        assert_eq!(
            extract(&result, PeriodScope::SecondHalf),
            Err(MatchDataError::NegativeSecondHalf {
                side: Side::Home,
                full_time: 1,
                half_time: 2,
            })
        );
    }

    #[test]
    fn inconsistent_half_time_fails_first_half_too() {
        let result = MatchResult::full_time(0, 1).with_half_time(0, 2);
        assert!(matches!(
            extract(&result, PeriodScope::FirstHalf),
            Err(MatchDataError::HalfTimeExceedsFullTime { side: Side::Away, .. })
        ));
    }

    #[test]
    fn inconsistent_half_time_fails_full_time() {
        let result = MatchResult::full_time(1, 1).with_half_time(3, 0);
        assert_eq!(
            extract(&result, PeriodScope::FullTime),
            Err(MatchDataError::HalfTimeExceedsFullTime {
                side: Side::Home,
                full_time: 1,
                half_time: 3,
            })
        );
    }

    #[test]
    fn partial_half_time_is_checked_per_side() {
        let mut result = MatchResult::full_time(2, 0);
        result.half_time_away_score = Some(1);
        assert!(matches!(
            check_half_time(&result),
            Err(MatchDataError::HalfTimeExceedsFullTime { side: Side::Away, .. })
        ));

        result.half_time_away_score = None;
        result.half_time_home_score = Some(2);
        assert_eq!(check_half_time(&result), Ok(()));
    }

    #[test]
    fn missing_half_time_fails_half_scopes() {
        let result = MatchResult::full_time(1, 0);
        assert_eq!(
            extract(&result, PeriodScope::FirstHalf),
            Err(MatchDataError::MissingHalfTime)
        );
        assert_eq!(
            extract(&result, PeriodScope::SecondHalf),
            Err(MatchDataError::MissingHalfTime)
        );
    }

    #[test]
    fn partially_supplied_half_time_counts_as_missing() {
        let mut result = MatchResult::full_time(1, 0);
        result.half_time_home_score = Some(1);
        assert_eq!(
            extract(&result, PeriodScope::SecondHalf),
            Err(MatchDataError::MissingHalfTime)
        );
    }

    #[test]
    fn score_helpers() {
        let score = Score::new(2, 3);
        assert_eq!(score.of(Side::Home), 2);
        assert_eq!(score.of(Side::Away), 3);
        assert_eq!(score.total(), 5);
    }
}
