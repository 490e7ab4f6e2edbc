//! Handicap and goal lines.
//!
//! Lines move in steps of 0.25. Whole and half lines settle directly;
//! quarter lines (`x.25`, `x.75`) split the stake across the two adjacent
//! lines 0.5 apart.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::HandicapError;

const QUARTER: Decimal = Decimal::from_parts(25, 0, 0, false, 2);
const THREE_QUARTERS: Decimal = Decimal::from_parts(75, 0, 0, false, 2);
const HALF: Decimal = Decimal::from_parts(5, 0, 0, false, 1);

/// A line as supplied by the odds feed, before validation.
///
/// Feeds send either a plain number or text such as `"+1.25"` or the
/// split notation `"0.5, 1"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LineInput {
    Value(Decimal),
    Text(String),
}

impl LineInput {
    /// Parse the raw input into a validated [`HandicapLine`].
    pub fn parse(&self) -> Result<HandicapLine, HandicapError> {
        match self {
            Self::Value(value) => HandicapLine::try_new(*value),
            Self::Text(raw) => raw.parse(),
        }
    }
}

impl From<Decimal> for LineInput {
    fn from(value: Decimal) -> Self {
        Self::Value(value)
    }
}

impl From<&str> for LineInput {
    fn from(raw: &str) -> Self {
        Self::Text(raw.to_string())
    }
}

/// The one or two lines a bet actually settles against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineLegs {
    /// Whole or half line: a single settlement at full stake.
    Single(Decimal),
    /// Quarter line: two settlements at half stake each.
    Split(Decimal, Decimal),
}

/// A validated line, always a multiple of 0.25.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HandicapLine(Decimal);

impl HandicapLine {
    /// Create a line, rejecting values off the 0.25 grid.
    pub fn try_new(value: Decimal) -> Result<Self, HandicapError> {
        if !(value * Decimal::from(4)).fract().is_zero() {
            return Err(HandicapError::UnsupportedStep { line: value });
        }
        Ok(Self(value.normalize()))
    }

    /// The signed line value.
    #[must_use]
    pub const fn value(&self) -> Decimal {
        self.0
    }

    /// True when the fractional part is 0.25 or 0.75.
    #[must_use]
    pub fn is_quarter(&self) -> bool {
        let fract = self.0.fract().abs();
        fract == QUARTER || fract == THREE_QUARTERS
    }

    /// Decompose into the line(s) to settle against.
    ///
    /// Quarter lines split into the two adjacent lines, nearest-to-zero
    /// first: `+1.25` into `+1` and `+1.5`, `-1.75` into `-1.5` and `-2`.
    #[must_use]
    pub fn legs(&self) -> LineLegs {
        if !self.is_quarter() {
            return LineLegs::Single(self.0);
        }

        let line = self.0;
        let fract = line.fract().abs();
        let positive = line.is_sign_positive();
        let (first, second) = match (fract == QUARTER, positive) {
            (true, true) => (line.floor(), line.floor() + HALF),
            (true, false) => (line.ceil(), line.ceil() - HALF),
            (false, true) => (line.floor() + HALF, line.ceil()),
            (false, false) => (line.ceil() - HALF, line.floor()),
        };
        LineLegs::Split(first.normalize(), second.normalize())
    }
}

impl fmt::Display for HandicapLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_sign_positive() && !self.0.is_zero() {
            write!(f, "+{}", self.0)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

impl FromStr for HandicapLine {
    type Err = HandicapError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let unparseable = || HandicapError::Unparseable {
            raw: raw.to_string(),
        };
        let parse_part = |part: &str| -> Result<Decimal, HandicapError> {
            let part = part.trim();
            let part = part.strip_prefix('+').unwrap_or(part);
            Decimal::from_str(part).map_err(|_| unparseable())
        };

        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(unparseable());
        }

        match trimmed.split_once(',') {
            None => Self::try_new(parse_part(trimmed)?),
            Some((first, second)) => {
                let first = parse_part(first)?;
                let second = parse_part(second)?;
                if (first - second).abs() != HALF {
                    return Err(unparseable());
                }
                Self::try_new((first + second) / Decimal::TWO)
            }
        }
    }
}
