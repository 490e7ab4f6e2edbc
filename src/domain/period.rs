//! Portion of a match a market's scores are drawn from.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which part of the match a market settles against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PeriodScope {
    #[default]
    FullTime,
    FirstHalf,
    SecondHalf,
}

impl fmt::Display for PeriodScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FullTime => write!(f, "FULL_TIME"),
            Self::FirstHalf => write!(f, "FIRST_HALF"),
            Self::SecondHalf => write!(f, "SECOND_HALF"),
        }
    }
}
