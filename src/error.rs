use rust_decimal::Decimal;
use thiserror::Error;

use crate::domain::error::DomainError;
use crate::domain::{MarketCode, Side};

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Inconsistent or incomplete score data supplied with a match result.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatchDataError {
    #[error("derived second-half score for {side} is negative: full time {full_time}, half time {half_time}")]
    NegativeSecondHalf {
        side: Side,
        full_time: u32,
        half_time: u32,
    },

    #[error("half-time score for {side} ({half_time}) exceeds full-time score ({full_time})")]
    HalfTimeExceedsFullTime {
        side: Side,
        full_time: u32,
        half_time: u32,
    },

    #[error("half-time score is required but missing")]
    MissingHalfTime,

    #[error("corner counts are required but missing")]
    MissingCorners,

    #[error("player statistics are required but missing")]
    MissingPlayerStats,

    #[error("no statistics for player '{name}'")]
    PlayerNotFound { name: String },

    #[error("cannot resolve which team the {market} market refers to")]
    MissingTeamScope { market: MarketCode },
}

/// A handicap or goal line that is absent or cannot be used.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HandicapError {
    #[error("market {code} requires a line but none was supplied")]
    Missing { code: MarketCode },

    #[error("cannot parse handicap line '{raw}'")]
    Unparseable { raw: String },

    #[error("line {line} is not a multiple of 0.25")]
    UnsupportedStep { line: Decimal },
}

/// Terminal failures of a single settlement call.
///
/// Re-running settlement with the same inputs reproduces the same error, so
/// callers decide whether to skip, alert, or wait for corrected data.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SettlementError {
    #[error("invalid match data: {0}")]
    InvalidMatchData(#[from] MatchDataError),

    #[error("invalid handicap: {0}")]
    InvalidHandicap(#[from] HandicapError),

    #[error("unsupported market {code}: {reason}")]
    UnsupportedMarket { code: MarketCode, reason: String },
}

impl SettlementError {
    pub(crate) fn unsupported(code: MarketCode, reason: impl Into<String>) -> Self {
        Self::UnsupportedMarket {
            code,
            reason: reason.into(),
        }
    }
}

/// Rule registry misconfiguration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClassifierError {
    #[error("priority {priority} already used by rule '{existing}', cannot register '{incoming}'")]
    DuplicatePriority {
        priority: u16,
        existing: &'static str,
        incoming: &'static str,
    },

    #[error("rules '{first}' and '{second}' matched with equal priority {priority}")]
    AmbiguousMatch {
        priority: u16,
        first: &'static str,
        second: &'static str,
    },
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Settlement(#[from] SettlementError),

    #[error(transparent)]
    Classifier(#[from] ClassifierError),

    #[error("failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
