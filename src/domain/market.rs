//! Canonical market codes.
//!
//! Providers describe markets in free text. Classification maps each bet to
//! exactly one [`MarketCode`], which in turn fixes the period the bet settles
//! against and whether it needs a line.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::period::PeriodScope;

/// Closed set of markets the settlement core knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MarketCode {
    /// Player goal count against a line or an "N or more" threshold.
    PlayerGoalsLine,
    /// Player to score at least once.
    PlayerToScore,
    PlayerShotsOnTarget,
    /// Player to be shown a card.
    PlayerCards,
    /// 1X2 on the full match.
    MatchResult,
    AsianHandicap,
    AsianHandicapFirstHalf,
    AsianHandicapSecondHalf,
    /// Goals scored by one named team.
    TeamTotalGoals,
    TotalGoalsFirstHalf,
    TotalGoalsSecondHalf,
    /// Goals inside a minute window other than a half.
    TotalGoalsInterval,
    TotalGoals,
    CornersTeamTotal,
    CornersTotal,
    MostCorners,
    #[serde(rename = "CORNERS_HANDICAP_3_WAY")]
    CornersHandicap3Way,
    CornersFirstToX,
    Unknown,
}

impl MarketCode {
    /// Every code, in classifier precedence order.
    pub const ALL: [Self; 19] = [
        Self::PlayerGoalsLine,
        Self::PlayerToScore,
        Self::PlayerShotsOnTarget,
        Self::PlayerCards,
        Self::MatchResult,
        Self::AsianHandicap,
        Self::AsianHandicapFirstHalf,
        Self::AsianHandicapSecondHalf,
        Self::TeamTotalGoals,
        Self::TotalGoalsFirstHalf,
        Self::TotalGoalsSecondHalf,
        Self::TotalGoalsInterval,
        Self::TotalGoals,
        Self::CornersTeamTotal,
        Self::CornersTotal,
        Self::MostCorners,
        Self::CornersHandicap3Way,
        Self::CornersFirstToX,
        Self::Unknown,
    ];

    /// The period whose score this market settles against.
    #[must_use]
    pub const fn period_scope(self) -> PeriodScope {
        match self {
            Self::AsianHandicapFirstHalf | Self::TotalGoalsFirstHalf => PeriodScope::FirstHalf,
            Self::AsianHandicapSecondHalf | Self::TotalGoalsSecondHalf => PeriodScope::SecondHalf,
            _ => PeriodScope::FullTime,
        }
    }

    /// True for the Asian handicap family.
    #[must_use]
    pub const fn is_handicap(self) -> bool {
        matches!(
            self,
            Self::AsianHandicap | Self::AsianHandicapFirstHalf | Self::AsianHandicapSecondHalf
        )
    }

    /// True for markets that cannot settle without a line.
    #[must_use]
    pub const fn requires_line(self) -> bool {
        matches!(
            self,
            Self::AsianHandicap
                | Self::AsianHandicapFirstHalf
                | Self::AsianHandicapSecondHalf
                | Self::TeamTotalGoals
                | Self::TotalGoalsFirstHalf
                | Self::TotalGoalsSecondHalf
                | Self::TotalGoals
                | Self::CornersTeamTotal
                | Self::CornersTotal
                | Self::CornersHandicap3Way
        )
    }

    /// True for player proposition markets.
    #[must_use]
    pub const fn is_player_prop(self) -> bool {
        matches!(
            self,
            Self::PlayerGoalsLine | Self::PlayerToScore | Self::PlayerShotsOnTarget | Self::PlayerCards
        )
    }

    /// Stable string form, identical to the serialized representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PlayerGoalsLine => "PLAYER_GOALS_LINE",
            Self::PlayerToScore => "PLAYER_TO_SCORE",
            Self::PlayerShotsOnTarget => "PLAYER_SHOTS_ON_TARGET",
            Self::PlayerCards => "PLAYER_CARDS",
            Self::MatchResult => "MATCH_RESULT",
            Self::AsianHandicap => "ASIAN_HANDICAP",
            Self::AsianHandicapFirstHalf => "ASIAN_HANDICAP_FIRST_HALF",
            Self::AsianHandicapSecondHalf => "ASIAN_HANDICAP_SECOND_HALF",
            Self::TeamTotalGoals => "TEAM_TOTAL_GOALS",
            Self::TotalGoalsFirstHalf => "TOTAL_GOALS_FIRST_HALF",
            Self::TotalGoalsSecondHalf => "TOTAL_GOALS_SECOND_HALF",
            Self::TotalGoalsInterval => "TOTAL_GOALS_INTERVAL",
            Self::TotalGoals => "TOTAL_GOALS",
            Self::CornersTeamTotal => "CORNERS_TEAM_TOTAL",
            Self::CornersTotal => "CORNERS_TOTAL",
            Self::MostCorners => "MOST_CORNERS",
            Self::CornersHandicap3Way => "CORNERS_HANDICAP_3_WAY",
            Self::CornersFirstToX => "CORNERS_FIRST_TO_X",
            Self::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for MarketCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
