//! Settlement rules for every non-handicap market code.
//!
//! Each rule reads only the part of the [`MatchResult`] its market needs
//! and fails with [`MatchDataError`] when that part is absent.

use std::cmp::Ordering;

use rust_decimal::Decimal;

use super::line::settle_over_under;
use super::Wager;
use crate::classifier::MarketView;
use crate::domain::score;
use crate::domain::{
    Bet, HandicapLine, MarketCode, MatchResult, PeriodScope, PlayerLine, Selection,
    SettlementOutcome, Side,
};
use crate::error::{HandicapError, MatchDataError, SettlementError};

/// Settle a bet on a non-handicap market.
///
/// # Errors
///
/// - [`SettlementError::UnsupportedMarket`] for codes that cannot be settled
///   from a final score (`TOTAL_GOALS_INTERVAL`, `CORNERS_FIRST_TO_X`,
///   `UNKNOWN`), for handicap codes, and for selections the market does not
///   offer
/// - [`SettlementError::InvalidHandicap`] when a line is required but absent
///   or malformed
/// - [`SettlementError::InvalidMatchData`] when the result lacks the data
///   the market reads
pub fn settle(
    code: MarketCode,
    bet: &Bet,
    result: &MatchResult,
) -> Result<SettlementOutcome, SettlementError> {
    // Corner and player markets never read the score, but a result with
    // half time above full time is corrupt for all of them.
    if code.period_scope() == PeriodScope::FullTime {
        score::check_half_time(result)?;
    }
    let wager = Wager::new(bet.stake(), bet.odds());
    match code {
        MarketCode::MatchResult => {
            let side = winner(result.full_time_home_score, result.full_time_away_score);
            three_way(code, bet, result, side, wager)
        }
        MarketCode::TotalGoals | MarketCode::TotalGoalsFirstHalf | MarketCode::TotalGoalsSecondHalf => {
            let total = score::extract(result, code.period_scope())?.total();
            over_under(code, bet, total, wager)
        }
        MarketCode::TeamTotalGoals => {
            let side = team_scope(code, bet, result)?;
            over_under(code, bet, result.full_time_score(side), wager)
        }
        MarketCode::CornersTotal => {
            let (home, away) = corners(result)?;
            over_under(code, bet, home + away, wager)
        }
        MarketCode::CornersTeamTotal => {
            let side = team_scope(code, bet, result)?;
            let (home, away) = corners(result)?;
            let count = match side {
                Side::Home => home,
                Side::Away => away,
            };
            over_under(code, bet, count, wager)
        }
        MarketCode::MostCorners => {
            let (home, away) = corners(result)?;
            three_way(code, bet, result, winner(home, away), wager)
        }
        MarketCode::CornersHandicap3Way => {
            let line = required_line(code, bet)?;
            let (home, away) = corners(result)?;
            let adjusted = Decimal::from(home) + line.value();
            let side = match adjusted.cmp(&Decimal::from(away)) {
                Ordering::Greater => Some(Side::Home),
                Ordering::Less => Some(Side::Away),
                Ordering::Equal => None,
            };
            three_way(code, bet, result, side, wager)
        }
        MarketCode::PlayerToScore => {
            let player = player(code, bet, result)?;
            yes_no(code, bet, player.goals >= 1, wager)
        }
        MarketCode::PlayerGoalsLine => {
            let player = player(code, bet, result)?;
            count_prop(code, bet, player.goals, None, wager)
        }
        MarketCode::PlayerShotsOnTarget => {
            let player = player(code, bet, result)?;
            count_prop(code, bet, player.shots_on_target, Some(1), wager)
        }
        MarketCode::PlayerCards => {
            let player = player(code, bet, result)?;
            yes_no(code, bet, player.cards >= 1, wager)
        }
        MarketCode::TotalGoalsInterval => Err(SettlementError::unsupported(
            code,
            "minute-level goal data is not part of the match result",
        )),
        MarketCode::CornersFirstToX => Err(SettlementError::unsupported(
            code,
            "corner timeline is not part of the match result",
        )),
        MarketCode::Unknown => Err(SettlementError::unsupported(code, "market not recognised")),
        MarketCode::AsianHandicap
        | MarketCode::AsianHandicapFirstHalf
        | MarketCode::AsianHandicapSecondHalf => Err(SettlementError::unsupported(
            code,
            "handicap markets settle through the handicap calculator",
        )),
    }
}

/// Parse the bet's line, failing if it is absent.
pub(crate) fn required_line(code: MarketCode, bet: &Bet) -> Result<HandicapLine, SettlementError> {
    let raw = bet.handicap_line().ok_or(HandicapError::Missing { code })?;
    Ok(raw.parse()?)
}

fn winner(home: u32, away: u32) -> Option<Side> {
    match home.cmp(&away) {
        Ordering::Greater => Some(Side::Home),
        Ordering::Less => Some(Side::Away),
        Ordering::Equal => None,
    }
}

/// 1/X/2 against the winning side, `None` being a draw. No push.
fn three_way(
    code: MarketCode,
    bet: &Bet,
    result: &MatchResult,
    winner: Option<Side>,
    wager: Wager,
) -> Result<SettlementOutcome, SettlementError> {
    let selection = bet.selection();
    let picked = match selection {
        Selection::Draw => None,
        ref other => Some(
            other
                .side(result.home_team.as_deref(), result.away_team.as_deref())
                .ok_or_else(|| invalid_selection(code, bet))?,
        ),
    };
    Ok(SettlementOutcome::from_hit(picked == winner, wager.stake, wager.odds))
}

fn over_under(
    code: MarketCode,
    bet: &Bet,
    quantity: u32,
    wager: Wager,
) -> Result<SettlementOutcome, SettlementError> {
    let over = match bet.selection() {
        Selection::Over => true,
        Selection::Under => false,
        _ => return Err(invalid_selection(code, bet)),
    };
    let line = required_line(code, bet)?;
    Ok(settle_over_under(quantity, over, line, wager))
}

/// Yes/No proposition. A named selection backs the proposition.
fn yes_no(
    code: MarketCode,
    bet: &Bet,
    hit: bool,
    wager: Wager,
) -> Result<SettlementOutcome, SettlementError> {
    let backed = match bet.selection() {
        Selection::Yes | Selection::Named(_) => true,
        Selection::No => false,
        _ => return Err(invalid_selection(code, bet)),
    };
    Ok(SettlementOutcome::from_hit(hit == backed, wager.stake, wager.odds))
}

/// Player count prop: Over/Under against a line, otherwise a threshold
/// named in the market text ("2 or more") or `default_threshold`.
fn count_prop(
    code: MarketCode,
    bet: &Bet,
    count: u32,
    default_threshold: Option<u32>,
    wager: Wager,
) -> Result<SettlementOutcome, SettlementError> {
    if matches!(bet.selection(), Selection::Over | Selection::Under) {
        return over_under(code, bet, count, wager);
    }
    let threshold = MarketView::from_bet(bet)
        .occurrence_threshold()
        .or(default_threshold)
        .ok_or(HandicapError::Missing { code })?;
    yes_no(code, bet, count >= threshold, wager)
}

fn team_scope(code: MarketCode, bet: &Bet, result: &MatchResult) -> Result<Side, SettlementError> {
    MarketView::from_bet(bet)
        .team_side(result.home_team.as_deref(), result.away_team.as_deref())
        .ok_or_else(|| MatchDataError::MissingTeamScope { market: code }.into())
}

fn corners(result: &MatchResult) -> Result<(u32, u32), SettlementError> {
    match (result.home_corners, result.away_corners) {
        (Some(home), Some(away)) => Ok((home, away)),
        _ => Err(MatchDataError::MissingCorners.into()),
    }
}

/// The player a prop refers to: a named selection, else the participant.
fn player<'a>(
    code: MarketCode,
    bet: &Bet,
    result: &'a MatchResult,
) -> Result<&'a PlayerLine, SettlementError> {
    let selection = bet.selection();
    let name = match &selection {
        Selection::Named(name) => name.as_str(),
        _ => bet
            .participant()
            .ok_or_else(|| SettlementError::unsupported(code, "bet does not name a player"))?,
    };
    if result.players.is_none() {
        return Err(MatchDataError::MissingPlayerStats.into());
    }
    result.player(name).ok_or_else(|| {
        MatchDataError::PlayerNotFound {
            name: name.to_string(),
        }
        .into()
    })
}

fn invalid_selection(code: MarketCode, bet: &Bet) -> SettlementError {
    SettlementError::unsupported(
        code,
        format!("selection '{}' is not offered by this market", bet.selection_label()),
    )
}
