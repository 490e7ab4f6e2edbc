//! Placed bets.
//!
//! A bet is immutable once placed. Settlement reads it and produces a
//! separate [`SettlementOutcome`](super::SettlementOutcome); it never
//! changes the bet.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::DomainError;
use super::id::BetId;
use super::line::LineInput;
use super::money::{Odds, Stake};
use super::selection::Selection;

/// A bet as placed, with the provider's free-text market description.
///
/// Construct with [`Bet::builder`]. Deserialization runs the same
/// validation, so a `Bet` always has `stake > 0` and `odds >= 1`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BetRecord", into = "BetRecord")]
pub struct Bet {
    id: BetId,
    market_name: String,
    market_criterion: String,
    selection_label: String,
    participant: Option<String>,
    handicap_line: Option<LineInput>,
    stake: Stake,
    odds: Odds,
    placed_at: Option<DateTime<Utc>>,
}

impl Bet {
    /// Start building a bet.
    pub fn builder(
        id: BetId,
        market_name: impl Into<String>,
        selection_label: impl Into<String>,
    ) -> BetBuilder {
        BetBuilder::new(id, market_name, selection_label)
    }

    #[must_use]
    pub fn id(&self) -> &BetId {
        &self.id
    }

    /// Provider market name, e.g. `"Asian Handicap"`.
    #[must_use]
    pub fn market_name(&self) -> &str {
        &self.market_name
    }

    /// Provider criterion text, e.g. `"Asian Handicap - 1st Half"`.
    #[must_use]
    pub fn market_criterion(&self) -> &str {
        &self.market_criterion
    }

    /// Provider selection label, e.g. `"2"`, `"Over"` or a player name.
    #[must_use]
    pub fn selection_label(&self) -> &str {
        &self.selection_label
    }

    /// The parsed selection.
    #[must_use]
    pub fn selection(&self) -> Selection {
        Selection::parse(&self.selection_label)
    }

    /// Player or team the outcome refers to, when the feed names one.
    #[must_use]
    pub fn participant(&self) -> Option<&str> {
        self.participant.as_deref()
    }

    /// Raw line as supplied at placement.
    #[must_use]
    pub fn handicap_line(&self) -> Option<&LineInput> {
        self.handicap_line.as_ref()
    }

    #[must_use]
    pub fn stake(&self) -> Stake {
        self.stake
    }

    #[must_use]
    pub fn odds(&self) -> Odds {
        self.odds
    }

    #[must_use]
    pub fn placed_at(&self) -> Option<DateTime<Utc>> {
        self.placed_at
    }

    /// Maximum possible return, `stake * odds`.
    #[must_use]
    pub fn potential_payout(&self) -> Decimal {
        self.stake * self.odds
    }
}

/// Builder for [`Bet`].
///
/// # Example
///
/// ```
/// use betsettle::domain::{Bet, BetId};
/// use rust_decimal_macros::dec;
///
/// let bet = Bet::builder(BetId::new("b-1"), "Asian Handicap", "2")
///     .line(dec!(1.25))
///     .stake(dec!(100))
///     .odds(dec!(1.95))
///     .build()
///     .unwrap();
///
/// assert_eq!(bet.potential_payout(), dec!(195));
/// ```
#[derive(Debug)]
pub struct BetBuilder {
    id: BetId,
    market_name: String,
    market_criterion: String,
    selection_label: String,
    participant: Option<String>,
    handicap_line: Option<LineInput>,
    stake: Option<Stake>,
    odds: Option<Odds>,
    placed_at: Option<DateTime<Utc>>,
}

impl BetBuilder {
    fn new(id: BetId, market_name: impl Into<String>, selection_label: impl Into<String>) -> Self {
        Self {
            id,
            market_name: market_name.into(),
            market_criterion: String::new(),
            selection_label: selection_label.into(),
            participant: None,
            handicap_line: None,
            stake: None,
            odds: None,
            placed_at: None,
        }
    }

    /// Set the criterion text.
    pub fn criterion(mut self, criterion: impl Into<String>) -> Self {
        self.market_criterion = criterion.into();
        self
    }

    /// Set the participant the outcome refers to.
    pub fn participant(mut self, participant: impl Into<String>) -> Self {
        self.participant = Some(participant.into());
        self
    }

    /// Set a numeric line.
    pub fn line(mut self, line: Decimal) -> Self {
        self.handicap_line = Some(LineInput::Value(line));
        self
    }

    /// Set a line as the feed's text, parsed at settlement.
    pub fn line_text(mut self, raw: impl Into<String>) -> Self {
        self.handicap_line = Some(LineInput::Text(raw.into()));
        self
    }

    pub fn stake(mut self, stake: Stake) -> Self {
        self.stake = Some(stake);
        self
    }

    pub fn odds(mut self, odds: Odds) -> Self {
        self.odds = Some(odds);
        self
    }

    pub fn placed_at(mut self, placed_at: DateTime<Utc>) -> Self {
        self.placed_at = Some(placed_at);
        self
    }

    /// Build the bet, validating stake and odds.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError`] if the id is empty, stake or odds are missing,
    /// the stake is not positive, the odds are below 1.0, or the winning
    /// payout does not fit in a `Decimal`.
    pub fn build(self) -> Result<Bet, DomainError> {
        if self.id.is_empty() {
            return Err(DomainError::EmptyBetId);
        }
        let stake = self.stake.ok_or(DomainError::MissingField { field: "stake" })?;
        let odds = self.odds.ok_or(DomainError::MissingField { field: "odds" })?;

        if stake <= Decimal::ZERO {
            return Err(DomainError::NonPositiveStake { stake });
        }
        if odds < Decimal::ONE {
            return Err(DomainError::OddsBelowOne { odds });
        }
        if stake.checked_mul(odds).is_none() {
            return Err(DomainError::PayoutOverflow { stake, odds });
        }

        Ok(Bet {
            id: self.id,
            market_name: self.market_name,
            market_criterion: self.market_criterion,
            selection_label: self.selection_label,
            participant: self.participant,
            handicap_line: self.handicap_line,
            stake,
            odds,
            placed_at: self.placed_at,
        })
    }
}

/// Wire form of a bet, as stored by the placement service.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BetRecord {
    pub id: BetId,
    pub market_name: String,
    #[serde(default)]
    pub market_criterion: String,
    pub selection_label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub participant: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub handicap_line: Option<LineInput>,
    pub stake: Stake,
    pub odds: Odds,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placed_at: Option<DateTime<Utc>>,
}

impl TryFrom<BetRecord> for Bet {
    type Error = DomainError;

    fn try_from(record: BetRecord) -> Result<Self, Self::Error> {
        BetBuilder {
            id: record.id,
            market_name: record.market_name,
            market_criterion: record.market_criterion,
            selection_label: record.selection_label,
            participant: record.participant,
            handicap_line: record.handicap_line,
            stake: Some(record.stake),
            odds: Some(record.odds),
            placed_at: record.placed_at,
        }
        .build()
    }
}

impl From<Bet> for BetRecord {
    fn from(bet: Bet) -> Self {
        Self {
            id: bet.id,
            market_name: bet.market_name,
            market_criterion: bet.market_criterion,
            selection_label: bet.selection_label,
            participant: bet.participant,
            handicap_line: bet.handicap_line,
            stake: bet.stake,
            odds: bet.odds,
            placed_at: bet.placed_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn builder() -> BetBuilder {
        Bet::builder(BetId::new("bet-1"), "Full Time", "1")
            .stake(dec!(10))
            .odds(dec!(2.5))
    }

    #[test]
    fn builder_creates_bet() {
        let bet = builder().criterion("Full Time").build().unwrap();
        assert_eq!(bet.id().as_str(), "bet-1");
        assert_eq!(bet.market_criterion(), "Full Time");
        assert_eq!(bet.selection(), Selection::Home);
        assert_eq!(bet.potential_payout(), dec!(25));
        assert!(bet.handicap_line().is_none());
    }

    #[test]
    fn rejects_non_positive_stake() {
        let result = builder().stake(dec!(-1)).build();
        assert_eq!(result, Err(DomainError::NonPositiveStake { stake: dec!(-1) }));
    }

    #[test]
    fn rejects_odds_below_one() {
        let result = builder().odds(dec!(0.99)).build();
        assert_eq!(result, Err(DomainError::OddsBelowOne { odds: dec!(0.99) }));
    }

    #[test]
    fn rejects_stake_whose_payout_overflows() {
        let stake = Decimal::from_scientific("7e28").unwrap();
        let result = builder().stake(stake).odds(dec!(2)).build();
        assert_eq!(
            result,
            Err(DomainError::PayoutOverflow {
                stake,
                odds: dec!(2)
            })
        );
    }

    #[test]
    fn accepts_even_money_floor() {
        assert!(builder().odds(dec!(1)).build().is_ok());
    }

    #[test]
    fn rejects_missing_stake() {
        let result = Bet::builder(BetId::new("b"), "Full Time", "1")
            .odds(dec!(2))
            .build();
        assert_eq!(result, Err(DomainError::MissingField { field: "stake" }));
    }

    #[test]
    fn rejects_empty_id() {
        let result = Bet::builder(BetId::new(""), "Full Time", "1")
            .stake(dec!(1))
            .odds(dec!(2))
            .build();
        assert_eq!(result, Err(DomainError::EmptyBetId));
    }

    #[test]
    fn deserialization_validates() {
        let json = r#"{
            "id": "b-9",
            "marketName": "Asian Handicap",
            "selectionLabel": "2",
            "handicapLine": "+1.25",
            "stake": "100",
            "odds": "1.95"
        }"#;
        let bet: Bet = serde_json::from_str(json).unwrap();
        assert_eq!(bet.handicap_line().unwrap().parse().unwrap().value(), dec!(1.25));

        let bad = json.replace("\"100\"", "\"0\"");
        assert!(serde_json::from_str::<Bet>(&bad).is_err());
    }

    #[test]
    fn serializes_to_wire_form() {
        let bet = builder().participant("Saka").build().unwrap();
        let value = serde_json::to_value(&bet).unwrap();
        assert_eq!(value["marketName"], "Full Time");
        assert_eq!(value["participant"], "Saka");
        assert!(value.get("handicapLine").is_none());

        let back: Bet = serde_json::from_value(value).unwrap();
        assert_eq!(back, bet);
    }
}
