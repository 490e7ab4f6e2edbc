//! Settlement orchestrator.

use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};
use serde::Serialize;
use tracing::{debug, info, warn};

use super::{handicap, market, Wager};
use crate::classifier::MarketClassifier;
use crate::config::SettlementConfig;
use crate::domain::{side_for_name, Bet, BetId, MarketCode, MatchResult, SettlementOutcome, Side};
use crate::error::{Result, SettlementError};

/// One bet's settlement within a batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettledBet {
    pub bet_id: BetId,
    pub code: MarketCode,
    pub outcome: std::result::Result<SettlementOutcome, SettlementError>,
}

impl SettledBet {
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.outcome.is_ok()
    }

    /// Flat record for JSON output.
    #[must_use]
    pub fn to_record(&self) -> SettledBetRecord {
        let (result, payout, error) = match &self.outcome {
            Ok(outcome) => (
                Some(outcome.result().to_string()),
                Some(outcome.payout().normalize().to_string()),
                None,
            ),
            Err(err) => (None, None, Some(err.to_string())),
        };
        SettledBetRecord {
            bet_id: self.bet_id.as_str().to_string(),
            market_code: self.code.as_str(),
            result,
            payout,
            error,
        }
    }
}

/// Serializable view of a [`SettledBet`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SettledBetRecord {
    pub bet_id: String,
    pub market_code: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payout: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Classifies bets and settles them against a match result.
///
/// A `Settler` holds no mutable state. Settling is deterministic and safe
/// to run concurrently across bets.
pub struct Settler {
    classifier: MarketClassifier,
    config: SettlementConfig,
    pool: Option<ThreadPool>,
}

impl std::fmt::Debug for Settler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Settler")
            .field("classifier", &self.classifier)
            .field("config", &self.config)
            .field("dedicated_pool", &self.pool.is_some())
            .finish()
    }
}

impl Default for Settler {
    fn default() -> Self {
        Self {
            classifier: MarketClassifier::new(),
            config: SettlementConfig::default(),
            pool: None,
        }
    }
}

impl Settler {
    /// Settler with the builtin rules and default batch settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Settler with explicit classifier and batch settings.
    ///
    /// A dedicated thread pool is built when `config.workers` is set;
    /// otherwise batches use rayon's global pool.
    ///
    /// # Errors
    ///
    /// Returns an error if the dedicated thread pool cannot be created.
    pub fn with_config(classifier: MarketClassifier, config: SettlementConfig) -> Result<Self> {
        let pool = config
            .workers
            .map(|workers| {
                ThreadPoolBuilder::new()
                    .num_threads(workers)
                    .thread_name(|i| format!("betsettle-{i}"))
                    .build()
            })
            .transpose()?;
        Ok(Self {
            classifier,
            config,
            pool,
        })
    }

    #[must_use]
    pub const fn classifier(&self) -> &MarketClassifier {
        &self.classifier
    }

    #[must_use]
    pub const fn config(&self) -> &SettlementConfig {
        &self.config
    }

    /// Classify and settle one bet.
    ///
    /// # Errors
    ///
    /// Returns the [`SettlementError`] that makes the bet unsettleable.
    /// Errors are terminal: the same inputs fail the same way.
    pub fn settle_bet(
        &self,
        bet: &Bet,
        result: &MatchResult,
    ) -> std::result::Result<SettlementOutcome, SettlementError> {
        let code = self.classifier.classify(bet);
        self.settle_as(code, bet, result)
    }

    /// Settle a bet whose market code is already known.
    ///
    /// # Errors
    ///
    /// See [`Settler::settle_bet`].
    pub fn settle_as(
        &self,
        code: MarketCode,
        bet: &Bet,
        result: &MatchResult,
    ) -> std::result::Result<SettlementOutcome, SettlementError> {
        let outcome = if code.is_handicap() {
            settle_handicap(code, bet, result)
        } else {
            market::settle(code, bet, result)
        };
        match &outcome {
            Ok(outcome) => debug!(bet_id = %bet.id(), %code, %outcome, "Bet settled"),
            Err(err) => debug!(bet_id = %bet.id(), %code, error = %err, "Bet not settleable"),
        }
        outcome
    }

    /// Settle many bets against one result.
    ///
    /// Output order matches input order. Batches of at least
    /// `parallel_threshold` bets are spread across the rayon pool; smaller
    /// ones run on the calling thread. Either way the output is identical.
    #[must_use]
    pub fn settle_batch(&self, bets: &[Bet], result: &MatchResult) -> Vec<SettledBet> {
        let settle_one = |bet: &Bet| {
            let code = self.classifier.classify(bet);
            SettledBet {
                bet_id: bet.id().clone(),
                code,
                outcome: self.settle_as(code, bet, result),
            }
        };

        let settled: Vec<SettledBet> = if bets.len() < self.config.parallel_threshold {
            bets.iter().map(settle_one).collect()
        } else if let Some(pool) = &self.pool {
            pool.install(|| bets.par_iter().map(settle_one).collect())
        } else {
            bets.par_iter().map(settle_one).collect()
        };

        let failed = settled.iter().filter(|s| !s.is_settled()).count();
        for failure in settled.iter().filter(|s| !s.is_settled()) {
            if let Err(err) = &failure.outcome {
                warn!(bet_id = %failure.bet_id, code = %failure.code, error = %err, "Bet left unsettled");
            }
        }
        info!(
            bets = settled.len(),
            settled = settled.len() - failed,
            failed,
            "Batch settled"
        );
        settled
    }
}

fn settle_handicap(
    code: MarketCode,
    bet: &Bet,
    result: &MatchResult,
) -> std::result::Result<SettlementOutcome, SettlementError> {
    let side = selected_side(bet, result).ok_or_else(|| {
        SettlementError::unsupported(
            code,
            format!("selection '{}' does not name a team", bet.selection_label()),
        )
    })?;
    let line = bet.handicap_line().map(|raw| raw.parse()).transpose()?;
    handicap::settle(
        code,
        code.period_scope(),
        side,
        line,
        Wager::new(bet.stake(), bet.odds()),
        result,
    )
}

fn selected_side(bet: &Bet, result: &MatchResult) -> Option<Side> {
    let home = result.home_team.as_deref();
    let away = result.away_team.as_deref();
    bet.selection()
        .side(home, away)
        .or_else(|| bet.participant().and_then(|p| side_for_name(p, home, away)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SettlementResult;
    use crate::error::HandicapError;
    use rust_decimal_macros::dec;

    fn ah_bet(id: &str, selection: &str, line: &str) -> Bet {
        Bet::builder(BetId::new(id), "Asian Handicap", selection)
            .line_text(line)
            .stake(dec!(100))
            .odds(dec!(1.95))
            .build()
            .unwrap()
    }

    #[test]
    fn settles_asian_handicap_by_team_name() {
        let result = MatchResult::full_time(1, 0).with_teams("Arsenal", "Chelsea");
        let bet = ah_bet("b", "Chelsea", "+1.25");
        let outcome = Settler::new().settle_bet(&bet, &result).unwrap();
        assert_eq!(outcome.result(), SettlementResult::Won);
        assert_eq!(outcome.payout(), dec!(147.5));
    }

    #[test]
    fn malformed_line_is_invalid_handicap() {
        let bet = ah_bet("b", "1", "one and a half");
        let err = Settler::new()
            .settle_bet(&bet, &MatchResult::full_time(1, 0))
            .unwrap_err();
        assert!(matches!(
            err,
            SettlementError::InvalidHandicap(HandicapError::Unparseable { .. })
        ));
    }

    #[test]
    fn handicap_needs_a_side() {
        let bet = ah_bet("b", "Over", "0.5");
        let err = Settler::new()
            .settle_bet(&bet, &MatchResult::full_time(1, 0))
            .unwrap_err();
        assert!(matches!(err, SettlementError::UnsupportedMarket { .. }));
    }

    #[test]
    fn settling_twice_gives_the_same_outcome() {
        let result = MatchResult::full_time(2, 2);
        let bet = ah_bet("b", "1", "-0.75");
        let settler = Settler::new();
        assert_eq!(
            settler.settle_bet(&bet, &result),
            settler.settle_bet(&bet, &result)
        );
    }

    #[test]
    fn batch_preserves_order_and_matches_sequential() {
        let result = MatchResult::full_time(1, 0);
        let bets: Vec<Bet> = (0..100)
            .map(|i| {
                let line = if i % 2 == 0 { "+1.25" } else { "-0.5" };
                ah_bet(&format!("b{i}"), if i % 3 == 0 { "1" } else { "2" }, line)
            })
            .collect();

        let sequential = Settler::with_config(
            MarketClassifier::new(),
            SettlementConfig {
                workers: None,
                parallel_threshold: usize::MAX,
            },
        )
        .unwrap()
        .settle_batch(&bets, &result);
        let parallel = Settler::with_config(
            MarketClassifier::new(),
            SettlementConfig {
                workers: Some(4),
                parallel_threshold: 1,
            },
        )
        .unwrap()
        .settle_batch(&bets, &result);

        assert_eq!(sequential, parallel);
        let ids: Vec<&str> = parallel.iter().map(|s| s.bet_id.as_str()).collect();
        let expected: Vec<String> = (0..100).map(|i| format!("b{i}")).collect();
        assert_eq!(ids, expected.iter().map(String::as_str).collect::<Vec<_>>());
    }

    #[test]
    fn batch_keeps_failures_in_place() {
        let result = MatchResult::full_time(1, 0);
        let unknown = Bet::builder(BetId::new("u"), "Double Chance", "1X")
            .stake(dec!(10))
            .odds(dec!(1.3))
            .build()
            .unwrap();
        let bets = vec![ah_bet("a", "1", "0"), unknown];

        let settled = Settler::new().settle_batch(&bets, &result);
        assert_eq!(settled.len(), 2);
        assert!(settled[0].is_settled());
        assert_eq!(settled[1].code, MarketCode::Unknown);
        assert!(!settled[1].is_settled());

        let record = settled[1].to_record();
        assert_eq!(record.market_code, "UNKNOWN");
        assert!(record.error.is_some());
    }
}
