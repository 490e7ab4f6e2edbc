//! Market classification.
//!
//! Odds feeds describe markets in free text only. The classifier maps each
//! bet onto one [`MarketCode`] by evaluating a priority-ordered rule table
//! against a normalized [`MarketView`] of the bet.
//!
//! # Architecture
//!
//! - [`MarketView`] - lower-cased name/criterion/selection plus derived hints
//! - [`Rule`] - `(name, code, priority, predicate)`
//! - [`RuleRegistry`] - rules sorted by unique, descending priority
//! - [`BUILTIN_RULES`] - the production rule table
//!
//! Every matching rule is a candidate and the one with the strictly highest
//! priority wins. A catch-all rule at priority 0 yields `UNKNOWN`.
//!
//! # Example
//!
//! ```
//! use betsettle::classifier::MarketClassifier;
//! use betsettle::domain::{Bet, BetId, MarketCode};
//! use rust_decimal_macros::dec;
//!
//! let bet = Bet::builder(BetId::new("b-1"), "Asian Handicap", "2")
//!     .criterion("Asian Handicap - 1st Half")
//!     .line(dec!(0.5))
//!     .stake(dec!(10))
//!     .odds(dec!(1.9))
//!     .build()
//!     .unwrap();
//!
//! let classifier = MarketClassifier::new();
//! assert_eq!(classifier.classify(&bet), MarketCode::AsianHandicapFirstHalf);
//! ```

mod registry;
mod rules;
mod view;

pub use registry::{Predicate, Rule, RuleRegistry};
pub use rules::BUILTIN_RULES;
pub use view::{Hints, MarketView, TimeWindow};

use tracing::{debug, error};

use crate::domain::{Bet, MarketCode};
use crate::error::ClassifierError;

/// Outcome of classification with the rule that decided it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub code: MarketCode,
    pub rule: &'static str,
    pub priority: u16,
}

impl Classification {
    const UNMATCHED: Self = Self {
        code: MarketCode::Unknown,
        rule: "unmatched",
        priority: 0,
    };
}

/// Maps bets to market codes using a [`RuleRegistry`].
#[derive(Debug, Clone)]
pub struct MarketClassifier {
    registry: RuleRegistry,
}

impl Default for MarketClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl MarketClassifier {
    /// Classifier over the builtin rule table.
    #[must_use]
    pub fn new() -> Self {
        Self::with_registry(RuleRegistry::builtin())
    }

    /// Classifier over a custom registry.
    #[must_use]
    pub const fn with_registry(registry: RuleRegistry) -> Self {
        Self { registry }
    }

    #[must_use]
    pub const fn registry(&self) -> &RuleRegistry {
        &self.registry
    }

    /// Classify a bet into exactly one market code.
    ///
    /// Returns [`MarketCode::Unknown`] when only the catch-all matches.
    #[must_use]
    pub fn classify(&self, bet: &Bet) -> MarketCode {
        self.explain(bet).code
    }

    /// Classify a bet and report which rule decided.
    ///
    /// A registry that yields an ambiguous match is logged at error level
    /// and the bet is reported as [`MarketCode::Unknown`], which settlement
    /// rejects. Use [`MarketClassifier::classify_view`] to get the error.
    #[must_use]
    pub fn explain(&self, bet: &Bet) -> Classification {
        let view = MarketView::from_bet(bet);
        let classification = self.classify_view(&view).unwrap_or_else(|err| {
            error!(bet_id = %bet.id(), error = %err, "Classifier misconfigured, treating bet as unknown");
            Classification::UNMATCHED
        });
        debug!(
            bet_id = %bet.id(),
            market = %bet.market_name(),
            code = %classification.code,
            rule = classification.rule,
            "Classified bet"
        );
        classification
    }

    /// Classify a prepared view.
    ///
    /// # Errors
    ///
    /// Returns [`ClassifierError::AmbiguousMatch`] if the registry holds two
    /// matching rules with the same priority.
    pub fn classify_view(&self, view: &MarketView) -> Result<Classification, ClassifierError> {
        Ok(self
            .registry
            .best_match(view)?
            .map_or(Classification::UNMATCHED, |rule| Classification {
                code: rule.code(),
                rule: rule.name(),
                priority: rule.priority(),
            }))
    }
}
