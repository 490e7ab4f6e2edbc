//! Priority-ordered rule registry.

use std::fmt;

use super::view::MarketView;
use crate::domain::MarketCode;
use crate::error::ClassifierError;

/// Predicate over a normalized market view.
pub type Predicate = fn(&MarketView) -> bool;

/// One classification rule: a code, a unique priority and a predicate.
#[derive(Clone, Copy)]
pub struct Rule {
    name: &'static str,
    code: MarketCode,
    priority: u16,
    predicate: Predicate,
}

impl Rule {
    #[must_use]
    pub const fn new(
        name: &'static str,
        code: MarketCode,
        priority: u16,
        predicate: Predicate,
    ) -> Self {
        Self {
            name,
            code,
            priority,
            predicate,
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub const fn code(&self) -> MarketCode {
        self.code
    }

    #[must_use]
    pub const fn priority(&self) -> u16 {
        self.priority
    }

    /// Evaluate the predicate.
    #[must_use]
    pub fn matches(&self, view: &MarketView) -> bool {
        (self.predicate)(view)
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("code", &self.code)
            .field("priority", &self.priority)
            .finish_non_exhaustive()
    }
}

/// Registry of classification rules, kept sorted by descending priority.
///
/// Priorities are unique: [`RuleRegistry::register`] refuses a rule whose
/// priority is already taken, so the highest-priority match is always
/// unambiguous.
#[derive(Debug, Clone, Default)]
pub struct RuleRegistry {
    rules: Vec<Rule>,
}

impl RuleRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a rule.
    ///
    /// # Errors
    ///
    /// Returns [`ClassifierError::DuplicatePriority`] if another rule already
    /// uses the same priority.
    pub fn register(&mut self, rule: Rule) -> Result<(), ClassifierError> {
        if let Some(existing) = self.rules.iter().find(|r| r.priority == rule.priority) {
            return Err(ClassifierError::DuplicatePriority {
                priority: rule.priority,
                existing: existing.name,
                incoming: rule.name,
            });
        }
        let index = self.rules.partition_point(|r| r.priority > rule.priority);
        self.rules.insert(index, rule);
        Ok(())
    }

    /// Build a registry from a list of rules.
    ///
    /// # Errors
    ///
    /// Returns [`ClassifierError::DuplicatePriority`] on the first clash.
    pub fn from_rules(rules: impl IntoIterator<Item = Rule>) -> Result<Self, ClassifierError> {
        let mut registry = Self::new();
        for rule in rules {
            registry.register(rule)?;
        }
        Ok(registry)
    }

    /// Registry that skips the uniqueness check, for exercising clashes.
    #[cfg(test)]
    pub(crate) fn from_rules_unchecked(mut rules: Vec<Rule>) -> Self {
        rules.sort_by(|a, b| b.priority.cmp(&a.priority));
        Self { rules }
    }

    /// All rules, highest priority first.
    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Number of registered rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Every rule whose predicate matches, highest priority first.
    pub fn candidates<'a>(&'a self, view: &'a MarketView) -> impl Iterator<Item = &'a Rule> + 'a {
        self.rules.iter().filter(move |rule| rule.matches(view))
    }

    /// The matching rule with the strictly highest priority.
    ///
    /// # Errors
    ///
    /// Returns [`ClassifierError::AmbiguousMatch`] if the two best candidates
    /// share a priority, which registration is meant to rule out.
    pub fn best_match(&self, view: &MarketView) -> Result<Option<&Rule>, ClassifierError> {
        let mut candidates = self.rules.iter().filter(|rule| rule.matches(view));
        let Some(best) = candidates.next() else {
            return Ok(None);
        };
        if let Some(runner_up) = candidates.next() {
            if runner_up.priority == best.priority {
                return Err(ClassifierError::AmbiguousMatch {
                    priority: best.priority,
                    first: best.name,
                    second: runner_up.name,
                });
            }
        }
        Ok(Some(best))
    }
}
