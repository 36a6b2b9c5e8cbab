//! The forward-chaining inference engine.
//!
//! The engine repeatedly scans the rule store against the current fact
//! base, firing applicable rules until a full pass changes nothing.
//! Two behaviors are deliberate and load-bearing for result ranking:
//!
//! - **Partial-match firing**: a rule may fire when only some of its
//!   premises are known, its contribution discounted by the matched
//!   fraction. This is not strict logical AND.
//! - **No retraction**: a fired rule is final for the run. Later
//!   passes never reconsider it, even if new evidence arrives that
//!   would have changed its contribution.

use std::collections::HashSet;

use tracing::{debug, trace};

use crate::certainty::Cf;
use crate::error::InputError;
use crate::facts::FactBase;
use crate::rule::{RuleId, RuleStore};

/// One rule firing, recorded in the order it happened.
#[derive(Debug, Clone, PartialEq)]
pub struct Firing {
    /// The rule that fired.
    pub rule: RuleId,

    /// The conclusion the rule contributed to.
    pub conclusion: String,

    /// How many premises were present in the fact base.
    pub matched: usize,

    /// Total premise count of the rule.
    pub premises: usize,

    /// The contribution, after partial-match and weight discounting.
    pub inferred: Cf,
}

/// Audit record of one inference run.
#[derive(Debug, Clone, Default)]
pub struct InferenceTrace {
    /// Number of full passes over the rule store, including the final
    /// pass that fired nothing. Bounded by rule count + 1.
    pub passes: usize,

    /// Every firing, in order.
    pub firings: Vec<Firing>,
}

impl InferenceTrace {
    /// Rule ids that fired during the run.
    #[must_use]
    pub fn fired_rules(&self) -> Vec<RuleId> {
        self.firings.iter().map(|f| f.rule).collect()
    }
}

/// Evaluates a rule store against a fact base to a fixpoint.
///
/// The engine borrows the store and holds no mutable state of its own;
/// each run owns an independent fact base and fired-set, so concurrent
/// runs over one shared store need no synchronization.
#[derive(Debug, Clone, Copy)]
pub struct InferenceEngine<'a> {
    store: &'a RuleStore,
}

impl<'a> InferenceEngine<'a> {
    /// Creates an engine over a loaded rule store.
    #[must_use]
    pub const fn new(store: &'a RuleStore) -> Self {
        Self { store }
    }

    /// Builds a fact base from selected symptom identifiers, each at
    /// full confidence. An empty selection is valid.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::UnknownIndicator`] for any identifier not
    /// in the store's indicator universe. Rejecting instead of ignoring
    /// keeps equal selections producing equal results.
    pub fn seed<I, S>(&self, selected: I) -> Result<FactBase, InputError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut facts = FactBase::new();
        for identifier in selected {
            let identifier = identifier.into();
            if !self.store.is_indicator(&identifier) {
                return Err(InputError::UnknownIndicator { identifier });
            }
            facts.seed([identifier]);
        }
        Ok(facts)
    }

    /// Runs the fixpoint loop, mutating `facts` in place.
    ///
    /// Each pass visits all rules in store order. A rule fires at most
    /// once per run; the fired-set only grows and is bounded by the
    /// rule count, so termination within rule count + 1 passes is
    /// guaranteed. Conclusions of earlier passes are usable as
    /// premises in later ones (multi-hop chaining).
    #[allow(clippy::cast_precision_loss)]
    pub fn run(&self, facts: &mut FactBase) -> InferenceTrace {
        let mut fired: HashSet<RuleId> = HashSet::new();
        let mut result = InferenceTrace::default();

        loop {
            result.passes += 1;
            let mut pass_fired = false;

            for rule in self.store.rules() {
                if fired.contains(&rule.id) {
                    continue;
                }

                let matched: Vec<Cf> = rule
                    .premises
                    .iter()
                    .filter_map(|p| facts.get(p))
                    .collect();
                if matched.is_empty() {
                    continue;
                }

                let ratio = matched.len() as f32 / rule.premises.len() as f32;
                let premise_cf = matched
                    .iter()
                    .copied()
                    .fold(Cf::ONE, Cf::min);
                let inferred = premise_cf.scale(ratio).scale(rule.weight.value());

                let stored = facts.support(&rule.conclusion, inferred);
                fired.insert(rule.id);
                pass_fired = true;

                debug!(
                    rule = %rule.id,
                    conclusion = %rule.conclusion,
                    matched = matched.len(),
                    premises = rule.premises.len(),
                    inferred = inferred.value(),
                    stored = stored.value(),
                    "rule fired"
                );
                result.firings.push(Firing {
                    rule: rule.id,
                    conclusion: rule.conclusion.clone(),
                    matched: matched.len(),
                    premises: rule.premises.len(),
                    inferred,
                });
            }

            if !pass_fired {
                break;
            }
            trace!(pass = result.passes, "pass fired at least one rule");
        }

        result
    }
}
