//! Rule representation and the Rule Store.
//!
//! A rule says: if some (or all) of these symptoms are present, then
//! this conclusion holds, discounted by the rule's weight. The store
//! loads and validates the static rule set once; it is immutable for
//! the process lifetime and safe to share across concurrent diagnosis
//! runs without locking.

use std::collections::{BTreeSet, HashSet};
use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::certainty::Cf;
use crate::error::LoadError;

/// Stable identifier for a rule.
///
/// Uniqueness within a store is an invariant enforced at load time;
/// the fired-set tracks these per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleId(u32);

impl RuleId {
    /// Creates a rule ID from its numeric value.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Wire format of one rule record.
///
/// ```json
/// { "id": 1, "if": ["leaves_wilting", "roots_dark"], "then": "root_rot", "cf": 0.8 }
/// ```
///
/// `cf` is optional and defaults to 1.0.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleRecord {
    /// Unique rule identifier.
    pub id: RuleId,

    /// Ordered, non-empty list of premise identifiers.
    #[serde(rename = "if")]
    pub premises: Vec<String>,

    /// Conclusion identifier.
    #[serde(rename = "then")]
    pub conclusion: String,

    /// Rule-level certainty multiplier in `[0.0, 1.0]`.
    #[serde(default = "default_weight")]
    pub cf: f32,
}

fn default_weight() -> f32 {
    1.0
}

/// A validated, immutable rule.
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    /// Unique rule identifier.
    pub id: RuleId,

    /// Ordered, non-empty premise identifiers.
    pub premises: Vec<String>,

    /// Conclusion identifier.
    pub conclusion: String,

    /// Rule-level certainty multiplier.
    pub weight: Cf,
}

impl Rule {
    fn from_record(record: RuleRecord) -> Result<Self, LoadError> {
        if record.premises.is_empty() {
            return Err(LoadError::EmptyPremises { rule: record.id });
        }
        let weight = Cf::new(record.cf).map_err(|e| LoadError::WeightOutOfRange {
            rule: record.id,
            value: e.0,
        })?;
        Ok(Self {
            id: record.id,
            premises: record.premises,
            conclusion: record.conclusion,
            weight,
        })
    }
}

/// The validated, load-once rule set.
///
/// Read-only after construction; `&RuleStore` (or `Arc<RuleStore>`) may
/// be shared across threads freely.
#[derive(Debug, Clone)]
pub struct RuleStore {
    rules: Vec<Rule>,
    indicators: BTreeSet<String>,
}

impl RuleStore {
    /// Builds a store from already-parsed records, validating each.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError`] on an empty premise list, a weight outside
    /// `[0.0, 1.0]`, or a duplicate rule id.
    pub fn from_records(records: Vec<RuleRecord>) -> Result<Self, LoadError> {
        let mut seen = HashSet::with_capacity(records.len());
        let mut rules = Vec::with_capacity(records.len());
        let mut indicators = BTreeSet::new();

        for record in records {
            if !seen.insert(record.id) {
                return Err(LoadError::DuplicateRuleId { id: record.id });
            }
            let rule = Rule::from_record(record)?;
            indicators.extend(rule.premises.iter().cloned());
            rules.push(rule);
        }

        info!(
            rules = rules.len(),
            indicators = indicators.len(),
            "rule store loaded"
        );
        Ok(Self { rules, indicators })
    }

    /// Parses and validates a JSON array of rule records.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Json`] on malformed JSON (including a
    /// missing required field or non-numeric weight), or any
    /// [`from_records`](Self::from_records) validation error.
    pub fn from_json_str(json: &str) -> Result<Self, LoadError> {
        let records: Vec<RuleRecord> = serde_json::from_str(json)?;
        Self::from_records(records)
    }

    /// Reads and validates a JSON rule file.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Io`] if the file cannot be read, plus any
    /// [`from_json_str`](Self::from_json_str) error.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// The full rule sequence, in load order.
    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Every identifier that appears as a premise anywhere, sorted.
    ///
    /// Used to distinguish raw symptoms from derived conclusions.
    #[must_use]
    pub fn indicator_universe(&self) -> &BTreeSet<String> {
        &self.indicators
    }

    /// Whether an identifier belongs to the indicator universe.
    #[must_use]
    pub fn is_indicator(&self, identifier: &str) -> bool {
        self.indicators.contains(identifier)
    }
}
