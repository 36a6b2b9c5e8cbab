//! Error types for agridiag.
//!
//! All errors are strongly typed using thiserror. Failures are
//! front-loaded to load and seeding time: once a rule set has loaded
//! and a selection has been seeded, inference and extraction are total
//! functions that cannot fail.

use thiserror::Error;

use crate::rule::RuleId;

/// Errors raised while loading a rule source.
///
/// Any of these is fatal at startup; no diagnosis run proceeds against
/// a store that failed to load.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The rule source could not be read.
    #[error("failed to read rule source: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON, a missing required field, or a non-numeric weight.
    #[error("malformed rule source: {0}")]
    Json(#[from] serde_json::Error),

    /// A rule declared no premises at all.
    #[error("rule {rule} has an empty premise list")]
    EmptyPremises {
        /// The offending rule.
        rule: RuleId,
    },

    /// A rule weight fell outside the valid certainty range.
    #[error("rule {rule} has weight {value} outside [0.0, 1.0]")]
    WeightOutOfRange {
        /// The offending rule.
        rule: RuleId,
        /// The rejected weight.
        value: f32,
    },

    /// Two rules in the source share one id.
    #[error("duplicate rule id: {id}")]
    DuplicateRuleId {
        /// The id that appeared more than once.
        id: RuleId,
    },
}

/// Errors raised while seeding a fact base from a symptom selection.
#[derive(Debug, Error)]
pub enum InputError {
    /// A selected identifier never appears as a premise of any rule.
    ///
    /// Rejected rather than silently ignored so that equal selections
    /// always produce equal results.
    #[error("unknown symptom identifier: {identifier}")]
    UnknownIndicator {
        /// The identifier missing from the indicator universe.
        identifier: String,
    },
}

/// Top-level error type for agridiag.
#[derive(Debug, Error)]
pub enum DiagError {
    /// Rule-source load failure.
    #[error("load error: {0}")]
    Load(#[from] LoadError),

    /// Seeding-time input rejection.
    #[error("input error: {0}")]
    Input(#[from] InputError),
}

impl DiagError {
    /// Returns true if this is a rule-source load error.
    #[must_use]
    pub const fn is_load(&self) -> bool {
        matches!(self, Self::Load(_))
    }

    /// Returns true if this is a seeding-time input error.
    #[must_use]
    pub const fn is_input(&self) -> bool {
        matches!(self, Self::Input(_))
    }
}

/// Result type alias for agridiag operations.
pub type DiagResult<T> = Result<T, DiagError>;
