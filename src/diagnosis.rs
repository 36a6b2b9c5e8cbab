//! Conclusion extraction and the diagnosis response.
//!
//! After inference reaches its fixpoint, the fact base holds both the
//! original symptoms and the derived conclusions. The extractor keeps
//! only the conclusions (anything outside the indicator universe),
//! ranks them by confidence, attaches catalog text, and builds the
//! one-sentence summary for the presentation layer.

use std::sync::Arc;

use serde::Serialize;

use crate::catalog::DiseaseCatalog;
use crate::engine::InferenceEngine;
use crate::error::InputError;
use crate::facts::FactBase;
use crate::rule::RuleStore;

/// Summary sentence used when no conclusion was derived.
pub const NO_MATCH_SUMMARY: &str =
    "No matching disease was found for the selected symptoms.";

/// Turns an internal identifier into a display label:
/// underscores become spaces, each word is title-cased.
///
/// `"root_rot"` becomes `"Root Rot"`.
#[must_use]
pub fn display_label(identifier: &str) -> String {
    identifier
        .split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// One ranked diagnostic conclusion.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagnosis {
    /// Display label of the disease.
    pub label: String,

    /// Confidence as a percentage in `[0.0, 100.0]`.
    pub confidence: f32,

    /// Catalog description (or the fallback text).
    pub description: String,

    /// Catalog recommendation (or the fallback text).
    pub recommendation: String,
}

/// Selects and ranks the diagnostic conclusions from a final fact base.
///
/// Every key outside the store's indicator universe is a conclusion.
/// Sorted descending by confidence; ties keep identifier order, which
/// is deterministic because the fact base iterates in key order.
#[must_use]
pub fn extract(
    facts: &FactBase,
    store: &RuleStore,
    catalog: &DiseaseCatalog,
) -> Vec<Diagnosis> {
    let mut diagnoses: Vec<Diagnosis> = facts
        .iter()
        .filter(|(identifier, _)| !store.is_indicator(identifier))
        .map(|(identifier, cf)| {
            let label = display_label(identifier);
            let info = catalog.lookup(&label);
            Diagnosis {
                label,
                confidence: cf.as_percent(),
                description: info.description,
                recommendation: info.recommendation,
            }
        })
        .collect();
    diagnoses.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));
    diagnoses
}

/// The complete response of one diagnosis run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiagnosisReport {
    diagnoses: Vec<Diagnosis>,
    summary: String,
}

impl DiagnosisReport {
    /// Builds a report from extracted diagnoses.
    #[must_use]
    pub fn new(diagnoses: Vec<Diagnosis>) -> Self {
        let summary = diagnoses.first().map_or_else(
            || NO_MATCH_SUMMARY.to_string(),
            |top| {
                format!(
                    "Based on the selected symptoms, the plant most likely suffers \
                     from {} with a confidence of {:.1}%. {} Recommended action: {}",
                    top.label, top.confidence, top.description, top.recommendation
                )
            },
        );
        Self { diagnoses, summary }
    }

    /// Ranked diagnoses, highest confidence first.
    #[must_use]
    pub fn diagnoses(&self) -> &[Diagnosis] {
        &self.diagnoses
    }

    /// The highest-ranked diagnosis, if any conclusion was derived.
    #[must_use]
    pub fn top(&self) -> Option<&Diagnosis> {
        self.diagnoses.first()
    }

    /// Whether no conclusion was derived.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.diagnoses.is_empty()
    }

    /// Natural-language summary of the top conclusion, or the fixed
    /// no-match sentence.
    #[must_use]
    pub fn summary(&self) -> &str {
        &self.summary
    }

    /// Labels for charting, in rank order.
    #[must_use]
    pub fn chart_labels(&self) -> Vec<String> {
        self.diagnoses.iter().map(|d| d.label.clone()).collect()
    }

    /// Confidence percentages for charting, rounded to one decimal.
    #[must_use]
    pub fn chart_values(&self) -> Vec<f32> {
        self.diagnoses
            .iter()
            .map(|d| (d.confidence * 10.0).round() / 10.0)
            .collect()
    }
}

/// Facade tying a shared rule store and catalog to per-run inference.
///
/// Stateless per invocation: each call to [`diagnose`](Self::diagnose)
/// seeds a fresh fact base, runs to fixpoint, and extracts a
/// self-contained report. Clone freely across threads.
#[derive(Debug, Clone)]
pub struct Diagnoser {
    store: Arc<RuleStore>,
    catalog: Arc<DiseaseCatalog>,
}

impl Diagnoser {
    /// Creates a diagnoser over loaded configuration.
    #[must_use]
    pub fn new(store: Arc<RuleStore>, catalog: Arc<DiseaseCatalog>) -> Self {
        Self { store, catalog }
    }

    /// The shared rule store.
    #[must_use]
    pub fn store(&self) -> &RuleStore {
        &self.store
    }

    /// Runs one full diagnosis: seed, infer to fixpoint, extract.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::UnknownIndicator`] if the selection names
    /// an identifier outside the indicator universe.
    pub fn diagnose<I, S>(&self, selected: I) -> Result<DiagnosisReport, InputError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let engine = InferenceEngine::new(&self.store);
        let mut facts = engine.seed(selected)?;
        engine.run(&mut facts);
        let diagnoses = extract(&facts, &self.store, &self.catalog);
        Ok(DiagnosisReport::new(diagnoses))
    }
}
