//! The per-run fact base.
//!
//! A fact base maps identifiers (symptoms and conclusions alike) to
//! certainty factors. It lives for exactly one diagnosis run: seeded
//! from the user's selection, mutated only by the inference engine,
//! read out by the conclusion extractor, then dropped.

use std::collections::btree_map::{self, BTreeMap};

use crate::certainty::Cf;

/// Ordered mapping from identifier to certainty factor.
///
/// Backed by a `BTreeMap` so that iteration order (and therefore the
/// ranking tie-break downstream) is deterministic by identifier.
#[derive(Debug, Clone, Default)]
pub struct FactBase {
    entries: BTreeMap<String, Cf>,
}

impl FactBase {
    /// Creates an empty fact base.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the base with selected symptoms, each at full confidence.
    pub fn seed<I, S>(&mut self, indicators: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for indicator in indicators {
            self.entries.insert(indicator.into(), Cf::ONE);
        }
    }

    /// Records new evidence for an identifier.
    ///
    /// If the identifier is already present the values are merged with
    /// [`Cf::combine`]; otherwise the value is inserted directly. An
    /// existing value is never plainly overwritten. Returns the stored
    /// certainty after the update.
    pub fn support(&mut self, identifier: impl Into<String>, cf: Cf) -> Cf {
        let entry = self
            .entries
            .entry(identifier.into())
            .and_modify(|existing| *existing = existing.combine(cf))
            .or_insert(cf);
        *entry
    }

    /// The certainty for an identifier, if known.
    #[must_use]
    pub fn get(&self, identifier: &str) -> Option<Cf> {
        self.entries.get(identifier).copied()
    }

    /// Whether the identifier is known.
    #[must_use]
    pub fn contains(&self, identifier: &str) -> bool {
        self.entries.contains_key(identifier)
    }

    /// Number of known facts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no facts are known.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates facts in identifier order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Cf)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

impl<'a> IntoIterator for &'a FactBase {
    type Item = (&'a String, &'a Cf);
    type IntoIter = btree_map::Iter<'a, String, Cf>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
