//! Disease description and recommendation lookup.
//!
//! The catalog maps a conclusion's display label to explanatory text.
//! It is maintained outside the inference core; unrecognized labels
//! fall back to fixed default text so extraction never fails.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::LoadError;

/// Explanatory text for one disease.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiseaseInfo {
    /// What the disease is and what causes it.
    pub description: String,

    /// Recommended treatment or mitigation.
    pub recommendation: String,
}

/// Fallback description for labels missing from the catalog.
pub const DEFAULT_DESCRIPTION: &str = "Information not yet available.";

/// Fallback recommendation for labels missing from the catalog.
pub const DEFAULT_RECOMMENDATION: &str = "No recommendation available yet.";

/// Immutable label-to-info lookup, built once at startup.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DiseaseCatalog {
    entries: BTreeMap<String, DiseaseInfo>,
}

impl DiseaseCatalog {
    /// Creates an empty catalog; every lookup falls back to defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in pepper-plant disease catalog.
    #[must_use]
    pub fn default_catalog() -> Self {
        let mut catalog = Self::new();
        catalog.insert(
            "Root Rot",
            "Caused by the fungus Phytophthora capsici attacking the roots, wilting and killing the plant.",
            "Apply a metalaxyl-based fungicide, improve drainage, and keep moisture around the roots low.",
        );
        catalog.insert(
            "Foot Rot",
            "Caused by the fungus Fusarium oxysporum attacking the stem base and rotting its tissue.",
            "Uproot and destroy infected plants, use sterile soil, and add Trichoderma as a biological agent.",
        );
        catalog.insert(
            "Leaf Yellowing",
            "Leaves yellow from nitrogen deficiency or a nematode infection of the roots.",
            "Add nitrogen fertilizer, improve soil aeration, and rotate with a non-pepper crop.",
        );
        catalog.insert(
            "Stunted Curl",
            "Caused by a virus transmitted by aphids, curling the leaves and stunting the plant.",
            "Spray insecticide to control the vector and plant virus-free seedlings.",
        );
        catalog.insert(
            "Algal Rust",
            "An infestation of golden-green algae that slows the plant's growth.",
            "Reduce humidity, increase air circulation, and prune regularly.",
        );
        catalog
    }

    /// Parses a catalog from a JSON object of `label -> info` entries.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Json`] on malformed JSON.
    pub fn from_json_str(json: &str) -> Result<Self, LoadError> {
        let entries: BTreeMap<String, DiseaseInfo> = serde_json::from_str(json)?;
        Ok(Self { entries })
    }

    /// Reads a catalog from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Io`] if the file cannot be read, or
    /// [`LoadError::Json`] if it does not parse.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Adds or replaces an entry.
    pub fn insert(
        &mut self,
        label: impl Into<String>,
        description: impl Into<String>,
        recommendation: impl Into<String>,
    ) {
        self.entries.insert(
            label.into(),
            DiseaseInfo {
                description: description.into(),
                recommendation: recommendation.into(),
            },
        );
    }

    /// The info for a label, or the fixed fallback pair when absent.
    #[must_use]
    pub fn lookup(&self, label: &str) -> DiseaseInfo {
        self.entries.get(label).cloned().unwrap_or(DiseaseInfo {
            description: DEFAULT_DESCRIPTION.to_string(),
            recommendation: DEFAULT_RECOMMENDATION.to_string(),
        })
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
