//! # agridiag - Certainty-factor diagnosis engine
//!
//! agridiag diagnoses a plant disease from a set of observed symptoms
//! using a forward-chaining rule engine under uncertainty, expressed
//! through Certainty Factors (CF). Callers select symptoms; the engine
//! derives weighted conclusions and ranks them by confidence.
//!
//! ## Core Concepts
//!
//! - **Cf**: a confidence value in `[0, 1]` with evidence-combination semantics
//! - **RuleStore**: the immutable, validated rule set loaded once at startup
//! - **FactBase**: the per-run mapping from identifier to confidence
//! - **DiagnosisReport**: ranked conclusions plus a one-sentence summary
//!
//! ## Usage
//!
//! ```rust,ignore
//! use agridiag::{Diagnoser, DiseaseCatalog, RuleStore};
//! use std::sync::Arc;
//!
//! let store = Arc::new(RuleStore::from_json_file("rules.json")?);
//! let catalog = Arc::new(DiseaseCatalog::default_catalog());
//! let diagnoser = Diagnoser::new(store, catalog);
//!
//! let report = diagnoser.diagnose(["leaves_wilting", "roots_dark"])?;
//! println!("{}", report.summary());
//! ```
//!
//! Each diagnosis run is stateless and owns its own fact base, so one
//! `Diagnoser` may be shared freely across threads without locking.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod catalog;
pub mod certainty;
pub mod diagnosis;
pub mod engine;
pub mod error;
pub mod facts;
pub mod rule;

// Re-export primary types at crate root for convenience
pub use catalog::{DiseaseCatalog, DiseaseInfo};
pub use certainty::{Cf, InvalidCf};
pub use diagnosis::{display_label, Diagnoser, Diagnosis, DiagnosisReport, NO_MATCH_SUMMARY};
pub use engine::{Firing, InferenceEngine, InferenceTrace};
pub use error::{DiagError, DiagResult, InputError, LoadError};
pub use facts::FactBase;
pub use rule::{Rule, RuleId, RuleRecord, RuleStore};
