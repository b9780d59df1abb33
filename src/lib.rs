//! Reconciles a design document's requirement model against an implementation
//! inventory and reports what is implemented, missing, deviating or undocumented.
//!
//! The matching is heuristic (fuzzy names, keyword coverage). A missed or spurious
//! match is the expected failure mode; the review itself never errors.

pub mod core;
pub mod error;
pub mod report;

pub use crate::core::classify::{reconcile, Reviewer};
pub use crate::core::config::MatchConfig;
pub use crate::core::findings::{
    AnalysisNote, Discrepancy, DiscrepancyKind, FeatureDetail, ImplementedFeature, MethodMatch, MissingFeature,
    NoteKind, ReviewResult, ReviewSummary,
};
pub use crate::core::model::{ImplementationModel, RequirementModel};
pub use crate::core::types::{ContainerKind, EntityImplKind, FeatureKind, Severity};
pub use crate::error::{Result, ReviewError};
