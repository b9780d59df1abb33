// review orchestration
use tracing::{debug, info, warn};

use crate::core::config::MatchConfig;
use crate::core::findings::{ReviewResult, ReviewSummary};
use crate::core::keywords::KeywordScorer;
use crate::core::model::{ImplementationModel, RequirementModel};
use crate::core::names::NameMatcher;
use crate::core::params::ParameterChecker;

/// Reconciles a design's requirement model against an implementation inventory.
///
/// Both models are read-only for the reviewer's whole life. `review` runs four independent
/// passes (entities, functions, requirements, extensions); each pass fills its own
/// accumulator which is merged into `result` once the pass is done.
#[derive(Debug, Clone)]
pub struct Reviewer {
    pub(crate) requirements: RequirementModel,
    pub(crate) implementation: ImplementationModel,
    pub(crate) config: MatchConfig,
    pub(crate) names: NameMatcher,
    pub(crate) params: ParameterChecker,
    pub(crate) keywords: KeywordScorer,
    result: ReviewResult,
}

impl Reviewer {
    pub fn new(requirements: RequirementModel, implementation: ImplementationModel) -> Self {
        Self::with_config(requirements, implementation, MatchConfig::default())
    }

    pub fn with_config(
        requirements: RequirementModel,
        implementation: ImplementationModel,
        config: MatchConfig,
    ) -> Self {
        Self {
            names: NameMatcher::new(&config),
            params: ParameterChecker::new(&config),
            keywords: KeywordScorer::new(&config),
            requirements,
            implementation,
            config,
            result: ReviewResult::default(),
        }
    }

    //Run a full review from scratch:
    // - drops whatever a previous run produced
    // - runs the four passes, each into a private accumulator
    // - appends each accumulator to the shared result
    pub fn review(&mut self) -> &ReviewResult {
        //a re-run must not stack on top of stale findings
        self.result.clear();

        let req_items = self.requirements.item_count();
        let impl_units = self.implementation.unit_count();
        info!(req_items, impl_units, "starting review");

        if req_items > self.config.large_model_warning || impl_units > self.config.large_model_warning {
            warn!(
                req_items,
                impl_units,
                limit = self.config.large_model_warning,
                "large model: pairwise name matching is quadratic and may be slow"
            );
        }

        let passes: [(&str, fn(&Reviewer) -> ReviewResult); 4] = [
            ("entities", Reviewer::review_entities),
            ("functions", Reviewer::review_functions),
            ("requirements", Reviewer::review_requirements),
            ("extensions", Reviewer::review_extensions),
        ];

        for (pass, run) in passes {
            let acc = run(self);
            let s = acc.summary();
            debug!(
                pass,
                discrepancies = s.total_discrepancies,
                implemented = s.total_implemented_features,
                notes = s.total_analysis_notes,
                "pass finished"
            );
            self.result.append(acc);
        }

        let s = self.result.summary();
        info!(
            discrepancies = s.total_discrepancies,
            implemented = s.total_implemented_features,
            missing = s.total_missing_features,
            notes = s.total_analysis_notes,
            "review finished"
        );

        &self.result
    }

    pub fn requirements(&self) -> &RequirementModel {
        &self.requirements
    }

    pub fn implementation(&self) -> &ImplementationModel {
        &self.implementation
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    pub fn result(&self) -> &ReviewResult {
        &self.result
    }

    pub fn into_result(self) -> ReviewResult {
        self.result
    }

    pub fn summary(&self) -> ReviewSummary {
        self.result.summary()
    }
}

/// One-shot review with the given thresholds.
pub fn reconcile(
    requirements: RequirementModel,
    implementation: ImplementationModel,
    config: MatchConfig,
) -> ReviewResult {
    let mut r = Reviewer::with_config(requirements, implementation, config);
    r.review();
    r.into_result()
}
