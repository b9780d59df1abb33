// function pass: required functions <-> flattened implementation methods
use std::collections::HashSet;
use std::sync::LazyLock;

use tracing::trace;

use crate::core::classify::Reviewer;
use crate::core::findings::{AnalysisNote, DiscrepancyKind, FeatureDetail, ImplementedFeature, NoteKind, ReviewResult};
use crate::core::model::ImplMethod;

//lifecycle/framework methods every unit has; never reported as undocumented
static STANDARD_METHODS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "new", "run", "main", "construct", "delete", "insert", "update", "find", "getfromid",
        "init", "pack", "unpack", "validate", "cansubmit", "executequery", "fetchnext", "next",
        "first", "last", "reread", "research", "forupdate", "fieldsort", "exists", "getchanges",
        "getfieldname", "getfieldtype", "getindexname", "getprimarykey", "getrecordid",
        "settableid", "skipdeleted", "crosscompany", "setcompany", "gettableinfo",
    ]
    .into_iter()
    .collect()
});

pub fn is_standard_method(name: &str) -> bool {
    STANDARD_METHODS.contains(name.to_lowercase().as_str())
}

impl Reviewer {
    //first method (flattened model order) whose name matches
    pub fn find_method(&self, function_name: &str) -> Option<&ImplMethod> {
        self.implementation
            .methods
            .iter()
            .find(|m| self.names.matches(&m.name, function_name))
    }

    pub(crate) fn review_functions(&self) -> ReviewResult {
        let mut acc = ReviewResult::default();
        let required = &self.requirements.functions;

        for function in required {
            let Some(method) = self.find_method(&function.name) else {
                acc.push_discrepancy(
                    DiscrepancyKind::MissingFunction {
                        function_name: function.name.clone(),
                        parameters: function.parameters.clone(),
                        description: function.description.clone(),
                    },
                    self.config.requirement_name_len,
                );
                continue;
            };

            trace!(function = %function.name, method = %method.name, "function implemented");
            acc.implemented_features.push(ImplementedFeature {
                name: function.name.clone(),
                detail: FeatureDetail::Function {
                    implementation_name: method.name.clone(),
                    container: method.container.clone(),
                },
            });

            //found, but the signature may still disagree
            let expected = function.parameters.trim();
            let actual = method.parameters.trim();
            if !expected.is_empty() && !actual.is_empty() && !self.params.compatible(expected, actual) {
                acc.push_discrepancy(
                    DiscrepancyKind::ParameterMismatch {
                        function_name: function.name.clone(),
                        expected_params: function.parameters.clone(),
                        actual_params: method.parameters.clone(),
                    },
                    self.config.requirement_name_len,
                );
            }
        }

        for method in &self.implementation.methods {
            if is_standard_method(&method.name) {
                continue;
            }
            if required.iter().any(|f| self.names.matches(&method.name, &f.name)) {
                continue;
            }

            let container_info = method
                .container
                .as_ref()
                .map(|c| format!(" in {}", c.describe()))
                .unwrap_or_default();

            acc.analysis_notes.push(AnalysisNote {
                kind: NoteKind::ExtraFunction,
                subject_name: method.name.clone(),
                note: format!("Method exists in implementation{container_info} but not in design document"),
                extra_info: container_info,
            });
        }

        acc
    }
}
