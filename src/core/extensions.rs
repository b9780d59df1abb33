// extension pass: required extensions <-> implementation extensions, matched on the extended unit
use tracing::trace;

use crate::core::classify::Reviewer;
use crate::core::findings::{AnalysisNote, DiscrepancyKind, FeatureDetail, ImplementedFeature, NoteKind, ReviewResult};
use crate::core::model::ImplExtension;

impl Reviewer {
    pub fn find_extension(&self, base_name: &str) -> Option<&ImplExtension> {
        self.implementation
            .extensions
            .iter()
            .find(|x| self.names.matches(&x.extends_name, base_name))
    }

    pub(crate) fn review_extensions(&self) -> ReviewResult {
        let mut acc = ReviewResult::default();
        let required = &self.requirements.extensions;

        for ext in required {
            match self.find_extension(&ext.base_name) {
                Some(found) => {
                    trace!(base = %ext.base_name, extension = %found.name, "extension implemented");
                    acc.implemented_features.push(ImplementedFeature {
                        name: found.name.clone(),
                        detail: FeatureDetail::Extension {
                            implementation_name: format!("extends {}", found.extends_name),
                        },
                    });
                }
                None => acc.push_discrepancy(
                    DiscrepancyKind::MissingExtension {
                        extension_type: ext.extension_type.clone(),
                        base_name: ext.base_name.clone(),
                        description: ext.description.clone(),
                    },
                    self.config.requirement_name_len,
                ),
            }
        }

        for x in &self.implementation.extensions {
            if required.iter().any(|e| self.names.matches(&x.extends_name, &e.base_name)) {
                continue;
            }
            acc.analysis_notes.push(AnalysisNote {
                kind: NoteKind::ExtraExtension,
                subject_name: x.name.clone(),
                extra_info: x.extends_name.clone(),
                note: format!("Extension of {} exists in implementation but not in design document", x.extends_name),
            });
        }

        acc
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::core::classify::Reviewer;
    use crate::core::findings::{DiscrepancyKind, FeatureDetail, NoteKind};
    use crate::core::model::{ImplExtension, ImplementationModel, RequiredExtension, RequirementModel};
    use crate::core::types::{FeatureKind, Severity};

    fn mk_req(base: &str) -> RequiredExtension {
        RequiredExtension {
            extension_type: "table".to_string(),
            base_name: base.to_string(),
            description: format!("extend {base}"),
        }
    }

    fn mk_ext(name: &str, extends: &str) -> ImplExtension {
        ImplExtension { name: name.to_string(), extends_name: extends.to_string(), methods: vec![] }
    }

    fn mk_reviewer(required: Vec<RequiredExtension>, found: Vec<ImplExtension>) -> Reviewer {
        let req = RequirementModel { extensions: required, ..Default::default() };
        let imp = ImplementationModel { extensions: found, ..Default::default() };
        Reviewer::new(req, imp)
    }

    #[test]
    fn extension_is_matched_on_extended_unit() {
        let r = mk_reviewer(vec![mk_req("CustTable")], vec![mk_ext("CUS_CustTable_Extension", "CustTable")]);
        let acc = r.review_extensions();

        assert_eq!(acc.implemented_features.len(), 1);
        let f = &acc.implemented_features[0];
        assert_eq!(f.kind(), FeatureKind::Extension);
        assert_eq!(f.name, "CUS_CustTable_Extension");
        assert_eq!(
            f.detail,
            FeatureDetail::Extension { implementation_name: "extends CustTable".to_string() }
        );
        assert!(acc.analysis_notes.is_empty());
    }

    #[test]
    fn missing_extension_is_medium() {
        let r = mk_reviewer(vec![mk_req("VendTable")], vec![mk_ext("SalesLine_Ext", "SalesLine")]);
        let acc = r.review_extensions();

        assert_eq!(acc.discrepancies.len(), 1);
        assert_eq!(acc.discrepancies[0].severity, Severity::Medium);
        assert!(matches!(
            &acc.discrepancies[0].kind,
            DiscrepancyKind::MissingExtension { base_name, .. } if base_name == "VendTable"
        ));
        assert_eq!(acc.missing_features[0].name, "VendTable");

        assert_eq!(acc.analysis_notes.len(), 1);
        assert_eq!(acc.analysis_notes[0].kind, NoteKind::ExtraExtension);
        assert_eq!(acc.analysis_notes[0].subject_name, "SalesLine_Ext");
        assert_eq!(
            acc.analysis_notes[0].note,
            "Extension of SalesLine exists in implementation but not in design document"
        );
    }
}
