// requirement pass: free-text requirements <-> method bodies, by keyword coverage
use tracing::{debug, trace};

use crate::core::classify::Reviewer;
use crate::core::findings::{
    truncate_name, DiscrepancyKind, FeatureDetail, ImplementedFeature, MethodMatch, ReviewResult,
};
use crate::core::keywords::extract_keywords;

impl Reviewer {
    /// Methods whose body covers `keywords`, best score first, capped at
    /// `max_requirement_matches`. Ties keep model order.
    pub fn covering_methods(&self, keywords: &[String]) -> Vec<MethodMatch> {
        let mut found: Vec<MethodMatch> = self
            .implementation
            .methods
            .iter()
            .filter(|m| !m.body.trim().is_empty())
            .filter_map(|m| {
                let coverage = self.keywords.score(keywords, &m.body);
                if !self.keywords.is_match(keywords, coverage) {
                    return None;
                }
                trace!(method = %m.name, hits = coverage.hits, "method covers requirement");
                Some(MethodMatch {
                    unit_name: m.name.clone(),
                    container_description: m.container.as_ref().map(|c| c.describe()).unwrap_or_default(),
                    score: coverage.score,
                })
            })
            .collect();

        //sort_by is stable, so equal scores stay in model order
        found.sort_by(|a, b| b.score.total_cmp(&a.score));
        found.truncate(self.config.max_requirement_matches);
        found
    }

    pub(crate) fn review_requirements(&self) -> ReviewResult {
        let mut acc = ReviewResult::default();

        for req in &self.requirements.requirements {
            let keywords = extract_keywords(req);
            if keywords.is_empty() {
                debug!(requirement = %req, "no salient keywords, skipped");
                continue;
            }

            let matches = self.covering_methods(&keywords);
            if matches.is_empty() {
                acc.push_discrepancy(
                    DiscrepancyKind::UnimplementedRequirement { requirement: req.clone(), keywords },
                    self.config.requirement_name_len,
                );
            } else {
                acc.implemented_features.push(ImplementedFeature {
                    name: truncate_name(req, self.config.requirement_name_len),
                    detail: FeatureDetail::Requirement { matches },
                });
            }
        }

        acc
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::core::classify::Reviewer;
    use crate::core::findings::{DiscrepancyKind, ReviewSummary};
    use crate::core::model::{ImplMethod, ImplementationModel, RequirementModel};
    use crate::core::types::{ContainerKind, FeatureKind, Severity};

    fn mk_reviewer(requirements: &[&str], methods: Vec<ImplMethod>) -> Reviewer {
        let req = RequirementModel {
            requirements: requirements.iter().map(|r| r.to_string()).collect(),
            ..Default::default()
        };
        let imp = ImplementationModel { methods, ..Default::default() };
        Reviewer::new(req, imp)
    }

    #[test]
    fn covered_requirement_lists_best_matches_first() {
        let r = mk_reviewer(
            &["Check customer credit limit"],
            vec![
                ImplMethod::new("logCustomer", "", "info(customer.name, limit);").in_container(ContainerKind::Class, "Log"),
                ImplMethod::new("checkCredit", "", "check: if (customer.credit > limit) throw;")
                    .in_container(ContainerKind::Table, "CustTable"),
                ImplMethod::new("noBody", "", ""),
            ],
        );
        let acc = r.review_requirements();

        assert_eq!(acc.implemented_features.len(), 1);
        let f = &acc.implemented_features[0];
        assert_eq!(f.kind(), FeatureKind::Requirement);
        assert_eq!(f.name, "Check customer credit limit");

        let got: Vec<(&str, &str)> = f
            .matches()
            .iter()
            .map(|m| (m.unit_name.as_str(), m.container_description.as_str()))
            .collect();
        assert_eq!(got, vec![("checkCredit", "table CustTable"), ("logCustomer", "class Log")]);
        assert_eq!(f.matches()[0].score, 1.0);
        assert!(acc.discrepancies.is_empty());
    }

    #[test]
    fn matches_are_capped() {
        let methods = (0..5).map(|i| ImplMethod::new(format!("m{i}"), "", "posting journal")).collect();
        let r = mk_reviewer(&["Posting journal"], methods);
        let acc = r.review_requirements();

        let names: Vec<&str> = acc.implemented_features[0].matches().iter().map(|m| m.unit_name.as_str()).collect();
        assert_eq!(names, vec!["m0", "m1", "m2"]);
    }

    #[test]
    fn uncovered_requirement_is_medium_discrepancy_with_keywords() {
        let r = mk_reviewer(&["Archive vendor invoices nightly"], vec![ImplMethod::new("calc", "", "return 1;")]);
        let acc = r.review_requirements();

        assert_eq!(acc.discrepancies.len(), 1);
        assert_eq!(acc.discrepancies[0].severity, Severity::Medium);
        assert_eq!(
            acc.discrepancies[0].kind,
            DiscrepancyKind::UnimplementedRequirement {
                requirement: "Archive vendor invoices nightly".to_string(),
                keywords: vec!["archive", "vendor", "invoices", "nightly"].into_iter().map(String::from).collect(),
            }
        );
        assert_eq!(acc.missing_features.len(), 1);
        assert_eq!(acc.missing_features[0].description, "Archive vendor invoices nightly");
    }

    #[test]
    fn keywordless_requirement_is_skipped() {
        let r = mk_reviewer(&["", "It is to be set."], vec![ImplMethod::new("calc", "", "return 1;")]);
        let acc = r.review_requirements();
        assert_eq!(acc.summary(), ReviewSummary::default());
    }

    #[test]
    fn long_requirement_name_is_truncated() {
        let text = "The posting routine must reconcile every ledger journal line against the bank statement";
        let r = mk_reviewer(&[text], vec![ImplMethod::new("post", "", "posting routine reconcile ledger journal line")]);
        let acc = r.review_requirements();

        let name = &acc.implemented_features[0].name;
        assert!(name.ends_with("..."));
        assert_eq!(name.chars().count(), 53);
        assert!(text.starts_with(name.trim_end_matches("...")));
    }
}
