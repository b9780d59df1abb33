// serialized review output. the result is only read here, never changed.
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use serde::Serialize;
use tracing::info;

use crate::core::findings::{AnalysisNote, Discrepancy, ImplementedFeature, MissingFeature, ReviewResult, ReviewSummary};
use crate::core::types::Severity;
use crate::error::{Result, ReviewError};

mod load;

pub use load::{load_config, load_implementation_model, load_requirement_model};

/// The report document: counts first, then the four collections.
#[derive(Debug, Serialize)]
pub struct ReviewReport<'a> {
    pub review_summary: ReviewSummary,
    pub discrepancies: &'a [Discrepancy],
    pub implemented_features: &'a [ImplementedFeature],
    pub missing_features: &'a [MissingFeature],
    pub analysis_notes: &'a [AnalysisNote],
}

impl<'a> From<&'a ReviewResult> for ReviewReport<'a> {
    fn from(r: &'a ReviewResult) -> Self {
        Self {
            review_summary: r.summary(),
            discrepancies: &r.discrepancies,
            implemented_features: &r.implemented_features,
            missing_features: &r.missing_features,
            analysis_notes: &r.analysis_notes,
        }
    }
}

pub fn to_json_string(result: &ReviewResult) -> Result<String> {
    Ok(serde_json::to_string_pretty(&ReviewReport::from(result))?)
}

pub fn write_json(result: &ReviewResult, path: &Path) -> Result<()> {
    let json = to_json_string(result)?;
    fs::write(path, json).map_err(|source| ReviewError::Io { path: path.to_path_buf(), source })?;
    info!(path = %path.display(), "report written");
    Ok(())
}

/// Short plain-text digest of a result, for terminals.
pub fn render_summary(result: &ReviewResult) -> String {
    let s = result.summary();
    let by = |sev: Severity| result.discrepancies.iter().filter(|d| d.severity == sev).count();

    let mut out = String::new();
    let _ = writeln!(out, "review summary");
    let _ = writeln!(
        out,
        "  discrepancies:        {} (high {}, medium {}, low {})",
        s.total_discrepancies,
        by(Severity::High),
        by(Severity::Medium),
        by(Severity::Low)
    );
    let _ = writeln!(out, "  implemented features: {}", s.total_implemented_features);
    let _ = writeln!(out, "  missing features:     {}", s.total_missing_features);
    let _ = writeln!(out, "  analysis notes:       {}", s.total_analysis_notes);
    out
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};

    use super::*;
    use crate::core::findings::{DiscrepancyKind, NoteKind};

    fn sample() -> ReviewResult {
        let mut r = ReviewResult::default();
        r.push_discrepancy(
            DiscrepancyKind::MissingEntity { entity_name: "Vendor".into(), description: "suppliers".into() },
            50,
        );
        r.analysis_notes.push(AnalysisNote {
            kind: NoteKind::ExtraEntity,
            subject_name: "AuditLog".into(),
            extra_info: "class".into(),
            note: "Class exists in implementation but not in design document".into(),
        });
        r
    }

    #[test]
    fn report_has_summary_and_four_collections() {
        let v: Value = serde_json::from_str(&to_json_string(&sample()).unwrap()).unwrap();

        assert_eq!(
            v["review_summary"],
            json!({
                "total_discrepancies": 1,
                "total_implemented_features": 0,
                "total_missing_features": 1,
                "total_analysis_notes": 1
            })
        );
        assert_eq!(v["discrepancies"][0]["kind"], "MissingEntity");
        assert_eq!(v["discrepancies"][0]["severity"], "High");
        assert_eq!(v["missing_features"][0], json!({"kind": "entity", "name": "Vendor", "description": "suppliers"}));
        assert_eq!(v["analysis_notes"][0]["kind"], "extra_entity");
        assert_eq!(v["implemented_features"], json!([]));
    }

    #[test]
    fn write_json_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");
        write_json(&sample(), &path).unwrap();
        let v: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(v["review_summary"]["total_discrepancies"], 1);
    }

    #[test]
    fn summary_text_counts_by_severity() {
        let text = render_summary(&sample());
        assert!(text.contains("discrepancies:        1 (high 1, medium 0, low 0)"));
        assert!(text.contains("analysis notes:       1"));
    }
}
