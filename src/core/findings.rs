// what a review produces: discrepancies, implemented features, missing features, notes
use serde::{Serialize, Serializer};

use crate::core::model::MethodContainer;
use crate::core::types::{ContainerKind, EntityImplKind, FeatureKind, Severity};

/// One way a required item is absent or imperfect in the implementation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind")]
pub enum DiscrepancyKind {
    MissingEntity {
        entity_name: String,
        description: String,
    },
    MissingFunction {
        function_name: String,
        parameters: String,
        description: String,
    },
    ParameterMismatch {
        function_name: String,
        expected_params: String,
        actual_params: String,
    },
    UnimplementedRequirement {
        requirement: String,
        keywords: Vec<String>,
    },
    MissingExtension {
        extension_type: String,
        base_name: String,
        description: String,
    },
}

impl DiscrepancyKind {
    pub fn severity(&self) -> Severity {
        match self {
            DiscrepancyKind::MissingEntity { .. } | DiscrepancyKind::MissingFunction { .. } => Severity::High,
            DiscrepancyKind::ParameterMismatch { .. }
            | DiscrepancyKind::UnimplementedRequirement { .. }
            | DiscrepancyKind::MissingExtension { .. } => Severity::Medium,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Discrepancy {
    #[serde(flatten)]
    pub kind: DiscrepancyKind,
    pub severity: Severity,
}

impl Discrepancy {
    //severity follows the kind, callers never pick it
    pub fn new(kind: DiscrepancyKind) -> Self {
        let severity = kind.severity();
        Self { kind, severity }
    }

    /// The reporting view of this discrepancy. Parameter mismatches are found features,
    /// so they have none.
    pub fn missing_feature(&self, requirement_name_len: usize) -> Option<MissingFeature> {
        let mf = match &self.kind {
            DiscrepancyKind::MissingEntity { entity_name, description } => MissingFeature {
                kind: FeatureKind::Entity,
                name: entity_name.clone(),
                description: description.clone(),
                keywords: Vec::new(),
            },
            DiscrepancyKind::MissingFunction { function_name, description, .. } => MissingFeature {
                kind: FeatureKind::Function,
                name: function_name.clone(),
                description: description.clone(),
                keywords: Vec::new(),
            },
            DiscrepancyKind::ParameterMismatch { .. } => return None,
            DiscrepancyKind::UnimplementedRequirement { requirement, keywords } => MissingFeature {
                kind: FeatureKind::Requirement,
                name: truncate_name(requirement, requirement_name_len),
                description: requirement.clone(),
                keywords: keywords.clone(),
            },
            DiscrepancyKind::MissingExtension { base_name, description, .. } => MissingFeature {
                kind: FeatureKind::Extension,
                name: base_name.clone(),
                description: description.clone(),
                keywords: Vec::new(),
            },
        };
        Some(mf)
    }
}

/// A method whose body covers a requirement's keywords.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MethodMatch {
    pub unit_name: String,
    //"class SalesCalc", empty when the container is unknown
    pub container_description: String,
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FeatureDetail {
    Entity {
        implementation_kind: EntityImplKind,
        implementation_name: String,
    },
    Function {
        implementation_name: String,
        container: Option<MethodContainer>,
    },
    Requirement {
        matches: Vec<MethodMatch>,
    },
    Extension {
        implementation_name: String,
    },
}

/// A required item that has an implementation counterpart.
#[derive(Debug, Clone, PartialEq)]
pub struct ImplementedFeature {
    pub name: String,
    pub detail: FeatureDetail,
}

impl ImplementedFeature {
    pub fn kind(&self) -> FeatureKind {
        match self.detail {
            FeatureDetail::Entity { .. } => FeatureKind::Entity,
            FeatureDetail::Function { .. } => FeatureKind::Function,
            FeatureDetail::Requirement { .. } => FeatureKind::Requirement,
            FeatureDetail::Extension { .. } => FeatureKind::Extension,
        }
    }

    pub fn implementation_kind(&self) -> &'static str {
        match &self.detail {
            FeatureDetail::Entity { implementation_kind, .. } => implementation_kind.as_str(),
            FeatureDetail::Function { .. } => "method",
            FeatureDetail::Requirement { .. } => "code",
            FeatureDetail::Extension { .. } => "extension",
        }
    }

    pub fn implementation_name(&self) -> Option<&str> {
        match &self.detail {
            FeatureDetail::Entity { implementation_name, .. }
            | FeatureDetail::Function { implementation_name, .. }
            | FeatureDetail::Extension { implementation_name } => Some(implementation_name.as_str()),
            FeatureDetail::Requirement { .. } => None,
        }
    }

    pub fn container(&self) -> Option<&MethodContainer> {
        match &self.detail {
            FeatureDetail::Function { container, .. } => container.as_ref(),
            _ => None,
        }
    }

    pub fn matches(&self) -> &[MethodMatch] {
        match &self.detail {
            FeatureDetail::Requirement { matches } => matches,
            _ => &[],
        }
    }
}

//flat wire shape: fields a kind does not have are left out, an unknown function
//container is written as null so readers can tell "absent" from "not applicable"
#[derive(Serialize)]
struct FeatureRecord<'a> {
    kind: FeatureKind,
    name: &'a str,
    implementation_kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    implementation_name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    container_kind: Option<Option<ContainerKind>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    container_name: Option<Option<&'a str>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    matches: Option<&'a [MethodMatch]>,
}

impl Serialize for ImplementedFeature {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let is_function = matches!(self.detail, FeatureDetail::Function { .. });
        let is_requirement = matches!(self.detail, FeatureDetail::Requirement { .. });
        let container = self.container();

        FeatureRecord {
            kind: self.kind(),
            name: &self.name,
            implementation_kind: self.implementation_kind(),
            implementation_name: self.implementation_name(),
            container_kind: is_function.then(|| container.map(|c| c.kind)),
            container_name: is_function.then(|| container.map(|c| c.name.as_str())),
            matches: is_requirement.then(|| self.matches()),
        }
        .serialize(serializer)
    }
}

/// Denormalized view of a missing-item discrepancy for reporting.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MissingFeature {
    pub kind: FeatureKind,
    pub name: String,
    pub description: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoteKind {
    ExtraEntity,
    ExtraFunction,
    ExtraExtension,
}

/// An implementation unit nothing in the design asks for.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisNote {
    pub kind: NoteKind,
    pub subject_name: String,
    pub extra_info: String,
    pub note: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ReviewSummary {
    pub total_discrepancies: usize,
    pub total_implemented_features: usize,
    pub total_missing_features: usize,
    pub total_analysis_notes: usize,
}

/// The four collections one review run fills.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ReviewResult {
    pub discrepancies: Vec<Discrepancy>,
    pub implemented_features: Vec<ImplementedFeature>,
    pub missing_features: Vec<MissingFeature>,
    pub analysis_notes: Vec<AnalysisNote>,
}

impl ReviewResult {
    pub fn summary(&self) -> ReviewSummary {
        ReviewSummary {
            total_discrepancies: self.discrepancies.len(),
            total_implemented_features: self.implemented_features.len(),
            total_missing_features: self.missing_features.len(),
            total_analysis_notes: self.analysis_notes.len(),
        }
    }

    pub fn clear(&mut self) {
        self.discrepancies.clear();
        self.implemented_features.clear();
        self.missing_features.clear();
        self.analysis_notes.clear();
    }

    //merge one pass's private accumulator into the shared result
    pub fn append(&mut self, mut other: ReviewResult) {
        self.discrepancies.append(&mut other.discrepancies);
        self.implemented_features.append(&mut other.implemented_features);
        self.missing_features.append(&mut other.missing_features);
        self.analysis_notes.append(&mut other.analysis_notes);
    }

    /// Record a discrepancy and, when it is a missing item, its reporting view.
    pub fn push_discrepancy(&mut self, kind: DiscrepancyKind, requirement_name_len: usize) {
        let d = Discrepancy::new(kind);
        if let Some(mf) = d.missing_feature(requirement_name_len) {
            self.missing_features.push(mf);
        }
        self.discrepancies.push(d);
    }
}

/// First `max_len` chars of `text`, with "..." appended when anything was cut.
pub fn truncate_name(text: &str, max_len: usize) -> String {
    match text.char_indices().nth(max_len) {
        None => text.to_string(),
        Some((cut, _)) => format!("{}...", &text[..cut]),
    }
}
