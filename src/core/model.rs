// the two input models handed to the reviewer by the ingestion side
//
// both are built once and then only read. serde derives exist so the boundary
// (report::load_*) can read them from the JSON the extractors emit.
use serde::{Deserialize, Serialize};

use crate::core::types::ContainerKind;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RequiredEntity {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RequiredFunction {
    pub name: String,
    pub parameters: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RequiredExtension {
    pub extension_type: String,
    pub base_name: String,
    pub description: String,
}

/// Everything the design document asks for.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RequirementModel {
    pub entities: Vec<RequiredEntity>,
    pub functions: Vec<RequiredFunction>,
    pub extensions: Vec<RequiredExtension>,
    pub requirements: Vec<String>,
}

impl RequirementModel {
    pub fn item_count(&self) -> usize {
        self.entities.len() + self.functions.len() + self.extensions.len() + self.requirements.len()
    }
}

/// The unit a method was declared in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodContainer {
    pub kind: ContainerKind,
    pub name: String,
}

impl MethodContainer {
    pub fn new(kind: ContainerKind, name: impl Into<String>) -> Self {
        Self { kind, name: name.into() }
    }

    //"class SalesCalc"
    pub fn describe(&self) -> String {
        format!("{} {}", self.kind, self.name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImplMethod {
    pub name: String,
    pub parameters: String,
    pub body: String,
    pub return_type: String,
    //None when the extractor could not tell where the method lives
    pub container: Option<MethodContainer>,
}

impl ImplMethod {
    pub fn new(name: impl Into<String>, parameters: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parameters: parameters.into(),
            body: body.into(),
            ..Self::default()
        }
    }

    pub fn in_container(mut self, kind: ContainerKind, name: impl Into<String>) -> Self {
        self.container = Some(MethodContainer::new(kind, name));
        self
    }

    pub fn container_kind(&self) -> Option<ContainerKind> {
        self.container.as_ref().map(|c| c.kind)
    }

    pub fn container_name(&self) -> Option<&str> {
        self.container.as_ref().map(|c| c.name.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImplClass {
    pub name: String,
    pub methods: Vec<ImplMethod>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImplField {
    pub name: String,
    pub field_type: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImplTable {
    pub name: String,
    pub fields: Vec<ImplField>,
    pub methods: Vec<ImplMethod>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImplExtension {
    pub name: String,
    pub extends_name: String,
    pub methods: Vec<ImplMethod>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImplForm {
    pub name: String,
    pub methods: Vec<ImplMethod>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImplDataSource {
    pub name: String,
    pub table_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImplQuery {
    pub name: String,
    pub data_sources: Vec<ImplDataSource>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImplReport {
    pub name: String,
    pub methods: Vec<ImplMethod>,
}

/// Everything the codebase inventory found.
///
/// `methods` is the flattened method list the function and requirement passes scan.
/// Its order is the order candidates are tried in, so "first match wins" depends on it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImplementationModel {
    pub classes: Vec<ImplClass>,
    pub tables: Vec<ImplTable>,
    pub extensions: Vec<ImplExtension>,
    pub forms: Vec<ImplForm>,
    pub queries: Vec<ImplQuery>,
    pub reports: Vec<ImplReport>,
    pub methods: Vec<ImplMethod>,
}

impl ImplementationModel {
    /// Build a model from per-unit declarations and derive the flattened method list.
    ///
    /// Methods are tagged with their owning container and listed classes, tables, forms,
    /// reports in that order, each unit's methods in declaration order. Extension methods
    /// are not part of the flattened list.
    pub fn from_units(
        classes: Vec<ImplClass>,
        tables: Vec<ImplTable>,
        extensions: Vec<ImplExtension>,
        forms: Vec<ImplForm>,
        queries: Vec<ImplQuery>,
        reports: Vec<ImplReport>,
    ) -> Self {
        let mut methods = Vec::new();

        let tagged = |kind: ContainerKind, owner: &str, list: &[ImplMethod]| -> Vec<ImplMethod> {
            list.iter()
                .cloned()
                .map(|m| m.in_container(kind, owner))
                .collect()
        };

        for c in &classes {
            methods.extend(tagged(ContainerKind::Class, &c.name, &c.methods));
        }
        for t in &tables {
            methods.extend(tagged(ContainerKind::Table, &t.name, &t.methods));
        }
        for f in &forms {
            methods.extend(tagged(ContainerKind::Form, &f.name, &f.methods));
        }
        for r in &reports {
            methods.extend(tagged(ContainerKind::Report, &r.name, &r.methods));
        }

        Self { classes, tables, extensions, forms, queries, reports, methods }
    }

    pub fn unit_count(&self) -> usize {
        self.classes.len()
            + self.tables.len()
            + self.extensions.len()
            + self.forms.len()
            + self.queries.len()
            + self.reports.len()
            + self.methods.len()
    }
}
