// small closed vocabularies shared by the model, the passes and the findings
use std::fmt;

use serde::{Deserialize, Serialize};

/// Which kind of implementation unit owns a method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContainerKind {
    Class,
    Table,
    Form,
    Report,
}

impl ContainerKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ContainerKind::Class => "class",
            ContainerKind::Table => "table",
            ContainerKind::Form => "form",
            ContainerKind::Report => "report",
        }
    }
}

impl fmt::Display for ContainerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

//fixed per discrepancy kind, never computed
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Severity {
    Low,
    Medium,
    High,
}

/// Where a required entity was found: entities are searched in classes first, then tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityImplKind {
    Class,
    Table,
}

impl EntityImplKind {
    pub fn as_str(self) -> &'static str {
        match self {
            EntityImplKind::Class => "class",
            EntityImplKind::Table => "table",
        }
    }
}

impl fmt::Display for EntityImplKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

//which pass a feature/missing feature came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureKind {
    Entity,
    Function,
    Requirement,
    Extension,
}

impl FeatureKind {
    pub fn as_str(self) -> &'static str {
        match self {
            FeatureKind::Entity => "entity",
            FeatureKind::Function => "function",
            FeatureKind::Requirement => "requirement",
            FeatureKind::Extension => "extension",
        }
    }
}
