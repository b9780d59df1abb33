// reading the inputs the ingestion side hands over
use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::core::config::MatchConfig;
use crate::core::model::{ImplementationModel, RequirementModel};
use crate::error::{Result, ReviewError};

fn read_to_string(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| ReviewError::Io { path: path.to_path_buf(), source })
}

fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = read_to_string(path)?;
    serde_json::from_str(&raw).map_err(|source| ReviewError::Json { path: path.to_path_buf(), source })
}

pub fn load_requirement_model(path: &Path) -> Result<RequirementModel> {
    let m: RequirementModel = load_json(path)?;
    debug!(path = %path.display(), items = m.item_count(), "loaded requirement model");
    Ok(m)
}

/// Load an implementation inventory. When the file carries no flattened `methods` list,
/// it is derived from the per-unit method lists.
pub fn load_implementation_model(path: &Path) -> Result<ImplementationModel> {
    let m: ImplementationModel = load_json(path)?;
    let m = if m.methods.is_empty() {
        ImplementationModel::from_units(m.classes, m.tables, m.extensions, m.forms, m.queries, m.reports)
    } else {
        m
    };
    debug!(path = %path.display(), units = m.unit_count(), "loaded implementation model");
    Ok(m)
}

pub fn load_config(path: &Path) -> Result<MatchConfig> {
    let raw = read_to_string(path)?;
    toml::from_str(&raw).map_err(|source| ReviewError::Config { path: path.to_path_buf(), source })
}
