//! Parse phase: JSON → Rust types + connection graph construction.

pub mod graph;
pub mod types;

use std::path::Path;

use serde_json::Value;

pub use graph::{ConnectionGraph, GraphStats};
pub use types::*;

use crate::error::LoadError;

/// Deserialize a workflow JSON string into a `WorkflowDocument`.
pub fn parse(json: &str) -> Result<WorkflowDocument, LoadError> {
    Ok(from_str(json)?)
}

/// Read and deserialize a workflow file.
pub fn load(path: &Path) -> Result<WorkflowDocument, LoadError> {
    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    from_str(&text).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn from_str(json: &str) -> Result<WorkflowDocument, serde_json::Error> {
    let value: Value = serde_json::from_str(json)?;
    WorkflowDocument::try_from(value)
}
