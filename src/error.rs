//! Error types shared by the parse and validate phases.

use std::path::PathBuf;

use serde::Serialize;

/// A structural problem found in an otherwise well-formed workflow document.
///
/// Problems are values, never raised: the validator collects every one of
/// them so a single pass reports all issues in a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Problem {
    pub code: &'static str,
    pub message: String,
    /// Name (or `index N`) of the node the problem concerns, if any.
    pub node: Option<String>,
}

impl std::fmt::Display for Problem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl Problem {
    pub fn new(code: &'static str, message: impl Into<String>, node: Option<String>) -> Self {
        Problem {
            code,
            message: message.into(),
            node,
        }
    }
}

/// The document could not be acquired at all: unreadable file or JSON that
/// does not have the workflow shape. Such a document has no problem list.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to parse workflow JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl LoadError {
    pub fn code(&self) -> &'static str {
        match self {
            LoadError::Read { .. } => "P000",
            LoadError::Parse { .. } | LoadError::Json(_) => "P001",
        }
    }
}

/// Default input discovery failed before any file was validated.
#[derive(Debug, thiserror::Error)]
pub enum DiscoverError {
    #[error("invalid file pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("failed to list '{}': {source}", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
