//! Per-file outcomes and their text/JSON rendering.

use std::path::Path;

use serde::Serialize;

use crate::error::{LoadError, Problem};
use crate::parse::GraphStats;

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Outcome {
    Ok,
    Fail { problems: Vec<Problem> },
    Error { code: &'static str, error: String },
}

#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    pub file: String,
    #[serde(flatten)]
    pub outcome: Outcome,
    /// Resolved connection graph size; absent when the file did not load.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub graph: Option<GraphStats>,
}

impl FileReport {
    /// Build a report for `path` from the result of loading and validating it.
    pub fn new(path: &Path, result: Result<Vec<Problem>, LoadError>) -> Self {
        let file = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        let outcome = match result {
            Ok(problems) if problems.is_empty() => Outcome::Ok,
            Ok(problems) => Outcome::Fail { problems },
            Err(e) => Outcome::Error {
                code: e.code(),
                error: e.to_string(),
            },
        };

        FileReport {
            file,
            outcome,
            graph: None,
        }
    }

    pub fn with_graph(mut self, stats: GraphStats) -> Self {
        self.graph = Some(stats);
        self
    }

    pub fn is_ok(&self) -> bool {
        matches!(self.outcome, Outcome::Ok)
    }
}

/// Render reports as the line-oriented text format.
pub fn render_text(reports: &[FileReport]) -> String {
    let mut out = String::new();
    for report in reports {
        match &report.outcome {
            Outcome::Ok => out.push_str(&format!("{}: OK\n", report.file)),
            Outcome::Fail { problems } => {
                out.push_str(&format!("{}: FAIL\n", report.file));
                for problem in problems {
                    out.push_str(&format!("  - {}\n", problem));
                }
            }
            Outcome::Error { error, .. } => {
                out.push_str(&format!("{}: ERROR\n", report.file));
                out.push_str(&format!("  - {}\n", error));
            }
        }
    }
    out
}

/// Render reports as a pretty-printed JSON array.
pub fn render_json(reports: &[FileReport]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(reports)
}

/// 0 when every file is OK, 1 otherwise.
pub fn exit_code(reports: &[FileReport]) -> i32 {
    if reports.iter().all(FileReport::is_ok) { 0 } else { 1 }
}
