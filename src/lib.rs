pub mod discover;
pub mod error;
pub mod parse;
pub mod report;
pub mod validate;
pub mod wasm;

use std::path::Path;

use crate::parse::ConnectionGraph;
use crate::report::FileReport;

/// Load, validate and report on a single workflow file.
pub fn check_file(path: &Path) -> FileReport {
    let document = match parse::load(path) {
        Ok(document) => document,
        Err(e) => {
            tracing::warn!(target: validate::TRACING_TARGET, error = %e, "failed to load workflow");
            return FileReport::new(path, Err(e));
        }
    };

    let stats = ConnectionGraph::build(&document).stats();
    tracing::debug!(
        target: validate::TRACING_TARGET,
        path = %path.display(),
        graph_nodes = stats.nodes,
        graph_edges = stats.edges,
        "built connection graph"
    );

    FileReport::new(path, Ok(validate::validate(&document))).with_graph(stats)
}
