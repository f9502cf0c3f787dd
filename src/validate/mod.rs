//! Structural validation phase.
//!
//! Checks node fields, identifier uniqueness and connection references.
//! Problems are emitted in a fixed order: per-node field problems, duplicate
//! names, duplicate ids, then connection references.

pub mod node_rules;
pub mod structural;

use crate::error::Problem;
use crate::parse::types::WorkflowDocument;

pub const TRACING_TARGET: &str = "flowcheck::validate";

/// Validate a workflow document. Returns every problem found, in order.
pub fn validate(document: &WorkflowDocument) -> Vec<Problem> {
    let mut problems = Vec::new();

    let names = node_rules::validate_nodes(&document.nodes, &mut problems);
    structural::validate_connections(document, &names, &mut problems);

    tracing::debug!(
        target: TRACING_TARGET,
        nodes = document.nodes.len(),
        sources = document.connections.len(),
        problems = problems.len(),
        "validated workflow document"
    );
    for problem in &problems {
        tracing::trace!(target: TRACING_TARGET, code = problem.code, "{}", problem);
    }

    problems
}

/// Same as [`validate`], returning only the messages.
pub fn validate_messages(document: &WorkflowDocument) -> Vec<String> {
    validate(document).into_iter().map(|p| p.message).collect()
}
