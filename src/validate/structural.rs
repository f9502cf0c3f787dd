//! Connection reference rules (V006–V007).

use std::collections::HashSet;

use crate::error::Problem;
use crate::parse::types::{NameKey, WorkflowDocument, target_text};

/// Check every connection source and target against the declared names.
///
/// A missing `node` key never resolves, whatever the declared names are.
pub fn validate_connections(
    document: &WorkflowDocument,
    names: &HashSet<NameKey>,
    problems: &mut Vec<Problem>,
) {
    for entry in &document.connections {
        let source = &entry.source;
        if !names.contains(&NameKey::text(source)) {
            problems.push(Problem::new(
                "V006",
                format!("Connection source '{source}' missing from nodes"),
                Some(source.clone()),
            ));
        }

        // An unknown source does not stop the target checks.
        let targets = entry.outputs.iter().flat_map(|o| o.branches.iter().flatten());
        for connection in targets {
            let target = connection.target();
            if !target.is_some_and(|t| names.contains(&NameKey::of(t))) {
                problems.push(Problem::new(
                    "V007",
                    format!(
                        "Connection from '{source}' references missing node '{}'",
                        target_text(target)
                    ),
                    Some(source.clone()),
                ));
            }
        }
    }
}
