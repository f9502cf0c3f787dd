//! petgraph-based directed graph over a workflow's resolved connections.

use std::collections::HashMap;

use petgraph::graph::{DiGraph, NodeIndex};
use serde::Serialize;

use super::types::{NameKey, WorkflowDocument, value_text};

/// Declared node names and the connections that resolve between them,
/// one edge per connection labelled with its connection type.
///
/// Connections whose source or target is not a declared name are left out;
/// reporting those is the validator's job.
pub struct ConnectionGraph {
    pub graph: DiGraph<String, String>,
    pub node_indices: HashMap<NameKey, NodeIndex>,
}

/// Size of a [`ConnectionGraph`], included in JSON reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GraphStats {
    pub nodes: usize,
    pub edges: usize,
}

impl ConnectionGraph {
    pub fn build(document: &WorkflowDocument) -> Self {
        let mut graph = DiGraph::new();
        let mut node_indices = HashMap::new();

        for name in document.nodes.iter().filter_map(|n| n.name()) {
            node_indices
                .entry(NameKey::of(name))
                .or_insert_with(|| graph.add_node(value_text(name)));
        }

        for (source, output, _, connection) in document.edges() {
            let Some(&s) = node_indices.get(&NameKey::text(&source.source)) else {
                continue;
            };
            let Some(&t) = connection.target().and_then(|t| node_indices.get(&NameKey::of(t)))
            else {
                continue;
            };
            graph.add_edge(s, t, output.connection_type.clone());
        }

        ConnectionGraph { graph, node_indices }
    }

    pub fn stats(&self) -> GraphStats {
        GraphStats {
            nodes: self.graph.node_count(),
            edges: self.graph.edge_count(),
        }
    }
}
