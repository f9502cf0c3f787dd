//! Rust views over exported workflow JSON.
//!
//! Documents are first read into a `serde_json::Value` (with `preserve_order`,
//! so object keys keep document order and a repeated key keeps its last
//! value), then shaped into the types below. Only the keys the validator looks
//! at are interpreted; everything else a workflow export carries
//! (`parameters`, `position`, `settings`, ...) is ignored.

use serde::Deserialize;
use serde_json::{Map, Value};

// =============================================================================
// TOP-LEVEL DOCUMENT
// =============================================================================

#[derive(Debug, Clone, Default)]
pub struct WorkflowDocument {
    pub nodes: Vec<Node>,
    /// One entry per source node name, in declaration order.
    pub connections: Vec<SourceConnections>,
}

/// Every output of one source node.
#[derive(Debug, Clone)]
pub struct SourceConnections {
    pub source: String,
    pub outputs: Vec<Output>,
}

/// The branch list registered under one connection type (usually `main`).
#[derive(Debug, Clone)]
pub struct Output {
    pub connection_type: String,
    pub branches: Vec<Branch>,
}

/// One output path of a source node.
pub type Branch = Vec<Connection>;

#[derive(Deserialize)]
struct RawDocument {
    #[serde(default)]
    nodes: Vec<Node>,
    #[serde(default)]
    connections: Map<String, Value>,
}

impl TryFrom<Value> for WorkflowDocument {
    type Error = serde_json::Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let raw: RawDocument = serde_json::from_value(value)?;

        let connections = raw
            .connections
            .into_iter()
            .map(|(source, types)| -> Result<SourceConnections, serde_json::Error> {
                let types: Map<String, Value> = serde_json::from_value(types)?;
                let outputs = types
                    .into_iter()
                    .map(|(connection_type, branches)| -> Result<Output, serde_json::Error> {
                        Ok(Output {
                            connection_type,
                            branches: serde_json::from_value(branches)?,
                        })
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(SourceConnections { source, outputs })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(WorkflowDocument {
            nodes: raw.nodes,
            connections,
        })
    }
}

impl WorkflowDocument {
    /// Every connection with its source, output and branch index, in
    /// declaration order.
    pub fn edges(&self) -> impl Iterator<Item = (&SourceConnections, &Output, usize, &Connection)> {
        self.connections.iter().flat_map(|source| {
            source.outputs.iter().flat_map(move |output| {
                output
                    .branches
                    .iter()
                    .enumerate()
                    .flat_map(move |(branch, connections)| {
                        connections.iter().map(move |c| (source, output, branch, c))
                    })
            })
        })
    }
}

// =============================================================================
// NODES & CONNECTIONS
// =============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct Node(pub Map<String, Value>);

impl Node {
    /// The node's name, or `None` when the name counts as missing.
    pub fn name(&self) -> Option<&Value> {
        self.0.get("name").filter(|v| is_truthy(v))
    }

    /// `None` when the key is absent, `Some(Value::Null)` for an explicit null.
    pub fn id(&self) -> Option<&Value> {
        self.0.get("id")
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct Connection(pub Map<String, Value>);

impl Connection {
    /// Target node name; `None` when the `node` key is absent.
    pub fn target(&self) -> Option<&Value> {
        self.0.get("node")
    }
}

// =============================================================================
// SCALAR HELPERS
// =============================================================================

/// Identity of a node name: strings never equal non-strings, so the number
/// `5` and the string `"5"` are different names.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NameKey {
    Text(String),
    Json(String),
}

impl NameKey {
    pub fn of(value: &Value) -> Self {
        match value {
            Value::String(s) => NameKey::Text(s.clone()),
            other => NameKey::Json(other.to_string()),
        }
    }

    pub fn text(name: &str) -> Self {
        NameKey::Text(name.to_string())
    }
}

/// Text form used to print names and targets and to compare ids.
///
/// Strings render raw, so the number `1` and the string `"1"` share a form;
/// booleans render as `True`/`False` and null as `None`.
pub fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => repr(other),
    }
}

/// Text of a missing or present target.
pub fn target_text(target: Option<&Value>) -> String {
    target.map_or_else(|| repr(&Value::Null), value_text)
}

fn repr(value: &Value) -> String {
    match value {
        Value::Null => "None".to_string(),
        Value::Bool(true) => "True".to_string(),
        Value::Bool(false) => "False".to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => quote(s),
        Value::Array(items) => {
            let items: Vec<String> = items.iter().map(repr).collect();
            format!("[{}]", items.join(", "))
        }
        Value::Object(entries) => {
            let entries: Vec<String> = entries
                .iter()
                .map(|(k, v)| format!("{}: {}", quote(k), repr(v)))
                .collect();
            format!("{{{}}}", entries.join(", "))
        }
    }
}

fn quote(s: &str) -> String {
    if s.contains('\'') && !s.contains('"') {
        format!("\"{s}\"")
    } else {
        format!("'{}'", s.replace('\'', "\\'"))
    }
}

/// Whether a value counts as present for the `name` check.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}
