//! Per-node field rules and identifier uniqueness (V001–V005).

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use crate::error::Problem;
use crate::parse::types::{NameKey, Node, value_text};

/// Run field and uniqueness checks over `nodes`.
///
/// Returns the set of valid (present, truthy) node names for the connection
/// checks that follow.
pub fn validate_nodes(nodes: &[Node], problems: &mut Vec<Problem>) -> HashSet<NameKey> {
    let mut names = Counter::default();
    let mut ids = Counter::default();

    for (index, node) in nodes.iter().enumerate() {
        let name = node.name();
        let label = name.map(value_text);
        v001_name_present(index, label.as_deref(), problems);
        if let (Some(name), Some(label)) = (name, &label) {
            names.add(NameKey::of(name), label);
        }

        let identifier = label.unwrap_or_else(|| format!("index {index}"));
        if let Some(id) = v002_v003_id_present(node, &identifier, problems) {
            ids.add(id.clone(), &id);
        }
    }

    v004_duplicate_names(&names, problems);
    v005_duplicate_ids(&ids, problems);

    names.counts.into_keys().collect()
}

/// Frequency table remembering first-seen order of distinct keys.
struct Counter<K> {
    order: Vec<(K, String)>,
    counts: HashMap<K, usize>,
}

impl<K> Default for Counter<K> {
    fn default() -> Self {
        Counter {
            order: Vec::new(),
            counts: HashMap::new(),
        }
    }
}

impl<K: Hash + Eq + Clone> Counter<K> {
    fn add(&mut self, key: K, label: &str) {
        match self.counts.get_mut(&key) {
            Some(count) => *count += 1,
            None => {
                self.order.push((key.clone(), label.to_string()));
                self.counts.insert(key, 1);
            }
        }
    }

    /// Labels of keys seen more than once, in first-seen order.
    fn duplicates(&self) -> impl Iterator<Item = &str> {
        self.order
            .iter()
            .filter(|(key, _)| self.counts[key] > 1)
            .map(|(_, label)| label.as_str())
    }
}

fn v001_name_present(index: usize, name: Option<&str>, problems: &mut Vec<Problem>) {
    if name.is_none() {
        problems.push(Problem::new(
            "V001",
            format!("Node at index {index} is missing a 'name' field"),
            Some(format!("index {index}")),
        ));
    }
}

/// Returns the id's text form when it is present and non-null.
fn v002_v003_id_present(
    node: &Node,
    identifier: &str,
    problems: &mut Vec<Problem>,
) -> Option<String> {
    match node.id() {
        None => {
            problems.push(Problem::new(
                "V002",
                format!("Node '{identifier}' is missing an 'id' field"),
                Some(identifier.to_string()),
            ));
            None
        }
        Some(id) if id.is_null() => {
            problems.push(Problem::new(
                "V003",
                format!("Node '{identifier}' has a null 'id' value"),
                Some(identifier.to_string()),
            ));
            None
        }
        Some(id) => Some(value_text(id)),
    }
}

fn v004_duplicate_names(names: &Counter<NameKey>, problems: &mut Vec<Problem>) {
    for name in names.duplicates() {
        problems.push(Problem::new(
            "V004",
            format!("Duplicate node name detected: '{name}'"),
            Some(name.to_string()),
        ));
    }
}

fn v005_duplicate_ids(ids: &Counter<String>, problems: &mut Vec<Problem>) {
    for id in ids.duplicates() {
        problems.push(Problem::new(
            "V005",
            format!("Duplicate node id detected: '{id}'"),
            None,
        ));
    }
}
