use serde_json::Value;

use crate::graph::{NodeId, SearchResult};


/// Output of an untrusted, externally supplied solver
/// Only path, visitedNodes and stepsCount are read, anything malformed is tolerated
pub struct SolverOutput;

impl SolverOutput {

    /// Normalize raw solver output into a SearchResult
    /// Missing or non-array lists become empty, non-string entries are dropped.
    /// stepsCount is kept when it is a non-negative number, otherwise derived from visitedNodes.
    pub fn from_json(value: &Value) -> SearchResult {
        let path = id_list(value.get("path"));
        let visited_nodes = id_list(value.get("visitedNodes"));

        let steps_count = value
            .get("stepsCount")
            .and_then(Value::as_f64)
            .filter(|steps| steps.is_finite() && *steps >= 0.0)
            .map(|steps| steps as usize)
            .unwrap_or(visited_nodes.len());

        SearchResult { path, visited_nodes, steps_count }
    }
}

fn id_list(value: Option<&Value>) -> Vec<NodeId> {
    match value {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|item| item.as_str().map(str::to_string))
            .collect(),
        _ => Vec::new(),
    }
}
