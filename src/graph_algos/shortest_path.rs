use crate::graph::{Adjacency, SearchResult};

/// Parent value of nodes that were never reached (and of the start node)
pub(crate) const NO_PARENT: usize = usize::MAX;

/// Construct the path from the goal node back to the start node
/// Returns the ordered path of node indexes from start to goal,
/// or an empty path if the goal was never reached
/// parent: parent index per node, NO_PARENT for the start and unreached nodes
pub(crate) fn shortest_path(parent: &[usize], start_index: usize, goal_index: usize) -> Vec<usize> {

    if start_index == goal_index {
        return vec![start_index];
    }
    if parent[goal_index] == NO_PARENT {
        return Vec::new();
    }

    let mut path = Vec::new();
    let mut current_index = goal_index;

    // Trace back from goal to start
    while current_index != NO_PARENT {
        path.push(current_index);
        current_index = parent[current_index];
    }

    // The path is in reverse order, so reverse it
    path.reverse();

    path
}

/// Shape a search outcome into a SearchResult
/// An empty index path falls back to the single start node
pub(crate) fn into_result(adj: &Adjacency, start: &str, index_path: &[usize], visited: &[usize]) -> SearchResult {
    let path = if index_path.is_empty() {
        vec![start.to_string()]
    } else {
        adj.to_ids(index_path)
    };
    SearchResult::new(path, adj.to_ids(visited))
}
