use crate::graph::{Adjacency, Graph, SearchResult};
use super::shortest_path::into_result;


/// Depth-first search
/// https://en.wikipedia.org/wiki/Depth-first_search
/// The stack holds whole partial paths so no parent array is needed.
/// Neighbors are pushed in adjacency order, so the last added road is explored first.
/// Returns the first path that reaches the goal, not necessarily the shortest.
pub fn run_dfs(graph: &Graph, start: &str, goal: &str) -> SearchResult {
    let adj = Adjacency::new(graph);
    let Some((start_index, goal_index)) = adj.endpoints(start, goal) else {
        return SearchResult::missing_endpoint(start);
    };

    let mut seen = vec![false; adj.len()];
    let mut visited = Vec::new();
    let mut stack: Vec<Vec<usize>> = vec![vec![start_index]];

    while let Some(path) = stack.pop() {
        let Some(&node) = path.last() else {
            continue;
        };
        if seen[node] {
            continue;
        }

        seen[node] = true;
        visited.push(node);

        if node == goal_index {
            return into_result(&adj, start, &path, &visited);
        }

        for &(next, _) in &adj.neighbors[node] {
            if !seen[next] {
                let mut extended = path.clone();
                extended.push(next);
                stack.push(extended);
            }
        }
    }

    into_result(&adj, start, &[], &visited)
}
