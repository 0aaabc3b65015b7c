use std::collections::VecDeque;

use crate::graph::{Adjacency, Graph, SearchResult};
use super::shortest_path::{into_result, shortest_path, NO_PARENT};


/// Breadth-first search
/// https://en.wikipedia.org/wiki/Breadth-first_search
/// Finds the path with the fewest edges, edge costs are ignored
/// Nodes are recorded as visited when dequeued, the search stops once the goal is dequeued
pub fn run_bfs(graph: &Graph, start: &str, goal: &str) -> SearchResult {
    let adj = Adjacency::new(graph);
    let Some((start_index, goal_index)) = adj.endpoints(start, goal) else {
        return SearchResult::missing_endpoint(start);
    };

    let mut discovered = vec![false; adj.len()];
    let mut parent = vec![NO_PARENT; adj.len()];
    let mut visited = Vec::new();

    let mut queue = VecDeque::from([start_index]);
    discovered[start_index] = true;

    while let Some(current) = queue.pop_front() {
        visited.push(current);
        if current == goal_index {
            break;
        }

        for &(next, _) in &adj.neighbors[current] {
            if !discovered[next] {
                discovered[next] = true;
                parent[next] = current;
                queue.push_back(next);
            }
        }
    }

    let path = if discovered[goal_index] {
        shortest_path(&parent, start_index, goal_index)
    } else {
        Vec::new()
    };

    into_result(&adj, start, &path, &visited)
}
