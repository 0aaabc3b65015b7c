use crate::graph::{Adjacency, Graph, SearchResult};
use super::shortest_path::{into_result, shortest_path, NO_PARENT};


/// Bellman-Ford over the undirected edge list
/// https://en.wikipedia.org/wiki/Bellman%E2%80%93Ford_algorithm
/// Runs at most V - 1 relaxation rounds and stops early on a quiet round.
/// Costs are always positive so negative cycles are not checked.
///
/// Unlike the other searches, visited_nodes is not an exploration order: it lists
/// every node that ended with a finite distance, in graph order.
pub fn run_bellman_ford(graph: &Graph, start: &str, goal: &str) -> SearchResult {
    let adj = Adjacency::new(graph);
    let Some((start_index, goal_index)) = adj.endpoints(start, goal) else {
        return SearchResult::missing_endpoint(start);
    };

    let directed_edges = Adjacency::directed_edges(&adj.ids, graph);

    let mut dist = vec![f64::INFINITY; adj.len()];
    let mut parent = vec![NO_PARENT; adj.len()];
    dist[start_index] = 0.0;

    for _ in 1..adj.len() {
        let mut changed = false;
        for &(from, to, cost) in &directed_edges {
            if !dist[from].is_finite() {
                continue;
            }
            let alt = dist[from] + cost;
            if alt < dist[to] {
                dist[to] = alt;
                parent[to] = from;
                changed = true;
            }
        }
        if !changed {
            break;
        }
    }

    let visited: Vec<usize> = (0..adj.len()).filter(|&index| dist[index].is_finite()).collect();

    let path = if dist[goal_index].is_finite() {
        shortest_path(&parent, start_index, goal_index)
    } else {
        Vec::new()
    };

    into_result(&adj, start, &path, &visited)
}
