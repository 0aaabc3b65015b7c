use crate::collections::FxIndexSet;
use crate::geometry::euclidean;
use crate::graph::{Adjacency, Graph, SearchResult};
use super::shortest_path::{into_result, shortest_path, NO_PARENT};


/// Map pixels per unit of road cost, the heuristic is straight line distance divided by this
pub const HEURISTIC_SCALE: f64 = 120.0;

/// A* Algorithm
/// https://en.wikipedia.org/wiki/A*_search_algorithm
/// The heuristic is only admissible when every road costs at least its length / HEURISTIC_SCALE.
/// Generated maps do not guarantee this, the scale is kept as is so results stay comparable.
/// The open set keeps insertion order, extraction is a linear scan for the lowest f score
/// and the first minimum wins.
pub fn run_a_star(graph: &Graph, start: &str, goal: &str) -> SearchResult {
    let adj = Adjacency::new(graph);
    let Some((start_index, goal_index)) = adj.endpoints(start, goal) else {
        return SearchResult::missing_endpoint(start);
    };

    let coords: Vec<(f64, f64)> = graph.nodes.iter().map(|node| (node.x, node.y)).collect();
    let heuristic = |index: usize| {
        let (x1, y1) = coords[index];
        let (x2, y2) = coords[goal_index];
        euclidean(x1, y1, x2, y2) / HEURISTIC_SCALE
    };

    let mut g_score = vec![f64::INFINITY; adj.len()];
    let mut f_score = vec![f64::INFINITY; adj.len()];
    let mut parent = vec![NO_PARENT; adj.len()];
    let mut visited = Vec::new();

    // Open set - nodes waiting to be expanded
    let mut open: FxIndexSet<usize> = FxIndexSet::default();
    open.insert(start_index);

    g_score[start_index] = 0.0;
    f_score[start_index] = heuristic(start_index);

    while !open.is_empty() {
        let mut current = None;
        let mut best = f64::INFINITY;
        for &index in &open {
            if f_score[index] < best {
                best = f_score[index];
                current = Some(index);
            }
        }

        let Some(current) = current else {
            break;
        };

        open.shift_remove(&current);
        visited.push(current);
        if current == goal_index {
            break;
        }

        for &(next, edge_cost) in &adj.neighbors[current] {
            // confirmed cost, not heuristic
            let tentative = g_score[current] + edge_cost;
            if tentative < g_score[next] {
                parent[next] = current;
                g_score[next] = tentative;
                f_score[next] = tentative + heuristic(next);
                open.insert(next);
            }
        }
    }

    let path = if g_score[goal_index].is_finite() {
        shortest_path(&parent, start_index, goal_index)
    } else {
        Vec::new()
    };

    into_result(&adj, start, &path, &visited)
}
