//! Checking and scoring of candidate paths.
//!
//! The optimal baseline is computed here independently of the search library,
//! so a bug in the algorithm under test can never leak into its own grade.

mod score;
mod solver_output;
mod run;

pub use score::{calculate_score, Score, ScoreInput};
pub use solver_output::SolverOutput;
pub use run::{grade_run, trace_attempt, Attempt, AttemptIssue, RunReport};

use serde::{Deserialize, Serialize};

use crate::collections::{FxIndexMap, FxIndexSet};
use crate::graph::{Graph, NodeId};


/// True if path runs from start to goal over open roads and has at least one move
pub fn check_correctness(graph: &Graph, path: &[NodeId], start: &str, goal: &str) -> bool {
    if path.len() < 2 {
        return false;
    }

    if path[0] != start || path[path.len() - 1] != goal {
        return false;
    }

    path.windows(2).all(|pair| graph.open_edge_between(&pair[0], &pair[1]).is_some())
}

/// Sum of road costs along the path
/// Infinite if the path has no move or uses a road that does not exist
pub fn compute_path_cost(graph: &Graph, path: &[NodeId]) -> f64 {
    if path.len() < 2 {
        return f64::INFINITY;
    }

    let mut cost = 0.0;
    for pair in path.windows(2) {
        match graph.open_edge_between(&pair[0], &pair[1]) {
            Some(edge) => cost += edge.cost,
            None => return f64::INFINITY,
        }
    }

    cost
}


/// Baseline solution every candidate is graded against
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimalSolution {
    pub path: Vec<NodeId>,
    pub visited_nodes: Vec<NodeId>,
    pub cost: f64,
    pub steps_count: usize,
}

/// Cheapest path from start to goal
/// A map keyed Dijkstra that shares no code with the search library.
/// path is empty when the goal cannot be reached, cost is then infinite.
pub fn find_optimal_solution(graph: &Graph, start: &str, goal: &str) -> OptimalSolution {
    // the start sits at distance zero even when the map does not know it
    if start == goal && !graph.contains(start) {
        return OptimalSolution { path: vec![start.to_string()], visited_nodes: Vec::new(), cost: 0.0, steps_count: 0 };
    }

    // neighbors per node id, roads leading to unknown nodes are kept and never relaxed
    let mut neighbors: FxIndexMap<&str, Vec<(&str, f64)>> =
        graph.nodes.iter().map(|node| (node.id.as_str(), Vec::new())).collect();
    for edge in graph.open_edges() {
        if let Some(list) = neighbors.get_mut(edge.from.as_str()) {
            list.push((edge.to.as_str(), edge.cost));
        }
        if let Some(list) = neighbors.get_mut(edge.to.as_str()) {
            list.push((edge.from.as_str(), edge.cost));
        }
    }

    // node -> (parent index, distance), parent index usize::MAX marks no parent
    let mut node_map: FxIndexMap<&str, (usize, f64)> =
        graph.nodes.iter().map(|node| (node.id.as_str(), (usize::MAX, f64::INFINITY))).collect();
    let mut unvisited: FxIndexSet<&str> = node_map.keys().copied().collect();
    let mut visited: Vec<NodeId> = Vec::new();

    if let Some((_, distance)) = node_map.get_mut(start) {
        *distance = 0.0;
    }

    loop {
        let mut current = None;
        let mut current_dist = f64::INFINITY;
        for &id in &unvisited {
            let (_, distance) = node_map[id];
            if distance < current_dist {
                current_dist = distance;
                current = Some(id);
            }
        }

        let Some(current) = current else {
            break;
        };

        unvisited.shift_remove(current);
        visited.push(current.to_string());

        if current == goal {
            break;
        }

        let Some(current_index) = node_map.get_index_of(current) else {
            break;
        };
        for &(next, cost) in &neighbors[current] {
            if !unvisited.contains(next) {
                continue;
            }
            let alt = current_dist + cost;
            if let Some(entry) = node_map.get_mut(next) {
                if alt < entry.1 {
                    *entry = (current_index, alt);
                }
            }
        }
    }

    // unknown goal (or start) leaves the cost infinite
    let cost = node_map.get(goal).map(|&(_, distance)| distance).unwrap_or(f64::INFINITY);

    let path = match node_map.get_index_of(goal) {
        Some(goal_index) if cost.is_finite() => optimal_path(&node_map, goal_index),
        _ => Vec::new(),
    };

    let steps_count = visited.len();
    OptimalSolution { path, visited_nodes: visited, cost, steps_count }
}

/// Trace parents from the goal back to the start
fn optimal_path(node_map: &FxIndexMap<&str, (usize, f64)>, goal_index: usize) -> Vec<NodeId> {
    let mut path = Vec::new();
    let mut current_index = goal_index;

    while current_index != usize::MAX {
        match node_map.get_index(current_index) {
            Some((node, &(parent_index, _))) => {
                path.push(node.to_string());
                current_index = parent_index;
            }
            None => break,
        }
    }

    path.reverse();
    path
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Edge;
    use crate::graph_algos::fixtures;

    fn ids(path: &[&str]) -> Vec<NodeId> {
        path.iter().map(|id| id.to_string()).collect()
    }

    #[test]
    fn test_correct_path() {
        let graph = fixtures::diamond();
        assert!(check_correctness(&graph, &ids(&["S", "B", "C", "G"]), "S", "G"));
        // roads work in both directions
        assert!(check_correctness(&graph, &ids(&["G", "C", "B", "S"]), "G", "S"));
    }

    #[test]
    fn test_incorrect_paths() {
        let graph = fixtures::diamond();
        assert!(!check_correctness(&graph, &ids(&["S"]), "S", "S"));
        assert!(!check_correctness(&graph, &ids(&["B", "C", "G"]), "S", "G"));
        assert!(!check_correctness(&graph, &ids(&["S", "B", "C"]), "S", "G"));
        // no road between B and G
        assert!(!check_correctness(&graph, &ids(&["S", "B", "G"]), "S", "G"));
    }

    #[test]
    fn test_blocked_road_is_not_a_road() {
        let mut graph = fixtures::triangle();
        graph.edges[2].blocked = true;
        assert!(!check_correctness(&graph, &ids(&["A", "C"]), "A", "C"));
        assert_eq!(compute_path_cost(&graph, &ids(&["A", "C"])), f64::INFINITY);
    }

    #[test]
    fn test_path_cost() {
        let graph = fixtures::triangle();
        assert_eq!(compute_path_cost(&graph, &ids(&["A", "B", "C"])), 6.0);
        assert_eq!(compute_path_cost(&graph, &ids(&["C", "A"])), 3.0);
        assert_eq!(compute_path_cost(&graph, &ids(&["A"])), f64::INFINITY);
        assert_eq!(compute_path_cost(&graph, &[]), f64::INFINITY);
    }

    #[test]
    fn test_optimal_solution() {
        let graph = fixtures::diamond();
        let optimal = find_optimal_solution(&graph, "S", "G");
        assert_eq!(optimal.path, vec!["S", "B", "C", "G"]);
        assert_eq!(optimal.cost, 3.0);
        assert_eq!(optimal.visited_nodes, vec!["S", "B", "C", "G"]);
        assert_eq!(optimal.steps_count, 4);
        assert_eq!(compute_path_cost(&graph, &optimal.path), optimal.cost);
    }

    #[test]
    fn test_optimal_solution_unreachable() {
        let optimal = find_optimal_solution(&fixtures::split(), "S", "G");
        assert!(optimal.path.is_empty());
        assert_eq!(optimal.cost, f64::INFINITY);
        assert_eq!(optimal.visited_nodes, vec!["S", "A"]);
    }

    #[test]
    fn test_optimal_solution_start_is_goal() {
        let optimal = find_optimal_solution(&fixtures::triangle(), "B", "B");
        assert_eq!(optimal.path, vec!["B"]);
        assert_eq!(optimal.cost, 0.0);

        let optimal = find_optimal_solution(&fixtures::triangle(), "Z", "Z");
        assert_eq!(optimal.path, vec!["Z"]);
        assert_eq!(optimal.cost, 0.0);
        assert!(optimal.visited_nodes.is_empty());

        // an unknown start never reaches a known goal
        let optimal = find_optimal_solution(&fixtures::triangle(), "Z", "A");
        assert!(optimal.path.is_empty());
        assert_eq!(optimal.cost, f64::INFINITY);
    }

    #[test]
    fn test_optimal_solution_tolerates_dangling_edges() {
        let mut graph = fixtures::triangle();
        graph.edges.push(Edge::new("A", "Q", 0.5));
        let optimal = find_optimal_solution(&graph, "A", "C");
        assert_eq!(optimal.path, vec!["A", "C"]);
        assert_eq!(optimal.cost, 3.0);
    }
}
