pub mod bfs;
pub mod dfs;
pub mod dijkstra;
pub mod a_star;
pub mod bellman_ford;
mod shortest_path;

pub use bfs::run_bfs;
pub use dfs::run_dfs;
pub use dijkstra::run_dijkstra;
pub use a_star::run_a_star;
pub use bellman_ford::run_bellman_ford;

use std::{fmt, str::FromStr};
use serde::{Deserialize, Serialize};

use crate::errors::SearchError;
use crate::graph::{Graph, SearchResult};


/// The fixed set of search strategies
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Algorithm {
    #[serde(rename = "bfs")]
    Bfs,
    #[serde(rename = "dfs")]
    Dfs,
    #[serde(rename = "dijkstra")]
    Dijkstra,
    #[serde(rename = "astar")]
    AStar,
    #[serde(rename = "bellmanFord")]
    BellmanFord,
}

impl Algorithm {

    /// Every algorithm, in the order distractors are considered
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Bfs,
        Algorithm::Dfs,
        Algorithm::Dijkstra,
        Algorithm::AStar,
        Algorithm::BellmanFord,
    ];

    /// Canonical name used on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::Bfs => "bfs",
            Algorithm::Dfs => "dfs",
            Algorithm::Dijkstra => "dijkstra",
            Algorithm::AStar => "astar",
            Algorithm::BellmanFord => "bellmanFord",
        }
    }

    /// Human readable label
    pub fn label(&self) -> &'static str {
        match self {
            Algorithm::Bfs => "BFS",
            Algorithm::Dfs => "DFS",
            Algorithm::Dijkstra => "Dijkstra",
            Algorithm::AStar => "A*",
            Algorithm::BellmanFord => "Bellman-Ford",
        }
    }

    /// Loose parsing of user input, accepts common misspellings
    pub fn from_alias(raw: &str) -> Option<Algorithm> {
        match raw.trim().to_lowercase().as_str() {
            "bfs" => Some(Algorithm::Bfs),
            "dfs" => Some(Algorithm::Dfs),
            "dijkstra" | "dijisktra" | "djikstra" => Some(Algorithm::Dijkstra),
            "astar" | "a*" => Some(Algorithm::AStar),
            "bellmanford" | "bellman-ford" => Some(Algorithm::BellmanFord),
            _ => None,
        }
    }

    /// Run this algorithm from start to goal
    pub fn run(&self, graph: &Graph, start: &str, goal: &str) -> SearchResult {
        match self {
            Algorithm::Bfs => run_bfs(graph, start, goal),
            Algorithm::Dfs => run_dfs(graph, start, goal),
            Algorithm::Dijkstra => run_dijkstra(graph, start, goal),
            Algorithm::AStar => run_a_star(graph, start, goal),
            Algorithm::BellmanFord => run_bellman_ford(graph, start, goal),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = SearchError;

    /// Strict parsing, only canonical names are accepted
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Algorithm::ALL
            .into_iter()
            .find(|algorithm| algorithm.as_str() == name)
            .ok_or_else(|| SearchError::UnknownAlgorithm(name.to_string()))
    }
}

/// Run an algorithm selected by its canonical name
pub fn solve_by_algorithm(name: &str, graph: &Graph, start: &str, goal: &str) -> Result<SearchResult, SearchError> {
    let algorithm: Algorithm = name.parse()?;
    Ok(algorithm.run(graph, start, goal))
}


#[cfg(test)]
pub(crate) mod fixtures {
    use crate::graph::{Edge, Graph, Node};

    /// Build a graph from (id, x, y) nodes and (from, to, cost) edges
    pub fn graph(nodes: &[(&str, f64, f64)], edges: &[(&str, &str, f64)]) -> Graph {
        Graph::new(
            nodes.iter().map(|&(id, x, y)| Node::new(id, x, y)).collect(),
            edges.iter().map(|&(from, to, cost)| Edge::new(from, to, cost)).collect(),
        )
    }

    /// A(0,0) - B(1,0) - C(2,0), A-B 1, B-C 5, A-C 3
    pub fn triangle() -> Graph {
        graph(
            &[("A", 0.0, 0.0), ("B", 1.0, 0.0), ("C", 2.0, 0.0)],
            &[("A", "B", 1.0), ("B", "C", 5.0), ("A", "C", 3.0)],
        )
    }

    /// Diamond with a cheap long way round
    /// S - A - G costs 10 + 10, S - B - C - G costs 1 + 1 + 1
    pub fn diamond() -> Graph {
        graph(
            &[("S", 0.0, 0.0), ("A", 1.0, -1.0), ("B", 1.0, 1.0), ("C", 2.0, 1.0), ("G", 3.0, 0.0)],
            &[("S", "A", 10.0), ("A", "G", 10.0), ("S", "B", 1.0), ("B", "C", 1.0), ("C", "G", 1.0)],
        )
    }

    /// Two islands, G cannot be reached from S
    pub fn split() -> Graph {
        graph(
            &[("S", 0.0, 0.0), ("A", 1.0, 0.0), ("G", 5.0, 0.0), ("H", 6.0, 0.0)],
            &[("S", "A", 1.0), ("G", "H", 1.0)],
        )
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solve_by_algorithm_dispatches() {
        let graph = fixtures::triangle();
        let result = solve_by_algorithm("dijkstra", &graph, "A", "C").unwrap();
        assert_eq!(result.path, vec!["A", "C"]);
    }

    #[test]
    fn test_unknown_algorithm_fails() {
        let graph = fixtures::triangle();
        let result = solve_by_algorithm("greedy", &graph, "A", "C");
        assert_eq!(result, Err(SearchError::UnknownAlgorithm("greedy".to_string())));
        assert_eq!(result.unwrap_err().to_string(), "Unknown algorithm: greedy");
    }

    #[test]
    fn test_strict_names_are_case_sensitive() {
        assert_eq!("bellmanFord".parse::<Algorithm>(), Ok(Algorithm::BellmanFord));
        assert!("BellmanFord".parse::<Algorithm>().is_err());
        assert!("a*".parse::<Algorithm>().is_err());
    }

    #[test]
    fn test_aliases() {
        assert_eq!(Algorithm::from_alias(" Djikstra "), Some(Algorithm::Dijkstra));
        assert_eq!(Algorithm::from_alias("A*"), Some(Algorithm::AStar));
        assert_eq!(Algorithm::from_alias("Bellman-Ford"), Some(Algorithm::BellmanFord));
        assert_eq!(Algorithm::from_alias("greedy"), None);
    }

    #[test]
    fn test_serde_names_match_canonical_names() {
        for algorithm in Algorithm::ALL {
            let json = serde_json::to_value(algorithm).unwrap();
            assert_eq!(json, algorithm.as_str());
        }
    }

    #[test]
    fn test_start_equals_goal_for_every_algorithm() {
        let graph = fixtures::diamond();
        for algorithm in Algorithm::ALL {
            let result = algorithm.run(&graph, "B", "B");
            assert_eq!(result.path, vec!["B"], "{algorithm}");
        }
    }

    #[test]
    fn test_missing_endpoint_for_every_algorithm() {
        let graph = fixtures::diamond();
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.run(&graph, "S", "Q"), SearchResult::missing_endpoint("S"), "{algorithm}");
            assert_eq!(algorithm.run(&graph, "Q", "G"), SearchResult::missing_endpoint("Q"), "{algorithm}");
        }
    }

    #[test]
    fn test_unreachable_goal_falls_back_to_start() {
        let graph = fixtures::split();
        for algorithm in Algorithm::ALL {
            let result = algorithm.run(&graph, "S", "G");
            assert_eq!(result.path, vec!["S"], "{algorithm}");
            assert_eq!(result.steps_count, result.visited_nodes.len());
            assert!(!result.visited_nodes.contains(&"G".to_string()));
        }
    }
}
