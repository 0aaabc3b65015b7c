mod adjacency;

pub(crate) use adjacency::Adjacency;

use serde::{Deserialize, Serialize};
use crate::geometry::Point;


/// Node ids are plain strings, identity never depends on position
pub type NodeId = String;

/// Intersection on the city map
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    pub x: f64,
    pub y: f64,
}

impl Node {
    pub fn new(id: impl Into<NodeId>, x: f64, y: f64) -> Self {
        Self { id: id.into(), x, y }
    }

    pub fn point(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

fn default_cost() -> f64 {
    1.0
}

/// Road between two nodes
/// Stored once but traversable in both directions
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub from: NodeId,
    pub to: NodeId,
    #[serde(default = "default_cost")]
    pub cost: f64,
    #[serde(default)]
    pub blocked: bool,
}

impl Edge {
    pub fn new(from: impl Into<NodeId>, to: impl Into<NodeId>, cost: f64) -> Self {
        Self { from: from.into(), to: to.into(), cost, blocked: false }
    }

    /// True if the edge joins a and b in either direction
    pub fn connects(&self, a: &str, b: &str) -> bool {
        (self.from == a && self.to == b) || (self.from == b && self.to == a)
    }

    pub fn touches(&self, id: &str) -> bool {
        self.from == id || self.to == id
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Graph {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

impl Graph {
    pub fn new(nodes: Vec<Node>, edges: Vec<Edge>) -> Self {
        Self { nodes, edges }
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|node| node.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.node(id).is_some()
    }

    /// First open road joining a and b, in either direction
    pub fn open_edge_between(&self, a: &str, b: &str) -> Option<&Edge> {
        self.edges.iter().find(|edge| !edge.blocked && edge.connects(a, b))
    }

    /// Iterator over edges that can be driven
    pub fn open_edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter().filter(|edge| !edge.blocked)
    }

    /// Number of distinct neighbors reachable over open edges
    pub fn degree(&self, id: &str) -> usize {
        let mut neighbors: Vec<&str> = Vec::new();
        for edge in self.open_edges() {
            let other = if edge.from == id {
                edge.to.as_str()
            } else if edge.to == id {
                edge.from.as_str()
            } else {
                continue;
            };
            if !neighbors.contains(&other) {
                neighbors.push(other);
            }
        }
        neighbors.len()
    }
}


/// Uniform result shape of every search algorithm
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub path: Vec<NodeId>,
    pub visited_nodes: Vec<NodeId>,
    pub steps_count: usize,
}

impl SearchResult {

    /// Result used when start or goal is not part of the graph
    pub fn missing_endpoint(start: &str) -> Self {
        Self {
            path: vec![start.to_string()],
            visited_nodes: Vec::new(),
            steps_count: 0,
        }
    }

    /// Build a result, steps always mirror the visited list
    pub fn new(path: Vec<NodeId>, visited_nodes: Vec<NodeId>) -> Self {
        let steps_count = visited_nodes.len();
        Self { path, visited_nodes, steps_count }
    }
}
