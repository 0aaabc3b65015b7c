use serde::{Deserialize, Serialize};

use crate::geometry::{House, Point};
use crate::graph::{Edge, Graph, Node};


/// Fixed road skeletons the generator starts from
/// Every template lays its nodes on three lanes (y = 240, 450, 660) and up to five columns.
/// The goal is a dead end, houses sit above and below the lanes, trees sit in road-free blocks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateKind {
    RingRoad,
    MarketGrid,
    Crossroads,
    Switchbacks,
}

impl TemplateKind {

    pub const ALL: [TemplateKind; 4] = [
        TemplateKind::RingRoad,
        TemplateKind::MarketGrid,
        TemplateKind::Crossroads,
        TemplateKind::Switchbacks,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            TemplateKind::RingRoad => "ring_road",
            TemplateKind::MarketGrid => "market_grid",
            TemplateKind::Crossroads => "crossroads",
            TemplateKind::Switchbacks => "switchbacks",
        }
    }

    pub fn template(&self) -> Template {
        match self {
            TemplateKind::RingRoad => ring_road(),
            TemplateKind::MarketGrid => market_grid(),
            TemplateKind::Crossroads => crossroads(),
            TemplateKind::Switchbacks => switchbacks(),
        }
    }
}


/// Road skeleton plus scenery
#[derive(Clone, Debug)]
pub struct Template {
    pub kind: TemplateKind,
    pub start: &'static str,
    pub goal: &'static str,
    pub nodes: Vec<Node>,
    /// roads always present
    pub edges: Vec<(&'static str, &'static str)>,
    /// roads the generator may add if they pass the acceptance rules
    pub optional_edges: Vec<(&'static str, &'static str)>,
    pub houses: Vec<House>,
    pub trees: Vec<Point>,
}

impl Template {

    /// Graph with only the fixed roads, every road costs 1
    pub fn base_graph(&self) -> Graph {
        Graph::new(
            self.nodes.clone(),
            self.edges.iter().map(|&(from, to)| Edge::new(from, to, 1.0)).collect(),
        )
    }

    fn new(kind: TemplateKind, nodes: &[(&'static str, f64, f64)], edges: &[(&'static str, &'static str)]) -> Self {
        let start = nodes[0].0;
        let goal = nodes[nodes.len() - 1].0;
        Self {
            kind,
            start,
            goal,
            nodes: nodes.iter().map(|&(id, x, y)| Node::new(id, x, y)).collect(),
            edges: edges.to_vec(),
            optional_edges: Vec::new(),
            houses: edge_houses(),
            trees: edge_trees(),
        }
    }

    fn with_optional(mut self, optional_edges: &[(&'static str, &'static str)]) -> Self {
        self.optional_edges = optional_edges.to_vec();
        self
    }

    fn with_trees(mut self, trees: &[(f64, f64)]) -> Self {
        self.trees.extend(trees.iter().map(|&(x, y)| Point::new(x, y)));
        self
    }
}

/// Houses along the top and bottom of the map, clear of every lane
fn edge_houses() -> Vec<House> {
    vec![
        House::new(150.0, 40.0, 300.0, 100.0),
        House::new(700.0, 30.0, 260.0, 110.0),
        House::new(120.0, 760.0, 320.0, 90.0),
        House::new(760.0, 750.0, 280.0, 100.0),
    ]
}

fn edge_trees() -> Vec<Point> {
    vec![
        Point::new(560.0, 100.0),
        Point::new(1080.0, 110.0),
        Point::new(600.0, 800.0),
        Point::new(1120.0, 790.0),
    ]
}


// In every template the first node is the start and the last node is the goal.

/// A main street with a loop above and below it
fn ring_road() -> Template {
    Template::new(
        TemplateKind::RingRoad,
        &[
            ("A", 140.0, 450.0),
            ("B", 380.0, 450.0),
            ("C", 640.0, 450.0),
            ("D", 900.0, 450.0),
            ("F", 380.0, 240.0),
            ("G", 640.0, 240.0),
            ("H", 900.0, 240.0),
            ("I", 380.0, 660.0),
            ("J", 640.0, 660.0),
            ("E", 1140.0, 450.0),
        ],
        &[
            ("A", "B"), ("B", "C"), ("C", "D"), ("D", "E"),
            ("B", "F"), ("F", "G"), ("G", "H"), ("H", "D"),
            ("B", "I"), ("I", "J"), ("J", "C"),
        ],
    )
    .with_optional(&[("C", "G"), ("D", "J"), ("C", "F")])
    .with_trees(&[(220.0, 330.0), (220.0, 570.0), (1030.0, 330.0), (1030.0, 580.0)])
}

/// Three by three blocks, start bottom left, goal top right
fn market_grid() -> Template {
    Template::new(
        TemplateKind::MarketGrid,
        &[
            ("A", 140.0, 660.0),
            ("B", 380.0, 660.0),
            ("C", 640.0, 660.0),
            ("D", 900.0, 660.0),
            ("E", 380.0, 450.0),
            ("F", 640.0, 450.0),
            ("G", 900.0, 450.0),
            ("H", 380.0, 240.0),
            ("I", 640.0, 240.0),
            ("J", 900.0, 240.0),
            ("K", 1140.0, 240.0),
        ],
        &[
            ("A", "B"), ("B", "C"), ("C", "D"),
            ("B", "E"), ("C", "F"), ("D", "G"),
            ("E", "F"), ("F", "G"),
            ("E", "H"), ("H", "I"), ("I", "J"), ("J", "K"), ("G", "J"),
        ],
    )
    // F-H and E-I cross each other, only one of them can be accepted
    .with_optional(&[("F", "I"), ("C", "E"), ("F", "H"), ("E", "I"), ("D", "F")])
    .with_trees(&[(230.0, 340.0), (240.0, 540.0), (1040.0, 360.0), (1040.0, 560.0)])
}

/// Two bypasses around a busy middle road
fn crossroads() -> Template {
    Template::new(
        TemplateKind::Crossroads,
        &[
            ("A", 140.0, 450.0),
            ("B", 300.0, 450.0),
            ("C", 520.0, 450.0),
            ("D", 760.0, 450.0),
            ("E", 980.0, 450.0),
            ("G", 300.0, 240.0),
            ("H", 520.0, 240.0),
            ("I", 760.0, 240.0),
            ("J", 980.0, 240.0),
            ("K", 300.0, 660.0),
            ("L", 520.0, 660.0),
            ("M", 760.0, 660.0),
            ("N", 980.0, 660.0),
            ("F", 1140.0, 450.0),
        ],
        &[
            ("A", "B"), ("B", "C"), ("C", "D"), ("D", "E"), ("E", "F"),
            ("B", "G"), ("G", "H"), ("H", "I"), ("I", "J"), ("J", "E"),
            ("B", "K"), ("K", "L"), ("L", "M"), ("M", "N"), ("N", "E"),
            ("H", "C"), ("M", "D"),
        ],
    )
    // D-H and C-I cross each other
    .with_optional(&[("I", "D"), ("C", "L"), ("D", "H"), ("C", "I"), ("L", "D")])
    .with_trees(&[(200.0, 320.0), (200.0, 580.0), (1070.0, 330.0), (1070.0, 570.0)])
}

/// Long zig-zag from the top left down to a bottom right dead end
fn switchbacks() -> Template {
    Template::new(
        TemplateKind::Switchbacks,
        &[
            ("A", 140.0, 240.0),
            ("B", 380.0, 240.0),
            ("C", 640.0, 240.0),
            ("D", 900.0, 240.0),
            ("E", 1140.0, 240.0),
            ("F", 380.0, 450.0),
            ("G", 640.0, 450.0),
            ("H", 900.0, 450.0),
            ("I", 1140.0, 450.0),
            ("J", 380.0, 660.0),
            ("K", 640.0, 660.0),
            ("L", 900.0, 660.0),
            ("M", 1140.0, 660.0),
        ],
        &[
            ("A", "B"), ("B", "C"), ("C", "D"), ("D", "E"), ("E", "I"),
            ("B", "F"), ("F", "G"), ("G", "H"), ("H", "I"),
            ("F", "J"), ("J", "K"), ("K", "L"), ("L", "M"),
            ("C", "G"), ("H", "L"),
        ],
    )
    // G-L and K-H cross each other
    .with_optional(&[("D", "H"), ("G", "K"), ("C", "F"), ("G", "L"), ("K", "H"), ("D", "I")])
    .with_trees(&[(240.0, 350.0), (250.0, 550.0)])
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_templates_reference_known_nodes() {
        for kind in TemplateKind::ALL {
            let template = kind.template();
            let graph = template.base_graph();
            for &(from, to) in template.edges.iter().chain(&template.optional_edges) {
                assert!(graph.contains(from) && graph.contains(to), "{} {from}-{to}", kind.name());
                assert_ne!(from, to);
            }
        }
    }

    #[test]
    fn test_templates_have_dead_end_goal() {
        for kind in TemplateKind::ALL {
            let template = kind.template();
            let graph = template.base_graph();
            assert_eq!(graph.degree(template.goal), 1, "{}", kind.name());
            assert!(graph.degree(template.start) >= 1);
            for node in &graph.nodes {
                if node.id != template.start && node.id != template.goal {
                    assert!(graph.degree(&node.id) >= 2, "{} {}", kind.name(), node.id);
                }
            }
        }
    }

    #[test]
    fn test_optional_edges_never_touch_goal() {
        for kind in TemplateKind::ALL {
            let template = kind.template();
            assert!(template.optional_edges.iter().all(|&(from, to)| from != template.goal && to != template.goal));
        }
    }
}
