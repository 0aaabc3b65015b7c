use std::collections::VecDeque;
use thiserror::Error;

use crate::collections::FxHashSet;
use crate::geometry::{point_segment_distance, segments_cross, House, Point};
use crate::graph::{Edge, Graph, NodeId};
use crate::graph_algos::Algorithm;
use super::config::GeneratorConfig;


/// Reason a candidate map or road was turned down
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum Rejection {
    #[error("road {0}-{1} already exists")]
    DuplicateEdge(NodeId, NodeId),

    #[error("{unreachable} nodes cannot be reached from the start")]
    Disconnected { unreachable: usize },

    #[error("goal has degree {0}, expected a dead end")]
    GoalNotDeadEnd(usize),

    #[error("start has no road")]
    StartIsolated,

    #[error("interior node {0} is a dead end")]
    InteriorDeadEnd(NodeId),

    #[error("node {0} has degree {1}")]
    DegreeTooHigh(NodeId, usize),

    #[error("{0} diagonal roads")]
    TooManyDiagonals(usize),

    #[error("node {0} has too many diagonal roads")]
    TooManyDiagonalsAt(NodeId),

    #[error("roads {0} and {1} cross")]
    Crossing(String, String),

    #[error("road {road} runs over node {node}")]
    ThroughNode { road: String, node: NodeId },

    #[error("road {0} runs through a house")]
    ThroughHouse(String),

    #[error("road {0} runs through a tree")]
    ThroughTree(String),

    #[error("{0} found no valid path")]
    CorrectPathInvalid(Algorithm),

    #[error("distractor {0} drives the same path")]
    IdenticalDistractor(Algorithm),
}


fn label(edge: &Edge) -> String {
    format!("{}-{}", edge.from, edge.to)
}

/// Both endpoints of an edge, None if either node is unknown
fn segment(graph: &Graph, from: &str, to: &str) -> Option<(Point, Point)> {
    Some((graph.node(from)?.point(), graph.node(to)?.point()))
}

/// A road that is neither horizontal nor vertical
pub(crate) fn is_diagonal(graph: &Graph, from: &str, to: &str) -> bool {
    match segment(graph, from, to) {
        Some((a, b)) => (a.x - b.x).abs() > f64::EPSILON && (a.y - b.y).abs() > f64::EPSILON,
        None => false,
    }
}

fn diagonal_count(graph: &Graph) -> usize {
    graph.open_edges().filter(|edge| is_diagonal(graph, &edge.from, &edge.to)).count()
}

fn diagonal_count_at(graph: &Graph, id: &str) -> usize {
    graph
        .open_edges()
        .filter(|edge| edge.touches(id) && is_diagonal(graph, &edge.from, &edge.to))
        .count()
}

/// Check whether a new road from-to keeps the map readable
/// Used when adding optional roads, before the road is pushed
pub(crate) fn accepts_edge(graph: &Graph, from: &str, to: &str, config: &GeneratorConfig) -> Result<(), Rejection> {
    if graph.open_edge_between(from, to).is_some() {
        return Err(Rejection::DuplicateEdge(from.to_string(), to.to_string()));
    }

    for id in [from, to] {
        let degree = graph.degree(id) + 1;
        if degree > config.max_degree {
            return Err(Rejection::DegreeTooHigh(id.to_string(), degree));
        }
    }

    if is_diagonal(graph, from, to) {
        let total = diagonal_count(graph) + 1;
        if total > config.max_diagonal_edges {
            return Err(Rejection::TooManyDiagonals(total));
        }
        for id in [from, to] {
            if diagonal_count_at(graph, id) + 1 > config.max_diagonal_per_node {
                return Err(Rejection::TooManyDiagonalsAt(id.to_string()));
            }
        }
    }

    let Some((a, b)) = segment(graph, from, to) else {
        return Ok(());
    };
    for edge in graph.open_edges() {
        let Some((c, d)) = segment(graph, &edge.from, &edge.to) else {
            continue;
        };
        if segments_cross(&a, &b, &c, &d) {
            return Err(Rejection::Crossing(format!("{from}-{to}"), label(edge)));
        }
    }

    Ok(())
}


/// Full check of a candidate map
pub(crate) fn validate(
    graph: &Graph,
    start: &str,
    goal: &str,
    houses: &[House],
    trees: &[Point],
    config: &GeneratorConfig,
) -> Result<(), Rejection> {
    check_connected(graph, start)?;
    check_dead_ends(graph, start, goal)?;
    check_readable(graph, config)?;
    check_scenery(graph, houses, trees, config)
}

/// Every node is reachable from the start
fn check_connected(graph: &Graph, start: &str) -> Result<(), Rejection> {
    let mut seen: FxHashSet<&str> = FxHashSet::default();
    let mut queue = VecDeque::new();
    if graph.contains(start) {
        seen.insert(start);
        queue.push_back(start);
    }

    while let Some(current) = queue.pop_front() {
        for edge in graph.open_edges() {
            let next = if edge.from == current {
                edge.to.as_str()
            } else if edge.to == current {
                edge.from.as_str()
            } else {
                continue;
            };
            if graph.contains(next) && seen.insert(next) {
                queue.push_back(next);
            }
        }
    }

    let unreachable = graph.nodes.len() - seen.len();
    if unreachable > 0 {
        return Err(Rejection::Disconnected { unreachable });
    }
    Ok(())
}

/// Goal is a dead end, start has a road, every other node has two or more
fn check_dead_ends(graph: &Graph, start: &str, goal: &str) -> Result<(), Rejection> {
    let goal_degree = graph.degree(goal);
    if goal_degree != 1 {
        return Err(Rejection::GoalNotDeadEnd(goal_degree));
    }
    if graph.degree(start) < 1 {
        return Err(Rejection::StartIsolated);
    }
    for node in &graph.nodes {
        if node.id != start && node.id != goal && graph.degree(&node.id) < 2 {
            return Err(Rejection::InteriorDeadEnd(node.id.clone()));
        }
    }
    Ok(())
}

/// Degree and diagonal caps, no crossings and no road drawn over a node
fn check_readable(graph: &Graph, config: &GeneratorConfig) -> Result<(), Rejection> {
    for node in &graph.nodes {
        let degree = graph.degree(&node.id);
        if degree > config.max_degree {
            return Err(Rejection::DegreeTooHigh(node.id.clone(), degree));
        }
        if diagonal_count_at(graph, &node.id) > config.max_diagonal_per_node {
            return Err(Rejection::TooManyDiagonalsAt(node.id.clone()));
        }
    }

    let diagonals = diagonal_count(graph);
    if diagonals > config.max_diagonal_edges {
        return Err(Rejection::TooManyDiagonals(diagonals));
    }

    let roads: Vec<(&Edge, Point, Point)> = graph
        .open_edges()
        .filter_map(|edge| segment(graph, &edge.from, &edge.to).map(|(a, b)| (edge, a, b)))
        .collect();

    for (i, (edge, a, b)) in roads.iter().enumerate() {
        for (other, c, d) in &roads[i + 1..] {
            if segments_cross(a, b, c, d) {
                return Err(Rejection::Crossing(label(edge), label(other)));
            }
        }

        for node in &graph.nodes {
            if edge.touches(&node.id) {
                continue;
            }
            if point_segment_distance(&node.point(), a, b) < config.node_clearance {
                return Err(Rejection::ThroughNode { road: label(edge), node: node.id.clone() });
            }
        }
    }

    Ok(())
}

/// Roads keep clear of expanded houses and of trees
fn check_scenery(graph: &Graph, houses: &[House], trees: &[Point], config: &GeneratorConfig) -> Result<(), Rejection> {
    let footprints: Vec<_> = houses.iter().map(|house| house.expanded(config.house_margin).to_polygon()).collect();

    for edge in graph.open_edges() {
        let Some((a, b)) = segment(graph, &edge.from, &edge.to) else {
            continue;
        };
        if footprints.iter().any(|footprint| footprint.line_intersects(&a, &b)) {
            return Err(Rejection::ThroughHouse(label(edge)));
        }
        if trees.iter().any(|tree| point_segment_distance(tree, &a, &b) < config.tree_clearance) {
            return Err(Rejection::ThroughTree(label(edge)));
        }
    }

    Ok(())
}
