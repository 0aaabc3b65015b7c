use rand::Rng;
use rand::seq::SliceRandom;

use crate::collections::{FxHashSet, FxIndexMap};
use crate::graph::{Edge, Graph};
use crate::graph_algos::run_bfs;
use super::config::{CostRange, GeneratorConfig};
use super::validate::accepts_edge;


/// Add up to max_count optional roads in random order
/// Each road must pass the acceptance rules against the roads already on the map
pub(crate) fn add_optional_edges<R: Rng>(
    graph: &mut Graph,
    optional_edges: &[(&str, &str)],
    max_count: usize,
    config: &GeneratorConfig,
    rng: &mut R,
) {
    let mut candidates = optional_edges.to_vec();
    candidates.shuffle(rng);

    let mut added = 0;
    for (from, to) in candidates {
        if added >= max_count {
            break;
        }
        match accepts_edge(graph, from, to, config) {
            Ok(()) => {
                log::trace!("optional road {from}-{to} accepted");
                graph.edges.push(Edge::new(from, to, 1.0));
                added += 1;
            }
            Err(reason) => log::trace!("optional road {from}-{to} refused: {reason}"),
        }
    }
}


/// Shift every lane by a random multiple of the jitter step
/// Nodes sharing an x (or y) coordinate move together so straight roads stay straight,
/// then every node is clamped into the safe box
pub(crate) fn apply_lane_jitter<R: Rng>(graph: &mut Graph, config: &GeneratorConfig, rng: &mut R) {
    // lane coordinate -> node indexes, in first seen order so seeded runs repeat
    let mut columns: FxIndexMap<u64, Vec<usize>> = FxIndexMap::default();
    let mut rows: FxIndexMap<u64, Vec<usize>> = FxIndexMap::default();
    for (index, node) in graph.nodes.iter().enumerate() {
        columns.entry(node.x.to_bits()).or_default().push(index);
        rows.entry(node.y.to_bits()).or_default().push(index);
    }

    for members in columns.values() {
        let shift = jitter_offset(config, rng);
        for &index in members {
            graph.nodes[index].x += shift;
        }
    }
    for members in rows.values() {
        let shift = jitter_offset(config, rng);
        for &index in members {
            graph.nodes[index].y += shift;
        }
    }

    for node in &mut graph.nodes {
        node.x = node.x.clamp(config.min_x, config.max_x);
        node.y = node.y.clamp(config.min_y, config.max_y);
    }
}

fn jitter_offset<R: Rng>(config: &GeneratorConfig, rng: &mut R) -> f64 {
    let steps = rng.random_range(-config.jitter_steps..=config.jitter_steps);
    steps as f64 * config.jitter_step
}


/// Give roads on the canonical BFS path a main cost and every other road an alternative cost
pub(crate) fn assign_edge_costs<R: Rng>(
    graph: &mut Graph,
    start: &str,
    goal: &str,
    main_cost: CostRange,
    alt_cost: CostRange,
    rng: &mut R,
) {
    let canonical = run_bfs(graph, start, goal).path;

    let mut backbone: FxHashSet<usize> = FxHashSet::default();
    for pair in canonical.windows(2) {
        if let Some(index) = graph.edges.iter().position(|edge| !edge.blocked && edge.connects(&pair[0], &pair[1])) {
            backbone.insert(index);
        }
    }

    for (index, edge) in graph.edges.iter_mut().enumerate() {
        let range = if backbone.contains(&index) { main_cost } else { alt_cost };
        edge.cost = random_cost(range, rng);
    }
}

/// Same cost range for every road
pub(crate) fn assign_uniform_costs<R: Rng>(graph: &mut Graph, range: CostRange, rng: &mut R) {
    for edge in &mut graph.edges {
        edge.cost = random_cost(range, rng);
    }
}

fn random_cost<R: Rng>(range: CostRange, rng: &mut R) -> f64 {
    rng.random_range(range.min..=range.max) as f64
}
