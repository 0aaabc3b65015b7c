use rand::Rng;
use rand::seq::SliceRandom;

use crate::graph::{Graph, NodeId};


/// Place up to count traffic cars
/// Nodes only the distractor drives through are filled first, the rest come from a
/// random sample of nodes off the correct path. Start, goal and the correct path stay clear.
pub(crate) fn place_traffic<R: Rng>(
    graph: &Graph,
    start: &str,
    goal: &str,
    correct_path: &[NodeId],
    distractor_path: &[NodeId],
    count: usize,
    rng: &mut R,
) -> Vec<NodeId> {
    let blocked_for_traffic = |id: &NodeId| id == start || id == goal || correct_path.contains(id);

    let mut preferred: Vec<NodeId> = Vec::new();
    for id in distractor_path {
        if !blocked_for_traffic(id) && !preferred.contains(id) {
            preferred.push(id.clone());
        }
    }
    preferred.shuffle(rng);
    preferred.truncate(count);

    let mut rest: Vec<NodeId> = graph
        .nodes
        .iter()
        .map(|node| node.id.clone())
        .filter(|id| !blocked_for_traffic(id) && !preferred.contains(id))
        .collect();
    rest.shuffle(rng);

    let missing = count - preferred.len();
    preferred.extend(rest.into_iter().take(missing));
    preferred
}
