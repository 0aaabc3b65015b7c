use rand::Rng;
use rand::seq::IndexedRandom;

use crate::evaluation::check_correctness;
use crate::graph::{Graph, NodeId, SearchResult};
use crate::graph_algos::Algorithm;


/// How different two paths look: length difference plus positional mismatches
/// 0 means the paths are identical
pub fn path_difference(a: &[NodeId], b: &[NodeId]) -> usize {
    let mismatches = a.iter().zip(b).filter(|(left, right)| left != right).count();
    a.len().abs_diff(b.len()) + mismatches
}

/// Algorithm shown next to the correct one
#[derive(Clone, Debug, PartialEq)]
pub struct Distractor {
    pub algorithm: Algorithm,
    pub result: SearchResult,
    /// path_difference against the correct path
    pub score: usize,
    /// false when no other algorithm found a valid path and one was drawn at random
    pub valid: bool,
}

/// Pick the algorithm whose valid path differs most from the correct path
/// Ties go to the first algorithm in Algorithm::ALL order.
/// If no other algorithm finds a valid path, one is drawn at random.
pub fn choose_distractor<R: Rng>(
    graph: &Graph,
    start: &str,
    goal: &str,
    correct: Algorithm,
    correct_path: &[NodeId],
    rng: &mut R,
) -> Distractor {
    let others: Vec<Algorithm> = Algorithm::ALL.into_iter().filter(|&algorithm| algorithm != correct).collect();

    let mut best: Option<Distractor> = None;
    for &algorithm in &others {
        let result = algorithm.run(graph, start, goal);
        if !check_correctness(graph, &result.path, start, goal) {
            continue;
        }

        let score = path_difference(&result.path, correct_path);
        if best.as_ref().is_none_or(|current| score > current.score) {
            best = Some(Distractor { algorithm, result, score, valid: true });
        }
    }

    if let Some(best) = best {
        return best;
    }

    // others always holds four algorithms
    let algorithm = others.choose(rng).copied().unwrap_or(Algorithm::Dfs);
    let result = algorithm.run(graph, start, goal);
    let score = path_difference(&result.path, correct_path);
    log::debug!("no valid distractor, drew {algorithm} at random");
    Distractor { algorithm, result, score, valid: false }
}
