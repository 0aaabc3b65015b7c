use serde::Serialize;
use thiserror::Error;

use crate::graph::{Graph, NodeId, SearchResult};
use crate::map_gen::Scene;
use super::{calculate_score, find_optimal_solution, OptimalSolution, Score, ScoreInput};


/// Why a drive along a candidate path stopped short
#[derive(Clone, Debug, Error, PartialEq, Eq, Serialize)]
pub enum AttemptIssue {
    #[error("Invalid path: return at least one node.")]
    Empty,

    #[error("Path must start at {0}.")]
    WrongStart(NodeId),

    #[error("Node \"{0}\" does not exist in this map.")]
    UnknownNode(NodeId),

    #[error("Invalid move: {from} -> {to} is not a road.")]
    NotARoad { from: NodeId, to: NodeId },

    #[error("Car did not reach the finish ({0}).")]
    DidNotFinish(NodeId),

    #[error("Crashed into traffic at {0}.")]
    Crashed(NodeId),
}

/// The part of a candidate path a car can actually drive
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Attempt {
    pub driven_path: Vec<NodeId>,
    pub reached_goal: bool,
    pub issue: Option<AttemptIssue>,
    pub crash_node: Option<NodeId>,
}

impl Attempt {
    fn stopped(start: &str, issue: AttemptIssue) -> Self {
        Self {
            driven_path: vec![start.to_string()],
            reached_goal: false,
            issue: Some(issue),
            crash_node: None,
        }
    }

    pub fn crashed(&self) -> bool {
        self.crash_node.is_some()
    }
}

/// Drive a car along path, stopping at the first bad move or traffic car
pub fn trace_attempt(graph: &Graph, path: &[NodeId], start: &str, goal: &str, traffic_cars: &[NodeId]) -> Attempt {
    let Some(first) = path.first() else {
        return Attempt::stopped(start, AttemptIssue::Empty);
    };
    if first != start {
        return Attempt::stopped(start, AttemptIssue::WrongStart(start.to_string()));
    }

    let mut driven_path = vec![first.clone()];
    let mut issue = None;

    for pair in path.windows(2) {
        let (from, to) = (&pair[0], &pair[1]);

        if !graph.contains(to) {
            issue = Some(AttemptIssue::UnknownNode(to.clone()));
            break;
        }
        if graph.open_edge_between(from, to).is_none() {
            issue = Some(AttemptIssue::NotARoad { from: from.clone(), to: to.clone() });
            break;
        }

        driven_path.push(to.clone());
    }

    // the car stops at the first traffic car it drives into
    let crash_at = driven_path
        .iter()
        .skip(1)
        .position(|node| traffic_cars.contains(node))
        .map(|position| position + 1);
    if let Some(crash_index) = crash_at {
        driven_path.truncate(crash_index + 1);
        let crash_node = driven_path[crash_index].clone();
        return Attempt {
            driven_path,
            reached_goal: false,
            issue: Some(AttemptIssue::Crashed(crash_node.clone())),
            crash_node: Some(crash_node),
        };
    }

    let reached_goal = driven_path.last().is_some_and(|node| node == goal);
    if issue.is_none() && !reached_goal {
        issue = Some(AttemptIssue::DidNotFinish(goal.to_string()));
    }

    Attempt { driven_path, reached_goal, issue, crash_node: None }
}


/// Outcome of running one candidate on a scene
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunReport {
    pub attempt: Attempt,
    pub optimal: OptimalSolution,
    pub score: Score,
}

/// Trace, score and penalise a candidate solution on a scene
/// A crash into traffic wipes every sub-score
pub fn grade_run(scene: &Scene, candidate: &SearchResult) -> RunReport {
    let attempt = trace_attempt(&scene.graph, &candidate.path, &scene.start_id, &scene.goal_id, &scene.traffic_cars);
    let optimal = find_optimal_solution(&scene.graph, &scene.start_id, &scene.goal_id);

    let score = calculate_score(ScoreInput {
        graph: &scene.graph,
        student_solution: candidate,
        optimal_solution: &optimal,
        start_id: &scene.start_id,
        goal_id: &scene.goal_id,
    });
    let score = if attempt.crashed() { score.zeroed() } else { score };

    log::debug!(
        "graded run on {}: total {} ({:?})",
        scene.meta.template,
        score.total_score,
        attempt.issue,
    );

    RunReport { attempt, optimal, score }
}
