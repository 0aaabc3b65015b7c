use serde::{Deserialize, Serialize};

use crate::graph::{Graph, SearchResult};
use super::{check_correctness, compute_path_cost, OptimalSolution};


/// Weight of each sub-score in the total
const CORRECTNESS_WEIGHT: f64 = 0.4;
const OPTIMALITY_WEIGHT: f64 = 0.3;
const EFFICIENCY_WEIGHT: f64 = 0.3;

/// Lowest optimality granted to a valid but more expensive path
const OPTIMALITY_FLOOR: u32 = 50;

/// Everything needed to grade a candidate solution
#[derive(Clone, Copy, Debug)]
pub struct ScoreInput<'a> {
    pub graph: &'a Graph,
    pub student_solution: &'a SearchResult,
    pub optimal_solution: &'a OptimalSolution,
    pub start_id: &'a str,
    pub goal_id: &'a str,
}

/// Sub-scores are percentages in 0..=100
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Score {
    pub valid: bool,
    pub correctness_score: u32,
    pub optimality_score: u32,
    pub efficiency_score: u32,
    pub total_score: u32,
    pub student_cost: f64,
    pub optimal_cost: f64,
}

impl Score {

    /// Same costs, every sub-score wiped
    pub fn zeroed(&self) -> Self {
        Self {
            valid: self.valid,
            correctness_score: 0,
            optimality_score: 0,
            efficiency_score: 0,
            total_score: 0,
            student_cost: self.student_cost,
            optimal_cost: self.optimal_cost,
        }
    }
}

/// Grade a candidate against the optimal solution
/// correctness: 100 if the path is valid
/// optimality: 100 at optimal cost, otherwise the cost ratio floored at 50
/// efficiency: optimal visited count over candidate visited count, capped at 100
pub fn calculate_score(input: ScoreInput<'_>) -> Score {
    let ScoreInput { graph, student_solution, optimal_solution, start_id, goal_id } = input;

    let valid = check_correctness(graph, &student_solution.path, start_id, goal_id);
    let student_cost = compute_path_cost(graph, &student_solution.path);
    let optimal_cost = optimal_solution.cost;

    let correctness_score = if valid { 100 } else { 0 };

    let optimality_score = if !valid || !student_cost.is_finite() || !optimal_cost.is_finite() {
        0
    } else if student_cost == optimal_cost {
        100
    } else {
        OPTIMALITY_FLOOR.max(percentage(optimal_cost / student_cost))
    };

    // both counts floored at one so neither side divides by zero
    let student_visited = student_solution.visited_nodes.len().max(1) as f64;
    let optimal_visited = optimal_solution.visited_nodes.len().max(1) as f64;
    let efficiency_score = if valid {
        percentage(optimal_visited / student_visited).min(100)
    } else {
        0
    };

    let total_score = (correctness_score as f64 * CORRECTNESS_WEIGHT
        + optimality_score as f64 * OPTIMALITY_WEIGHT
        + efficiency_score as f64 * EFFICIENCY_WEIGHT)
        .round() as u32;

    Score {
        valid,
        correctness_score,
        optimality_score,
        efficiency_score,
        total_score,
        student_cost,
        optimal_cost,
    }
}

/// Ratio as a rounded, non-negative percentage
fn percentage(ratio: f64) -> u32 {
    (ratio * 100.0).round().max(0.0) as u32
}
