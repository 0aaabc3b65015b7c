//! Graph search teaching engine.
//!
//! Builds procedural city maps, runs the classic search algorithms over them
//! (BFS, DFS, Dijkstra, A*, Bellman-Ford) and grades candidate paths against an
//! independently computed optimal solution.
//!
//! ```
//! use citysearch::{calculate_score, find_optimal_solution, generate_city_map, Algorithm, GenerateOptions, ScoreInput};
//!
//! let scene = generate_city_map(&GenerateOptions::default());
//! let candidate = Algorithm::Dfs.run(&scene.graph, &scene.start_id, &scene.goal_id);
//! let optimal = find_optimal_solution(&scene.graph, &scene.start_id, &scene.goal_id);
//!
//! let score = calculate_score(ScoreInput {
//!     graph: &scene.graph,
//!     student_solution: &candidate,
//!     optimal_solution: &optimal,
//!     start_id: &scene.start_id,
//!     goal_id: &scene.goal_id,
//! });
//! assert!(score.valid);
//! ```

pub mod errors;
mod collections;
pub mod geometry;
pub mod graph;
pub mod graph_algos;
pub mod evaluation;
pub mod map_gen;

pub use errors::{ConfigError, GeometryError, SearchError};
pub use graph::{Edge, Graph, Node, NodeId, SearchResult};
pub use graph_algos::{solve_by_algorithm, Algorithm};
pub use evaluation::{
    calculate_score, check_correctness, compute_path_cost, find_optimal_solution, grade_run,
    trace_attempt, OptimalSolution, Score, ScoreInput, SolverOutput,
};
pub use map_gen::{generate_city_map, CityMapGenerator, Difficulty, GenerateOptions, GeneratorConfig, Scene};
