use citysearch::graph_algos::run_bellman_ford;
use citysearch::map_gen::TemplateKind;
use citysearch::{
    calculate_score, check_correctness, compute_path_cost, find_optimal_solution, grade_run,
    solve_by_algorithm, Algorithm, CityMapGenerator, Difficulty, Edge, GenerateOptions, Graph,
    Node, Scene, ScoreInput, SolverOutput,
};
use rand::SeedableRng;
use rand::rngs::StdRng;


const DIFFICULTIES: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Every combination of algorithm and difficulty over a handful of seeds
fn scenes() -> Vec<Scene> {
    let generator = CityMapGenerator::default();
    let mut scenes = Vec::new();
    for algorithm in Algorithm::ALL {
        for difficulty in DIFFICULTIES {
            for seed in 0..4 {
                let mut rng = StdRng::seed_from_u64(seed);
                scenes.push(generator.generate(&GenerateOptions::new(algorithm, difficulty), &mut rng));
            }
        }
    }
    scenes
}

fn edge_count(path: &[String]) -> usize {
    path.len().saturating_sub(1)
}

#[test]
fn generated_maps_are_connected_and_solvable() {
    init_logger();
    for scene in scenes() {
        // Bellman-Ford lists every node with a finite distance
        let reachable = run_bellman_ford(&scene.graph, &scene.start_id, &scene.goal_id);
        assert_eq!(reachable.visited_nodes.len(), scene.graph.nodes.len(), "{}", scene.meta.template);

        let correct = scene.meta.correct_algorithm.run(&scene.graph, &scene.start_id, &scene.goal_id);
        assert!(check_correctness(&scene.graph, &correct.path, &scene.start_id, &scene.goal_id));

        assert_ne!(scene.meta.distractor_algorithm, scene.meta.correct_algorithm);
        assert_eq!(scene.graph.degree(&scene.goal_id), 1);
        assert!(scene.graph.edges.iter().all(|edge| edge.cost > 0.0 && edge.from != edge.to));
    }
}

#[test]
fn generated_maps_have_visibly_different_distractor() {
    for scene in scenes().into_iter().filter(|scene| scene.meta.generated) {
        let correct = scene.meta.correct_algorithm.run(&scene.graph, &scene.start_id, &scene.goal_id);
        let distractor = scene.meta.distractor_algorithm.run(&scene.graph, &scene.start_id, &scene.goal_id);

        assert!(scene.meta.distractor_path_score >= 1);
        assert_ne!(correct.path, distractor.path);
    }
}

#[test]
fn traffic_stays_off_the_correct_path() {
    for scene in scenes() {
        let profile = scene.meta.difficulty.profile();
        assert!(scene.traffic_cars.len() <= profile.traffic_count);

        let correct = scene.meta.correct_algorithm.run(&scene.graph, &scene.start_id, &scene.goal_id);
        for car in &scene.traffic_cars {
            assert!(!correct.path.contains(car));
            assert_ne!(car, &scene.start_id);
            assert_ne!(car, &scene.goal_id);
        }

        // the correct algorithm never crashes
        let report = grade_run(&scene, &correct);
        assert!(!report.attempt.crashed());
        assert!(report.attempt.reached_goal);
        assert_eq!(report.score.correctness_score, 100);
    }
}

#[test]
fn bfs_uses_fewest_roads() {
    for scene in scenes() {
        let bfs = solve_by_algorithm("bfs", &scene.graph, &scene.start_id, &scene.goal_id).unwrap();
        for name in ["dfs", "dijkstra", "astar", "bellmanFord"] {
            let other = solve_by_algorithm(name, &scene.graph, &scene.start_id, &scene.goal_id).unwrap();
            assert!(edge_count(&bfs.path) <= edge_count(&other.path), "{name} on {}", scene.meta.template);
        }
    }
}

#[test]
fn optimal_cost_matches_its_own_path() {
    for scene in scenes() {
        let optimal = find_optimal_solution(&scene.graph, &scene.start_id, &scene.goal_id);
        assert_eq!(compute_path_cost(&scene.graph, &optimal.path), optimal.cost);

        // Dijkstra and Bellman-Ford are exact whatever the heuristic does
        for algorithm in [Algorithm::Dijkstra, Algorithm::BellmanFord] {
            let result = algorithm.run(&scene.graph, &scene.start_id, &scene.goal_id);
            assert_eq!(compute_path_cost(&scene.graph, &result.path), optimal.cost);
        }
    }
}

#[test]
fn optimal_run_scores_full_marks() {
    for scene in scenes() {
        let optimal = find_optimal_solution(&scene.graph, &scene.start_id, &scene.goal_id);
        let candidate = citysearch::SearchResult::new(optimal.path.clone(), optimal.visited_nodes.clone());
        let score = calculate_score(ScoreInput {
            graph: &scene.graph,
            student_solution: &candidate,
            optimal_solution: &optimal,
            start_id: &scene.start_id,
            goal_id: &scene.goal_id,
        });
        assert_eq!(score.total_score, 100);
    }
}

#[test]
fn dijkstra_and_a_star_agree_when_heuristic_is_admissible() {
    // Roads cost at least their length / 120
    let graph = Graph::new(
        vec![
            Node::new("S", 0.0, 0.0),
            Node::new("A", 120.0, 0.0),
            Node::new("B", 120.0, 120.0),
            Node::new("C", 240.0, 120.0),
            Node::new("G", 240.0, 0.0),
        ],
        vec![
            Edge::new("S", "A", 3.0),
            Edge::new("A", "G", 3.0),
            Edge::new("S", "B", 2.0),
            Edge::new("B", "C", 1.0),
            Edge::new("C", "G", 1.0),
        ],
    );

    let dijkstra = Algorithm::Dijkstra.run(&graph, "S", "G");
    let a_star = Algorithm::AStar.run(&graph, "S", "G");
    assert_eq!(compute_path_cost(&graph, &dijkstra.path), 4.0);
    assert_eq!(compute_path_cost(&graph, &a_star.path), compute_path_cost(&graph, &dijkstra.path));
}

#[test]
fn dijkstra_easy_example() {
    let generator = CityMapGenerator::default();
    let mut rng = StdRng::seed_from_u64(2024);
    let scene = generator.generate(&GenerateOptions::new(Algorithm::Dijkstra, Difficulty::Easy), &mut rng);

    assert_eq!(scene.meta.correct_algorithm, Algorithm::Dijkstra);
    assert_ne!(scene.meta.distractor_algorithm, Algorithm::Dijkstra);
}

#[test]
fn untrusted_solver_output_is_graded() {
    let generator = CityMapGenerator::default();
    let mut rng = StdRng::seed_from_u64(6);
    let scene = generator.generate(&GenerateOptions::new(Algorithm::Bfs, Difficulty::Medium), &mut rng);

    // a solver that loops around without reaching the goal
    let raw = serde_json::json!({ "path": [scene.start_id.clone(), "nowhere"], "visitedNodes": "oops" });
    let candidate = SolverOutput::from_json(&raw);
    assert!(candidate.visited_nodes.is_empty());

    let report = grade_run(&scene, &candidate);
    assert!(!report.score.valid);
    assert_eq!(report.score.total_score, 0);
    assert_eq!(report.attempt.driven_path, vec![scene.start_id.clone()]);
}

#[test]
fn scene_round_trips_through_json() {
    let generator = CityMapGenerator::default();
    let mut rng = StdRng::seed_from_u64(77);
    let scene = generator.generate(&GenerateOptions::new(Algorithm::BellmanFord, Difficulty::Hard), &mut rng);

    let json = serde_json::to_string(&scene).unwrap();
    let back: Scene = serde_json::from_str(&json).unwrap();
    assert_eq!(back, scene);
    assert!(TemplateKind::ALL.iter().any(|kind| kind.name() == back.meta.template));
}
