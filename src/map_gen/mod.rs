//! Procedural city maps.
//!
//! A map starts from a fixed template, gains a few optional roads, has its lanes jittered
//! and its roads priced, then must pass validation. The correct algorithm has to find a
//! valid path and a distractor algorithm has to drive a visibly different one. Failed
//! candidates are resampled a bounded number of times; after that the bare template is
//! used, so generation never fails.

pub mod config;
pub mod templates;
mod layout;
mod validate;
mod distractor;
mod traffic;

pub use config::{CostRange, Difficulty, DifficultyProfile, GenerateOptions, GeneratorConfig};
pub use distractor::{choose_distractor, path_difference, Distractor};
pub use templates::{Template, TemplateKind};
pub use validate::Rejection;

use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;
use crate::evaluation::check_correctness;
use crate::geometry::{House, Point};
use crate::graph::{Graph, NodeId, SearchResult};
use crate::graph_algos::Algorithm;


/// Per run metadata of a scene
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneMeta {
    pub correct_algorithm: Algorithm,
    pub distractor_algorithm: Algorithm,
    pub difficulty: Difficulty,
    pub template: String,
    pub distractor_path_score: usize,
    /// false when no other algorithm found a valid path and the distractor was drawn at random
    pub distractor_valid: bool,
    /// false when the bare template fallback was used
    pub generated: bool,
}

/// A complete generated map, replaced as a whole on regeneration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scene {
    pub graph: Graph,
    pub start_id: NodeId,
    pub goal_id: NodeId,
    pub obstacles: Vec<NodeId>,
    pub traffic_cars: Vec<NodeId>,
    pub houses: Vec<House>,
    pub trees: Vec<Point>,
    pub meta: SceneMeta,
}


/// Generate a city map with the thread local random source
pub fn generate_city_map(options: &GenerateOptions) -> Scene {
    let mut rng = rand::rng();
    CityMapGenerator::default().generate(options, &mut rng)
}


/// Accepted candidate, ready to become a scene
struct Candidate {
    template: Template,
    graph: Graph,
    correct: SearchResult,
    distractor: Distractor,
}

pub struct CityMapGenerator {
    config: GeneratorConfig,
}

impl CityMapGenerator {

    /// Fails on a config that could not always produce a scene
    pub fn new(config: GeneratorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Generate a scene, all randomness comes from rng
    /// Always returns a scene: after max_attempts rejected candidates the bare template is used
    pub fn generate<R: Rng>(&self, options: &GenerateOptions, rng: &mut R) -> Scene {
        let correct = options.algorithm();
        let difficulty = options.difficulty();
        let profile = difficulty.profile();

        for attempt in 1..=self.config.max_attempts {
            let kind = pick_template(&profile, rng);
            match self.try_candidate(kind, &profile, correct, rng) {
                Ok(candidate) => {
                    log::info!(
                        "accepted {} map on attempt {attempt}: {correct} vs {} (score {})",
                        kind.name(),
                        candidate.distractor.algorithm,
                        candidate.distractor.score,
                    );
                    return self.build_scene(candidate, &profile, correct, difficulty, true, rng);
                }
                Err(reason) => log::debug!("attempt {attempt} on {} rejected: {reason}", kind.name()),
            }
        }

        log::warn!(
            "no {difficulty} map for {correct} after {} attempts, using a bare template",
            self.config.max_attempts
        );
        let kind = pick_template(&profile, rng);
        let candidate = self.fallback_candidate(kind, correct, rng);
        self.build_scene(candidate, &profile, correct, difficulty, false, rng)
    }

    /// One pass of the generation pipeline
    fn try_candidate<R: Rng>(
        &self,
        kind: TemplateKind,
        profile: &DifficultyProfile,
        correct: Algorithm,
        rng: &mut R,
    ) -> Result<Candidate, Rejection> {
        let template = kind.template();
        let mut graph = template.base_graph();

        layout::add_optional_edges(&mut graph, &template.optional_edges, profile.max_optional_edges, &self.config, rng);
        layout::apply_lane_jitter(&mut graph, &self.config, rng);
        layout::assign_edge_costs(&mut graph, template.start, template.goal, profile.main_cost, profile.alt_cost, rng);

        validate::validate(&graph, template.start, template.goal, &template.houses, &template.trees, &self.config)?;

        let correct_result = correct.run(&graph, template.start, template.goal);
        if !check_correctness(&graph, &correct_result.path, template.start, template.goal) {
            return Err(Rejection::CorrectPathInvalid(correct));
        }

        let distractor = choose_distractor(&graph, template.start, template.goal, correct, &correct_result.path, rng);
        if distractor.score < 1 {
            return Err(Rejection::IdenticalDistractor(distractor.algorithm));
        }

        Ok(Candidate { template, graph, correct: correct_result, distractor })
    }

    /// Bare template with the fallback cost range, accepted whatever the distractor does
    fn fallback_candidate<R: Rng>(&self, kind: TemplateKind, correct: Algorithm, rng: &mut R) -> Candidate {
        let template = kind.template();
        let mut graph = template.base_graph();
        layout::assign_uniform_costs(&mut graph, self.config.fallback_cost, rng);

        let correct_result = correct.run(&graph, template.start, template.goal);
        let distractor = choose_distractor(&graph, template.start, template.goal, correct, &correct_result.path, rng);

        Candidate { template, graph, correct: correct_result, distractor }
    }

    fn build_scene<R: Rng>(
        &self,
        candidate: Candidate,
        profile: &DifficultyProfile,
        correct: Algorithm,
        difficulty: Difficulty,
        generated: bool,
        rng: &mut R,
    ) -> Scene {
        let Candidate { template, graph, correct: correct_result, distractor } = candidate;

        let traffic_cars = traffic::place_traffic(
            &graph,
            template.start,
            template.goal,
            &correct_result.path,
            &distractor.result.path,
            profile.traffic_count,
            rng,
        );

        Scene {
            start_id: template.start.to_string(),
            goal_id: template.goal.to_string(),
            obstacles: Vec::new(),
            traffic_cars,
            houses: template.houses,
            trees: template.trees,
            meta: SceneMeta {
                correct_algorithm: correct,
                distractor_algorithm: distractor.algorithm,
                difficulty,
                template: template.kind.name().to_string(),
                distractor_path_score: distractor.score,
                distractor_valid: distractor.valid,
                generated,
            },
            graph,
        }
    }
}

impl Default for CityMapGenerator {
    fn default() -> Self {
        Self { config: GeneratorConfig::default() }
    }
}

fn pick_template<R: Rng>(profile: &DifficultyProfile, rng: &mut R) -> TemplateKind {
    profile.templates.choose(rng).copied().unwrap_or(TemplateKind::RingRoad)
}
