use std::{env, fmt, str::FromStr};
use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;
use crate::graph_algos::Algorithm;
use super::templates::TemplateKind;


/// Environment variable naming the correct algorithm
pub const ALGORITHM_ENV: &str = "CITYSEARCH_ALGO";
/// Environment variable naming the difficulty tier
pub const DIFFICULTY_ENV: &str = "CITYSEARCH_DIFFICULTY";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {

    /// Tuning for this tier
    pub fn profile(&self) -> DifficultyProfile {
        match self {
            Difficulty::Easy => DifficultyProfile {
                templates: &[TemplateKind::RingRoad, TemplateKind::MarketGrid],
                max_optional_edges: 1,
                main_cost: CostRange { min: 1, max: 2 },
                alt_cost: CostRange { min: 3, max: 5 },
                traffic_count: 1,
            },
            Difficulty::Medium => DifficultyProfile {
                templates: &[TemplateKind::MarketGrid, TemplateKind::Crossroads],
                max_optional_edges: 2,
                main_cost: CostRange { min: 1, max: 3 },
                alt_cost: CostRange { min: 2, max: 5 },
                traffic_count: 2,
            },
            Difficulty::Hard => DifficultyProfile {
                templates: &[TemplateKind::Crossroads, TemplateKind::Switchbacks],
                max_optional_edges: 3,
                main_cost: CostRange { min: 2, max: 4 },
                alt_cost: CostRange { min: 1, max: 4 },
                traffic_count: 3,
            },
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = ConfigError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(ConfigError::UnknownDifficulty(raw.to_string())),
        }
    }
}


/// Inclusive range of whole road costs, never empty and never below 1
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawCostRange")]
pub struct CostRange {
    pub min: u32,
    pub max: u32,
}

impl CostRange {
    pub fn new(min: u32, max: u32) -> Result<Self, ConfigError> {
        if min == 0 || min > max {
            return Err(ConfigError::InvalidCostRange { min, max });
        }
        Ok(Self { min, max })
    }
}

#[derive(Deserialize)]
struct RawCostRange {
    min: u32,
    max: u32,
}

impl TryFrom<RawCostRange> for CostRange {
    type Error = ConfigError;

    fn try_from(raw: RawCostRange) -> Result<Self, Self::Error> {
        CostRange::new(raw.min, raw.max)
    }
}

/// Per tier tuning of the generator
#[derive(Clone, Debug, PartialEq)]
pub struct DifficultyProfile {
    pub templates: &'static [TemplateKind],
    pub max_optional_edges: usize,
    /// cost of roads on the canonical shortest path
    pub main_cost: CostRange,
    /// cost of every other road
    pub alt_cost: CostRange,
    pub traffic_count: usize,
}


/// Geometric and retry limits of the generator
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GeneratorConfig {
    /// resampling attempts before the bare template fallback
    pub max_attempts: usize,
    pub max_degree: usize,
    pub max_diagonal_edges: usize,
    pub max_diagonal_per_node: usize,
    /// lanes move by a multiple of jitter_step in -jitter_steps..=jitter_steps
    pub jitter_step: f64,
    pub jitter_steps: i32,
    /// nodes are clamped into this box after jitter
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
    pub house_margin: f64,
    pub tree_clearance: f64,
    /// roads may not pass this close to a node they do not end at
    pub node_clearance: f64,
    pub fallback_cost: CostRange,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_attempts: 80,
            max_degree: 4,
            max_diagonal_edges: 2,
            max_diagonal_per_node: 1,
            jitter_step: 14.0,
            jitter_steps: 2,
            min_x: 100.0,
            max_x: 1180.0,
            min_y: 200.0,
            max_y: 700.0,
            house_margin: 16.0,
            tree_clearance: 26.0,
            node_clearance: 18.0,
            fallback_cost: CostRange { min: 1, max: 3 },
        }
    }
}

impl GeneratorConfig {

    /// Reject settings that would make generation panic or price a road at zero
    pub fn validate(&self) -> Result<(), ConfigError> {
        CostRange::new(self.fallback_cost.min, self.fallback_cost.max)?;

        if self.jitter_steps < 0 {
            return Err(ConfigError::NegativeJitter(self.jitter_steps));
        }
        // written so NaN bounds fail too
        if !(self.min_x <= self.max_x) {
            return Err(ConfigError::InvertedBounds { axis: "x" });
        }
        if !(self.min_y <= self.max_y) {
            return Err(ConfigError::InvertedBounds { axis: "y" });
        }
        Ok(())
    }
}


/// Caller facing options of generate_city_map
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GenerateOptions {
    pub correct_algorithm: Option<Algorithm>,
    pub difficulty: Option<Difficulty>,
}

impl GenerateOptions {

    pub fn new(correct_algorithm: Algorithm, difficulty: Difficulty) -> Self {
        Self { correct_algorithm: Some(correct_algorithm), difficulty: Some(difficulty) }
    }

    /// Read options from CITYSEARCH_ALGO and CITYSEARCH_DIFFICULTY
    /// Unrecognised values fall back to the defaults
    pub fn from_env() -> Self {
        Self::from_raw(
            env::var(ALGORITHM_ENV).ok().as_deref(),
            env::var(DIFFICULTY_ENV).ok().as_deref(),
        )
    }

    /// Sanitize loose user input, aliases like "a*" or "djikstra" are understood
    pub fn from_raw(algorithm: Option<&str>, difficulty: Option<&str>) -> Self {
        Self {
            correct_algorithm: Some(algorithm.and_then(Algorithm::from_alias).unwrap_or(Algorithm::Bfs)),
            difficulty: Some(difficulty.and_then(|raw| raw.parse().ok()).unwrap_or_default()),
        }
    }

    pub fn algorithm(&self) -> Algorithm {
        self.correct_algorithm.unwrap_or(Algorithm::Bfs)
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty.unwrap_or_default()
    }
}
