use thiserror::Error;


/// Errors raised by the path-search library
/// Unreachable goals are not errors, they come back as a fallback path
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SearchError {
    #[error("Unknown algorithm: {0}")]
    UnknownAlgorithm(String),
}

/// Errors raised while building generator configuration
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown difficulty: {0}")]
    UnknownDifficulty(String),

    #[error("invalid cost range {min}..={max}")]
    InvalidCostRange { min: u32, max: u32 },

    #[error("jitter steps must not be negative, got {0}")]
    NegativeJitter(i32),

    #[error("{axis} bounds of the safe box are inverted")]
    InvertedBounds { axis: &'static str },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GeometryError {
    #[error("polygon needs at least three points")]
    InvalidPolygon,
}
