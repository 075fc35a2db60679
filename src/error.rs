//! Error types.
//!
//! Every error here is a precondition violation detected before the
//! evolutionary loop starts. Operator invariant failures are bugs and are
//! caught by debug assertions instead.

/// Invalid [`GaConfig`](crate::ga::GaConfig) parameters.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("population_size must be at least 2, got {0}")]
    PopulationTooSmall(usize),
    #[error("max_generations must be at least 1")]
    NoGenerations,
    #[error("elite_ratio too high: {elites} elites fill a population of {population_size}")]
    ElitesFillPopulation { elites: usize, population_size: usize },
    #[error("{name} must be a finite probability in [0, 1], got {value}")]
    InvalidRate { name: &'static str, value: f64 },
    #[error("{name} must be finite and non-negative, got {value}")]
    InvalidIncrement { name: &'static str, value: f64 },
}

/// Errors returned by the tour optimizer.
#[derive(Debug, thiserror::Error)]
pub enum TourError {
    #[error("location table is empty")]
    EmptyTable,
    #[error("duplicate location id {id}")]
    DuplicateId { id: usize },
    #[error("location at index {index} has id {id}; ids must equal their table index")]
    IdOutOfOrder { index: usize, id: usize },
    #[error("location {id}: {field} = {value} is not a finite radian value in range")]
    CoordinateOutOfRange {
        id: usize,
        field: &'static str,
        value: f64,
    },
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[cfg(feature = "cli")]
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[cfg(feature = "cli")]
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
