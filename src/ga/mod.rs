//! Genetic algorithm for open-path visiting orders.
//!
//! Each candidate is a [`Chromosome`]: a permutation of location ids whose
//! fitness is the open-path great-circle distance (lower is better).
//!
//! # Key Types
//!
//! - [`GaConfig`]: Population size, generations, mutation schedule, elitism
//! - [`GaRunner`]: Executes the evolutionary loop
//! - [`GaResult`]: Best order, its distance, the baseline distance, history
//!
//! # Submodules
//!
//! - [`operators`]: Order crossover (OX) and inversion mutation
//! - [`selection`]: Rank-weighted parent selection with bounded retries
//!
//! # References
//!
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - Davis (1985), "Applying Adaptive Algorithms to Epistatic Domains"

mod chromosome;
mod config;
pub mod operators;
mod runner;
mod schedule;
pub mod selection;

pub use chromosome::{is_valid_permutation, Chromosome};
pub use config::GaConfig;
pub use runner::{GaResult, GaRunner, GenerationStats};
pub use schedule::MutationSchedule;
pub use selection::RankWeights;
