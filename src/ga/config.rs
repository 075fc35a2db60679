//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.

use super::schedule::MutationSchedule;
use crate::error::ConfigError;

/// Absorbs rounding in `size × ratio` before taking floor/ceil.
const COUNT_EPSILON: f64 = 1e-9;

/// Configuration for the tour GA.
///
/// # Defaults
///
/// ```
/// use u_tour::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 1000);
/// assert_eq!(config.max_generations, 150);
/// assert_eq!(config.elite_count(), 100);
/// assert_eq!(config.mutation_exempt_count(), 50);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_tour::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(200)
///     .with_max_generations(300)
///     .with_initial_mutation_rate(0.1)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GaConfig {
    /// Number of chromosomes per generation.
    pub population_size: usize,

    /// Number of generations to run. There is no early stopping.
    pub max_generations: usize,

    /// Mutation probability in generation 1.
    pub initial_mutation_rate: f64,

    /// Added to the mutation probability after every generation.
    ///
    /// The resulting rate is clamped to 1.0.
    pub mutation_rate_increment: f64,

    /// Fraction of the population copied unchanged into the next
    /// generation. The count is rounded up.
    pub elite_ratio: f64,

    /// Fraction of the sorted new generation never mutated. The count is
    /// rounded down but is at least 1, so the best chromosome always
    /// survives and the best distance never regresses.
    pub mutation_exempt_ratio: f64,

    /// Parent draws attempted before falling back to index-distinct
    /// parents.
    pub max_selection_retries: usize,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        let schedule = MutationSchedule::default();
        Self {
            population_size: 1000,
            max_generations: 150,
            initial_mutation_rate: schedule.initial,
            mutation_rate_increment: schedule.increment,
            elite_ratio: 0.1,
            mutation_exempt_ratio: 0.05,
            max_selection_retries: 64,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the generation-1 mutation rate.
    pub fn with_initial_mutation_rate(mut self, rate: f64) -> Self {
        self.initial_mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the per-generation mutation rate increment.
    pub fn with_mutation_rate_increment(mut self, increment: f64) -> Self {
        self.mutation_rate_increment = increment.max(0.0);
        self
    }

    /// Sets the elite ratio.
    pub fn with_elite_ratio(mut self, ratio: f64) -> Self {
        self.elite_ratio = ratio.clamp(0.0, 1.0);
        self
    }

    /// Sets the mutation-exempt ratio.
    pub fn with_mutation_exempt_ratio(mut self, ratio: f64) -> Self {
        self.mutation_exempt_ratio = ratio.clamp(0.0, 1.0);
        self
    }

    /// Sets the selection retry budget.
    pub fn with_max_selection_retries(mut self, n: usize) -> Self {
        self.max_selection_retries = n;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Preset for quick runs: population 100, 100 generations.
    pub fn fast() -> Self {
        Self {
            population_size: 100,
            max_generations: 100,
            ..Self::default()
        }
    }

    /// Preset for thorough runs: population 2000, 300 generations.
    pub fn quality() -> Self {
        Self {
            population_size: 2000,
            max_generations: 300,
            ..Self::default()
        }
    }

    /// Number of elites: `⌈population_size · elite_ratio⌉`.
    pub fn elite_count(&self) -> usize {
        let raw = self.population_size as f64 * self.elite_ratio - COUNT_EPSILON;
        (raw.ceil().max(0.0) as usize).min(self.population_size)
    }

    /// Number of best chromosomes skipped by mutation:
    /// `max(1, ⌊population_size · mutation_exempt_ratio⌋)`.
    pub fn mutation_exempt_count(&self) -> usize {
        let raw = self.population_size as f64 * self.mutation_exempt_ratio + COUNT_EPSILON;
        (raw.floor() as usize).clamp(1, self.population_size.max(1))
    }

    /// The mutation-rate schedule described by this config.
    pub fn mutation_schedule(&self) -> MutationSchedule {
        MutationSchedule::new(self.initial_mutation_rate, self.mutation_rate_increment)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size < 2 {
            return Err(ConfigError::PopulationTooSmall(self.population_size));
        }
        if self.max_generations == 0 {
            return Err(ConfigError::NoGenerations);
        }
        check_probability("initial_mutation_rate", self.initial_mutation_rate)?;
        check_probability("elite_ratio", self.elite_ratio)?;
        check_probability("mutation_exempt_ratio", self.mutation_exempt_ratio)?;
        if !self.mutation_rate_increment.is_finite() || self.mutation_rate_increment < 0.0 {
            return Err(ConfigError::InvalidIncrement {
                name: "mutation_rate_increment",
                value: self.mutation_rate_increment,
            });
        }
        let elites = self.elite_count();
        if elites >= self.population_size {
            return Err(ConfigError::ElitesFillPopulation {
                elites,
                population_size: self.population_size,
            });
        }
        Ok(())
    }
}

fn check_probability(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::InvalidRate { name, value })
    }
}
