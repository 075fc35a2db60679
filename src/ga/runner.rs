//! GA evolutionary loop execution.
//!
//! [`GaRunner`] orchestrates one generation as:
//! sort → elitism → crossover fill → sort → mutation → sort,
//! then raises the mutation rate for the next generation.

use super::chromosome::{sort_by_distance, Chromosome};
use super::config::GaConfig;
use super::operators::{invert_mutation, order_crossover};
use super::selection::{select_parents, RankWeights};
use crate::error::TourError;
use crate::geo::{DistanceMatrix, LocationTable};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::instrument;

/// Per-generation report.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationStats {
    /// 1-based generation number.
    pub generation: usize,

    /// Distance of the best chromosome after this generation, in km.
    pub best_distance_km: f64,

    /// Mean distance over the whole population, in km.
    pub mean_distance_km: f64,

    /// Mutation probability used in this generation.
    pub mutation_rate: f64,

    /// Number of chromosomes actually mutated.
    pub mutations: usize,
}

/// Result of a GA run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaResult {
    /// Best chromosome of the final generation.
    pub best: Chromosome,

    /// Same as `best.distance()`.
    pub best_distance_km: f64,

    /// Distance of the input order `0, 1, …, n-1`.
    pub baseline_distance_km: f64,

    /// Number of generations executed.
    pub generations: usize,

    /// Best distance at the end of each generation.
    pub fitness_history: Vec<f64>,

    /// Full per-generation statistics.
    pub stats: Vec<GenerationStats>,
}

impl GaResult {
    /// Kilometres saved relative to the baseline order.
    pub fn improvement_km(&self) -> f64 {
        self.baseline_distance_km - self.best_distance_km
    }
}

/// Executes the GA evolutionary loop.
///
/// # Usage
///
/// ```
/// use u_tour::geo::LocationTable;
/// use u_tour::ga::{GaConfig, GaRunner};
///
/// let table = LocationTable::from_degrees([
///     ("London", "UK", 51.5074, -0.1278),
///     ("Tokyo", "Japan", 35.6762, 139.6503),
///     ("Paris", "France", 48.8566, 2.3522),
/// ])
/// .unwrap();
/// let config = GaConfig::default()
///     .with_population_size(20)
///     .with_max_generations(5)
///     .with_seed(42);
///
/// let result = GaRunner::run(&table, &config).unwrap();
/// assert!(result.best_distance_km <= result.baseline_distance_km);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA to completion.
    pub fn run(table: &LocationTable, config: &GaConfig) -> Result<GaResult, TourError> {
        Self::run_with_observer(table, config, |_| {})
    }

    /// Runs the GA, calling `observer` after every generation.
    #[instrument(
        level = "info",
        skip_all,
        fields(locations = table.len(), population_size = config.population_size)
    )]
    pub fn run_with_observer<F>(
        table: &LocationTable,
        config: &GaConfig,
        mut observer: F,
    ) -> Result<GaResult, TourError>
    where
        F: FnMut(&GenerationStats),
    {
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };

        let matrix = DistanceMatrix::new(table);
        let n = table.len();
        let size = config.population_size;
        let elite_count = config.elite_count();
        let exempt_count = config.mutation_exempt_count();
        let schedule = config.mutation_schedule();
        let weights = RankWeights::new(size);

        let mut population: Vec<Chromosome> = (0..size)
            .map(|_| {
                let mut c = Chromosome::random(n, &mut rng);
                c.evaluate(&matrix);
                c
            })
            .collect();

        let mut stats = Vec::with_capacity(config.max_generations);
        let mut fitness_history = Vec::with_capacity(config.max_generations);

        for generation in 1..=config.max_generations {
            let mutation_rate = schedule.rate_at(generation);

            // Sort, then carry the elites over unchanged
            sort_by_distance(&mut population);
            let mut next_gen: Vec<Chromosome> = Vec::with_capacity(size);
            next_gen.extend_from_slice(&population[..elite_count]);

            // Fill the rest with OX children of rank-selected parents
            while next_gen.len() < size {
                let (a, b) = select_parents(
                    &population,
                    &weights,
                    config.max_selection_retries,
                    &mut rng,
                );
                let order = order_crossover(population[a].order(), population[b].order(), &mut rng);
                let mut child = Chromosome::new(order);
                child.evaluate(&matrix);
                next_gen.push(child);
            }

            // Mutate everything outside the exempt head
            sort_by_distance(&mut next_gen);
            let mut mutations = 0;
            for chromosome in next_gen[exempt_count..].iter_mut() {
                if rng.random_range(0.0..1.0) < mutation_rate {
                    invert_mutation(chromosome.order_mut(), &mut rng);
                    chromosome.evaluate(&matrix);
                    mutations += 1;
                }
            }

            sort_by_distance(&mut next_gen);
            population = next_gen;

            let best_distance_km = population[0].distance();
            let mean_distance_km =
                population.iter().map(Chromosome::distance).sum::<f64>() / size as f64;

            tracing::info!(
                generation,
                best_distance_km,
                mutation_rate,
                mutations,
                "generation complete"
            );

            let gen_stats = GenerationStats {
                generation,
                best_distance_km,
                mean_distance_km,
                mutation_rate,
                mutations,
            };
            observer(&gen_stats);
            fitness_history.push(best_distance_km);
            stats.push(gen_stats);
        }

        let best = population.swap_remove(0);
        let best_distance_km = best.distance();
        let baseline_distance_km = matrix.path_distance(Chromosome::identity(n).order());

        tracing::info!(
            best_distance_km,
            baseline_distance_km,
            generations = config.max_generations,
            "optimization finished"
        );

        Ok(GaResult {
            best,
            best_distance_km,
            baseline_distance_km,
            generations: config.max_generations,
            fitness_history,
            stats,
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
