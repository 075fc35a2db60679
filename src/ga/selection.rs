//! Rank-weighted parent selection.
//!
//! The population must already be sorted best-first. Rank `i` receives
//! weight `1 / (i + 3)`: fitter individuals are favoured, but the best one
//! gets only about 6% of the mass in a population of 1000, so selection
//! stays far from winner-take-all.
//!
//! # Termination
//!
//! Parents are drawn with replacement until the two picks differ by
//! **value**. After `max_retries` failed attempts (a population full of
//! copies), the second parent is instead drawn from every position except
//! the first one, which always succeeds for populations of two or more.

use super::chromosome::Chromosome;
use rand::Rng;

/// Offset added to the rank before inversion.
const RANK_OFFSET: f64 = 3.0;

/// Cumulative rank weights for a population of fixed size.
///
/// Built once per run; sampling is a binary search, O(log n).
#[derive(Debug, Clone)]
pub struct RankWeights {
    cumulative: Vec<f64>,
}

impl RankWeights {
    /// Builds weights for ranks `0..n`.
    ///
    /// # Panics
    /// Panics if `n == 0`.
    pub fn new(n: usize) -> Self {
        assert!(n > 0, "cannot weight an empty population");
        let mut total = 0.0;
        let cumulative = (0..n)
            .map(|i| {
                total += Self::weight(i);
                total
            })
            .collect();
        Self { cumulative }
    }

    /// Raw weight of rank `i`.
    pub fn weight(i: usize) -> f64 {
        1.0 / (i as f64 + RANK_OFFSET)
    }

    pub fn len(&self) -> usize {
        self.cumulative.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cumulative.is_empty()
    }

    /// Sum of all weights.
    pub fn total(&self) -> f64 {
        self.cumulative[self.cumulative.len() - 1]
    }

    /// Selection probability of rank `i`.
    pub fn probability(&self, i: usize) -> f64 {
        Self::weight(i) / self.total()
    }

    /// Draws a rank.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        let threshold = rng.random_range(0.0..self.total());
        self.locate(threshold)
    }

    /// Draws a rank other than `excluded`, with the remaining weights
    /// renormalised.
    ///
    /// # Panics
    /// Panics if there is only one rank.
    pub fn sample_excluding<R: Rng>(&self, excluded: usize, rng: &mut R) -> usize {
        assert!(self.len() >= 2, "need two ranks to exclude one");
        let excluded_weight = Self::weight(excluded);
        let before = if excluded == 0 {
            0.0
        } else {
            self.cumulative[excluded - 1]
        };

        let mut threshold = rng.random_range(0.0..self.total() - excluded_weight);
        if threshold >= before {
            threshold += excluded_weight;
        }

        let idx = self.locate(threshold);
        if idx != excluded {
            return idx;
        }
        // Rounding landed exactly on the excluded band; step to a neighbour.
        if excluded + 1 < self.len() {
            excluded + 1
        } else {
            excluded - 1
        }
    }

    /// First rank whose cumulative weight exceeds `threshold`.
    fn locate(&self, threshold: f64) -> usize {
        self.cumulative
            .partition_point(|&c| c <= threshold)
            .min(self.cumulative.len() - 1)
    }
}

/// Picks two parents from a best-first population.
///
/// Returns population indices. The two chromosomes differ by value unless
/// the retry budget runs out, in which case they differ by index.
///
/// # Panics
/// Panics if the population has fewer than two members or its size differs
/// from `weights`.
pub fn select_parents<R: Rng>(
    population: &[Chromosome],
    weights: &RankWeights,
    max_retries: usize,
    rng: &mut R,
) -> (usize, usize) {
    assert!(population.len() >= 2, "need at least two individuals to pair");
    assert_eq!(
        population.len(),
        weights.len(),
        "rank weights built for a different population size"
    );

    for _ in 0..max_retries {
        let a = weights.sample(rng);
        let b = weights.sample(rng);
        if population[a] != population[b] {
            return (a, b);
        }
    }

    tracing::debug!(max_retries, "no value-distinct parents found; pairing by position");
    let a = weights.sample(rng);
    let b = weights.sample_excluding(a, rng);
    (a, b)
}
