//! Adaptive mutation-rate schedule.

/// Linearly increasing mutation probability.
///
/// The rate for generation `g` (1-based) is
/// `initial + increment · (g − 1)`, clamped to `[0, 1]`. As the population
/// converges, mutations become more frequent to keep exploring.
///
/// # Examples
///
/// ```
/// use u_tour::ga::MutationSchedule;
///
/// let s = MutationSchedule::new(0.05, 0.002);
/// assert!((s.rate_at(1) - 0.05).abs() < 1e-12);
/// assert!((s.rate_at(11) - 0.07).abs() < 1e-12);
/// assert_eq!(s.rate_at(1_000), 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MutationSchedule {
    pub initial: f64,
    pub increment: f64,
}

impl MutationSchedule {
    pub fn new(initial: f64, increment: f64) -> Self {
        Self { initial, increment }
    }

    /// Mutation probability for a 1-based generation number.
    pub fn rate_at(&self, generation: usize) -> f64 {
        let steps = generation.saturating_sub(1) as f64;
        (self.initial + self.increment * steps).clamp(0.0, 1.0)
    }
}

impl Default for MutationSchedule {
    fn default() -> Self {
        Self::new(0.05, 0.002)
    }
}
