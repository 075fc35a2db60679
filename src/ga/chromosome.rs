//! Visiting-order chromosome.
//!
//! A [`Chromosome`] is a permutation of location ids `0..n` plus its cached
//! open-path distance. The cache is refreshed with
//! [`evaluate`](Chromosome::evaluate) whenever the order changes.

use crate::geo::DistanceMatrix;
use rand::seq::SliceRandom;
use rand::Rng;

/// A candidate visiting order.
///
/// Equality compares the order only; the cached distance is ignored.
///
/// # Examples
///
/// ```
/// use u_tour::ga::Chromosome;
///
/// let c = Chromosome::new(vec![2, 0, 1]);
/// assert_eq!(c.order(), &[2, 0, 1]);
/// assert_eq!(c.distance(), f64::INFINITY);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Chromosome {
    order: Vec<usize>,
    distance: f64,
}

impl Chromosome {
    /// Wraps a permutation. The distance starts unevaluated (`INFINITY`).
    pub fn new(order: Vec<usize>) -> Self {
        debug_assert!(
            is_valid_permutation(&order),
            "chromosome is not a permutation: {order:?}"
        );
        Self {
            order,
            distance: f64::INFINITY,
        }
    }

    /// The unoptimized order `0, 1, …, n-1`.
    pub fn identity(n: usize) -> Self {
        Self::new((0..n).collect())
    }

    /// A uniformly random permutation of `0..n`.
    pub fn random<R: Rng>(n: usize, rng: &mut R) -> Self {
        let mut order: Vec<usize> = (0..n).collect();
        order.shuffle(rng);
        Self::new(order)
    }

    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Mutable access for in-place operators.
    ///
    /// Callers must keep the slice a permutation and re-evaluate afterwards.
    pub fn order_mut(&mut self) -> &mut [usize] {
        &mut self.order
    }

    /// Cached open-path distance in kilometres.
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Recomputes and caches the path distance.
    pub fn evaluate(&mut self, matrix: &DistanceMatrix) -> f64 {
        debug_assert!(
            is_valid_permutation(&self.order),
            "operator produced a non-permutation: {:?}",
            self.order
        );
        self.distance = matrix.path_distance(&self.order);
        self.distance
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn into_order(self) -> Vec<usize> {
        self.order
    }
}

impl PartialEq for Chromosome {
    fn eq(&self, other: &Self) -> bool {
        self.order == other.order
    }
}

impl Eq for Chromosome {}

/// Returns true if `perm` contains every value of `0..perm.len()` exactly once.
pub fn is_valid_permutation(perm: &[usize]) -> bool {
    let n = perm.len();
    let mut seen = vec![false; n];
    for &v in perm {
        if v >= n || seen[v] {
            return false;
        }
        seen[v] = true;
    }
    true
}

/// Sorts ascending by cached distance (best first).
pub(crate) fn sort_by_distance(population: &mut [Chromosome]) {
    population.sort_by(|a, b| a.distance.total_cmp(&b.distance));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::LocationTable;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_is_valid_permutation() {
        assert!(is_valid_permutation(&[]));
        assert!(is_valid_permutation(&[0]));
        assert!(is_valid_permutation(&[2, 0, 1]));
        assert!(!is_valid_permutation(&[0, 0, 1]));
        assert!(!is_valid_permutation(&[0, 1, 3]));
    }

    #[test]
    fn test_random_is_permutation() {
        let mut rng = StdRng::seed_from_u64(42);
        for n in [1, 2, 5, 24, 100] {
            let c = Chromosome::random(n, &mut rng);
            assert_eq!(c.len(), n);
            assert!(is_valid_permutation(c.order()));
        }
    }

    #[test]
    fn test_random_is_not_constant() {
        let mut rng = StdRng::seed_from_u64(7);
        let first = Chromosome::random(24, &mut rng);
        let differs = (0..20).any(|_| Chromosome::random(24, &mut rng) != first);
        assert!(differs);
    }

    #[test]
    fn test_identity() {
        assert_eq!(Chromosome::identity(4).order(), &[0, 1, 2, 3]);
        assert!(Chromosome::identity(0).is_empty());
    }

    #[test]
    fn test_equality_ignores_distance() {
        let table = LocationTable::from_degrees([
            ("A", "", 0.0, 0.0),
            ("B", "", 1.0, 1.0),
            ("C", "", 2.0, 0.0),
        ])
        .unwrap();
        let matrix = DistanceMatrix::new(&table);
        let mut a = Chromosome::new(vec![0, 1, 2]);
        let b = a.clone();
        a.evaluate(&matrix);
        assert_ne!(a.distance(), b.distance());
        assert_eq!(a, b);
    }

    #[test]
    fn test_sort_by_distance() {
        let mut pop: Vec<Chromosome> = [3.0, 1.0, 2.0]
            .iter()
            .map(|&d| {
                let mut c = Chromosome::identity(2);
                c.distance = d;
                c
            })
            .collect();
        sort_by_distance(&mut pop);
        let ds: Vec<f64> = pop.iter().map(|c| c.distance()).collect();
        assert_eq!(ds, vec![1.0, 2.0, 3.0]);
    }
}
