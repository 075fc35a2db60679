//! Property tests: every operator emits a permutation.

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use u_tour::ga::operators::{invert_mutation, invert_segment, order_crossover, ox_build_child};
use u_tour::ga::{is_valid_permutation, Chromosome};
use u_tour::geo::{path_distance, LocationTable};

/// A permutation of `0..n` for `n` in `1..max`.
fn permutation(max: usize) -> impl Strategy<Value = Vec<usize>> {
    (1..max).prop_flat_map(|n| Just((0..n).collect::<Vec<usize>>()).prop_shuffle())
}

/// Two permutations of the same length.
fn parent_pair(max: usize) -> impl Strategy<Value = (Vec<usize>, Vec<usize>)> {
    (1..max).prop_flat_map(|n| {
        let base: Vec<usize> = (0..n).collect();
        (Just(base.clone()).prop_shuffle(), Just(base).prop_shuffle())
    })
}

proptest! {
    #[test]
    fn random_chromosome_is_permutation(n in 1usize..60, seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let c = Chromosome::random(n, &mut rng);
        prop_assert_eq!(c.len(), n);
        prop_assert!(is_valid_permutation(c.order()));
    }

    #[test]
    fn crossover_is_permutation((p1, p2) in parent_pair(40), seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let child = order_crossover(&p1, &p2, &mut rng);
        prop_assert!(is_valid_permutation(&child));
        prop_assert_eq!(child.len(), p1.len());
    }

    #[test]
    fn crossover_any_cuts_keeps_block(
        (p1, p2) in parent_pair(30),
        a in 0usize..31,
        b in 0usize..31,
    ) {
        let n = p1.len();
        let (a, b) = (a.min(n), b.min(n));
        let (cut1, cut2) = if a <= b { (a, b) } else { (b, a) };
        let child = ox_build_child(&p1, &p2, cut1, cut2);
        prop_assert!(is_valid_permutation(&child));
        prop_assert_eq!(&child[cut1..cut2], &p1[cut1..cut2]);
    }

    #[test]
    fn full_block_clones_parent1((p1, p2) in parent_pair(30)) {
        let n = p1.len();
        prop_assert_eq!(ox_build_child(&p1, &p2, 0, n), p1);
    }

    #[test]
    fn inversion_is_permutation(perm in permutation(40), seed in any::<u64>()) {
        let mut perm = perm;
        let mut rng = StdRng::seed_from_u64(seed);
        invert_mutation(&mut perm, &mut rng);
        prop_assert!(is_valid_permutation(&perm));
    }

    #[test]
    fn inversion_is_involution(perm in permutation(30), i in 0usize..30, j in 0usize..30) {
        let n = perm.len();
        let (i, j) = (i % n, j % n);
        let mut twice = perm.clone();
        invert_segment(&mut twice, i, j);
        invert_segment(&mut twice, j, i);
        prop_assert_eq!(twice, perm);
    }

    #[test]
    fn path_distance_symmetric_under_reversal(perm in permutation(20)) {
        let n = perm.len();
        let table = LocationTable::from_degrees((0..n).map(|i| {
            let lat = ((i * 53) % 170) as f64 - 85.0;
            let lon = ((i * 97) % 360) as f64 - 180.0;
            (format!("L{i}"), String::new(), lat, lon)
        }))
        .unwrap();
        let reversed: Vec<usize> = perm.iter().rev().copied().collect();
        let forward = path_distance(&table, &perm);
        let backward = path_distance(&table, &reversed);
        prop_assert!((forward - backward).abs() <= 1e-9 * forward.max(1.0));
    }
}
