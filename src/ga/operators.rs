//! Permutation operators: order crossover and inversion mutation.
//!
//! Both operators take and return permutations of `0..n` and never produce
//! anything else. Debug builds assert this after every call.
//!
//! # References
//!
//! - Davis (1985), "Applying Adaptive Algorithms to Epistatic Domains"
//! - Cicirello (2023), "Genetic Operators for Permutation Representation"

use super::chromosome::is_valid_permutation;
use rand::Rng;

// ============================================================================
// Crossover
// ============================================================================

/// Order Crossover (OX): one child from two parents.
///
/// Preserves a contiguous block of `parent1` in place and the **relative
/// order** of the remaining ids as they appear in `parent2`.
///
/// Cut points are two distinct values in `0..=n` (see [`random_cuts`]).
///
/// # Panics
/// Panics if parents have different lengths or are empty.
pub fn order_crossover<R: Rng>(parent1: &[usize], parent2: &[usize], rng: &mut R) -> Vec<usize> {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");
    assert!(n > 0, "parents must not be empty");

    let (cut1, cut2) = random_cuts(n, rng);
    ox_build_child(parent1, parent2, cut1, cut2)
}

/// Builds one OX child for fixed cut points `cut1 <= cut2 <= n`.
///
/// 1. `child[cut1..cut2] = parent1[cut1..cut2]`
/// 2. Walk `parent2` from `cut2`, wrapping, collecting ids not yet placed
/// 3. Drop each collected id into the next empty slot, scanning from
///    `cut2` and wrapping
///
/// The occupied slots are always the single block `cut1..cut2`, so the
/// slot cursor crosses it at most once: O(n) per child.
///
/// # Panics
/// Panics if parents differ in length or the cuts are out of order.
pub fn ox_build_child(parent1: &[usize], parent2: &[usize], cut1: usize, cut2: usize) -> Vec<usize> {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");
    assert!(cut1 <= cut2 && cut2 <= n, "invalid cuts {cut1}..{cut2} for length {n}");
    debug_assert!(is_valid_permutation(parent1), "parent1 is not a permutation");
    debug_assert!(is_valid_permutation(parent2), "parent2 is not a permutation");

    if n == 0 {
        return Vec::new();
    }

    let mut slots: Vec<Option<usize>> = vec![None; n];
    let mut placed = vec![false; n];

    for i in cut1..cut2 {
        slots[i] = Some(parent1[i]);
        placed[parent1[i]] = true;
    }

    let mut cursor = cut2 % n;
    for offset in 0..n {
        let val = parent2[(cut2 + offset) % n];
        if placed[val] {
            continue;
        }
        while slots[cursor].is_some() {
            cursor = (cursor + 1) % n;
        }
        slots[cursor] = Some(val);
        placed[val] = true;
        cursor = (cursor + 1) % n;
    }

    let child: Vec<usize> = slots
        .into_iter()
        .map(|slot| slot.expect("parent2 supplies every id missing from the copied block"))
        .collect();
    debug_assert!(is_valid_permutation(&child), "OX child is not a permutation: {child:?}");
    child
}

// ============================================================================
// Mutation
// ============================================================================

/// Inversion mutation: reverse a random inclusive segment in place.
///
/// Both positions are drawn independently from `0..n`; equal positions
/// leave the permutation unchanged.
pub fn invert_mutation<R: Rng>(perm: &mut [usize], rng: &mut R) {
    let n = perm.len();
    if n < 2 {
        return;
    }
    let pos1 = rng.random_range(0..n);
    let pos2 = rng.random_range(0..n);
    invert_segment(perm, pos1, pos2);
}

/// Reverses `perm[min(pos1, pos2)..=max(pos1, pos2)]`.
///
/// # Panics
/// Panics if either position is out of bounds.
pub fn invert_segment(perm: &mut [usize], pos1: usize, pos2: usize) {
    let (start, end) = if pos1 <= pos2 { (pos1, pos2) } else { (pos2, pos1) };
    perm[start..=end].reverse();
}

// ============================================================================
// Helpers
// ============================================================================

/// Two distinct cut points in `0..=n`, returned as `(cut1, cut2)` with
/// `cut1 < cut2`.
///
/// The second cut is drawn from the `n` values other than the first, so no
/// rejection loop is needed.
///
/// # Panics
/// Panics if `n == 0`.
pub fn random_cuts<R: Rng>(n: usize, rng: &mut R) -> (usize, usize) {
    assert!(n > 0, "need at least one element to cut");
    let a = rng.random_range(0..=n);
    let mut b = rng.random_range(0..n);
    if b >= a {
        b += 1;
    }
    if a < b {
        (a, b)
    } else {
        (b, a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng(seed: u64) -> StdRng {
        StdRng::seed_from_u64(seed)
    }

    // ---- OX ----

    #[test]
    fn test_ox_known_child() {
        // parent1 block [3, 4, 5] kept at positions 3..6; the rest follows
        // parent2 starting at position 6 and wrapping.
        let p1 = vec![0, 1, 2, 3, 4, 5, 6, 7];
        let p2 = vec![7, 6, 5, 4, 3, 2, 1, 0];
        let child = ox_build_child(&p1, &p2, 3, 6);
        assert_eq!(child, vec![7, 6, 2, 3, 4, 5, 1, 0]);
    }

    #[test]
    fn test_ox_full_block_clones_parent1() {
        let p1 = vec![3, 1, 4, 0, 2];
        let p2 = vec![0, 1, 2, 3, 4];
        assert_eq!(ox_build_child(&p1, &p2, 0, 5), p1);
    }

    #[test]
    fn test_ox_empty_block_follows_parent2() {
        let p1 = vec![3, 1, 4, 0, 2];
        let p2 = vec![0, 1, 2, 3, 4];
        // Nothing copied: parent2 is laid down from cut2, rotated identically.
        for cut in 0..=5 {
            let child = ox_build_child(&p1, &p2, cut, cut);
            assert_eq!(child, p2, "cut={cut}");
        }
    }

    #[test]
    fn test_ox_boundary_cuts_valid() {
        let p1 = vec![4, 2, 0, 5, 1, 3];
        let p2 = vec![1, 5, 3, 0, 4, 2];
        for cut1 in 0..=6 {
            for cut2 in cut1..=6 {
                let child = ox_build_child(&p1, &p2, cut1, cut2);
                assert!(is_valid_permutation(&child), "cuts {cut1}..{cut2}: {child:?}");
                assert_eq!(&child[cut1..cut2], &p1[cut1..cut2]);
            }
        }
    }

    #[test]
    fn test_ox_single_element() {
        let mut r = rng(42);
        assert_eq!(order_crossover(&[0], &[0], &mut r), vec![0]);
    }

    #[test]
    fn test_ox_identical_parents() {
        let mut r = rng(42);
        let p = vec![2, 0, 3, 1, 4];
        for _ in 0..50 {
            assert_eq!(order_crossover(&p, &p, &mut r), p);
        }
    }

    #[test]
    fn test_ox_random_valid() {
        let mut r = rng(42);
        let p1: Vec<usize> = (0..24).collect();
        let p2: Vec<usize> = (0..24).rev().collect();
        for _ in 0..500 {
            let child = order_crossover(&p1, &p2, &mut r);
            assert!(is_valid_permutation(&child), "{child:?}");
        }
    }

    #[test]
    #[should_panic(expected = "parents must have equal length")]
    fn test_ox_length_mismatch_panics() {
        let mut r = rng(42);
        order_crossover(&[0, 1], &[0, 1, 2], &mut r);
    }

    // ---- Inversion ----

    #[test]
    fn test_invert_segment() {
        let mut perm = vec![0, 1, 2, 3, 4, 5];
        invert_segment(&mut perm, 4, 1);
        assert_eq!(perm, vec![0, 4, 3, 2, 1, 5]);

        let mut perm = vec![0, 1, 2];
        invert_segment(&mut perm, 1, 1);
        assert_eq!(perm, vec![0, 1, 2]);

        let mut perm = vec![0, 1, 2, 3];
        invert_segment(&mut perm, 0, 3);
        assert_eq!(perm, vec![3, 2, 1, 0]);
    }

    #[test]
    fn test_invert_mutation_preserves_permutation() {
        let mut r = rng(42);
        let mut perm: Vec<usize> = (0..24).collect();
        for _ in 0..500 {
            invert_mutation(&mut perm, &mut r);
            assert!(is_valid_permutation(&perm));
        }
    }

    #[test]
    fn test_invert_mutation_changes_eventually() {
        let mut r = rng(3);
        let original: Vec<usize> = (0..10).collect();
        let changed = (0..100).any(|_| {
            let mut perm = original.clone();
            invert_mutation(&mut perm, &mut r);
            perm != original
        });
        assert!(changed);
    }

    #[test]
    fn test_invert_mutation_short_noop() {
        let mut r = rng(42);
        let mut perm = vec![0];
        invert_mutation(&mut perm, &mut r);
        assert_eq!(perm, vec![0]);
        let mut empty: Vec<usize> = vec![];
        invert_mutation(&mut empty, &mut r);
        assert!(empty.is_empty());
    }

    // ---- Cuts ----

    #[test]
    fn test_random_cuts_bounds() {
        let mut r = rng(42);
        let mut seen_zero = false;
        let mut seen_n = false;
        for _ in 0..2000 {
            let (c1, c2) = random_cuts(10, &mut r);
            assert!(c1 < c2);
            assert!(c2 <= 10);
            seen_zero |= c1 == 0;
            seen_n |= c2 == 10;
        }
        assert!(seen_zero && seen_n, "both extreme cuts should occur");
    }

    #[test]
    fn test_random_cuts_single() {
        let mut r = rng(42);
        assert_eq!(random_cuts(1, &mut r), (0, 1));
    }
}
