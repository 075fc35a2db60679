//! Great-circle distance on a spherical Earth.
//!
//! Uses the spherical law of cosines:
//!
//! ```text
//! d = acos(sin φa · sin φb + cos φa · cos φb · cos(λb − λa)) · R
//! ```
//!
//! For nearly identical or nearly antipodal points, rounding can push the
//! cosine argument slightly outside `[-1, 1]`. [`arc_length_km`] clamps it
//! before calling `acos`, so the result is always finite.

use super::location::{Location, LocationTable};

/// Mean Earth radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Cosine of the central angle between two locations (unclamped).
pub fn cosine_argument(a: &Location, b: &Location) -> f64 {
    a.latitude_rad.sin() * b.latitude_rad.sin()
        + a.latitude_rad.cos() * b.latitude_rad.cos() * (b.longitude_rad - a.longitude_rad).cos()
}

/// Arc length in kilometres for a central-angle cosine.
///
/// The argument is clamped to `[-1, 1]`.
///
/// ```
/// use u_tour::geo::{arc_length_km, EARTH_RADIUS_KM};
///
/// assert_eq!(arc_length_km(1.0000000002), 0.0);
/// assert_eq!(arc_length_km(-1.0000000001), std::f64::consts::PI * EARTH_RADIUS_KM);
/// ```
pub fn arc_length_km(cosine: f64) -> f64 {
    cosine.clamp(-1.0, 1.0).acos() * EARTH_RADIUS_KM
}

/// Great-circle distance between two locations in kilometres.
///
/// Symmetric and non-negative.
pub fn great_circle_distance(a: &Location, b: &Location) -> f64 {
    arc_length_km(cosine_argument(a, b))
}

/// Total length of the open path visiting `order` (N − 1 legs, no return).
///
/// Returns `0.0` for paths with fewer than two stops.
pub fn path_distance(table: &LocationTable, order: &[usize]) -> f64 {
    order
        .windows(2)
        .map(|leg| great_circle_distance(&table[leg[0]], &table[leg[1]]))
        .sum()
}

/// Precomputed pairwise great-circle distances.
///
/// Fitness is evaluated hundreds of thousands of times per run; the matrix
/// turns each leg into a lookup. Memory is O(N²).
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    n: usize,
    data: Vec<f64>,
}

impl DistanceMatrix {
    /// Builds the full N×N matrix for a table.
    pub fn new(table: &LocationTable) -> Self {
        let n = table.len();
        let mut data = vec![0.0; n * n];
        for i in 0..n {
            for j in (i + 1)..n {
                let d = great_circle_distance(&table[i], &table[j]);
                data[i * n + j] = d;
                data[j * n + i] = d;
            }
        }
        Self { n, data }
    }

    /// Number of locations covered.
    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Distance between locations `i` and `j` in kilometres.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.data[i * self.n + j]
    }

    /// Open-path length of `order`, same semantics as [`path_distance`].
    pub fn path_distance(&self, order: &[usize]) -> f64 {
        order.windows(2).map(|leg| self.get(leg[0], leg[1])).sum()
    }
}
