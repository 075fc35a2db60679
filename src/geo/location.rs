//! Location records and the validated location table.

use crate::error::TourError;
use std::f64::consts::{FRAC_PI_2, TAU};
use std::ops::Index;

/// Converts an angle in degrees to radians.
pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees.to_radians()
}

/// A single venue.
///
/// `id` is the location's index in its [`LocationTable`]; chromosomes refer
/// to locations by this id. Coordinates are in radians.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    pub id: usize,
    pub name: String,
    pub region: String,
    pub latitude_rad: f64,
    pub longitude_rad: f64,
}

impl Location {
    /// Creates a location from radian coordinates.
    pub fn new(
        id: usize,
        name: impl Into<String>,
        region: impl Into<String>,
        latitude_rad: f64,
        longitude_rad: f64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            region: region.into(),
            latitude_rad,
            longitude_rad,
        }
    }

    /// Creates a location from coordinates in degrees.
    ///
    /// ```
    /// use u_tour::geo::Location;
    ///
    /// let loc = Location::from_degrees(0, "Monza", "Italy", 45.6156, 9.2811);
    /// assert!((loc.latitude_rad - 0.7961).abs() < 1e-3);
    /// ```
    pub fn from_degrees(
        id: usize,
        name: impl Into<String>,
        region: impl Into<String>,
        latitude_deg: f64,
        longitude_deg: f64,
    ) -> Self {
        Self::new(
            id,
            name,
            region,
            degrees_to_radians(latitude_deg),
            degrees_to_radians(longitude_deg),
        )
    }
}

/// An ordered, validated set of locations.
///
/// Construction enforces the optimizer's input contract:
///
/// - at least one location
/// - ids are unique and equal to their position (`0..n`)
/// - latitude is finite and within `[-π/2, π/2]`
/// - longitude is finite and within `[-2π, 2π]` (both the `[-π, π]` and
///   `[0, 2π]` conventions are accepted)
///
/// Anything else is rejected here, before any evolutionary state exists.
#[derive(Debug, Clone)]
pub struct LocationTable {
    locations: Vec<Location>,
}

impl LocationTable {
    /// Validates and wraps a list of locations.
    pub fn new(locations: Vec<Location>) -> Result<Self, TourError> {
        if locations.is_empty() {
            return Err(TourError::EmptyTable);
        }

        let n = locations.len();
        let mut seen = vec![false; n];
        for (index, loc) in locations.iter().enumerate() {
            if loc.id < n {
                if seen[loc.id] {
                    return Err(TourError::DuplicateId { id: loc.id });
                }
                seen[loc.id] = true;
            }
            if loc.id != index {
                return Err(TourError::IdOutOfOrder { index, id: loc.id });
            }
            check_coordinate(loc.id, "latitude_rad", loc.latitude_rad, FRAC_PI_2)?;
            check_coordinate(loc.id, "longitude_rad", loc.longitude_rad, TAU)?;
        }

        Ok(Self { locations })
    }

    /// Builds a table from `(name, region, latitude°, longitude°)` records,
    /// assigning ids in input order.
    pub fn from_degrees<I, S, T>(records: I) -> Result<Self, TourError>
    where
        I: IntoIterator<Item = (S, T, f64, f64)>,
        S: Into<String>,
        T: Into<String>,
    {
        let locations = records
            .into_iter()
            .enumerate()
            .map(|(id, (name, region, lat, lon))| Location::from_degrees(id, name, region, lat, lon))
            .collect();
        Self::new(locations)
    }

    /// Number of locations.
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    /// Always false for a constructed table; present for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Location> {
        self.locations.iter()
    }

    /// Names of the locations in the given visiting order.
    pub fn names_in_order(&self, order: &[usize]) -> Vec<&str> {
        order.iter().map(|&id| self.locations[id].name.as_str()).collect()
    }
}

impl Index<usize> for LocationTable {
    type Output = Location;

    fn index(&self, id: usize) -> &Location {
        &self.locations[id]
    }
}

fn check_coordinate(id: usize, field: &'static str, value: f64, limit: f64) -> Result<(), TourError> {
    if value.is_finite() && (-limit..=limit).contains(&value) {
        Ok(())
    } else {
        Err(TourError::CoordinateOutOfRange { id, field, value })
    }
}
