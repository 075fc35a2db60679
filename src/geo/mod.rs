//! Geographic model: locations and great-circle distances.
//!
//! The optimizer only ever sees coordinates in **radians**. Loaders that
//! read degrees must convert with [`degrees_to_radians`] (or
//! [`Location::from_degrees`]) before building a [`LocationTable`].
//!
//! # Key Types
//!
//! - [`Location`]: One venue with a stable id and radian coordinates
//! - [`LocationTable`]: Validated, id-indexed set of locations
//! - [`DistanceMatrix`]: Precomputed pairwise distances for fast fitness

mod distance;
mod location;

pub use distance::{
    arc_length_km, cosine_argument, great_circle_distance, path_distance, DistanceMatrix,
    EARTH_RADIUS_KM,
};
pub use location::{degrees_to_radians, Location, LocationTable};
