//! Near-optimal visiting orders over geographic locations.
//!
//! Given a fixed set of venues, finds an order that keeps the total
//! great-circle travel distance short. This is an open-path travelling
//! salesman problem (no return to the start), solved heuristically with a
//! genetic algorithm:
//!
//! - **Distance model**: spherical law of cosines on radian coordinates,
//!   clamped against rounding ([`geo`])
//! - **Chromosome**: a permutation of location ids ([`ga::Chromosome`])
//! - **Selection**: rank weights `1 / (i + 3)` ([`ga::selection`])
//! - **Crossover / mutation**: order crossover and segment inversion
//!   ([`ga::operators`])
//! - **Driver**: elitism plus a rising mutation rate ([`ga::GaRunner`])
//!
//! Loading locations from files and presenting results are left to callers;
//! [`report::TourReport`] is a ready-made summary.
//!
//! # Example
//!
//! ```
//! use u_tour::ga::GaConfig;
//! use u_tour::geo::LocationTable;
//!
//! let table = LocationTable::from_degrees([
//!     ("London", "UK", 51.5074, -0.1278),
//!     ("Paris", "France", 48.8566, 2.3522),
//!     ("Tokyo", "Japan", 35.6762, 139.6503),
//!     ("Melbourne", "Australia", -37.8136, 144.9631),
//! ])
//! .unwrap();
//!
//! let config = GaConfig::default()
//!     .with_population_size(20)
//!     .with_max_generations(10)
//!     .with_seed(7);
//! let report = u_tour::optimize(&table, &config).unwrap();
//! assert!(report.best_distance_km <= report.baseline_distance_km);
//! assert_eq!(report.stops.len(), 4);
//! ```

pub mod error;
pub mod ga;
pub mod geo;
pub mod report;

pub use error::{ConfigError, TourError};

use ga::{GaConfig, GaRunner};
use geo::LocationTable;
use report::TourReport;

/// Runs the GA on `table` and summarises the best order found.
pub fn optimize(table: &LocationTable, config: &GaConfig) -> Result<TourReport, TourError> {
    let result = GaRunner::run(table, config)?;
    Ok(TourReport::new(table, &result))
}
