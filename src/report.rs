//! Human-readable run summary.

use crate::ga::GaResult;
use crate::geo::LocationTable;
use std::fmt;

/// One stop of the optimized order.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TourStop {
    pub id: usize,
    pub name: String,
    pub region: String,
}

/// Best order found, with its distance and the baseline for comparison.
///
/// `Display` renders one stop per line followed by both distances.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TourReport {
    pub stops: Vec<TourStop>,
    pub best_distance_km: f64,
    pub baseline_distance_km: f64,
    pub generations: usize,
}

impl TourReport {
    /// Builds a report from a finished run over `table`.
    pub fn new(table: &LocationTable, result: &GaResult) -> Self {
        let stops = result
            .best
            .order()
            .iter()
            .map(|&id| {
                let loc = &table[id];
                TourStop {
                    id,
                    name: loc.name.clone(),
                    region: loc.region.clone(),
                }
            })
            .collect();
        Self {
            stops,
            best_distance_km: result.best_distance_km,
            baseline_distance_km: result.baseline_distance_km,
            generations: result.generations,
        }
    }

    /// Kilometres saved relative to the baseline.
    pub fn improvement_km(&self) -> f64 {
        self.baseline_distance_km - self.best_distance_km
    }

    /// Saving as a fraction of the baseline (0 when the baseline is 0).
    pub fn improvement_ratio(&self) -> f64 {
        if self.baseline_distance_km > 0.0 {
            self.improvement_km() / self.baseline_distance_km
        } else {
            0.0
        }
    }
}

impl fmt::Display for TourReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Solution after {} generations:", self.generations)?;
        for (i, stop) in self.stops.iter().enumerate() {
            if stop.region.is_empty() {
                writeln!(f, "{:>3}. {}", i + 1, stop.name)?;
            } else {
                writeln!(f, "{:>3}. {}, {}", i + 1, stop.name, stop.region)?;
            }
        }
        writeln!(f, "Total distance: {:.1} km", self.best_distance_km)?;
        write!(
            f,
            "Original order: {:.1} km (saved {:.1} km, {:.1}%)",
            self.baseline_distance_km,
            self.improvement_km(),
            self.improvement_ratio() * 100.0
        )
    }
}
