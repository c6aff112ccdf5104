//! Fuel-efficiency analytics over a vehicle snapshot.
//!
//! Pure functions: they read a snapshot array and return derived data for
//! the console's fuel reports. No container is ever mutated.

use crate::common::config::{
    FUEL_HIGH_EFFICIENCY_MAX, FUEL_MEDIUM_EFFICIENCY_MAX, FUEL_OUTLIER_FACTOR,
};
use crate::records::Vehicle;

/// Fleet-wide fuel usage summary.
#[derive(Debug, Clone, PartialEq)]
pub struct FuelSummary {
    pub vehicle_count: usize,
    /// Mean fuel usage across the snapshot, L/100km.
    pub average_usage: f64,
    pub most_efficient: Vehicle,
    pub least_efficient: Vehicle,
}

/// A vehicle flagged as burning well above the fleet average.
#[derive(Debug, Clone, PartialEq)]
pub struct FuelOutlier {
    pub vehicle: Vehicle,
    /// How far above the fleet average this vehicle sits, L/100km.
    pub excess_over_average: f64,
}

/// Fuel-efficiency bands used by the console's filter view.
///
/// Band bounds come from [`crate::common::config`]: below 8 L/100km is
/// high efficiency, 8-12 inclusive is medium, above 12 is low.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EfficiencyBand {
    High,
    Medium,
    Low,
}

impl EfficiencyBand {
    /// Classify a fuel usage figure.
    pub fn of(fuel_usage: f64) -> Self {
        if fuel_usage < FUEL_HIGH_EFFICIENCY_MAX {
            EfficiencyBand::High
        } else if fuel_usage <= FUEL_MEDIUM_EFFICIENCY_MAX {
            EfficiencyBand::Medium
        } else {
            EfficiencyBand::Low
        }
    }
}

/// Summarize fuel usage across the snapshot.
///
/// Returns `None` for an empty snapshot - there is no average of nothing.
pub fn fuel_summary(vehicles: &[Vehicle]) -> Option<FuelSummary> {
    let first = vehicles.first()?;
    let mut most_efficient = first;
    let mut least_efficient = first;
    let mut total = 0.0;

    for vehicle in vehicles {
        total += vehicle.fuel_usage;
        if vehicle.fuel_usage < most_efficient.fuel_usage {
            most_efficient = vehicle;
        }
        if vehicle.fuel_usage > least_efficient.fuel_usage {
            least_efficient = vehicle;
        }
    }

    Some(FuelSummary {
        vehicle_count: vehicles.len(),
        average_usage: total / vehicles.len() as f64,
        most_efficient: most_efficient.clone(),
        least_efficient: least_efficient.clone(),
    })
}

/// Vehicles using more than [`FUEL_OUTLIER_FACTOR`] times the fleet
/// average.
pub fn fuel_outliers(vehicles: &[Vehicle]) -> Vec<FuelOutlier> {
    let Some(summary) = fuel_summary(vehicles) else {
        return Vec::new();
    };
    let threshold = summary.average_usage * FUEL_OUTLIER_FACTOR;

    vehicles
        .iter()
        .filter(|vehicle| vehicle.fuel_usage > threshold)
        .map(|vehicle| FuelOutlier {
            vehicle: vehicle.clone(),
            excess_over_average: vehicle.fuel_usage - summary.average_usage,
        })
        .collect()
}

/// Vehicles falling in the given efficiency band.
pub fn filter_by_efficiency(vehicles: &[Vehicle], band: EfficiencyBand) -> Vec<Vehicle> {
    vehicles
        .iter()
        .filter(|vehicle| EfficiencyBand::of(vehicle.fuel_usage) == band)
        .cloned()
        .collect()
}
