//! The vehicle record and its category.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Sentinel driver id for a vehicle with no driver assigned.
pub const UNASSIGNED: &str = "UNASSIGNED";

/// What kind of vehicle this is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VehicleCategory {
    Truck,
    Van,
}

impl fmt::Display for VehicleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VehicleCategory::Truck => write!(f, "Truck"),
            VehicleCategory::Van => write!(f, "Van"),
        }
    }
}

/// A vehicle in the fleet.
///
/// `mileage` is the vehicle index's sort key. It only changes through the
/// coordination layer's delivery flow, which re-keys the index entry;
/// mutating it while the vehicle sits inside the tree would corrupt the
/// BST ordering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    /// Unique registration number, e.g. "GT-1024-23".
    pub registration: String,
    pub category: VehicleCategory,
    /// Total distance travelled, in km.
    pub mileage: u32,
    /// Fuel consumption in litres per 100km.
    pub fuel_usage: f64,
    /// Id of the assigned driver, or [`UNASSIGNED`].
    pub driver_id: String,
}

impl Vehicle {
    /// Create a vehicle with no driver assigned.
    pub fn new(
        registration: impl Into<String>,
        category: VehicleCategory,
        mileage: u32,
        fuel_usage: f64,
    ) -> Self {
        Self {
            registration: registration.into(),
            category,
            mileage,
            fuel_usage,
            driver_id: UNASSIGNED.to_string(),
        }
    }

    /// Create a vehicle with a driver already assigned.
    pub fn with_driver(
        registration: impl Into<String>,
        category: VehicleCategory,
        mileage: u32,
        fuel_usage: f64,
        driver_id: impl Into<String>,
    ) -> Self {
        Self {
            driver_id: driver_id.into(),
            ..Self::new(registration, category, mileage, fuel_usage)
        }
    }

    /// Whether a driver is currently assigned.
    pub fn has_driver(&self) -> bool {
        self.driver_id != UNASSIGNED
    }
}

impl fmt::Display for Vehicle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) {} km, {:.2} L/100km, driver {}",
            self.registration, self.category, self.mileage, self.fuel_usage, self.driver_id
        )
    }
}
