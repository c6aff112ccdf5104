//! Maintenance records: scheduled tasks and completed services.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A scheduled maintenance task.
///
/// `mileage_until_service` is the scheduler's priority key: lower means
/// more urgent. It is decremented by the scheduler's bulk update as the
/// vehicle accumulates delivery mileage, floored at zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaintenanceTask {
    pub vehicle_registration: String,
    /// Remaining km before the vehicle is due for service.
    pub mileage_until_service: u32,
}

impl MaintenanceTask {
    pub fn new(vehicle_registration: impl Into<String>, mileage_until_service: u32) -> Self {
        Self {
            vehicle_registration: vehicle_registration.into(),
            mileage_until_service,
        }
    }
}

impl fmt::Display for MaintenanceTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} km until service",
            self.vehicle_registration, self.mileage_until_service
        )
    }
}

/// A completed maintenance service.
///
/// Appended to the fleet's service log when a scheduled task is processed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaintenanceRecord {
    /// Service date label, "YYYY-MM-DD".
    pub date: String,
    /// What was serviced or replaced, e.g. "Brake pads".
    pub work_done: String,
    pub cost: f64,
}

impl MaintenanceRecord {
    pub fn new(date: impl Into<String>, work_done: impl Into<String>, cost: f64) -> Self {
        Self {
            date: date.into(),
            work_done: work_done.into(),
            cost,
        }
    }
}

impl fmt::Display for MaintenanceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} (GHS {:.2})", self.date, self.work_done, self.cost)
    }
}
