//! Maintenance scheduling.
//!
//! The scheduler is an array-backed binary min-heap of
//! [`MaintenanceTask`](crate::records::MaintenanceTask)s ordered by
//! mileage-until-service: the vehicle closest to its service interval
//! always surfaces first.

mod min_heap;

pub use min_heap::MaintenanceScheduler;
