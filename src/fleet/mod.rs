//! The coordination layer.
//!
//! [`Fleet`] owns one of each container - the vehicle index, the driver
//! and delivery queues, the maintenance scheduler - plus the completed
//! service log, and enforces the cross-container rules the containers
//! themselves cannot see: registration uniqueness, vehicle existence
//! checks before queueing or scheduling, and mileage re-keying after a
//! delivery. The console front-end and the persistence collaborator talk
//! to this type only.

mod urgency;

pub use urgency::Urgency;

use tracing::{info, warn};

use crate::common::{Error, Result};
use crate::index::VehicleTree;
use crate::queue::CircularQueue;
use crate::records::{Delivery, Driver, MaintenanceRecord, MaintenanceTask, Vehicle};
use crate::scheduler::MaintenanceScheduler;

/// All fleet state, behind one mutation surface.
///
/// Explicitly constructed and passed wherever it is needed - there are no
/// process-wide singletons.
#[derive(Default)]
pub struct Fleet {
    vehicles: VehicleTree,
    drivers: CircularQueue<Driver>,
    deliveries: CircularQueue<Delivery>,
    maintenance: MaintenanceScheduler,
    service_log: Vec<MaintenanceRecord>,
}

impl Fleet {
    pub fn new() -> Self {
        Self::default()
    }

    // ----- vehicle index -----

    /// Register a vehicle, rejecting duplicate registration numbers.
    ///
    /// The tree itself cannot enforce uniqueness (its key is mileage), so
    /// the existence check happens here, before every insert.
    pub fn register_vehicle(&mut self, vehicle: Vehicle) -> Result<()> {
        if self
            .vehicles
            .search_by_registration(&vehicle.registration)
            .is_some()
        {
            return Err(Error::DuplicateRegistration(vehicle.registration));
        }
        info!(registration = %vehicle.registration, mileage = vehicle.mileage, "vehicle registered");
        self.vehicles.insert(vehicle);
        Ok(())
    }

    /// Remove a vehicle by registration. Returns `false` if unknown.
    pub fn remove_vehicle(&mut self, registration: &str) -> bool {
        let removed = self.vehicles.remove(registration);
        if removed {
            info!(registration, "vehicle removed");
        }
        removed
    }

    pub fn find_vehicle(&self, registration: &str) -> Option<&Vehicle> {
        self.vehicles.search_by_registration(registration)
    }

    pub fn find_vehicle_by_mileage(&self, mileage: u32) -> Option<&Vehicle> {
        self.vehicles.search_by_mileage(mileage)
    }

    /// Snapshot of all vehicles in ascending mileage order.
    pub fn vehicles_by_mileage(&self) -> Vec<Vehicle> {
        self.vehicles.all_vehicles()
    }

    pub fn vehicle_count(&self) -> usize {
        self.vehicles.len()
    }

    // ----- driver queue -----

    /// Queue a driver for assignment.
    pub fn add_driver(&mut self, driver: Driver) -> Result<()> {
        self.drivers.enqueue(driver)
    }

    /// Take the driver who has waited longest.
    pub fn next_driver(&mut self) -> Option<Driver> {
        self.drivers.dequeue()
    }

    pub fn waiting_drivers(&self) -> Vec<&Driver> {
        self.drivers.peek_all()
    }

    // ----- delivery queue -----

    /// Queue a delivery, rejecting orders for unregistered vehicles.
    pub fn queue_delivery(&mut self, delivery: Delivery) -> Result<()> {
        if self
            .vehicles
            .search_by_registration(&delivery.vehicle_registration)
            .is_none()
        {
            return Err(Error::UnknownVehicle(delivery.vehicle_registration));
        }
        info!(package = %delivery.package_id, vehicle = %delivery.vehicle_registration, "delivery queued");
        self.deliveries.enqueue(delivery)
    }

    /// Dequeue the delivery that has waited longest.
    pub fn process_next_delivery(&mut self) -> Option<Delivery> {
        let delivery = self.deliveries.dequeue();
        if let Some(ref delivery) = delivery {
            info!(package = %delivery.package_id, "delivery processed");
        }
        delivery
    }

    pub fn pending_deliveries(&self) -> Vec<&Delivery> {
        self.deliveries.peek_all()
    }

    /// Record the distance a processed delivery added to its vehicle.
    ///
    /// Bumps the vehicle's mileage and decrements the remaining mileage
    /// of that vehicle's scheduled maintenance tasks. Mileage is the
    /// index's sort key, so the vehicle is re-keyed: removed, updated,
    /// reinserted. Mutating the key in place would corrupt the tree's
    /// ordering.
    pub fn record_delivery_mileage(&mut self, registration: &str, distance: u32) -> Result<()> {
        let mut vehicle = match self.vehicles.search_by_registration(registration) {
            Some(vehicle) => vehicle.clone(),
            None => return Err(Error::UnknownVehicle(registration.to_string())),
        };
        self.vehicles.remove(registration);
        vehicle.mileage += distance;
        info!(registration, distance, new_mileage = vehicle.mileage, "mileage recorded");
        self.vehicles.insert(vehicle);

        self.maintenance.update_tasks_for_vehicle(registration, distance);
        Ok(())
    }

    // ----- maintenance -----

    /// Schedule maintenance, rejecting unknown vehicles.
    pub fn schedule_maintenance(&mut self, registration: &str, mileage_until_service: u32) -> Result<()> {
        if self.vehicles.search_by_registration(registration).is_none() {
            warn!(registration, "maintenance requested for unknown vehicle");
            return Err(Error::UnknownVehicle(registration.to_string()));
        }
        self.maintenance
            .add_task(MaintenanceTask::new(registration, mileage_until_service))
    }

    /// Service the most urgent vehicle and log the completed work.
    ///
    /// Returns the processed task, or `None` when nothing is scheduled
    /// (in which case no record is logged).
    pub fn service_next_vehicle(&mut self, record: MaintenanceRecord) -> Option<MaintenanceTask> {
        let task = self.maintenance.process_next_task()?;
        self.service_log.push(record);
        Some(task)
    }

    /// Pending tasks, most urgent first.
    pub fn scheduled_maintenance(&self) -> Vec<MaintenanceTask> {
        self.maintenance.all_tasks_by_priority()
    }

    pub fn service_history(&self) -> &[MaintenanceRecord] {
        &self.service_log
    }

    // ----- snapshots for the persistence collaborator -----

    pub fn drivers_snapshot(&self) -> Vec<Driver> {
        self.drivers.snapshot()
    }

    pub fn deliveries_snapshot(&self) -> Vec<Delivery> {
        self.deliveries.snapshot()
    }

    pub fn maintenance_snapshot(&self) -> Vec<MaintenanceTask> {
        self.maintenance.tasks_snapshot()
    }

    /// Drop every record from every container.
    ///
    /// Used by the persistence collaborator before rebuilding state from
    /// a file load.
    pub fn clear(&mut self) {
        self.vehicles = VehicleTree::new();
        self.drivers.clear();
        self.deliveries.clear();
        self.maintenance.clear();
        self.service_log.clear();
    }
}
