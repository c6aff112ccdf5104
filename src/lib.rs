//! fleetcore - The data core behind a fleet-operations console.
//!
//! # Architecture
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                          fleetcore                             │
//! ├────────────────────────────────────────────────────────────────┤
//! │  ┌────────────────────────────────────────────────────────┐    │
//! │  │          Coordination Layer (fleet/)                   │    │
//! │  │   Fleet = VehicleTree + Queues + Scheduler + log       │    │
//! │  └────────────────────────────────────────────────────────┘    │
//! │            ↓                 ↓                  ↓              │
//! │  ┌──────────────────┐ ┌──────────────┐ ┌──────────────────┐   │
//! │  │  Vehicle Index   │ │   Queues     │ │    Scheduler     │   │
//! │  │  (index/)        │ │  (queue/)    │ │  (scheduler/)    │   │
//! │  │  BST by mileage  │ │  ring buffer │ │  binary min-heap │   │
//! │  └──────────────────┘ └──────────────┘ └──────────────────┘   │
//! │            ↓                                                   │
//! │  ┌────────────────────────────────────────────────────────┐    │
//! │  │          Sort/Search Library (analysis/)               │    │
//! │  │   binary search | quicksort | mergesort | fuel stats   │    │
//! │  │       (operates on snapshots, never on indexes)        │    │
//! │  └────────────────────────────────────────────────────────┘    │
//! └────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (config constants, Error, Result)
//! - [`records`] - Plain domain records (Vehicle, Driver, Delivery, tasks)
//! - [`index`] - Vehicle index: unbalanced BST keyed by mileage
//! - [`queue`] - Fixed-capacity circular FIFO queues
//! - [`scheduler`] - Maintenance scheduling via array-backed min-heap
//! - [`analysis`] - Instrumented sorting/searching over snapshots
//! - [`fleet`] - Coordination layer tying the containers together
//!
//! # Design rules
//! The core is single-threaded and does no I/O. Front-end and persistence
//! collaborators hand in fully-constructed records and receive records or
//! primitive results back. The index structures are the source of truth;
//! sorted views are disposable snapshots.
//!
//! # Quick Start
//! ```
//! use fleetcore::fleet::Fleet;
//! use fleetcore::records::{Vehicle, VehicleCategory};
//!
//! let mut fleet = Fleet::new();
//! let vehicle = Vehicle::new("GT-1024-23", VehicleCategory::Truck, 52_000, 14.2);
//! fleet.register_vehicle(vehicle).unwrap();
//!
//! let sorted = fleet.vehicles_by_mileage();
//! assert_eq!(sorted.len(), 1);
//! ```

pub mod analysis;
pub mod common;
pub mod fleet;
pub mod index;
pub mod queue;
pub mod records;
pub mod scheduler;

// Re-export commonly used items at crate root for convenience
pub use common::config::{QUEUE_CAPACITY, SCHEDULER_CAPACITY};
pub use common::{Error, Result};

pub use analysis::{SearchReport, SortKey, SortReport};
pub use fleet::Fleet;
pub use index::VehicleTree;
pub use queue::CircularQueue;
pub use records::{Delivery, Driver, MaintenanceRecord, MaintenanceTask, Vehicle, VehicleCategory};
pub use scheduler::MaintenanceScheduler;
