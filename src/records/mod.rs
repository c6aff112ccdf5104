//! Plain domain records handled by the fleet containers.
//!
//! Records carry no behaviour beyond construction and display. They are
//! created by the front-end collaborator (from input or file load), handed
//! to the core by value, and owned by whichever container currently holds
//! them. Serde derives exist so the external persistence collaborator can
//! serialize snapshots; the core itself never touches a file.

mod delivery;
mod driver;
mod maintenance;
mod vehicle;

pub use delivery::Delivery;
pub use driver::Driver;
pub use maintenance::{MaintenanceRecord, MaintenanceTask};
pub use vehicle::{Vehicle, VehicleCategory, UNASSIGNED};
