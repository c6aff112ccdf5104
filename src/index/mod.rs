//! The vehicle index.
//!
//! An unbalanced binary search tree keyed by mileage, with a secondary
//! full-traversal lookup by registration number. The tree is the source
//! of truth for the fleet's vehicles; reporting and persistence work on
//! snapshots obtained via [`VehicleTree::all_vehicles`].

mod vehicle_tree;

pub use vehicle_tree::VehicleTree;
