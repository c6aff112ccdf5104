//! Instrumented sorting and searching over vehicle snapshots.
//!
//! Nothing in this module touches the tree or the heap: every function
//! takes a caller-supplied array snapshot (typically from
//! [`VehicleTree::all_vehicles`](crate::index::VehicleTree::all_vehicles))
//! and sorts or searches it in place. Each entry point returns a report
//! with elapsed time and comparison counts for the console's performance
//! read-outs; the instrumentation is an observational side channel, not
//! part of the correctness contract.

pub mod fuel;
mod keys;
mod report;
mod search;
mod sort;

pub use keys::SortKey;
pub use report::{SearchReport, SortReport};
pub use search::binary_search_by_registration;
pub use sort::{merge_sort, quick_sort};
