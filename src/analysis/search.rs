//! Binary search over a sorted vehicle snapshot.

use std::cmp::Ordering;
use std::time::Instant;

use super::keys::cmp_ignore_case;
use super::report::SearchReport;
use crate::records::Vehicle;

/// Binary search by registration number, case-insensitive.
///
/// The input MUST already be sorted by registration with the same
/// case-insensitive ordering (use
/// [`SortKey::Registration`](super::SortKey::Registration)); on unsorted
/// input the result is meaningless. Classic left/right/middle narrowing;
/// returns once the window collapses.
///
/// # Example
/// ```
/// use fleetcore::analysis::{binary_search_by_registration, merge_sort, SortKey};
/// use fleetcore::records::{Vehicle, VehicleCategory};
///
/// let mut fleet = vec![
///     Vehicle::new("GT-200", VehicleCategory::Van, 10, 8.0),
///     Vehicle::new("GT-100", VehicleCategory::Truck, 20, 14.0),
/// ];
/// merge_sort(&mut fleet, SortKey::Registration);
///
/// let report = binary_search_by_registration(&fleet, "gt-100");
/// assert_eq!(report.index, Some(0));
/// ```
pub fn binary_search_by_registration(vehicles: &[Vehicle], registration: &str) -> SearchReport {
    let started = Instant::now();
    let mut comparisons = 0u64;
    let mut index = None;

    if !vehicles.is_empty() {
        let mut left = 0usize;
        let mut right = vehicles.len() - 1;
        loop {
            let middle = left + (right - left) / 2;
            comparisons += 1;
            match cmp_ignore_case(registration, &vehicles[middle].registration) {
                Ordering::Equal => {
                    index = Some(middle);
                    break;
                }
                Ordering::Less => {
                    if middle == 0 {
                        break;
                    }
                    right = middle - 1;
                }
                Ordering::Greater => {
                    left = middle + 1;
                }
            }
            if left > right {
                break;
            }
        }
    }

    SearchReport {
        index,
        elapsed: started.elapsed(),
        comparisons,
    }
}
