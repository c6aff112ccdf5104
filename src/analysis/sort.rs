//! Quicksort and mergesort over vehicle snapshots.

use std::cmp::Ordering;
use std::time::Instant;

use super::keys::SortKey;
use super::report::SortReport;
use crate::records::Vehicle;

/// Sort in place with quicksort, Lomuto partition scheme.
///
/// The pivot is always the last element of the range - deliberately
/// simple, no randomization. Average O(n log n); already-sorted or
/// adversarial input degrades to O(n^2). Not stable.
pub fn quick_sort(vehicles: &mut [Vehicle], key: SortKey) -> SortReport {
    let started = Instant::now();
    let mut comparisons = 0u64;
    if vehicles.len() > 1 {
        quick_sort_range(vehicles, 0, vehicles.len() - 1, key, &mut comparisons);
    }
    SortReport {
        elapsed: started.elapsed(),
        comparisons,
    }
}

fn quick_sort_range(
    vehicles: &mut [Vehicle],
    low: usize,
    high: usize,
    key: SortKey,
    comparisons: &mut u64,
) {
    if low >= high {
        return;
    }
    let pivot = partition(vehicles, low, high, key, comparisons);
    if pivot > low {
        quick_sort_range(vehicles, low, pivot - 1, key, comparisons);
    }
    if pivot < high {
        quick_sort_range(vehicles, pivot + 1, high, key, comparisons);
    }
}

/// Lomuto partition over `[low, high]` with `vehicles[high]` as pivot.
///
/// Elements ordered at-or-before the pivot are swapped left of the
/// boundary; the pivot then lands at the boundary index, which is
/// returned.
fn partition(
    vehicles: &mut [Vehicle],
    low: usize,
    high: usize,
    key: SortKey,
    comparisons: &mut u64,
) -> usize {
    let mut boundary = low;
    for i in low..high {
        *comparisons += 1;
        if key.compare(&vehicles[i], &vehicles[high]) != Ordering::Greater {
            vehicles.swap(boundary, i);
            boundary += 1;
        }
    }
    vehicles.swap(boundary, high);
    boundary
}

/// Sort in place with mergesort.
///
/// Splits at the midpoint, recursively sorts each half, then merges
/// through two temporary arrays. Stable - the merge takes from the left
/// half on equal keys, so ties keep their original relative order.
/// O(n log n) regardless of input order.
pub fn merge_sort(vehicles: &mut [Vehicle], key: SortKey) -> SortReport {
    let started = Instant::now();
    let mut comparisons = 0u64;
    merge_sort_range(vehicles, key, &mut comparisons);
    SortReport {
        elapsed: started.elapsed(),
        comparisons,
    }
}

fn merge_sort_range(vehicles: &mut [Vehicle], key: SortKey, comparisons: &mut u64) {
    if vehicles.len() <= 1 {
        return;
    }
    let mid = vehicles.len() / 2;
    merge_sort_range(&mut vehicles[..mid], key, comparisons);
    merge_sort_range(&mut vehicles[mid..], key, comparisons);

    let left: Vec<Vehicle> = vehicles[..mid].to_vec();
    let right: Vec<Vehicle> = vehicles[mid..].to_vec();

    let (mut i, mut j) = (0, 0);
    for slot in vehicles.iter_mut() {
        let take_left = if i == left.len() {
            false
        } else if j == right.len() {
            true
        } else {
            *comparisons += 1;
            key.compare(&left[i], &right[j]) != Ordering::Greater
        };
        if take_left {
            *slot = left[i].clone();
            i += 1;
        } else {
            *slot = right[j].clone();
            j += 1;
        }
    }
}
