//! Property tests for the containers, checked against simple oracles.
//!
//! Each property pits a container against an independently computed
//! answer (a sorted copy, a growable deque) over arbitrary operation
//! sequences.

use proptest::collection::vec;
use proptest::prelude::*;

use fleetcore::analysis::{merge_sort, quick_sort, SortKey};
use fleetcore::index::VehicleTree;
use fleetcore::queue::CircularQueue;
use fleetcore::records::{MaintenanceTask, Vehicle, VehicleCategory};
use fleetcore::scheduler::MaintenanceScheduler;

fn vehicle(registration: String, mileage: u32) -> Vehicle {
    Vehicle::new(registration, VehicleCategory::Van, mileage, 10.0)
}

proptest! {
    /// After any insert sequence, the in-order snapshot is sorted by
    /// mileage and contains every inserted vehicle.
    #[test]
    fn tree_in_order_is_sorted(mileages in vec(0u32..10_000, 0..60)) {
        let mut tree = VehicleTree::new();
        for (i, mileage) in mileages.iter().enumerate() {
            tree.insert(vehicle(format!("V{i}"), *mileage));
        }

        let snapshot = tree.all_vehicles();
        prop_assert_eq!(snapshot.len(), mileages.len());
        for pair in snapshot.windows(2) {
            prop_assert!(pair[0].mileage <= pair[1].mileage);
        }
    }

    /// Removing any vehicle by registration drops exactly that vehicle:
    /// the snapshot shrinks by one, the registration is gone, everything
    /// else is still there in sorted order.
    #[test]
    fn tree_remove_drops_exactly_one(
        mileages in vec(0u32..1_000, 1..40),
        victim_index in 0usize..40,
    ) {
        let mut tree = VehicleTree::new();
        for (i, mileage) in mileages.iter().enumerate() {
            tree.insert(vehicle(format!("V{i}"), *mileage));
        }
        let victim = format!("V{}", victim_index % mileages.len());

        prop_assert!(tree.remove(&victim));
        prop_assert!(tree.search_by_registration(&victim).is_none());
        prop_assert_eq!(tree.len(), mileages.len() - 1);

        let snapshot = tree.all_vehicles();
        prop_assert_eq!(snapshot.len(), mileages.len() - 1);
        for pair in snapshot.windows(2) {
            prop_assert!(pair[0].mileage <= pair[1].mileage);
        }
    }

    /// Every pop returns the global minimum among the tasks currently
    /// scheduled, verified against a sorted oracle after every mutation.
    #[test]
    fn heap_pops_global_minimum(keys in vec(0u32..5_000, 0..80)) {
        let mut scheduler = MaintenanceScheduler::new();
        let mut oracle: Vec<u32> = Vec::new();

        for (i, key) in keys.iter().enumerate() {
            scheduler.add_task(MaintenanceTask::new(format!("V{i}"), *key)).unwrap();
            oracle.push(*key);
        }
        oracle.sort_unstable();

        for expected in oracle {
            let task = scheduler.process_next_task().unwrap();
            prop_assert_eq!(task.mileage_until_service, expected);
        }
        prop_assert!(scheduler.is_empty());
    }

    /// After a bulk priority update, successive pops still come out in
    /// non-decreasing key order - the heap invariant survived the
    /// rebuild.
    #[test]
    fn heap_survives_bulk_update(
        keys in vec(0u32..5_000, 1..60),
        delta in 0u32..6_000,
    ) {
        let mut scheduler = MaintenanceScheduler::new();
        for (i, key) in keys.iter().enumerate() {
            // Two vehicles share the heap; only "A" tasks get updated.
            let registration = if i % 2 == 0 { "A" } else { "B" };
            scheduler
                .add_task(MaintenanceTask::new(registration, *key))
                .unwrap();
        }

        scheduler.update_tasks_for_vehicle("A", delta);

        let mut previous = 0u32;
        while let Some(task) = scheduler.process_next_task() {
            prop_assert!(task.mileage_until_service >= previous);
            previous = task.mileage_until_service;
        }
    }

    /// The circular queue agrees with a growable deque oracle under any
    /// interleaving of enqueues and dequeues, including wrap-around.
    #[test]
    fn queue_matches_deque_oracle(ops in vec(any::<Option<u16>>(), 0..200)) {
        use std::collections::VecDeque;

        let mut queue = CircularQueue::with_capacity(8);
        let mut oracle: VecDeque<u16> = VecDeque::new();

        for op in ops {
            match op {
                Some(item) => {
                    let accepted = queue.enqueue(item).is_ok();
                    prop_assert_eq!(accepted, oracle.len() < 8);
                    if accepted {
                        oracle.push_back(item);
                    }
                }
                None => {
                    prop_assert_eq!(queue.dequeue(), oracle.pop_front());
                }
            }
            prop_assert_eq!(queue.len(), oracle.len());
            let live: Vec<u16> = queue.snapshot();
            let expected: Vec<u16> = oracle.iter().copied().collect();
            prop_assert_eq!(live, expected);
        }
    }

    /// Quicksort, mergesort and the tree's in-order snapshot all agree
    /// on mileage order for any permutation of a vehicle set.
    #[test]
    fn sorts_and_tree_agree(mileages in vec(0u32..1_000, 0..50)) {
        let fleet: Vec<Vehicle> = mileages
            .iter()
            .enumerate()
            .map(|(i, mileage)| vehicle(format!("V{i}"), *mileage))
            .collect();

        let mut quick = fleet.clone();
        let mut merge = fleet.clone();
        quick_sort(&mut quick, SortKey::Mileage);
        merge_sort(&mut merge, SortKey::Mileage);

        let mut tree = VehicleTree::new();
        for v in fleet {
            tree.insert(v);
        }

        let quick_keys: Vec<u32> = quick.iter().map(|v| v.mileage).collect();
        let merge_keys: Vec<u32> = merge.iter().map(|v| v.mileage).collect();
        let tree_keys: Vec<u32> = tree.all_vehicles().iter().map(|v| v.mileage).collect();

        let mut expected = mileages;
        expected.sort_unstable();
        prop_assert_eq!(&quick_keys, &expected);
        prop_assert_eq!(&merge_keys, &expected);
        prop_assert_eq!(&tree_keys, &expected);
    }
}
