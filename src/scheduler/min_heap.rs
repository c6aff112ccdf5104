//! Array-backed binary min-heap of maintenance tasks.

use tracing::{debug, info};

use crate::common::config::SCHEDULER_CAPACITY;
use crate::common::{Error, Result};
use crate::records::MaintenanceTask;

/// Priority scheduler for maintenance tasks.
///
/// Backed by a fixed-capacity array in the classic implicit-tree layout:
/// `parent(i) = (i - 1) / 2`, `children(i) = 2i + 1, 2i + 2`. Index 0 is
/// always the task with the globally minimum mileage-until-service.
///
/// The heap invariant - every parent's key is less than or equal to its
/// children's keys - is maintained by sift-up on insert, sift-down on
/// removal, and a full bottom-up rebuild after bulk priority mutation.
///
/// # Example
/// ```
/// use fleetcore::records::MaintenanceTask;
/// use fleetcore::scheduler::MaintenanceScheduler;
///
/// let mut scheduler = MaintenanceScheduler::new();
/// scheduler.add_task(MaintenanceTask::new("GT-1024-23", 2_000)).unwrap();
/// scheduler.add_task(MaintenanceTask::new("GW-88-21", 450)).unwrap();
///
/// // Most urgent task (lowest remaining mileage) comes out first.
/// let next = scheduler.process_next_task().unwrap();
/// assert_eq!(next.vehicle_registration, "GW-88-21");
/// ```
pub struct MaintenanceScheduler {
    heap: Vec<MaintenanceTask>,
    capacity: usize,
}

impl MaintenanceScheduler {
    /// Create a scheduler with the default capacity of
    /// [`SCHEDULER_CAPACITY`](crate::common::config::SCHEDULER_CAPACITY).
    pub fn new() -> Self {
        Self::with_capacity(SCHEDULER_CAPACITY)
    }

    /// Create a scheduler with an explicit capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Number of pending tasks.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether no tasks are pending.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Schedule a task, keeping the most urgent one at the root.
    ///
    /// Appends at the end of the array and sifts up: while the new task's
    /// key is smaller than its parent's, swap them. Rejects with
    /// [`Error::SchedulerFull`] at capacity.
    pub fn add_task(&mut self, task: MaintenanceTask) -> Result<()> {
        if self.heap.len() == self.capacity {
            return Err(Error::SchedulerFull(self.capacity));
        }
        info!(
            vehicle = %task.vehicle_registration,
            remaining_km = task.mileage_until_service,
            "maintenance task scheduled"
        );
        self.heap.push(task);
        self.sift_up(self.heap.len() - 1);
        Ok(())
    }

    /// Remove and return the most urgent task, if any.
    ///
    /// Captures the root, moves the last element into its place and sifts
    /// down until the heap property holds again.
    pub fn process_next_task(&mut self) -> Option<MaintenanceTask> {
        if self.heap.is_empty() {
            return None;
        }
        let last = self.heap.len() - 1;
        self.heap.swap(0, last);
        let task = self.heap.pop();
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        if let Some(ref task) = task {
            info!(
                vehicle = %task.vehicle_registration,
                remaining_km = task.mileage_until_service,
                "processing maintenance task"
            );
        }
        task
    }

    /// All pending tasks sorted by ascending urgency key.
    ///
    /// The heap array is only heap-ordered, not fully sorted, so display
    /// requires sorting a snapshot copy. The heap itself is untouched.
    pub fn all_tasks_by_priority(&self) -> Vec<MaintenanceTask> {
        let mut tasks = self.heap.clone();
        tasks.sort_by_key(|task| task.mileage_until_service);
        tasks
    }

    /// Unordered snapshot of pending tasks, for the persistence
    /// collaborator.
    pub fn tasks_snapshot(&self) -> Vec<MaintenanceTask> {
        self.heap.clone()
    }

    /// Decrease the remaining mileage of every task for one vehicle.
    ///
    /// Each matching task's key drops by `delta`, floored at zero. The
    /// mutation can violate the heap invariant at several positions at
    /// once, so instead of patching incrementally the whole array is
    /// re-established as a heap: bottom-up sift-down from the last
    /// internal node to the root, O(n).
    pub fn update_tasks_for_vehicle(&mut self, registration: &str, delta: u32) {
        let mut touched = 0usize;
        for task in &mut self.heap {
            if task.vehicle_registration == registration {
                task.mileage_until_service = task.mileage_until_service.saturating_sub(delta);
                touched += 1;
            }
        }
        if touched == 0 {
            return;
        }
        debug!(
            vehicle = registration,
            delta, tasks = touched, "rebuilding heap after bulk priority update"
        );
        self.rebuild();
    }

    /// Remove all pending tasks.
    pub fn clear(&mut self) {
        self.heap.clear();
    }

    fn key(&self, index: usize) -> u32 {
        self.heap[index].mileage_until_service
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.key(index) < self.key(parent) {
                self.heap.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * index + 1;
            let right = 2 * index + 2;
            let mut smallest = index;

            if left < len && self.key(left) < self.key(smallest) {
                smallest = left;
            }
            if right < len && self.key(right) < self.key(smallest) {
                smallest = right;
            }
            if smallest == index {
                break;
            }
            self.heap.swap(index, smallest);
            index = smallest;
        }
    }

    /// Re-establish the heap property over the whole array.
    fn rebuild(&mut self) {
        // Leaves are trivially valid heaps; start from the last internal
        // node and sift each one down.
        for index in (0..self.heap.len() / 2).rev() {
            self.sift_down(index);
        }
    }
}

impl Default for MaintenanceScheduler {
    fn default() -> Self {
        Self::new()
    }
}
