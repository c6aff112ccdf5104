//! Configuration constants for fleetcore.

/// Capacity of the driver and delivery queues.
///
/// The queues are backed by fixed-size arrays that never grow. 100 slots
/// matches the operational assumption of the console tool: a depot never
/// has more than 100 drivers waiting or 100 deliveries pending at once.
/// An enqueue beyond this limit is rejected, not buffered.
pub const QUEUE_CAPACITY: usize = 100;

/// Capacity of the maintenance scheduler's heap array.
///
/// Same hard-cap policy as the queues: the heap is a fixed array and
/// `add_task` rejects once it is full.
pub const SCHEDULER_CAPACITY: usize = 100;

/// A vehicle is a fuel outlier when its usage exceeds the fleet average
/// by this factor (1.5 = uses 50% more fuel than the average vehicle).
pub const FUEL_OUTLIER_FACTOR: f64 = 1.5;

/// Upper bound (exclusive) of the high-efficiency band, in L/100km.
pub const FUEL_HIGH_EFFICIENCY_MAX: f64 = 8.0;

/// Upper bound (inclusive) of the medium-efficiency band, in L/100km.
/// Anything above this is low efficiency.
pub const FUEL_MEDIUM_EFFICIENCY_MAX: f64 = 12.0;
