//! Error types for fleetcore.

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
/// This is a common Rust pattern (see `std::io::Result`).
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in fleetcore.
///
/// The error surface is deliberately small. Lookups that find nothing
/// return `Option`, and removal of a missing vehicle returns `false` -
/// absence is a normal outcome, not an error. Only contract violations
/// the caller must react to are represented here.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum Error {
    /// A fixed-capacity queue rejected an enqueue.
    ///
    /// The queues are hard-capped ring buffers; they never grow.
    #[error("queue is full (capacity {0})")]
    QueueFull(usize),

    /// The maintenance scheduler's heap array is full.
    #[error("scheduler is full (capacity {0})")]
    SchedulerFull(usize),

    /// An operation referenced a registration that is not in the index.
    #[error("vehicle {0} is not registered")]
    UnknownVehicle(String),

    /// Registering a vehicle whose registration is already indexed.
    ///
    /// Registration numbers are unique across the whole fleet; the
    /// coordination layer checks before every insert.
    #[error("vehicle {0} is already registered")]
    DuplicateRegistration(String),
}
