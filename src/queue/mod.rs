//! Fixed-capacity FIFO queues.
//!
//! The driver and delivery queues are both instances of
//! [`CircularQueue`], a ring buffer over a fixed backing array. Capacity
//! is a hard cap: a full queue rejects new items instead of growing.

mod circular;

pub use circular::CircularQueue;
