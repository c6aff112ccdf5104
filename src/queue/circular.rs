//! Array-backed circular FIFO queue.

use crate::common::config::QUEUE_CAPACITY;
use crate::common::{Error, Result};

/// A fixed-capacity circular queue.
///
/// The backing array never grows. `front`, `rear` and `count` track the
/// logical window; the window `[front, front + count)` (mod capacity)
/// holds exactly the live elements in FIFO order. Slots outside the
/// window are stale and never read - `count` gates visibility, so
/// [`clear`](Self::clear) only resets the indices.
///
/// # Example
/// ```
/// use fleetcore::queue::CircularQueue;
///
/// let mut queue: CircularQueue<&str> = CircularQueue::with_capacity(2);
/// queue.enqueue("a").unwrap();
/// queue.enqueue("b").unwrap();
/// assert!(queue.enqueue("c").is_err()); // hard cap
/// assert_eq!(queue.dequeue(), Some("a"));
/// ```
pub struct CircularQueue<T> {
    slots: Box<[Option<T>]>,
    /// Index of the oldest live element.
    front: usize,
    /// Index of the newest live element. Starts at `capacity - 1` so the
    /// first circular increment wraps to slot 0 (the array rendition of
    /// the classic `rear = -1` sentinel).
    rear: usize,
    count: usize,
}

impl<T> CircularQueue<T> {
    /// Create a queue with the default capacity of
    /// [`QUEUE_CAPACITY`](crate::common::config::QUEUE_CAPACITY) slots.
    pub fn new() -> Self {
        Self::with_capacity(QUEUE_CAPACITY)
    }

    /// Create a queue with an explicit capacity.
    ///
    /// # Panics
    /// Panics if `capacity` is zero.
    pub fn with_capacity(capacity: usize) -> Self {
        assert!(capacity > 0, "queue capacity must be at least 1");
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || None);
        Self {
            slots: slots.into_boxed_slice(),
            front: 0,
            rear: capacity - 1,
            count: 0,
        }
    }

    /// Total number of slots.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of live elements.
    pub fn len(&self) -> usize {
        self.count
    }

    /// Whether the queue holds no elements.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Whether every slot is live.
    pub fn is_full(&self) -> bool {
        self.count == self.slots.len()
    }

    /// Append an item at the rear.
    ///
    /// A full queue rejects the item with [`Error::QueueFull`] - the cap
    /// is hard, nothing is evicted or grown.
    pub fn enqueue(&mut self, item: T) -> Result<()> {
        if self.is_full() {
            return Err(Error::QueueFull(self.slots.len()));
        }
        self.rear = (self.rear + 1) % self.slots.len();
        self.slots[self.rear] = Some(item);
        self.count += 1;
        Ok(())
    }

    /// Remove and return the item at the front, if any.
    pub fn dequeue(&mut self) -> Option<T> {
        if self.count == 0 {
            return None;
        }
        let item = self.slots[self.front].take();
        self.front = (self.front + 1) % self.slots.len();
        self.count -= 1;
        item
    }

    /// References to the live elements, front to rear, without mutation.
    pub fn peek_all(&self) -> Vec<&T> {
        self.iter().collect()
    }

    /// Iterate over live elements in FIFO order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        (0..self.count).filter_map(move |i| {
            let index = (self.front + i) % self.slots.len();
            self.slots[index].as_ref()
        })
    }

    /// Reset to empty without touching the backing array.
    ///
    /// Stale slots are safe to leave behind because `count` gates reads.
    pub fn clear(&mut self) {
        self.front = 0;
        self.rear = self.slots.len() - 1;
        self.count = 0;
    }
}

impl<T: Clone> CircularQueue<T> {
    /// Clone the live elements in FIFO order.
    ///
    /// Used by the persistence collaborator to save queue contents.
    pub fn snapshot(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

impl<T> Default for CircularQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}
