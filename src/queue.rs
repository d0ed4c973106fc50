use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Capacity used by `BoundedQueue::default`
pub const DEFAULT_CAPACITY: usize = 1000;

/// Occupancy of a queue
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueueState {
    /// No elements
    Empty,
    /// At least one element, but not at capacity
    Partial,
    /// At capacity, `enqueue` will fail
    Full,
}

/// A fixed capacity FIFO queue of integers.
///
/// The storage is allocated once, on construction, and is addressed
/// as a ring: `front` is the oldest element and `rear` the newest.
///
/// ```
/// use ringq::BoundedQueue;
///
/// let mut queue = BoundedQueue::with_capacity(2).unwrap();
/// queue.enqueue(1).unwrap();
/// queue.enqueue(2).unwrap();
/// assert!(queue.enqueue(3).is_err());
///
/// assert_eq!(queue.dequeue(), Some(1));
/// assert_eq!(queue.dequeue(), Some(2));
/// assert_eq!(queue.dequeue(), None);
/// ```
///
/// Mutation requires `&mut self`. To share a queue between threads wrap it
/// in a `Mutex` (or similar) so every operation is serialized.
#[derive(Debug, Clone)]
pub struct BoundedQueue {
    storage: Box<[i32]>,
    front: usize,
    // `None` until the first value is inserted
    rear: Option<usize>,
    count: usize,
}

impl BoundedQueue {
    /// Create a queue that can hold `capacity` values.
    ///
    /// A capacity of zero is rejected with `Error::InvalidCapacity`.
    /// If the storage can not be allocated `Error::Allocation` is returned.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::InvalidCapacity(0));
        }

        let mut storage = Vec::new();
        if let Err(e) = storage.try_reserve_exact(capacity) {
            log::error!("failed to allocate queue storage: {e}");
            return Err(Error::Allocation { capacity });
        }
        storage.resize(capacity, 0);

        Ok(Self::from_storage(storage.into_boxed_slice()))
    }

    fn from_storage(storage: Box<[i32]>) -> Self {
        Self {
            storage,
            front: 0,
            rear: None,
            count: 0,
        }
    }

    /// Insert a value at the back of the queue.
    ///
    /// Returns `Error::QueueFull` if the queue is at capacity, in which case
    /// the queue is left untouched.
    pub fn enqueue(&mut self, value: i32) -> Result<()> {
        if self.is_full() {
            log::warn!("rejected {value}, queue is full");
            return Err(Error::QueueFull {
                capacity: self.capacity(),
            });
        }

        let slot = match self.rear {
            Some(rear) => (rear + 1) % self.capacity(),
            None => self.front,
        };

        log::trace!("inserting {value}");
        self.storage[slot] = value;
        self.rear = Some(slot);
        self.count += 1;
        Ok(())
    }

    /// Remove the value at the front of the queue.
    /// An empty queue returns `None`.
    pub fn dequeue(&mut self) -> Option<i32> {
        if self.is_empty() {
            return None;
        }

        let value = self.storage[self.front];
        log::trace!("removing {value}");
        self.front = (self.front + 1) % self.capacity();
        self.count -= 1;
        Some(value)
    }

    /// Number of values currently held
    pub fn len(&self) -> usize {
        self.count
    }

    /// `true` when the queue holds no values
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// `true` when the queue holds `capacity` values
    pub fn is_full(&self) -> bool {
        self.count == self.capacity()
    }

    /// The fixed capacity, set on construction
    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    /// Current occupancy
    pub fn state(&self) -> QueueState {
        match self.count {
            0 => QueueState::Empty,
            n if n == self.capacity() => QueueState::Full,
            _ => QueueState::Partial,
        }
    }
}

impl Default for BoundedQueue {
    fn default() -> Self {
        Self::from_storage(vec![0; DEFAULT_CAPACITY].into_boxed_slice())
    }
}

impl TryFrom<i64> for BoundedQueue {
    type Error = Error;

    fn try_from(capacity: i64) -> Result<Self> {
        match usize::try_from(capacity) {
            Ok(cap) if cap > 0 => Self::with_capacity(cap),
            _ => Err(Error::InvalidCapacity(capacity)),
        }
    }
}
