//! FIFO queue over an arena chain.
//!
//! Enqueue links at the tail, dequeue unlinks at the head; both O(1).

use std::fmt;

use slotchain_arena::{Handle, SlotArena, DEFAULT_CAPACITY};

use crate::display::write_chain;
use crate::error::CollectionError;

/// Fixed-capacity first-in first-out queue of `f64` values.
///
/// # Example
///
/// ```
/// use slotchain_collections::Queue;
///
/// let mut queue = Queue::<4>::new();
/// queue.enqueue(1.1).unwrap();
/// queue.enqueue(2.2).unwrap();
/// assert_eq!(queue.peek().unwrap(), 1.1);
/// assert_eq!(queue.dequeue().unwrap(), 1.1);
/// assert_eq!(queue.dequeue().unwrap(), 2.2);
/// assert!(queue.dequeue().unwrap_err().is_empty());
/// ```
#[derive(Clone, Debug)]
pub struct Queue<const N: usize = DEFAULT_CAPACITY> {
    arena: SlotArena<N>,
    head: Handle,
    tail: Handle,
}

impl<const N: usize> Queue<N> {
    const NIL: Handle = SlotArena::<N>::NIL;

    /// Create an empty queue.
    pub fn new() -> Self {
        Self {
            arena: SlotArena::new(),
            head: Self::NIL,
            tail: Self::NIL,
        }
    }

    /// Reset to empty, freeing every slot.
    pub fn init(&mut self) {
        self.head = Self::NIL;
        self.tail = Self::NIL;
        self.arena.init();
    }

    /// Same as [`init`](Self::init).
    pub fn clear(&mut self) {
        self.init();
    }

    /// Append `value` at the back.
    ///
    /// On `CapacityExceeded` the queue is unchanged.
    pub fn enqueue(&mut self, value: f64) -> Result<(), CollectionError> {
        let handle = self.arena.allocate()?;
        self.arena.set_value(handle, value)?;
        self.arena.set_next(handle, Self::NIL)?;
        if self.head == Self::NIL {
            self.head = handle;
        } else {
            self.arena.set_next(self.tail, handle)?;
        }
        self.tail = handle;
        Ok(())
    }

    /// Remove and return the front value.
    pub fn dequeue(&mut self) -> Result<f64, CollectionError> {
        if self.head == Self::NIL {
            return Err(CollectionError::Empty);
        }
        let old_head = self.head;
        let value = self.arena.value(old_head)?;
        self.head = self.arena.next(old_head)?;
        if self.head == Self::NIL {
            self.tail = Self::NIL;
        }
        self.arena.deallocate(old_head)?;
        Ok(value)
    }

    /// The front value, without removing it.
    pub fn peek(&self) -> Result<f64, CollectionError> {
        if self.head == Self::NIL {
            return Err(CollectionError::Empty);
        }
        Ok(self.arena.value(self.head)?)
    }

    /// Values in front-to-back order.
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.arena.chain(self.head).values()
    }

    /// Number of queued values.
    pub fn len(&self) -> usize {
        self.arena.used()
    }

    /// Whether nothing is queued.
    pub fn is_empty(&self) -> bool {
        self.head == Self::NIL
    }

    /// Whether the next enqueue would fail with `CapacityExceeded`.
    pub fn is_full(&self) -> bool {
        self.arena.is_full()
    }

    /// Maximum number of queued values.
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Read-only view of the backing arena.
    pub fn arena(&self) -> &SlotArena<N> {
        &self.arena
    }
}

impl<const N: usize> Default for Queue<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> fmt::Display for Queue<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_chain(f, self.iter())
    }
}
