//! The fixed-capacity slot arena.
//!
//! [`SlotArena`] owns `N` slots and a free stack of the indices not in use.
//! Allocation pops the free stack, deallocation pushes it, so both are O(1)
//! and the most recently freed slot is the next one handed out.
//!
//! ```text
//! slots:      [ used | free | used | free | free ]
//! free_stack: [  4, 3, 1, _, _ ]   free_top = 3
//!                       ^ top
//! ```
//!
//! Everything is stored inline. Nothing here touches the heap after
//! construction.

use tracing::{debug, trace};

use crate::chain::Chain;
use crate::config::DEFAULT_CAPACITY;
use crate::error::ArenaError;
use crate::handle::Handle;
use crate::metrics::ArenaMetrics;

/// One storage unit: payload, link, and occupancy.
///
/// `value` and `next` are stale while `used` is false and are never
/// exposed in that state.
#[derive(Clone, Copy, Debug)]
struct Slot {
    value: f64,
    next: Handle,
    used: bool,
}

impl Slot {
    const VACANT: Self = Self {
        value: 0.0,
        next: Handle::new(0),
        used: false,
    };
}

/// A pool of `N` slots addressed by [`Handle`]s.
///
/// Invariant: `used() + free() == N` in every reachable state, and the
/// entries `free_stack[..free_top]` are exactly the free handles, each
/// once.
#[derive(Clone, Debug)]
pub struct SlotArena<const N: usize = DEFAULT_CAPACITY> {
    slots: [Slot; N],
    free_stack: [Handle; N],
    free_top: usize,
    metrics: ArenaMetrics,
}

impl<const N: usize> SlotArena<N> {
    /// The "no slot" sentinel for this capacity.
    pub const NIL: Handle = Handle::new(N);

    /// Create an arena with every slot free.
    pub fn new() -> Self {
        let mut arena = Self {
            slots: [Slot::VACANT; N],
            free_stack: [Self::NIL; N],
            free_top: 0,
            metrics: ArenaMetrics::default(),
        };
        arena.init();
        arena
    }

    /// Reset to the all-free state and clear the metrics.
    ///
    /// Handle 0 ends up on top of the free stack, so a fresh arena hands
    /// out 0, 1, 2, ... in order. Handles from before the reset become
    /// invalid.
    pub fn init(&mut self) {
        for slot in &mut self.slots {
            slot.used = false;
        }
        for (depth, entry) in self.free_stack.iter_mut().enumerate() {
            *entry = Handle::new(N - 1 - depth);
        }
        self.free_top = N;
        self.metrics = ArenaMetrics::default();
        trace!(capacity = N, "slot arena initialized");
    }

    /// Take a slot off the free stack and mark it used.
    ///
    /// The slot's value and next link are stale; write them before reading.
    pub fn allocate(&mut self) -> Result<Handle, ArenaError> {
        if self.free_top == 0 {
            self.metrics.capacity_rejections += 1;
            debug!(capacity = N, "allocate rejected: arena full");
            return Err(ArenaError::CapacityExceeded { capacity: N });
        }
        self.free_top -= 1;
        let handle = self.free_stack[self.free_top];
        self.slots[handle.index()].used = true;

        self.metrics.allocations += 1;
        self.metrics.peak_used = self.metrics.peak_used.max(self.used());
        Ok(handle)
    }

    /// Return a used slot to the free stack.
    pub fn deallocate(&mut self, handle: Handle) -> Result<(), ArenaError> {
        let Some(slot) = self.slots.get_mut(handle.index()) else {
            debug!(%handle, capacity = N, "deallocate rejected: out of range");
            return Err(ArenaError::InvalidHandle {
                handle,
                capacity: N,
            });
        };
        if !slot.used {
            self.metrics.double_free_rejections += 1;
            debug!(%handle, "deallocate rejected: slot already free");
            return Err(ArenaError::DoubleFree { handle });
        }
        slot.used = false;
        self.free_stack[self.free_top] = handle;
        self.free_top += 1;
        self.metrics.deallocations += 1;
        Ok(())
    }

    /// Payload of a used slot.
    pub fn value(&self, handle: Handle) -> Result<f64, ArenaError> {
        self.slot(handle).map(|slot| slot.value)
    }

    /// Overwrite the payload of a used slot.
    pub fn set_value(&mut self, handle: Handle, value: f64) -> Result<(), ArenaError> {
        self.slot_mut(handle)?.value = value;
        Ok(())
    }

    /// Next link of a used slot. May be [`Self::NIL`].
    pub fn next(&self, handle: Handle) -> Result<Handle, ArenaError> {
        self.slot(handle).map(|slot| slot.next)
    }

    /// Overwrite the next link of a used slot.
    ///
    /// `next` itself is not validated; keeping chains consistent is the
    /// caller's job.
    pub fn set_next(&mut self, handle: Handle, next: Handle) -> Result<(), ArenaError> {
        self.slot_mut(handle)?.next = next;
        Ok(())
    }

    /// Walk the chain starting at `start`. See [`Chain`].
    pub fn chain(&self, start: Handle) -> Chain<'_, N> {
        Chain::new(self, start)
    }

    /// Total number of slots.
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Number of slots currently in use.
    pub fn used(&self) -> usize {
        N - self.free_top
    }

    /// Number of slots on the free stack.
    pub fn free(&self) -> usize {
        self.free_top
    }

    /// Whether the next `allocate` would fail.
    pub fn is_full(&self) -> bool {
        self.free_top == 0
    }

    /// Whether no slot is in use.
    pub fn is_empty(&self) -> bool {
        self.free_top == N
    }

    /// Whether `handle` addresses a slot that is currently in use.
    ///
    /// Out-of-range handles (NIL included) are simply not used.
    pub fn is_used(&self, handle: Handle) -> bool {
        self.slots
            .get(handle.index())
            .is_some_and(|slot| slot.used)
    }

    /// Whether `handle` is this arena's NIL sentinel.
    pub fn is_nil(&self, handle: Handle) -> bool {
        handle == Self::NIL
    }

    /// Counters since the last [`init`](Self::init).
    pub fn metrics(&self) -> &ArenaMetrics {
        &self.metrics
    }

    fn slot(&self, handle: Handle) -> Result<&Slot, ArenaError> {
        match self.slots.get(handle.index()) {
            Some(slot) if slot.used => Ok(slot),
            _ => Err(ArenaError::InvalidHandle {
                handle,
                capacity: N,
            }),
        }
    }

    fn slot_mut(&mut self, handle: Handle) -> Result<&mut Slot, ArenaError> {
        match self.slots.get_mut(handle.index()) {
            Some(slot) if slot.used => Ok(slot),
            _ => {
                debug!(%handle, capacity = N, "write rejected: invalid handle");
                Err(ArenaError::InvalidHandle {
                    handle,
                    capacity: N,
                })
            }
        }
    }
}

impl<const N: usize> Default for SlotArena<N> {
    fn default() -> Self {
        Self::new()
    }
}
