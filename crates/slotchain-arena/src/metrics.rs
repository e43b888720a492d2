//! Allocation counters for a single arena.
//!
//! [`ArenaMetrics`] is updated by every `allocate`/`deallocate` call and
//! reset by `init`, enabling callers to watch occupancy and rejection
//! rates without walking the slots.

/// Counters collected since the arena was last initialized.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ArenaMetrics {
    /// Successful `allocate` calls.
    pub allocations: u64,
    /// Successful `deallocate` calls.
    pub deallocations: u64,
    /// `allocate` calls rejected with `CapacityExceeded`.
    pub capacity_rejections: u64,
    /// `deallocate` calls rejected with `DoubleFree`.
    pub double_free_rejections: u64,
    /// Highest number of simultaneously used slots.
    pub peak_used: usize,
}

impl ArenaMetrics {
    /// Net allocations: slots handed out and not yet returned.
    pub fn outstanding(&self) -> u64 {
        self.allocations - self.deallocations
    }
}
