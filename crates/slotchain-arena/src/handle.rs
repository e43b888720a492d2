//! Slot handles.
//!
//! A [`Handle`] is a dense index into a [`SlotArena`](crate::SlotArena).
//! It carries no arena identity: the same numeric handle means different
//! slots in different arenas, and every dereference goes through the
//! owning arena's bounds/used check.
//!
//! The "no slot" sentinel is the arena's capacity itself, so NIL depends on
//! `N` and is exposed as [`SlotArena::NIL`](crate::SlotArena::NIL).

use std::fmt;

/// Index of a slot within an arena of capacity `N`.
///
/// Valid slot handles are in `[0, N)`; the value `N` means "no slot".
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[must_use]
pub struct Handle(usize);

impl Handle {
    /// Wrap a raw slot index.
    ///
    /// No range check happens here; the arena validates on use.
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// The raw slot index.
    pub const fn index(self) -> usize {
        self.0
    }

    /// Whether this handle is the NIL sentinel of an arena with `capacity`
    /// slots.
    pub const fn is_nil_for(self, capacity: usize) -> bool {
        self.0 == capacity
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Handle> for usize {
    fn from(handle: Handle) -> Self {
        handle.0
    }
}
