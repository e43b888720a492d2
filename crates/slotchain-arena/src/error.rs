//! Arena-specific error types.

use std::error::Error;
use std::fmt;

use crate::handle::Handle;

/// Errors that can occur during arena operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArenaError {
    /// Every slot is in use; the free stack is empty.
    CapacityExceeded {
        /// Total number of slots in the arena.
        capacity: usize,
    },
    /// The handle is out of range, or addresses a slot that is free where
    /// a used slot was required.
    InvalidHandle {
        /// The rejected handle.
        handle: Handle,
        /// Total number of slots in the arena.
        capacity: usize,
    },
    /// The handle was passed to `deallocate` while already free.
    DoubleFree {
        /// The handle that was already free.
        handle: Handle,
    },
}

impl fmt::Display for ArenaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapacityExceeded { capacity } => {
                write!(f, "arena capacity exceeded: all {capacity} slots in use")
            }
            Self::InvalidHandle { handle, capacity } => {
                write!(
                    f,
                    "invalid handle {handle}: out of range or free (capacity {capacity})"
                )
            }
            Self::DoubleFree { handle } => {
                write!(f, "double free of handle {handle}")
            }
        }
    }
}

impl Error for ArenaError {}
