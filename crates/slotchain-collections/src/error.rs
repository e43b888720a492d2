//! Error types for the arena-backed collections.

use std::error::Error;
use std::fmt;

use slotchain_arena::ArenaError;

/// Errors returned by [`LinkedList`](crate::LinkedList),
/// [`Queue`](crate::Queue) and [`Stack`](crate::Stack) operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CollectionError {
    /// An arena operation failed. `CapacityExceeded` is the only variant a
    /// well-formed collection produces; the others indicate a stale handle
    /// passed in by the caller.
    Arena(ArenaError),
    /// Pop, dequeue, peek, or front/back on a structure with no elements.
    Empty,
    /// A value search or removal found no matching element.
    NotFound,
}

impl CollectionError {
    /// Whether this is the `Empty` condition.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Whether this is the `NotFound` condition.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }

    /// Whether the underlying arena ran out of slots.
    pub fn is_capacity_exceeded(&self) -> bool {
        matches!(self, Self::Arena(ArenaError::CapacityExceeded { .. }))
    }
}

impl fmt::Display for CollectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Arena(err) => write!(f, "arena error: {err}"),
            Self::Empty => write!(f, "structure is empty"),
            Self::NotFound => write!(f, "value not found"),
        }
    }
}

impl Error for CollectionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Arena(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ArenaError> for CollectionError {
    fn from(err: ArenaError) -> Self {
        Self::Arena(err)
    }
}
