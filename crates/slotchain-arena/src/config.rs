//! Capacity parameters.
//!
//! Capacity is a const generic on every arena-backed type; there is no
//! runtime configuration. This module holds the default and the sizing
//! helper.

use crate::arena::SlotArena;

/// Default capacity used when the const argument is omitted.
pub const DEFAULT_CAPACITY: usize = 10;

/// In-memory size of a `SlotArena<N>` in bytes.
///
/// The whole arena lives inline (slots, free stack, counters), so this is
/// also the footprint every structure built on it adds to its owner.
pub const fn footprint_bytes<const N: usize>() -> usize {
    std::mem::size_of::<SlotArena<N>>()
}
