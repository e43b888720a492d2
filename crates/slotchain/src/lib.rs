//! slotchain: allocation-free linked structures over a fixed-capacity slot arena.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the slotchain sub-crates. For most users, adding `slotchain` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use slotchain::prelude::*;
//!
//! let mut list = LinkedList::<10>::new();
//! list.push_back(1.1).unwrap();
//! list.push_front(0.5).unwrap();
//! list.push_back(2.2).unwrap();
//! assert_eq!(list.to_string(), "0.5 -> 1.1 -> 2.2");
//!
//! assert_eq!(list.pop_front().unwrap(), 0.5);
//! list.remove_value(1.1).unwrap();
//! let handle = list.find_value(2.2).unwrap();
//! assert_eq!(list.value_at(handle).unwrap(), 2.2);
//!
//! let mut queue = Queue::<4>::new();
//! queue.enqueue(1.1).unwrap();
//! assert_eq!(queue.peek().unwrap(), 1.1);
//!
//! let mut stack = Stack::<2>::new();
//! stack.push(10.5).unwrap();
//! stack.push(20.5).unwrap();
//! assert!(stack.push(30.5).unwrap_err().is_capacity_exceeded());
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`arena`] | `slotchain-arena` | `SlotArena`, `Handle`, `Chain`, `ArenaError`, `ArenaMetrics` |
//! | [`collections`] | `slotchain-collections` | `LinkedList`, `Queue`, `Stack`, `CollectionError` |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Slot arena, handles, and chain traversal (`slotchain-arena`).
///
/// Most users never touch the arena directly; the collections own one
/// each. It is exposed for read-only inspection through
/// `LinkedList::arena()` and friends, and for building new chain-based
/// structures.
pub use slotchain_arena as arena;

/// Arena-backed collections (`slotchain-collections`).
///
/// [`collections::LinkedList`] for two-ended insertion and value search,
/// [`collections::Queue`] for FIFO, [`collections::Stack`] for LIFO.
pub use slotchain_collections as collections;

/// Common imports for typical slotchain usage.
///
/// ```rust
/// use slotchain::prelude::*;
/// ```
pub mod prelude {
    // Arena
    pub use slotchain_arena::{ArenaError, ArenaMetrics, Handle, SlotArena, DEFAULT_CAPACITY};

    // Collections
    pub use slotchain_collections::{CollectionError, LinkedList, Queue, Stack};
}
