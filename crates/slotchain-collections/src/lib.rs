//! Fixed-capacity linked collections backed by a private slot arena.
//!
//! Each structure owns one [`SlotArena`](slotchain_arena::SlotArena) and
//! keeps its own head/tail/top bookkeeping on top of it:
//!
//! | Structure | Bookkeeping | Operations |
//! |-----------|-------------|------------|
//! | [`LinkedList`] | head, tail | `push_front`, `push_back`, `pop_front`, `remove_value`, `find_value` |
//! | [`Queue`] | head, tail | `enqueue`, `dequeue`, `peek` |
//! | [`Stack`] | top | `push`, `pop`, `peek` |
//!
//! Capacity is the const generic `N`. Nothing allocates on the heap; a
//! full structure rejects insertion with
//! [`CollectionError::Arena`]`(CapacityExceeded)` and stays unchanged.
//!
//! The three types share the arena by composition only. There is no
//! common trait.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod display;
pub mod error;
pub mod list;
pub mod queue;
pub mod stack;

pub use display::SEPARATOR;
pub use error::CollectionError;
pub use list::LinkedList;
pub use queue::Queue;
pub use stack::Stack;
