//! Fixed-capacity slot arena for slotchain collections.
//!
//! Provides a preallocated pool of `N` slots addressed by dense integer
//! handles, with O(1) allocate/deallocate through an intrusive free stack.
//! Collections build singly-linked chains of handles on top of it instead
//! of pointers.
//!
//! # Architecture
//!
//! ```text
//! SlotArena<N>
//! ├── [Slot; N]          value: f64, next: Handle, used: bool
//! ├── [Handle; N]        free stack (top = most recently freed)
//! └── ArenaMetrics       allocation / rejection counters
//! ```
//!
//! # Handles
//!
//! A [`Handle`] is a plain index. The value `N` is the NIL sentinel
//! ([`SlotArena::NIL`]). Every read or write through a handle is checked
//! against the arena's bounds and used flag, so a stale handle produces
//! [`ArenaError::InvalidHandle`] rather than a stale value.
//!
//! # Example
//!
//! ```
//! use slotchain_arena::SlotArena;
//!
//! let mut arena = SlotArena::<4>::new();
//! let h = arena.allocate().unwrap();
//! arena.set_value(h, 2.5).unwrap();
//! arena.set_next(h, SlotArena::<4>::NIL).unwrap();
//! assert_eq!(arena.chain(h).values().collect::<Vec<_>>(), vec![2.5]);
//! arena.deallocate(h).unwrap();
//! assert!(arena.value(h).is_err());
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod arena;
pub mod chain;
pub mod config;
pub mod error;
pub mod handle;
pub mod metrics;

// Public re-exports for the primary API surface.
pub use arena::SlotArena;
pub use chain::Chain;
pub use config::{footprint_bytes, DEFAULT_CAPACITY};
pub use error::ArenaError;
pub use handle::Handle;
pub use metrics::ArenaMetrics;
