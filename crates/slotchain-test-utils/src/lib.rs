//! Test utilities for slotchain development.
//!
//! Provides invariant checkers for arenas and chains, reference models
//! that mirror each collection's observable behaviour, fixture builders,
//! and proptest strategies for random operation sequences.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;
pub mod model;
pub mod strategy;

use std::collections::HashSet;

use slotchain_arena::{Handle, SlotArena};
use slotchain_collections::{LinkedList, Queue, Stack};

pub use fixtures::{drain_list, drain_queue, drain_stack, list_from, queue_from, stack_from};
pub use model::{ListModel, QueueModel, StackModel};
pub use strategy::{list_ops, queue_ops, stack_ops, ListOp, QueueOp, StackOp};

/// Check the free/used partition of an arena.
///
/// Panics if `used + free != N`, or if the number of handles reporting
/// `is_used` disagrees with `used()`.
pub fn assert_arena_consistent<const N: usize>(arena: &SlotArena<N>) {
    assert_eq!(
        arena.used() + arena.free(),
        N,
        "used {} + free {} != capacity {N}",
        arena.used(),
        arena.free(),
    );
    let marked = (0..N).filter(|&i| arena.is_used(Handle::new(i))).count();
    assert_eq!(
        marked,
        arena.used(),
        "{marked} slots marked used, arena reports {}",
        arena.used()
    );
    assert!(!arena.is_used(SlotArena::<N>::NIL), "NIL marked used");
}

/// Check that the chain from `head` is acyclic, ends at `tail`, and covers
/// every used slot of the arena.
///
/// `head`/`tail` are `None` for an empty structure. Pass `tail = None`
/// with a non-empty `head` for structures without a tail (stacks).
pub fn assert_chain_consistent<const N: usize>(
    arena: &SlotArena<N>,
    head: Option<Handle>,
    tail: Option<Handle>,
) {
    let Some(head) = head else {
        assert!(tail.is_none(), "tail set on an empty chain");
        assert_eq!(arena.used(), 0, "empty chain but arena has used slots");
        return;
    };

    let mut seen = HashSet::new();
    let mut cursor = head;
    let mut last = head;
    while !arena.is_nil(cursor) {
        assert!(arena.is_used(cursor), "chain reaches free slot {cursor}");
        assert!(seen.insert(cursor), "chain revisits slot {cursor}");
        assert!(seen.len() <= N, "chain longer than capacity");
        last = cursor;
        cursor = arena
            .next(cursor)
            .unwrap_or_else(|e| panic!("next({cursor}) failed: {e}"));
    }
    if let Some(tail) = tail {
        assert_eq!(last, tail, "chain ends at {last}, tail is {tail}");
    }
    assert_eq!(
        seen.len(),
        arena.used(),
        "chain length {} != used slots {}",
        seen.len(),
        arena.used()
    );
}

/// Full structural check of a list.
pub fn assert_list_consistent<const N: usize>(list: &LinkedList<N>) {
    assert_arena_consistent(list.arena());
    assert_chain_consistent(list.arena(), list.head(), list.tail());
    assert_eq!(list.is_empty(), list.head().is_none());
    assert_eq!(list.iter().count(), list.len());
}

/// Full structural check of a queue.
pub fn assert_queue_consistent<const N: usize>(queue: &Queue<N>) {
    assert_arena_consistent(queue.arena());
    assert_eq!(queue.iter().count(), queue.len());
    assert_eq!(queue.is_empty(), queue.len() == 0);
}

/// Full structural check of a stack.
pub fn assert_stack_consistent<const N: usize>(stack: &Stack<N>) {
    assert_arena_consistent(stack.arena());
    assert_eq!(stack.iter().count(), stack.len());
    assert_eq!(stack.is_empty(), stack.len() == 0);
}
