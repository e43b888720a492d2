//! Read-only traversal of handle chains.
//!
//! Every structure built on the arena walks its chain the same way: start
//! at a head/top handle and follow `next` until NIL. [`Chain`] does that
//! walk through the arena's checked accessors, so a broken link ends the
//! walk instead of reading a stale slot.

use std::iter::FusedIterator;

use crate::arena::SlotArena;
use crate::handle::Handle;

/// Iterator over `(handle, value)` pairs of a chain.
///
/// Stops at the first of:
/// - the NIL sentinel,
/// - a handle that is not a used slot,
/// - `N` steps (an acyclic chain cannot be longer than the arena).
///
/// Created by [`SlotArena::chain`].
#[derive(Clone, Debug)]
pub struct Chain<'a, const N: usize> {
    arena: &'a SlotArena<N>,
    cursor: Handle,
    remaining: usize,
}

impl<'a, const N: usize> Chain<'a, N> {
    pub(crate) fn new(arena: &'a SlotArena<N>, start: Handle) -> Self {
        Self {
            arena,
            cursor: start,
            remaining: N,
        }
    }

    /// Iterate over the values only.
    pub fn values(self) -> impl Iterator<Item = f64> + 'a {
        self.map(|(_, value)| value)
    }
}

impl<const N: usize> Iterator for Chain<'_, N> {
    type Item = (Handle, f64);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 || self.arena.is_nil(self.cursor) {
            return None;
        }
        let handle = self.cursor;
        match (self.arena.value(handle), self.arena.next(handle)) {
            (Ok(value), Ok(next)) => {
                self.cursor = next;
                self.remaining -= 1;
                Some((handle, value))
            }
            _ => {
                self.remaining = 0;
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.arena.is_nil(self.cursor) {
            (0, Some(0))
        } else {
            (0, Some(self.remaining))
        }
    }
}

impl<const N: usize> FusedIterator for Chain<'_, N> {}
