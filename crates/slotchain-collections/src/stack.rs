//! LIFO stack over an arena chain.

use std::fmt;

use slotchain_arena::{Handle, SlotArena, DEFAULT_CAPACITY};

use crate::display::write_chain;
use crate::error::CollectionError;

/// Fixed-capacity last-in first-out stack of `f64` values.
///
/// The chain is rooted at `top`; each push links the new slot in front of
/// the old top.
///
/// # Example
///
/// ```
/// use slotchain_collections::Stack;
///
/// let mut stack = Stack::<4>::new();
/// stack.push(10.5).unwrap();
/// stack.push(20.5).unwrap();
/// assert_eq!(stack.pop().unwrap(), 20.5);
/// assert_eq!(stack.pop().unwrap(), 10.5);
/// assert!(stack.pop().unwrap_err().is_empty());
/// ```
#[derive(Clone, Debug)]
pub struct Stack<const N: usize = DEFAULT_CAPACITY> {
    arena: SlotArena<N>,
    top: Handle,
}

impl<const N: usize> Stack<N> {
    const NIL: Handle = SlotArena::<N>::NIL;

    /// Create an empty stack.
    pub fn new() -> Self {
        Self {
            arena: SlotArena::new(),
            top: Self::NIL,
        }
    }

    /// Reset to empty, freeing every slot.
    pub fn init(&mut self) {
        self.top = Self::NIL;
        self.arena.init();
    }

    /// Same as [`init`](Self::init).
    pub fn clear(&mut self) {
        self.init();
    }

    /// Push `value` on top.
    ///
    /// On `CapacityExceeded` the stack is unchanged.
    pub fn push(&mut self, value: f64) -> Result<(), CollectionError> {
        let handle = self.arena.allocate()?;
        self.arena.set_value(handle, value)?;
        self.arena.set_next(handle, self.top)?;
        self.top = handle;
        Ok(())
    }

    /// Remove and return the top value. `Empty` on underflow.
    pub fn pop(&mut self) -> Result<f64, CollectionError> {
        if self.top == Self::NIL {
            return Err(CollectionError::Empty);
        }
        let old_top = self.top;
        let value = self.arena.value(old_top)?;
        self.top = self.arena.next(old_top)?;
        self.arena.deallocate(old_top)?;
        Ok(value)
    }

    /// The top value, without removing it.
    pub fn peek(&self) -> Result<f64, CollectionError> {
        if self.top == Self::NIL {
            return Err(CollectionError::Empty);
        }
        Ok(self.arena.value(self.top)?)
    }

    /// Values from top to bottom.
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.arena.chain(self.top).values()
    }

    /// Number of stacked values.
    pub fn len(&self) -> usize {
        self.arena.used()
    }

    /// Whether the stack is empty.
    pub fn is_empty(&self) -> bool {
        self.top == Self::NIL
    }

    /// Whether the next push would fail with `CapacityExceeded`.
    pub fn is_full(&self) -> bool {
        self.arena.is_full()
    }

    /// Maximum number of stacked values.
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Read-only view of the backing arena.
    pub fn arena(&self) -> &SlotArena<N> {
        &self.arena
    }
}

impl<const N: usize> Default for Stack<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> fmt::Display for Stack<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_chain(f, self.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lifo_order() {
        let mut s = Stack::<4>::new();
        s.push(1.0).unwrap();
        s.push(2.0).unwrap();
        s.push(3.0).unwrap();
        assert_eq!(s.to_string(), "3 -> 2 -> 1");
        assert_eq!(s.pop().unwrap(), 3.0);
        assert_eq!(s.pop().unwrap(), 2.0);
        assert_eq!(s.pop().unwrap(), 1.0);
        assert_eq!(s.pop(), Err(CollectionError::Empty));
    }

    #[test]
    fn peek_does_not_remove() {
        let mut s = Stack::<4>::new();
        assert_eq!(s.peek(), Err(CollectionError::Empty));
        s.push(8.0).unwrap();
        assert_eq!(s.peek().unwrap(), 8.0);
        assert_eq!(s.len(), 1);
    }

    #[test]
    fn overflow_leaves_stack_unchanged() {
        let mut s = Stack::<2>::new();
        s.push(1.0).unwrap();
        s.push(2.0).unwrap();
        assert!(s.push(3.0).unwrap_err().is_capacity_exceeded());
        assert_eq!(s.peek().unwrap(), 2.0);
        assert_eq!(s.len(), 2);
    }

    #[test]
    fn refill_after_drain() {
        let mut s = Stack::<3>::new();
        for _ in 0..3 {
            for v in [1.0, 2.0, 3.0] {
                s.push(v).unwrap();
            }
            assert!(s.is_full());
            while s.pop().is_ok() {}
            assert!(s.arena().is_empty());
        }
        assert_eq!(s.arena().metrics().peak_used, 3);
    }

    #[test]
    fn clear_resets() {
        let mut s = Stack::<2>::new();
        s.push(1.0).unwrap();
        s.clear();
        assert!(s.is_empty());
        assert_eq!(s.pop(), Err(CollectionError::Empty));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        const CAP: usize = 8;

        proptest! {
            #[test]
            fn lifo_law(values in proptest::collection::vec(-1e6f64..1e6, 0..=CAP)) {
                let mut s = Stack::<CAP>::new();
                for &v in &values {
                    s.push(v).unwrap();
                }
                let popped: Vec<f64> = std::iter::from_fn(|| s.pop().ok()).collect();
                let mut expected = values.clone();
                expected.reverse();
                prop_assert_eq!(popped, expected);
            }

            #[test]
            fn matches_vec(ops in proptest::collection::vec(proptest::option::of(any::<i16>()), 0..100)) {
                let mut s = Stack::<CAP>::new();
                let mut model: Vec<f64> = Vec::new();
                for op in ops {
                    match op {
                        Some(v) => {
                            let ok = s.push(v as f64).is_ok();
                            prop_assert_eq!(ok, model.len() < CAP);
                            if ok { model.push(v as f64); }
                        }
                        None => prop_assert_eq!(s.pop().ok(), model.pop()),
                    }
                    prop_assert_eq!(s.peek().ok(), model.last().copied());
                    prop_assert_eq!(s.len(), model.len());
                }
            }
        }
    }
}
