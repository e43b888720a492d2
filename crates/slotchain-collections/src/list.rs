//! Singly-linked list with head and tail handles.
//!
//! [`LinkedList`] supports O(1) insertion at both ends, O(1) removal at the
//! front, and O(n) value search/removal. It is the only structure that
//! removes from the middle of its chain, so it tracks a predecessor while
//! scanning.

use std::fmt;

use slotchain_arena::{Handle, SlotArena, DEFAULT_CAPACITY};
use tracing::trace;

use crate::display::write_chain;
use crate::error::CollectionError;

/// Fixed-capacity singly-linked list of `f64` values.
///
/// Invariant: `head` is NIL iff `tail` is NIL iff the list is empty, and
/// following `next` from `head` reaches `tail` and then NIL.
///
/// # Example
///
/// ```
/// use slotchain_collections::LinkedList;
///
/// let mut list = LinkedList::<8>::new();
/// list.push_back(1.1).unwrap();
/// list.push_front(0.5).unwrap();
/// list.push_back(2.2).unwrap();
/// assert_eq!(list.to_string(), "0.5 -> 1.1 -> 2.2");
/// ```
#[derive(Clone, Debug)]
pub struct LinkedList<const N: usize = DEFAULT_CAPACITY> {
    arena: SlotArena<N>,
    head: Handle,
    tail: Handle,
}

impl<const N: usize> LinkedList<N> {
    const NIL: Handle = SlotArena::<N>::NIL;

    /// Create an empty list.
    pub fn new() -> Self {
        Self {
            arena: SlotArena::new(),
            head: Self::NIL,
            tail: Self::NIL,
        }
    }

    /// Reset to empty, freeing every slot.
    pub fn init(&mut self) {
        self.head = Self::NIL;
        self.tail = Self::NIL;
        self.arena.init();
    }

    /// Same as [`init`](Self::init).
    pub fn clear(&mut self) {
        self.init();
    }

    /// Insert `value` before the current head.
    ///
    /// On `CapacityExceeded` the list is unchanged.
    pub fn push_front(&mut self, value: f64) -> Result<(), CollectionError> {
        let handle = self.arena.allocate()?;
        self.arena.set_value(handle, value)?;
        self.arena.set_next(handle, self.head)?;
        if self.tail == Self::NIL {
            self.tail = handle;
        }
        self.head = handle;
        Ok(())
    }

    /// Insert `value` after the current tail.
    ///
    /// On `CapacityExceeded` the list is unchanged.
    pub fn push_back(&mut self, value: f64) -> Result<(), CollectionError> {
        let handle = self.arena.allocate()?;
        self.arena.set_value(handle, value)?;
        self.arena.set_next(handle, Self::NIL)?;
        if self.head == Self::NIL {
            self.head = handle;
        } else {
            self.arena.set_next(self.tail, handle)?;
        }
        self.tail = handle;
        Ok(())
    }

    /// Remove and return the head value.
    pub fn pop_front(&mut self) -> Result<f64, CollectionError> {
        if self.head == Self::NIL {
            return Err(CollectionError::Empty);
        }
        let old_head = self.head;
        let value = self.arena.value(old_head)?;
        self.head = self.arena.next(old_head)?;
        if self.head == Self::NIL {
            self.tail = Self::NIL;
        }
        self.arena.deallocate(old_head)?;
        Ok(value)
    }

    /// Remove the first element (head-to-tail) equal to `value`.
    ///
    /// Equality is exact `f64 ==`, so NaN never matches and `-0.0` matches
    /// `0.0`. Returns `Empty` on an empty list, `NotFound` if nothing
    /// matches.
    pub fn remove_value(&mut self, value: f64) -> Result<(), CollectionError> {
        if self.head == Self::NIL {
            return Err(CollectionError::Empty);
        }
        let Some((prev, found)) = self.locate(value) else {
            trace!(value, "remove_value: no match");
            return Err(CollectionError::NotFound);
        };
        let next = self.arena.next(found)?;
        if prev == Self::NIL {
            self.head = next;
        } else {
            self.arena.set_next(prev, next)?;
        }
        if next == Self::NIL {
            self.tail = prev;
        }
        self.arena.deallocate(found)?;
        Ok(())
    }

    /// Handle of the first element equal to `value`.
    ///
    /// The handle stays valid until that element is removed; read it back
    /// with [`value_at`](Self::value_at).
    pub fn find_value(&self, value: f64) -> Result<Handle, CollectionError> {
        self.locate(value)
            .map(|(_, found)| found)
            .ok_or(CollectionError::NotFound)
    }

    /// Whether any element equals `value`.
    pub fn contains(&self, value: f64) -> bool {
        self.locate(value).is_some()
    }

    /// Value stored behind `handle`.
    pub fn value_at(&self, handle: Handle) -> Result<f64, CollectionError> {
        Ok(self.arena.value(handle)?)
    }

    /// The head value.
    pub fn front(&self) -> Result<f64, CollectionError> {
        self.head().map_or(Err(CollectionError::Empty), |h| self.value_at(h))
    }

    /// The tail value.
    pub fn back(&self) -> Result<f64, CollectionError> {
        self.tail().map_or(Err(CollectionError::Empty), |h| self.value_at(h))
    }

    /// Handle of the head element, if any.
    pub fn head(&self) -> Option<Handle> {
        (self.head != Self::NIL).then_some(self.head)
    }

    /// Handle of the tail element, if any.
    pub fn tail(&self) -> Option<Handle> {
        (self.tail != Self::NIL).then_some(self.tail)
    }

    /// Values in head-to-tail order.
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.arena.chain(self.head).values()
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.arena.used()
    }

    /// Whether the list has no elements.
    pub fn is_empty(&self) -> bool {
        self.head == Self::NIL
    }

    /// Whether the next push would fail with `CapacityExceeded`.
    pub fn is_full(&self) -> bool {
        self.arena.is_full()
    }

    /// Maximum number of elements.
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Read-only view of the backing arena.
    pub fn arena(&self) -> &SlotArena<N> {
        &self.arena
    }

    /// First match for `value` together with its predecessor (NIL when the
    /// match is the head).
    fn locate(&self, value: f64) -> Option<(Handle, Handle)> {
        let mut prev = Self::NIL;
        for (handle, current) in self.arena.chain(self.head) {
            if current == value {
                return Some((prev, handle));
            }
            prev = handle;
        }
        None
    }
}

impl<const N: usize> Default for LinkedList<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> fmt::Display for LinkedList<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_chain(f, self.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slotchain_arena::ArenaError;

    fn contents<const N: usize>(list: &LinkedList<N>) -> Vec<f64> {
        list.iter().collect()
    }

    #[test]
    fn new_list_is_empty() {
        let list = LinkedList::<4>::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert_eq!(list.head(), None);
        assert_eq!(list.tail(), None);
        assert_eq!(list.to_string(), "");
    }

    #[test]
    fn push_order() {
        let mut list = LinkedList::<4>::new();
        list.push_front(1.0).unwrap();
        list.push_back(2.0).unwrap();
        list.push_front(3.0).unwrap();
        assert_eq!(contents(&list), vec![3.0, 1.0, 2.0]);
        assert_eq!(list.front().unwrap(), 3.0);
        assert_eq!(list.back().unwrap(), 2.0);
    }

    #[test]
    fn single_element_is_head_and_tail() {
        let mut list = LinkedList::<4>::new();
        list.push_back(7.0).unwrap();
        assert_eq!(list.head(), list.tail());
        list.pop_front().unwrap();
        assert_eq!(list.head(), None);
        assert_eq!(list.tail(), None);
    }

    #[test]
    fn push_front_into_empty_sets_tail() {
        let mut list = LinkedList::<4>::new();
        list.push_front(1.0).unwrap();
        list.push_back(2.0).unwrap();
        assert_eq!(contents(&list), vec![1.0, 2.0]);
        assert_eq!(list.back().unwrap(), 2.0);
    }

    #[test]
    fn pop_front_empty() {
        let mut list = LinkedList::<4>::new();
        assert_eq!(list.pop_front(), Err(CollectionError::Empty));
        assert_eq!(list.front(), Err(CollectionError::Empty));
        assert_eq!(list.back(), Err(CollectionError::Empty));
    }

    #[test]
    fn full_push_leaves_list_unchanged() {
        let mut list = LinkedList::<2>::new();
        list.push_back(1.0).unwrap();
        list.push_back(2.0).unwrap();
        let (head, tail) = (list.head(), list.tail());
        let err = list.push_front(3.0).unwrap_err();
        assert_eq!(
            err,
            CollectionError::Arena(ArenaError::CapacityExceeded { capacity: 2 })
        );
        assert!(list.push_back(4.0).unwrap_err().is_capacity_exceeded());
        assert_eq!((list.head(), list.tail()), (head, tail));
        assert_eq!(contents(&list), vec![1.0, 2.0]);
    }

    #[test]
    fn remove_head_middle_tail() {
        let mut list = LinkedList::<8>::new();
        for v in [1.0, 2.0, 3.0, 4.0] {
            list.push_back(v).unwrap();
        }
        list.remove_value(1.0).unwrap();
        assert_eq!(contents(&list), vec![2.0, 3.0, 4.0]);
        list.remove_value(3.0).unwrap();
        assert_eq!(contents(&list), vec![2.0, 4.0]);
        list.remove_value(4.0).unwrap();
        assert_eq!(contents(&list), vec![2.0]);
        assert_eq!(list.back().unwrap(), 2.0);
        list.remove_value(2.0).unwrap();
        assert!(list.is_empty());
        assert_eq!(list.tail(), None);
    }

    #[test]
    fn remove_only_first_duplicate() {
        let mut list = LinkedList::<8>::new();
        for v in [5.0, 1.0, 5.0, 2.0] {
            list.push_back(v).unwrap();
        }
        list.remove_value(5.0).unwrap();
        assert_eq!(contents(&list), vec![1.0, 5.0, 2.0]);
    }

    #[test]
    fn remove_errors() {
        let mut list = LinkedList::<4>::new();
        assert_eq!(list.remove_value(1.0), Err(CollectionError::Empty));
        list.push_back(1.0).unwrap();
        assert_eq!(list.remove_value(2.0), Err(CollectionError::NotFound));
        assert_eq!(contents(&list), vec![1.0]);
    }

    #[test]
    fn tail_appends_after_removing_tail() {
        let mut list = LinkedList::<4>::new();
        list.push_back(1.0).unwrap();
        list.push_back(2.0).unwrap();
        list.remove_value(2.0).unwrap();
        list.push_back(3.0).unwrap();
        assert_eq!(contents(&list), vec![1.0, 3.0]);
    }

    #[test]
    fn find_value_returns_first_match() {
        let mut list = LinkedList::<4>::new();
        list.push_back(1.0).unwrap();
        list.push_back(2.0).unwrap();
        list.push_back(2.0).unwrap();
        let h = list.find_value(2.0).unwrap();
        assert_eq!(list.value_at(h).unwrap(), 2.0);
        assert_eq!(list.arena().next(list.head().unwrap()).unwrap(), h);
        assert_eq!(list.find_value(9.0), Err(CollectionError::NotFound));
    }

    #[test]
    fn find_value_on_empty_is_not_found() {
        let list = LinkedList::<4>::new();
        assert_eq!(list.find_value(0.0), Err(CollectionError::NotFound));
        assert!(!list.contains(0.0));
    }

    #[test]
    fn exact_float_equality() {
        let mut list = LinkedList::<4>::new();
        list.push_back(0.1 + 0.2).unwrap();
        list.push_back(f64::NAN).unwrap();
        list.push_back(-0.0).unwrap();
        assert!(!list.contains(0.3));
        assert!(list.contains(0.1 + 0.2));
        assert_eq!(list.remove_value(f64::NAN), Err(CollectionError::NotFound));
        assert!(list.contains(0.0));
    }

    #[test]
    fn stale_handle_is_rejected() {
        let mut list = LinkedList::<4>::new();
        list.push_back(1.0).unwrap();
        let h = list.find_value(1.0).unwrap();
        list.pop_front().unwrap();
        assert!(matches!(
            list.value_at(h),
            Err(CollectionError::Arena(ArenaError::InvalidHandle { .. }))
        ));
    }

    #[test]
    fn display_uses_arrows() {
        let mut list = LinkedList::<4>::new();
        list.push_back(1.0).unwrap();
        assert_eq!(list.to_string(), "1");
        list.push_back(2.5).unwrap();
        assert_eq!(list.to_string(), "1 -> 2.5");
    }

    #[test]
    fn refill_after_drain() {
        let mut list = LinkedList::<3>::new();
        for round in 0..3 {
            for i in 0..3 {
                list.push_back((round * 10 + i) as f64).unwrap();
            }
            assert!(list.is_full());
            while list.pop_front().is_ok() {}
            assert!(list.is_empty());
            assert_eq!(list.arena().free(), 3);
        }
    }

    #[test]
    fn clear_resets() {
        let mut list = LinkedList::<3>::new();
        list.push_back(1.0).unwrap();
        list.push_back(2.0).unwrap();
        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        for v in [1.0, 2.0, 3.0] {
            list.push_front(v).unwrap();
        }
        assert_eq!(contents(&list), vec![3.0, 2.0, 1.0]);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;
        use std::collections::VecDeque;

        const CAP: usize = 8;

        #[derive(Clone, Debug)]
        enum ListOp {
            PushFront(i8),
            PushBack(i8),
            PopFront,
            Remove(i8),
        }

        fn op() -> impl Strategy<Value = ListOp> {
            prop_oneof![
                any::<i8>().prop_map(|v| ListOp::PushFront(v % 4)),
                any::<i8>().prop_map(|v| ListOp::PushBack(v % 4)),
                Just(ListOp::PopFront),
                any::<i8>().prop_map(|v| ListOp::Remove(v % 4)),
            ]
        }

        proptest! {
            #[test]
            fn matches_vecdeque(ops in proptest::collection::vec(op(), 0..100)) {
                let mut list = LinkedList::<CAP>::new();
                let mut model: VecDeque<f64> = VecDeque::new();
                for op in ops {
                    match op {
                        ListOp::PushFront(v) => {
                            let ok = list.push_front(v as f64).is_ok();
                            prop_assert_eq!(ok, model.len() < CAP);
                            if ok { model.push_front(v as f64); }
                        }
                        ListOp::PushBack(v) => {
                            let ok = list.push_back(v as f64).is_ok();
                            prop_assert_eq!(ok, model.len() < CAP);
                            if ok { model.push_back(v as f64); }
                        }
                        ListOp::PopFront => {
                            prop_assert_eq!(list.pop_front().ok(), model.pop_front());
                        }
                        ListOp::Remove(v) => {
                            let pos = model.iter().position(|&x| x == v as f64);
                            let result = list.remove_value(v as f64);
                            match pos {
                                Some(i) => {
                                    prop_assert!(result.is_ok());
                                    model.remove(i);
                                }
                                None => prop_assert!(result.is_err()),
                            }
                        }
                    }
                    prop_assert_eq!(contents(&list), model.iter().copied().collect::<Vec<_>>());
                    prop_assert_eq!(list.len(), model.len());
                    prop_assert_eq!(list.back().ok(), model.back().copied());
                }
            }
        }
    }
}
