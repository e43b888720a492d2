//! Builders and drains for the three collections.
//!
//! Builders panic if `values` does not fit; they are meant for test setup
//! where the capacity is chosen alongside the data.

use slotchain_collections::{LinkedList, Queue, Stack};

/// Build a list whose head-to-tail order is `values`.
pub fn list_from<const N: usize>(values: &[f64]) -> LinkedList<N> {
    let mut list = LinkedList::new();
    for &v in values {
        list.push_back(v)
            .unwrap_or_else(|e| panic!("list_from: {} values into capacity {N}: {e}", values.len()));
    }
    list
}

/// Build a queue whose front-to-back order is `values`.
pub fn queue_from<const N: usize>(values: &[f64]) -> Queue<N> {
    let mut queue = Queue::new();
    for &v in values {
        queue
            .enqueue(v)
            .unwrap_or_else(|e| panic!("queue_from: {} values into capacity {N}: {e}", values.len()));
    }
    queue
}

/// Build a stack by pushing `values` in order (last value on top).
pub fn stack_from<const N: usize>(values: &[f64]) -> Stack<N> {
    let mut stack = Stack::new();
    for &v in values {
        stack
            .push(v)
            .unwrap_or_else(|e| panic!("stack_from: {} values into capacity {N}: {e}", values.len()));
    }
    stack
}

/// Pop every value from the front.
pub fn drain_list<const N: usize>(list: &mut LinkedList<N>) -> Vec<f64> {
    std::iter::from_fn(|| list.pop_front().ok()).collect()
}

/// Dequeue every value.
pub fn drain_queue<const N: usize>(queue: &mut Queue<N>) -> Vec<f64> {
    std::iter::from_fn(|| queue.dequeue().ok()).collect()
}

/// Pop every value.
pub fn drain_stack<const N: usize>(stack: &mut Stack<N>) -> Vec<f64> {
    std::iter::from_fn(|| stack.pop().ok()).collect()
}
