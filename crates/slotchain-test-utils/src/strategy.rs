//! Proptest strategies for random operation sequences.
//!
//! Values come from a small pool (multiples of 0.5 in `[0, 3]`) so that
//! duplicates and successful searches are common.

use proptest::prelude::*;

/// One list operation.
#[derive(Clone, Copy, Debug)]
pub enum ListOp {
    PushFront(f64),
    PushBack(f64),
    PopFront,
    Remove(f64),
    Find(f64),
}

/// One queue operation.
#[derive(Clone, Copy, Debug)]
pub enum QueueOp {
    Enqueue(f64),
    Dequeue,
    Peek,
}

/// One stack operation.
#[derive(Clone, Copy, Debug)]
pub enum StackOp {
    Push(f64),
    Pop,
    Peek,
}

/// A value from the shared pool.
pub fn pooled_value() -> impl Strategy<Value = f64> {
    (0u8..=6).prop_map(|v| f64::from(v) * 0.5)
}

pub fn list_op() -> impl Strategy<Value = ListOp> {
    prop_oneof![
        pooled_value().prop_map(ListOp::PushFront),
        pooled_value().prop_map(ListOp::PushBack),
        Just(ListOp::PopFront),
        pooled_value().prop_map(ListOp::Remove),
        pooled_value().prop_map(ListOp::Find),
    ]
}

pub fn queue_op() -> impl Strategy<Value = QueueOp> {
    prop_oneof![
        3 => pooled_value().prop_map(QueueOp::Enqueue),
        2 => Just(QueueOp::Dequeue),
        1 => Just(QueueOp::Peek),
    ]
}

pub fn stack_op() -> impl Strategy<Value = StackOp> {
    prop_oneof![
        3 => pooled_value().prop_map(StackOp::Push),
        2 => Just(StackOp::Pop),
        1 => Just(StackOp::Peek),
    ]
}

/// Up to `max_len` list operations.
pub fn list_ops(max_len: usize) -> impl Strategy<Value = Vec<ListOp>> {
    proptest::collection::vec(list_op(), 0..max_len)
}

/// Up to `max_len` queue operations.
pub fn queue_ops(max_len: usize) -> impl Strategy<Value = Vec<QueueOp>> {
    proptest::collection::vec(queue_op(), 0..max_len)
}

/// Up to `max_len` stack operations.
pub fn stack_ops(max_len: usize) -> impl Strategy<Value = Vec<StackOp>> {
    proptest::collection::vec(stack_op(), 0..max_len)
}
