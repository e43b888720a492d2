//! Reference models built on std collections.
//!
//! Each model reproduces the observable results of its arena-backed
//! counterpart, errors included, so a test can run the same operation on
//! both and compare.

use std::collections::VecDeque;

use slotchain_arena::ArenaError;
use slotchain_collections::CollectionError;

fn full(capacity: usize) -> CollectionError {
    CollectionError::Arena(ArenaError::CapacityExceeded { capacity })
}

/// Model of [`LinkedList`](slotchain_collections::LinkedList).
#[derive(Clone, Debug)]
pub struct ListModel {
    items: VecDeque<f64>,
    capacity: usize,
}

impl ListModel {
    pub fn new(capacity: usize) -> Self {
        Self {
            items: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push_front(&mut self, value: f64) -> Result<(), CollectionError> {
        if self.items.len() == self.capacity {
            return Err(full(self.capacity));
        }
        self.items.push_front(value);
        Ok(())
    }

    pub fn push_back(&mut self, value: f64) -> Result<(), CollectionError> {
        if self.items.len() == self.capacity {
            return Err(full(self.capacity));
        }
        self.items.push_back(value);
        Ok(())
    }

    pub fn pop_front(&mut self) -> Result<f64, CollectionError> {
        self.items.pop_front().ok_or(CollectionError::Empty)
    }

    pub fn remove_value(&mut self, value: f64) -> Result<(), CollectionError> {
        if self.items.is_empty() {
            return Err(CollectionError::Empty);
        }
        let pos = self.position(value).ok_or(CollectionError::NotFound)?;
        self.items.remove(pos);
        Ok(())
    }

    /// Index (head = 0) of the first element equal to `value`.
    pub fn position(&self, value: f64) -> Option<usize> {
        self.items.iter().position(|&v| v == value)
    }

    pub fn contents(&self) -> Vec<f64> {
        self.items.iter().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Model of [`Queue`](slotchain_collections::Queue).
#[derive(Clone, Debug)]
pub struct QueueModel {
    items: VecDeque<f64>,
    capacity: usize,
}

impl QueueModel {
    pub fn new(capacity: usize) -> Self {
        Self {
            items: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn enqueue(&mut self, value: f64) -> Result<(), CollectionError> {
        if self.items.len() == self.capacity {
            return Err(full(self.capacity));
        }
        self.items.push_back(value);
        Ok(())
    }

    pub fn dequeue(&mut self) -> Result<f64, CollectionError> {
        self.items.pop_front().ok_or(CollectionError::Empty)
    }

    pub fn peek(&self) -> Result<f64, CollectionError> {
        self.items.front().copied().ok_or(CollectionError::Empty)
    }

    pub fn contents(&self) -> Vec<f64> {
        self.items.iter().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

/// Model of [`Stack`](slotchain_collections::Stack).
#[derive(Clone, Debug)]
pub struct StackModel {
    items: Vec<f64>,
    capacity: usize,
}

impl StackModel {
    pub fn new(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, value: f64) -> Result<(), CollectionError> {
        if self.items.len() == self.capacity {
            return Err(full(self.capacity));
        }
        self.items.push(value);
        Ok(())
    }

    pub fn pop(&mut self) -> Result<f64, CollectionError> {
        self.items.pop().ok_or(CollectionError::Empty)
    }

    pub fn peek(&self) -> Result<f64, CollectionError> {
        self.items.last().copied().ok_or(CollectionError::Empty)
    }

    /// Values from top to bottom, matching `Stack::iter`.
    pub fn contents(&self) -> Vec<f64> {
        self.items.iter().rev().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}
