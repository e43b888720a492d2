//! Benchmark workloads for slotchain.
//!
//! Provides deterministic inputs shared by the criterion benches and the
//! walkthrough example:
//!
//! - [`value_stream`]: seeded pseudo-random payload values
//! - [`churn_pattern`]: seeded insert/remove decisions for steady-state churn
//! - [`filled_list`], [`filled_queue`], [`filled_stack`]: structures at capacity

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use slotchain_collections::{CollectionError, LinkedList, Queue, Stack};

/// Capacity used by the benches.
pub const BENCH_CAPACITY: usize = 1024;

const LCG_MUL: u64 = 6364136223846793005;
const LCG_INC: u64 = 1442695040888963407;

fn lcg(state: u64) -> u64 {
    state.wrapping_mul(LCG_MUL).wrapping_add(LCG_INC)
}

/// Generate `len` deterministic values in `[0, 1000)`.
///
/// Same seed, same sequence.
pub fn value_stream(len: usize, seed: u64) -> Vec<f64> {
    let mut state = seed;
    (0..len)
        .map(|_| {
            state = lcg(state);
            // Top 53 bits give a uniform f64 in [0, 1).
            (state >> 11) as f64 / (1u64 << 53) as f64 * 1000.0
        })
        .collect()
}

/// Generate `len` insert (`true`) / remove (`false`) decisions.
///
/// Roughly `insert_percent` of the decisions are inserts.
pub fn churn_pattern(len: usize, insert_percent: u8, seed: u64) -> Vec<bool> {
    let mut state = seed;
    (0..len)
        .map(|_| {
            state = lcg(state);
            ((state >> 33) % 100) < u64::from(insert_percent)
        })
        .collect()
}

/// A list filled to capacity with `value_stream(N, seed)` in order.
pub fn filled_list<const N: usize>(seed: u64) -> Result<LinkedList<N>, CollectionError> {
    let mut list = LinkedList::new();
    for v in value_stream(N, seed) {
        list.push_back(v)?;
    }
    Ok(list)
}

/// A queue filled to capacity with `value_stream(N, seed)`.
pub fn filled_queue<const N: usize>(seed: u64) -> Result<Queue<N>, CollectionError> {
    let mut queue = Queue::new();
    for v in value_stream(N, seed) {
        queue.enqueue(v)?;
    }
    Ok(queue)
}

/// A stack filled to capacity with `value_stream(N, seed)`.
pub fn filled_stack<const N: usize>(seed: u64) -> Result<Stack<N>, CollectionError> {
    let mut stack = Stack::new();
    for v in value_stream(N, seed) {
        stack.push(v)?;
    }
    Ok(stack)
}
