//! slotchain walkthrough: the three structures end to end.
//!
//! Demonstrates:
//!   1. LinkedList: two-ended insertion, front removal, value removal, search
//!   2. Queue: FIFO order, peek, underflow
//!   3. Stack: LIFO order, peek, underflow
//!   4. Capacity rejection and arena metrics
//!
//! Run with:
//!   RUST_LOG=debug cargo run --example walkthrough

use slotchain_collections::{CollectionError, LinkedList, Queue, Stack};
use tracing_subscriber::EnvFilter;

fn list_demo() -> Result<(), CollectionError> {
    println!("── LinkedList ──");
    let mut list = LinkedList::<10>::new();
    list.init();

    list.push_back(1.1)?;
    list.push_front(0.5)?;
    list.push_back(2.2)?;
    println!("LinkedList: {list}");

    let popped = list.pop_front()?;
    println!("Popped: {popped}");
    println!("LinkedList: {list}");

    list.remove_value(1.1)?;
    println!("LinkedList: {list}");

    let found = list.find_value(2.2)?;
    println!("Found 2.2 at index {found}\n");
    Ok(())
}

fn queue_demo() -> Result<(), CollectionError> {
    println!("── Queue ──");
    let mut queue = Queue::<10>::new();
    queue.init();

    for v in [1.1, 2.2, 3.3] {
        queue.enqueue(v)?;
    }
    println!("Queue: {queue}");
    println!("Peek: {}", queue.peek()?);

    for _ in 0..3 {
        println!("Dequeued: {}", queue.dequeue()?);
    }
    match queue.dequeue() {
        Err(err) => println!("Fourth dequeue: {err}\n"),
        Ok(v) => println!("Fourth dequeue unexpectedly returned {v}\n"),
    }
    Ok(())
}

fn stack_demo() -> Result<(), CollectionError> {
    println!("── Stack ──");
    let mut stack = Stack::<10>::new();
    stack.init();

    stack.push(10.5)?;
    stack.push(20.5)?;
    println!("Stack: {stack}");
    println!("Peek: {}", stack.peek()?);
    println!("Popped: {}", stack.pop()?);
    println!("Popped: {}", stack.pop()?);
    if let Err(err) = stack.pop() {
        println!("Third pop: {err}\n");
    }
    Ok(())
}

fn capacity_demo() -> Result<(), CollectionError> {
    println!("── Capacity ──");
    let mut stack = Stack::<3>::new();
    for v in [1.0, 2.0, 3.0] {
        stack.push(v)?;
    }
    if let Err(err) = stack.push(4.0) {
        println!("Push onto full stack: {err}");
    }
    println!("Stack unchanged: {stack}");
    let m = stack.arena().metrics();
    println!(
        "Arena metrics: {} allocations, {} rejections, peak {} of {}",
        m.allocations,
        m.capacity_rejections,
        m.peak_used,
        stack.capacity()
    );
    Ok(())
}

fn main() -> Result<(), CollectionError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== slotchain walkthrough ===\n");
    list_demo()?;
    queue_demo()?;
    stack_demo()?;
    capacity_demo()?;
    tracing::info!("walkthrough complete");
    Ok(())
}
