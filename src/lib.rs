//! Blocking hand-off queue[^handoff] between threads.
//!
//! [^handoff]: Or mailbox. A producer puts a record in, a consumer takes
//! it out; the queue is the only state they share.
//!
//! The queue is FIFO and unbounded on the insertion side. Removal blocks
//! until a record is available - no timeout, no cancellation. A consumer
//! waiting on an empty queue with no producer waits forever. That is a
//! property of the design, not a bug to patch around.
//!
//! # [mailbox] vs [slot]
//!
//! [mailbox::Queue] is the general hand-off channel: any number of records
//! in flight, FIFO order, insertion never blocks.
//!
//! [slot::Slot] holds at most one value and rejects insertion while
//! occupied. Use it when "one record in flight" is part of the protocol
//! and you want the type to enforce it.
//!
//! # Waiting
//!
//! Blocking operations wait by spinning with exponential backoff,
//! escalating to [yield_now]. No OS synchronization primitives, no
//! parking - a blocked thread keeps its core busy.
//!
//! [yield_now]: std::thread::yield_now

mod backoff;

pub mod mailbox;
pub mod slot;

mod record;
pub use record::*;

mod worker;
pub use worker::*;

mod timing;
pub use timing::*;

pub mod numeric;

/// Writes `hello <name>` to standard output.
pub fn say_hello(name: &str) {
    println!("hello {name}");
}
