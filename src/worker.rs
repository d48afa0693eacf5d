//! The producer side of the hand-off.

use crate::mailbox::Queue;
use crate::record::Record;

/// Payload of the record published by [worker_process].
pub const WORKER_MESSAGE: &str = "This is a message sent from worker_process.";

/// Publishes one record with a fixed payload into `queue`.
///
/// Intended to run in its own thread; the consumer takes from the same
/// queue afterwards.
pub fn worker_process(queue: &Queue<Record>) {
    queue.put(Record::new(WORKER_MESSAGE));
}
