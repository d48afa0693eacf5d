//! Busy-wait timing instrumentation.
//!
//! The loop exists to burn measurable wall-clock time; its arithmetic
//! output is discarded. [black_box] keeps the optimizer from deleting it.
//!
//! [black_box]: std::hint::black_box

use std::hint::black_box;
use std::time::{Duration, Instant};
use crate::mailbox::Queue;
use crate::record::Record;

/// Runs `(n-1) * (n-1)` trivial additions and returns the measured
/// wall-clock time.
///
/// `n <= 1` performs zero iterations - the measurement of the empty loop
/// still succeeds. Measured with the monotonic [Instant] clock.
pub fn busy_wait(n: u64) -> Duration {
    let start = Instant::now();
    for i in 1..n {
        for j in 1..n {
            black_box(i + j);
        }
    }
    start.elapsed()
}

/// Runs [busy_wait], then annotates the record currently in `queue` with
/// the measured duration and puts it back.
///
/// Expects a record to already be in flight. On an empty queue with no
/// producer this blocks forever, like [Queue::take]. Nothing is published
/// beyond the reinserted record.
pub fn busy_wait_timed(n: u64, queue: &Queue<Record>) -> Duration {
    let delta = busy_wait(n);

    let mut record = queue.take();
    record.delta_time = Some(delta);
    queue.put(record);

    delta
}
