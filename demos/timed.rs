//! Publish a record, burn some time, read the annotation back.

use handoff::mailbox::Queue;
use handoff::{busy_wait_timed, worker_process};

fn main() {
    const N: u64 = 5_000;

    let queue = Queue::new();
    worker_process(&queue);

    busy_wait_timed(N, &queue);

    let record = queue.take();
    let delta = record.delta_time.unwrap_or_default();
    println!(
        "{record} ({} iterations in {:.6}s)",
        (N - 1) * (N - 1),
        delta.as_secs_f64()
    );
}
