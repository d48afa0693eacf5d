//! One worker thread, one consumer.
//!
//! The queue is the only state the two threads share.

use handoff::mailbox::Queue;
use handoff::worker_process;

fn main() {
    handoff::say_hello("handoff");

    let queue = Queue::new();

    let worker = {
        let queue = queue.clone();
        std::thread::spawn(move || worker_process(&queue))
    };

    // Blocks until the worker publishes.
    let record = queue.take();
    println!("{record}");

    worker.join().unwrap();
}
