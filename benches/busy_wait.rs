use std::hint::black_box;
use criterion::{criterion_group, criterion_main, Criterion};
use handoff::busy_wait;
use handoff::mailbox::Queue;

const THREADS: usize = 4;

fn queue_handoff(n: usize) {
    let queue = Queue::new();

    let mut joins = Vec::new();
    for t in 0..THREADS {
        let queue = queue.clone();
        joins.push(std::thread::spawn(move || {
            for i in 0..n {
                queue.put(t * n + i);
            }
        }));
    }

    for _ in 0..THREADS * n {
        black_box(queue.take());
    }

    for join in joins {
        join.join().unwrap();
    }
}

fn criterion_benchmark(c: &mut Criterion) {
    const COUNT: usize = 20000;
    c.bench_function("busy wait", |b| b.iter(|| busy_wait(black_box(1000))));
    c.bench_function("queue handoff", |b| b.iter(|| queue_handoff(black_box(COUNT))));
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
