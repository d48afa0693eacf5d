//! Multi-producer, multi-consumer blocking hand-off queue.
//!
//! FIFO. Insertion never blocks; removal blocks until a record arrives.
//!
//! # Protocol
//!
//! Nothing stops several consumers from blocking on [take] at once; the
//! queue only guarantees that each record is taken exactly once, in
//! insertion order. Callers that need "at most one record in flight"
//! enforced should reach for [Slot] instead.
//!
//! [take]: Queue::take
//! [Slot]: crate::slot::Slot

use std::collections::VecDeque;
use std::sync::Arc;
use crate::backoff::Backoff;

pub struct Queue<T> {
    deque: spin::Mutex<VecDeque<T>>,
}

impl<T> Default for Queue<T> {
    #[inline]
    fn default() -> Self {
        Self {
            deque: spin::Mutex::new(VecDeque::new()),
        }
    }
}

impl<T> Queue<T> {
    #[must_use]
    #[inline]
    pub fn new() -> Arc<Self> {
        Default::default()
    }

    /// Inserts `value` at the back of the queue.
    ///
    /// Never blocks - the queue has no capacity bound.
    #[inline]
    pub fn put(&self, value: T) {
        self.deque.lock().push_back(value);
    }

    /// Removes and returns the front record, if any.
    #[inline]
    pub fn try_take(&self) -> Option<T> {
        self.deque.lock().pop_front()
    }

    /// Removes and returns the front record, waiting for one to arrive.
    ///
    /// Blocks indefinitely if no producer ever puts.
    #[inline]
    pub fn take(&self) -> T {
        let mut backoff = Backoff::new();
        loop {
            if let Some(value) = self.try_take() {
                return value;
            }
            backoff.snooze();
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.deque.lock().len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.deque.lock().is_empty()
    }
}
