//! Single-slot rendezvous cell.
//!
//! Holds at most one value. Insertion into an occupied slot is rejected,
//! which makes "one record in flight" a property of the type instead of a
//! convention the callers have to uphold.

use std::cell::UnsafeCell;
use std::mem;
use std::mem::MaybeUninit;
use std::sync::atomic::{AtomicU8, Ordering};
use branch_hints::unlikely;
use crate::backoff::Backoff;

const EMPTY: u8 = 0;
// A writer or reader is mid-transfer on `value`.
const BUSY: u8 = 1;
const FULL: u8 = 2;

pub struct Slot<T> {
    /// `state` is the synchronization point for `value`.
    /// After we write `value`, we store FULL with "Release".
    /// Before we read `value`, we claim FULL with "Acquire".
    /// In analogy with spin-lock synchronization.
    state: AtomicU8,
    value: UnsafeCell<MaybeUninit<T>>,
}

unsafe impl<T: Send> Send for Slot<T> {}
unsafe impl<T: Send> Sync for Slot<T> {}

impl<T> Default for Slot<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Slot<T> {
    #[must_use]
    #[inline]
    pub fn new() -> Self {
        Self {
            state: AtomicU8::new(EMPTY),
            value: UnsafeCell::new(MaybeUninit::uninit()),
        }
    }

    /// Tries to place `value` into the slot.
    ///
    /// Fails when the slot is occupied or another thread is mid-transfer,
    /// handing the value back to the caller.
    #[inline]
    pub fn try_put(&self, value: T) -> Result<(), T> {
        let claimed = self
            .state
            .compare_exchange(EMPTY, BUSY, Ordering::Acquire, Ordering::Relaxed);
        if unlikely(claimed.is_err()) {
            return Err(value);
        }

        unsafe {
            (*self.value.get()).write(value);
        }
        self.state.store(FULL, Ordering::Release);
        Ok(())
    }

    /// Places `value` into the slot, waiting for it to empty first if
    /// needed.
    #[inline]
    pub fn put(&self, mut value: T) {
        let mut backoff = Backoff::new();
        loop {
            match self.try_put(value) {
                Ok(()) => return,
                Err(v) => value = v,
            }
            backoff.snooze();
        }
    }

    /// Removes the value, if one is present.
    #[inline]
    pub fn try_take(&self) -> Option<T> {
        let claimed = self
            .state
            .compare_exchange(FULL, BUSY, Ordering::Acquire, Ordering::Relaxed);
        if unlikely(claimed.is_err()) {
            return None;
        }

        let value = unsafe { (*self.value.get()).assume_init_read() };
        self.state.store(EMPTY, Ordering::Release);
        Some(value)
    }

    /// Removes the value, waiting for one to arrive.
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

    /// Whether a value is currently in the slot.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.state.load(Ordering::Acquire) == FULL
    }
}

impl<T> Drop for Slot<T> {
    fn drop(&mut self) {
        if mem::needs_drop::<T>() && *self.state.get_mut() == FULL {
            unsafe {
                self.value.get_mut().assume_init_drop();
            }
        }
    }
}

#[cfg(test)]
mod test_slot {
    use std::sync::Arc;
    use super::*;

    #[test]
    fn occupied_put_rejected() {
        let slot = Slot::new();
        assert!(slot.try_put(1).is_ok());
        assert!(slot.is_full());

        assert_eq!(slot.try_put(2), Err(2));

        assert_eq!(slot.try_take(), Some(1));
        assert_eq!(slot.try_take(), None);
        assert!(!slot.is_full());
    }

    #[test]
    fn rendezvous_mt() {
        let slot: Arc<Slot<String>> = Default::default();

        let producer = {
            let slot = slot.clone();
            std::thread::spawn(move || {
                std::thread::sleep(std::time::Duration::from_millis(10));
                slot.put(String::from("late arrival"));
            })
        };

        assert_eq!(slot.take(), "late arrival");
        producer.join().unwrap();
    }

    #[test]
    fn reusable_after_take() {
        let slot = Slot::new();
        for i in 0..100 {
            slot.put(i);
            assert_eq!(slot.take(), i);
        }
    }

    #[test]
    fn drops_unclaimed_value() {
        let payload = Arc::new(());

        let slot = Slot::new();
        slot.put(payload.clone());
        drop(slot);

        assert_eq!(Arc::strong_count(&payload), 1);
    }
}
