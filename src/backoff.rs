use core::hint::spin_loop;

/// Exponential backoff for blocking waits.
///
/// Spins twice as long on every step, then starts yielding to the OS
/// scheduler once spinning alone is clearly not enough.
pub(crate) struct Backoff {
    step: u32,
}

impl Backoff {
    const YIELD_THRESHOLD: u32 = 10;

    #[inline]
    pub fn new() -> Self {
        Self { step: 0 }
    }

    #[inline]
    pub fn snooze(&mut self) {
        if self.step < Self::YIELD_THRESHOLD {
            for _ in 0..1 << self.step {
                spin_loop();
            }
            self.step += 1;
        } else {
            std::thread::yield_now();
        }
    }
}
