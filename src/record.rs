//! The record passed through the queue.

use std::fmt;
use std::time::Duration;

/// Unit of data handed from producer to consumer.
///
/// `delta_time` stays [None] until a timing pass such as
/// [busy_wait_timed] annotates the record in flight.
///
/// [busy_wait_timed]: crate::busy_wait_timed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub value: String,
    pub delta_time: Option<Duration>,
}

impl Record {
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            delta_time: None,
        }
    }
}

/// Displays the payload only; the timing annotation is carried, not shown.
impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}
