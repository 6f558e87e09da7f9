//! Wall-clock source for hosts that drive a [`Timeline`] in real time.

use crate::timeline::Timeline;
use web_time::{Duration, Instant};

/// Monotonic milliseconds since the clock was created.
#[derive(Clone, Copy, Debug)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.origin.elapsed()
    }

    pub fn now_ms(&self) -> u64 {
        self.elapsed().as_millis() as u64
    }

    /// Fires everything on `timeline` that is due by now.
    pub fn sync(&self, timeline: &Timeline) {
        timeline.advance_to(self.now_ms());
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}
