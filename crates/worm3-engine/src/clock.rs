//! Frame-driven logical clock.
//!
//! The world has no wall clock. The host reports elapsed seconds on every
//! frame and each periodic subsystem owns a [`LogicalClock`] that decides
//! whether it fires this frame.

/// Accumulates frame time and fires once the period has elapsed.
///
/// Fires at most once per [`tick`](Self::tick) and drops any remainder on
/// firing, so a long frame never produces a burst of catch-up ticks.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LogicalClock {
    acc: f64,
}

impl LogicalClock {
    /// A clock with nothing accumulated.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seconds accumulated since the last firing.
    pub fn elapsed(&self) -> f64 {
        self.acc
    }

    /// Add `dt` seconds and report whether `period` has been reached.
    ///
    /// Non-finite or negative `dt` is treated as zero.
    pub fn tick(&mut self, dt: f64, period: f64) -> bool {
        if dt.is_finite() && dt > 0.0 {
            self.acc += dt;
        }
        if self.acc >= period {
            self.acc = 0.0;
            true
        } else {
            false
        }
    }

    /// Discard accumulated time.
    pub fn reset(&mut self) {
        self.acc = 0.0;
    }
}
