//! Fixed-interval tick scheduler.
//!
//! The engine feeds real elapsed seconds in through [`TickScheduler::advance`]
//! and applies the returned number of ticks one after another. Time only
//! accumulates while armed, and cancelling throws away the partial interval,
//! so a tick that was pending at pause time never fires.

/// One cancellable periodic task.
#[derive(Debug, Clone, PartialEq)]
pub struct TickScheduler {
    interval_secs: f64,
    elapsed: f64,
    armed: bool,
}

impl TickScheduler {
    pub fn new(interval_secs: f64) -> Self {
        Self {
            interval_secs,
            elapsed: 0.0,
            armed: false,
        }
    }

    /// Start a fresh interval. Re-arming an armed scheduler restarts it.
    pub fn arm(&mut self) {
        self.armed = true;
        self.elapsed = 0.0;
    }

    /// Disarm and drop any partially elapsed interval.
    pub fn cancel(&mut self) {
        self.armed = false;
        self.elapsed = 0.0;
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    pub fn interval_secs(&self) -> f64 {
        self.interval_secs
    }

    /// Seconds until the next tick is due, if armed.
    pub fn remaining_secs(&self) -> Option<f64> {
        self.armed.then(|| (self.interval_secs - self.elapsed).max(0.0))
    }

    /// Accumulate `delta_secs` and return how many ticks came due.
    ///
    /// A non-positive interval never fires.
    pub fn advance(&mut self, delta_secs: f64) -> u32 {
        let positive = |x: f64| x > 0.0;
        if !self.armed || !positive(self.interval_secs) || !positive(delta_secs) {
            return 0;
        }
        self.elapsed += delta_secs;
        let due = (self.elapsed / self.interval_secs).floor();
        self.elapsed -= due * self.interval_secs;
        due as u32
    }
}
