//! Fixed-cadence tick source
//!
//! Replaces a timer-driven callback with an explicit, synchronously
//! cancellable primitive: the driver calls `wait()` between ticks and stops
//! as soon as the ticker is cancelled. Deadlines advance by the interval, not
//! by wall-clock wakeup time, so slow ticks do not accumulate drift.

use std::time::{Duration, Instant};

/// Periodic tick source with a fixed interval
#[derive(Debug)]
pub struct FixedTicker {
    interval: Duration,
    deadline: Instant,
    cancelled: bool,
}

impl FixedTicker {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            deadline: Instant::now() + interval,
            cancelled: false,
        }
    }

    /// Block until the next tick is due. Returns false once cancelled.
    pub fn wait(&mut self) -> bool {
        if self.cancelled {
            return false;
        }

        let now = Instant::now();
        if self.deadline > now {
            std::thread::sleep(self.deadline - now);
        }
        self.deadline += self.interval;
        true
    }

    /// Cancel the ticker. Takes effect before the next scheduled tick.
    pub fn cancel(&mut self) {
        if !self.cancelled {
            self.cancelled = true;
            log::debug!("ticker cancelled");
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wait_after_cancel_returns_false() {
        let mut ticker = FixedTicker::new(Duration::from_millis(1));
        assert!(ticker.wait());
        ticker.cancel();
        assert!(!ticker.wait());
        assert!(ticker.is_cancelled());
    }

    #[test]
    fn test_zero_interval_does_not_block() {
        let mut ticker = FixedTicker::new(Duration::ZERO);
        let start = Instant::now();
        for _ in 0..100 {
            assert!(ticker.wait());
        }
        assert!(start.elapsed() < Duration::from_secs(1));
    }

    #[test]
    fn test_interval_paces_ticks() {
        let interval = Duration::from_millis(5);
        let mut ticker = FixedTicker::new(interval);
        let start = Instant::now();
        for _ in 0..4 {
            assert!(ticker.wait());
        }
        assert!(start.elapsed() >= 4 * interval);
    }
}
