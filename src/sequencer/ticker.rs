//! Scoped repeating timer
//!
//! A [`Ticker`] is the tick source of one sequencer run. Holding it means the
//! run is live; dropping it (on stop, reset, operation switch or teardown of
//! the owning sequencer) cancels every tick that has not fired yet. There is no
//! background thread: the owner polls it from its event loop.

use std::time::{Duration, Instant};

/// Interval used when nothing else is configured
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(1000);

#[derive(Debug)]
pub struct Ticker {
    interval: Duration,
    next_due: Instant,
    fired: u64,
}

impl Ticker {
    /// Acquire a ticker whose first tick is due one interval after `now`
    pub fn start(interval: Duration, now: Instant) -> Self {
        Ticker {
            interval,
            next_due: now + interval,
            fired: 0,
        }
    }

    /// Fire at most one due tick
    ///
    /// Ticks that fell behind are delivered one per call, in order, so the
    /// caller can stop between them.
    pub fn poll(&mut self, now: Instant) -> bool {
        if now < self.next_due {
            return false;
        }
        self.next_due += self.interval;
        self.fired += 1;
        true
    }

    pub fn next_due(&self) -> Instant {
        self.next_due
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Ticks delivered so far
    pub fn fired(&self) -> u64 {
        self.fired
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        log::trace!("tick source released after {} tick(s)", self.fired);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nothing_fires_before_first_interval() {
        let t0 = Instant::now();
        let mut ticker = Ticker::start(Duration::from_millis(100), t0);
        assert!(!ticker.poll(t0));
        assert!(!ticker.poll(t0 + Duration::from_millis(99)));
        assert!(ticker.poll(t0 + Duration::from_millis(100)));
        assert_eq!(ticker.fired(), 1);
    }

    #[test]
    fn late_polls_drain_one_tick_at_a_time() {
        let t0 = Instant::now();
        let mut ticker = Ticker::start(Duration::from_millis(10), t0);
        let late = t0 + Duration::from_millis(35);
        assert!(ticker.poll(late));
        assert!(ticker.poll(late));
        assert!(ticker.poll(late));
        assert!(!ticker.poll(late));
        assert_eq!(ticker.next_due(), t0 + Duration::from_millis(40));
    }
}
