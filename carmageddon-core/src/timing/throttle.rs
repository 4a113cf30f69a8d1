//! Fixed-interval throttle
//!
//! All comparisons use `wrapping_sub`, so a u32 millisecond clock rolling
//! over after ~49 days does not stall anything.

/// Milliseconds from `since` to `now` on a wrapping clock
#[inline]
pub const fn elapsed_ms(now: u32, since: u32) -> u32 {
    now.wrapping_sub(since)
}

/// Gate that opens at most once per interval
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Throttle {
    interval_ms: u32,
    /// When the gate last opened; `None` until the first time
    last_ms: Option<u32>,
}

impl Throttle {
    /// Create a throttle that is due immediately
    pub const fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms,
            last_ms: None,
        }
    }

    /// Configured interval
    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    /// When the gate last opened
    pub fn last_ms(&self) -> Option<u32> {
        self.last_ms
    }

    /// Check whether a full interval has passed, without consuming it
    pub fn is_due(&self, now_ms: u32) -> bool {
        match self.last_ms {
            None => true,
            Some(last) => elapsed_ms(now_ms, last) >= self.interval_ms,
        }
    }

    /// Record that the gated action happened at `now_ms`
    pub fn mark(&mut self, now_ms: u32) {
        self.last_ms = Some(now_ms);
    }

    /// Check and, when due, mark in one step
    pub fn poll(&mut self, now_ms: u32) -> bool {
        if self.is_due(now_ms) {
            self.mark(now_ms);
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_poll_is_due() {
        let mut throttle = Throttle::new(1000);
        assert!(throttle.poll(0));
        assert_eq!(throttle.last_ms(), Some(0));
    }

    #[test]
    fn test_early_poll_keeps_timer() {
        let mut throttle = Throttle::new(50);
        assert!(throttle.poll(100));
        assert!(!throttle.poll(120));
        assert!(!throttle.poll(149));
        assert_eq!(throttle.last_ms(), Some(100));
        assert!(throttle.poll(150));
    }

    #[test]
    fn test_is_due_does_not_mark() {
        let throttle = Throttle::new(50);
        assert!(throttle.is_due(7));
        assert_eq!(throttle.last_ms(), None);
    }

    #[test]
    fn test_wraparound() {
        let mut throttle = Throttle::new(50);
        assert!(throttle.poll(u32::MAX - 10));
        assert!(!throttle.poll(38));
        assert!(throttle.poll(39));
    }
}
