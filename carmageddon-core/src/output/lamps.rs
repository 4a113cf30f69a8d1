//! Collectible lamp bank

use crate::timing::Throttle;
use crate::traits::{LampBank, LAMP_COUNT};

/// Lamp pattern, bit `i` lights lamp `i`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LampMask(u8);

impl LampMask {
    /// All lamps dark
    pub const OFF: Self = Self(0);

    /// Binary rendition of the collectible count
    pub const fn from_count(count: u8) -> Self {
        Self(count)
    }

    /// Raw pattern
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Check whether lamp `index` is lit
    pub fn is_lit(self, index: u8) -> bool {
        index < LAMP_COUNT && self.0 & (1 << index) != 0
    }

    /// Write the pattern to `bank`, lamp 0 first
    pub fn apply<L: LampBank + ?Sized>(self, bank: &mut L) {
        for index in 0..LAMP_COUNT {
            bank.set_lamp(index, self.is_lit(index));
        }
    }
}

/// Throttled lamp bank refresh
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LampDriver {
    throttle: Throttle,
}

impl LampDriver {
    /// Create a driver refreshing at most once per `interval_ms`
    pub const fn new(interval_ms: u32) -> Self {
        Self {
            throttle: Throttle::new(interval_ms),
        }
    }

    /// When the bank was last written
    pub fn last_refresh_ms(&self) -> Option<u32> {
        self.throttle.last_ms()
    }

    /// Show `count` on the bank if the refresh interval has elapsed
    ///
    /// Returns true when the bank was written. An absent bank leaves the
    /// timer untouched.
    pub fn refresh<L: LampBank + ?Sized>(&mut self, bank: Option<&mut L>, count: u8, now_ms: u32) -> bool {
        let Some(bank) = bank else {
            return false;
        };
        if !self.throttle.poll(now_ms) {
            return false;
        }
        LampMask::from_count(count).apply(bank);
        true
    }
}
