//! Interval throttles on a wrapping millisecond clock

mod throttle;

pub use throttle::{elapsed_ms, Throttle};
