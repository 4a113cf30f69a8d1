//! Panel module outputs
//!
//! Adapters that turn vehicle values into lamp and 7-segment writes. Each
//! one accepts an absent module and then does nothing.

pub mod lamps;
pub mod readout;

pub use lamps::{LampDriver, LampMask};
pub use readout::{Cell, Cells, SegmentReadout};
