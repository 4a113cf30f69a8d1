//! Control panel module traits
//!
//! The lamp bank, buttons and 7-segment digits usually share one module
//! (a TM1638 board), but the traits are split so each consumer asks only
//! for what it uses.

/// Number of indicator lamps
pub const LAMP_COUNT: u8 = 8;

/// Number of 7-segment digits
pub const DIGIT_COUNT: u8 = 8;

/// Bank of on/off indicator lamps
pub trait LampBank {
    /// Switch lamp `index` (0..8) on or off
    ///
    /// Out-of-range indices are ignored.
    fn set_lamp(&mut self, index: u8, on: bool);
}

/// Momentary buttons
pub trait ButtonPanel {
    /// Read the pressed buttons, bit `i` set when button `i` is held
    ///
    /// Modules with more than 8 buttons report them in the higher bits.
    fn read_buttons(&mut self) -> u32;
}

/// 7-segment digit row
pub trait SegmentDisplay {
    /// Show `ascii` on digit `position` (0 = leftmost), with its decimal point
    ///
    /// Characters the module cannot draw are shown blank.
    fn set_digit(&mut self, position: u8, ascii: u8, dot: bool);
}

/// A complete panel module
pub trait PanelModule: LampBank + ButtonPanel + SegmentDisplay {}

// Blanket implementation
impl<T: LampBank + ButtonPanel + SegmentDisplay> PanelModule for T {}
