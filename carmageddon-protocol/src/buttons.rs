//! Button state carried in outbound reports

use core::fmt;

/// Number of buttons represented in a report
pub const BUTTON_COUNT: u8 = 8;

/// Set of pressed buttons, bit `i` = button `i`
///
/// Serialized on the wire as its decimal value, not as binary digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonMask(u8);

impl ButtonMask {
    /// No buttons pressed
    pub const NONE: Self = Self(0);

    /// Build a mask from its byte value
    pub const fn new(bits: u8) -> Self {
        Self(bits)
    }

    /// Build a mask from a wider hardware read
    ///
    /// Only the low 8 bits are kept; buttons beyond the eighth are dropped.
    pub const fn from_raw(raw: u32) -> Self {
        Self((raw & 0xFF) as u8)
    }

    /// Raw byte value
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Check whether button `index` (0-7) is pressed
    pub fn is_pressed(self, index: u8) -> bool {
        index < BUTTON_COUNT && (self.0 >> index) & 0x01 != 0
    }

    /// Returns true if no button is pressed
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterate over the indices of pressed buttons, lowest first
    pub fn pressed(self) -> impl Iterator<Item = u8> {
        (0..BUTTON_COUNT).filter(move |&i| self.is_pressed(i))
    }
}

impl From<u8> for ButtonMask {
    fn from(bits: u8) -> Self {
        Self(bits)
    }
}

impl fmt::Display for ButtonMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use core::fmt::Write;

    use heapless::String;

    use super::*;

    #[test]
    fn test_display_is_decimal() {
        let mut text: String<4> = String::new();
        write!(text, "{}", ButtonMask::new(0b1000_0001)).unwrap();
        assert_eq!(text.as_str(), "129");
    }

    #[test]
    fn test_from_raw_truncates_high_bits() {
        assert_eq!(ButtonMask::from_raw(0x1_05).bits(), 0x05);
        assert_eq!(ButtonMask::from_raw(0xFFFF_FF00).bits(), 0);
        assert_eq!(ButtonMask::from_raw(0xFF).bits(), 0xFF);
    }

    #[test]
    fn test_is_pressed() {
        let mask = ButtonMask::new(0b0000_1001);
        assert!(mask.is_pressed(0));
        assert!(!mask.is_pressed(1));
        assert!(mask.is_pressed(3));
        assert!(!mask.is_pressed(8));
    }

    #[test]
    fn test_pressed_iterator() {
        let mask = ButtonMask::new(0b1000_0010);
        let mut it = mask.pressed();
        assert_eq!(it.next(), Some(1));
        assert_eq!(it.next(), Some(7));
        assert_eq!(it.next(), None);
        assert!(ButtonMask::NONE.is_empty());
    }
}
