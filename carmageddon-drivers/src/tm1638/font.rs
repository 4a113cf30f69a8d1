//! 7-segment character set
//!
//! Bit 0 is segment A, bit 6 is segment G, bit 7 the decimal point.

/// Decimal point segment
pub const SEG_DP: u8 = 0x80;

/// Segment pattern for `ascii`, blank for characters with no sensible shape
///
/// Letters share one shape per case-insensitive letter.
pub const fn segments(ascii: u8) -> u8 {
    match ascii.to_ascii_uppercase() {
        b'0' | b'O' => 0x3F,
        b'1' => 0x06,
        b'2' | b'Z' => 0x5B,
        b'3' => 0x4F,
        b'4' => 0x66,
        b'5' | b'S' => 0x6D,
        b'6' => 0x7D,
        b'7' => 0x07,
        b'8' => 0x7F,
        b'9' => 0x6F,
        b'A' => 0x77,
        b'B' => 0x7C,
        b'C' => 0x39,
        b'D' => 0x5E,
        b'E' => 0x79,
        b'F' => 0x71,
        b'G' => 0x3D,
        b'H' | b'X' => 0x76,
        b'I' => 0x30,
        b'J' => 0x1E,
        b'K' => 0x75,
        b'L' => 0x38,
        b'M' => 0x15,
        b'N' => 0x54,
        b'P' => 0x73,
        b'Q' => 0x67,
        b'R' => 0x50,
        b'T' => 0x78,
        b'U' => 0x3E,
        b'V' => 0x1C,
        b'W' => 0x2A,
        b'Y' => 0x6E,
        b'-' => 0x40,
        b'_' => 0x08,
        b'=' => 0x48,
        _ => 0x00,
    }
}
