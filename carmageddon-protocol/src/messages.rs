//! Message types for the panel line protocol
//!
//! - Simulation → Panel: [`InboundMessage`] (speed and collectible count)
//! - Panel → Simulation: [`OutboundReport`] (throttle sensor and buttons)

use core::fmt::Write;
use core::str;

use heapless::{String, Vec};

use crate::buttons::ButtonMask;
use crate::line::MAX_LINE_LEN;

/// Field separator
pub const FIELD_SEPARATOR: u8 = b',';

/// Longest outbound record, terminator included ("65535,255\n" is 10)
pub const MAX_OUTBOUND_LEN: usize = 16;

/// Errors that can occur while parsing an inbound record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    /// No field separator in the record
    MissingSeparator,
    /// Separator is the first byte (no speed field)
    EmptySpeed,
    /// Speed field is not a decimal number
    InvalidSpeed,
    /// Speed is NaN or a literal infinity
    NonFiniteSpeed,
    /// Count field is not a decimal integer
    InvalidCount,
    /// Count field is below zero
    NegativeCount,
    /// Record exceeded the line length bound
    LineTooLong,
}

/// Errors that can occur while encoding an outbound record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EncodeError {
    /// Caller's buffer cannot hold the whole record
    BufferTooSmall,
}

/// State update sent by the simulation
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InboundMessage {
    /// Vehicle speed, not yet clamped
    pub speed: f32,
    /// Collected items, not yet clamped
    pub collectible_count: u32,
}

/// Parse one inbound record
///
/// Accepts the record with or without its trailing `\n` (a `\r` before it
/// is tolerated). Splits on the first separator; both fields must parse or
/// the whole record is rejected.
pub fn parse_inbound(line: &[u8]) -> Result<InboundMessage, ParseError> {
    let line = strip_terminator(line);
    if line.len() > MAX_LINE_LEN {
        return Err(ParseError::LineTooLong);
    }

    let sep = line
        .iter()
        .position(|&b| b == FIELD_SEPARATOR)
        .ok_or(ParseError::MissingSeparator)?;
    if sep == 0 {
        return Err(ParseError::EmptySpeed);
    }

    let speed = parse_speed(&line[..sep])?;
    let collectible_count = parse_count(&line[sep + 1..])?;

    Ok(InboundMessage {
        speed,
        collectible_count,
    })
}

fn strip_terminator(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

fn parse_speed(field: &[u8]) -> Result<f32, ParseError> {
    let text = str::from_utf8(field).map_err(|_| ParseError::InvalidSpeed)?;
    let text = text.trim();
    let speed: f32 = text.parse().map_err(|_| ParseError::InvalidSpeed)?;
    if speed.is_nan() {
        return Err(ParseError::NonFiniteSpeed);
    }
    if speed.is_infinite() {
        // A written-out number too large for f32 saturates, a literal
        // `inf` does not
        if !is_numeral(text) {
            return Err(ParseError::NonFiniteSpeed);
        }
        return Ok(if speed > 0.0 { f32::MAX } else { f32::MIN });
    }
    Ok(speed)
}

/// Decimal numeral: digits with an optional sign, point and exponent
fn is_numeral(text: &str) -> bool {
    text.bytes().any(|b| b.is_ascii_digit())
        && text
            .bytes()
            .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'))
}

fn parse_count(field: &[u8]) -> Result<u32, ParseError> {
    let text = str::from_utf8(field).map_err(|_| ParseError::InvalidCount)?;
    let text = text.trim();
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::InvalidCount);
    }
    if negative && digits.bytes().any(|b| b != b'0') {
        return Err(ParseError::NegativeCount);
    }
    // All digits, so the only possible failure is overflow
    Ok(digits.parse().unwrap_or(u32::MAX))
}

/// Panel state reported to the simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct OutboundReport {
    /// Throttle sensor reading in the input device's range
    pub sensor_value: u16,
    /// Pressed buttons
    pub buttons: ButtonMask,
}

impl OutboundReport {
    /// Create a new report
    pub const fn new(sensor_value: u16, buttons: ButtonMask) -> Self {
        Self {
            sensor_value,
            buttons,
        }
    }

    /// Encode this report into a byte buffer
    ///
    /// Returns the number of bytes written. Fails without touching `buffer`
    /// if the whole record does not fit.
    pub fn encode(&self, buffer: &mut [u8]) -> Result<usize, EncodeError> {
        let line = self.to_line()?;
        if buffer.len() < line.len() {
            return Err(EncodeError::BufferTooSmall);
        }
        buffer[..line.len()].copy_from_slice(&line);
        Ok(line.len())
    }

    /// Encode this report into a heapless Vec
    pub fn to_line(&self) -> Result<Vec<u8, MAX_OUTBOUND_LEN>, EncodeError> {
        let mut text: String<MAX_OUTBOUND_LEN> = String::new();
        writeln!(text, "{},{}", self.sensor_value, self.buttons)
            .map_err(|_| EncodeError::BufferTooSmall)?;

        let mut line = Vec::new();
        line.extend_from_slice(text.as_bytes())
            .map_err(|_| EncodeError::BufferTooSmall)?;
        Ok(line)
    }
}

/// Format an outbound record into `buffer`
///
/// Convenience wrapper over [`OutboundReport::encode`].
pub fn format_outbound(
    sensor_value: u16,
    buttons: ButtonMask,
    buffer: &mut [u8],
) -> Result<usize, EncodeError> {
    OutboundReport::new(sensor_value, buttons).encode(buffer)
}
