//! Line assembly for the inbound byte stream
//!
//! Bytes arrive a few at a time; the assembler accumulates them until a
//! newline completes a record. Records are bounded:
//! - at most [`MAX_LINE_LEN`] data bytes before the terminator
//! - an over-long record is discarded up to and including its terminator
//!   and reported once as [`ParseError::LineTooLong`]
//!
//! A fragment of an over-long record is never handed out as a line.

use heapless::Vec;

use crate::messages::ParseError;

/// Record terminator
pub const LINE_TERMINATOR: u8 = b'\n';

/// Maximum data bytes in one record (terminator excluded)
pub const MAX_LINE_LEN: usize = 47;

/// One complete record without its terminator
pub type Line = Vec<u8, MAX_LINE_LEN>;

/// State machine for assembling incoming lines
#[derive(Debug, Clone)]
pub struct LineAssembler {
    state: AssembleState,
    buffer: Line,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AssembleState {
    /// Accumulating data bytes
    Collecting,
    /// Record overflowed, dropping bytes until the next terminator
    Discarding,
}

impl Default for LineAssembler {
    fn default() -> Self {
        Self::new()
    }
}

impl LineAssembler {
    /// Create a new assembler
    pub const fn new() -> Self {
        Self {
            state: AssembleState::Collecting,
            buffer: Vec::new(),
        }
    }

    /// Reset the assembler state, dropping any partial record
    pub fn reset(&mut self) {
        self.state = AssembleState::Collecting;
        self.buffer.clear();
    }

    /// Number of bytes buffered for the record in progress
    pub fn pending(&self) -> usize {
        self.buffer.len()
    }

    /// Returns true while an over-long record is being skipped
    pub fn is_discarding(&self) -> bool {
        self.state == AssembleState::Discarding
    }

    /// Feed a single byte to the assembler
    ///
    /// Returns `Ok(Some(line))` when a terminator completes a record,
    /// `Ok(None)` when more bytes are needed, or `Err(LineTooLong)` when the
    /// terminator of an over-long record has been consumed.
    pub fn feed(&mut self, byte: u8) -> Result<Option<Line>, ParseError> {
        match self.state {
            AssembleState::Collecting => {
                if byte == LINE_TERMINATOR {
                    let line = self.buffer.clone();
                    self.buffer.clear();
                    return Ok(Some(line));
                }
                if self.buffer.push(byte).is_err() {
                    self.buffer.clear();
                    self.state = AssembleState::Discarding;
                }
                Ok(None)
            }
            AssembleState::Discarding => {
                if byte == LINE_TERMINATOR {
                    self.state = AssembleState::Collecting;
                    return Err(ParseError::LineTooLong);
                }
                Ok(None)
            }
        }
    }

    /// Feed multiple bytes to the assembler
    ///
    /// Returns the first complete line (or overflow report) found.
    /// Remaining bytes after it are not consumed.
    pub fn feed_bytes(&mut self, bytes: &[u8]) -> Result<Option<Line>, ParseError> {
        for &byte in bytes {
            if let Some(line) = self.feed(byte)? {
                return Ok(Some(line));
            }
        }
        Ok(None)
    }
}
