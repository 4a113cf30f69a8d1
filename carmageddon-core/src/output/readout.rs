//! 8-digit 7-segment speed readout
//!
//! Dots do not take a digit of their own; they light the decimal point of
//! the digit before them, so `"14.5"` occupies three digits.

use core::fmt::Write;

use heapless::String;

use crate::traits::{SegmentDisplay, DIGIT_COUNT};

/// One digit: character and decimal point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Cell {
    pub ascii: u8,
    pub dot: bool,
}

impl Cell {
    pub const BLANK: Self = Self {
        ascii: b' ',
        dot: false,
    };
}

/// Contents of the whole digit row, leftmost first
pub type Cells = [Cell; DIGIT_COUNT as usize];

/// Fold `text` into digits, dropping anything past the last digit
fn fold_dots(text: &str) -> heapless::Vec<Cell, { DIGIT_COUNT as usize }> {
    let mut cells: heapless::Vec<Cell, { DIGIT_COUNT as usize }> = heapless::Vec::new();
    for byte in text.bytes() {
        if byte == b'.' {
            if let Some(last) = cells.last_mut() {
                if !last.dot {
                    last.dot = true;
                    continue;
                }
            }
            if cells
                .push(Cell {
                    ascii: b' ',
                    dot: true,
                })
                .is_err()
            {
                break;
            }
        } else if cells.push(Cell { ascii: byte, dot: false }).is_err() {
            break;
        }
    }
    cells
}

/// Speed with one decimal, right-aligned
pub fn speed_cells(speed: f32) -> Cells {
    let mut text: String<16> = String::new();
    // Clamped speed never exceeds "999.0"
    let _ = write!(text, "{:.1}", speed);

    let folded = fold_dots(&text);
    let mut cells = [Cell::BLANK; DIGIT_COUNT as usize];
    let start = cells.len() - folded.len();
    cells[start..].copy_from_slice(&folded);
    cells
}

/// Text left-aligned and blank-padded
pub fn banner_cells(text: &str) -> Cells {
    let folded = fold_dots(text);
    let mut cells = [Cell::BLANK; DIGIT_COUNT as usize];
    cells[..folded.len()].copy_from_slice(&folded);
    cells
}

/// Change-gated writer for the digit row
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SegmentReadout {
    shown: Option<Cells>,
}

impl SegmentReadout {
    pub const fn new() -> Self {
        Self { shown: None }
    }

    /// Digits last written, if any
    pub fn shown(&self) -> Option<&Cells> {
        self.shown.as_ref()
    }

    /// Show `speed`; returns true when digits were written
    pub fn show_speed<D: SegmentDisplay + ?Sized>(&mut self, display: Option<&mut D>, speed: f32) -> bool {
        self.show(display, speed_cells(speed))
    }

    /// Show a short status text; returns true when digits were written
    pub fn show_banner<D: SegmentDisplay + ?Sized>(&mut self, display: Option<&mut D>, text: &str) -> bool {
        self.show(display, banner_cells(text))
    }

    fn show<D: SegmentDisplay + ?Sized>(&mut self, display: Option<&mut D>, cells: Cells) -> bool {
        let Some(display) = display else {
            return false;
        };
        if self.shown.as_ref() == Some(&cells) {
            return false;
        }
        for (position, cell) in (0u8..).zip(cells.iter()) {
            display.set_digit(position, cell.ascii, cell.dot);
        }
        self.shown = Some(cells);
        true
    }
}
