//! Recording fakes for every sync loop collaborator

#![allow(dead_code)]

use std::collections::VecDeque;

use carmageddon_core::traits::{ButtonPanel, LampBank, SegmentDisplay};
use carmageddon_display::{Bitmap, DrawSurface, SurfaceError};
use carmageddon_hal::{AnalogInput, SerialRx, SerialTx};

/// Surface that records drawn text and counts presented frames
#[derive(Default)]
pub struct FakeSurface {
    pub texts: Vec<String>,
    pub bitmaps: usize,
    pub clears: usize,
    pub presents: usize,
    pub fail_present: bool,
}

impl DrawSurface for FakeSurface {
    fn clear(&mut self) -> Result<(), SurfaceError> {
        self.clears += 1;
        self.texts.clear();
        Ok(())
    }

    fn set_text_origin(&mut self, _x: i32, _y: i32) {}

    fn draw_text(&mut self, text: &str) -> Result<(), SurfaceError> {
        self.texts.push(text.into());
        Ok(())
    }

    fn draw_bitmap(&mut self, _x: i32, _y: i32, _bitmap: &Bitmap<'_>) -> Result<(), SurfaceError> {
        self.bitmaps += 1;
        Ok(())
    }

    fn present(&mut self) -> Result<(), SurfaceError> {
        if self.fail_present {
            return Err(SurfaceError::Communication);
        }
        self.presents += 1;
        Ok(())
    }

    fn dimensions(&self) -> (u16, u16) {
        (128, 64)
    }
}

/// TM1638-like module: lamps, digits and a button register
#[derive(Default)]
pub struct FakePanel {
    pub lamps: [bool; 8],
    pub lamp_writes: usize,
    pub digits: [(u8, bool); 8],
    pub digit_writes: usize,
    pub buttons: u32,
}

impl FakePanel {
    /// Digit characters as a string, dots omitted
    pub fn digit_text(&self) -> String {
        self.digits.iter().map(|(c, _)| *c as char).collect()
    }

    /// Lamp pattern as a byte, lamp 0 in bit 0
    pub fn lamp_bits(&self) -> u8 {
        self.lamps
            .iter()
            .enumerate()
            .fold(0, |acc, (i, on)| acc | ((*on as u8) << i))
    }
}

impl LampBank for FakePanel {
    fn set_lamp(&mut self, index: u8, on: bool) {
        self.lamps[index as usize] = on;
        self.lamp_writes += 1;
    }
}

impl ButtonPanel for FakePanel {
    fn read_buttons(&mut self) -> u32 {
        self.buttons
    }
}

impl SegmentDisplay for FakePanel {
    fn set_digit(&mut self, position: u8, ascii: u8, dot: bool) {
        self.digits[position as usize] = (ascii, dot);
        self.digit_writes += 1;
    }
}

/// ADC returning a settable value, or failing on demand
pub struct FakeSensor {
    pub value: u16,
    pub fail: bool,
    pub reads: usize,
}

impl FakeSensor {
    pub fn new(value: u16) -> Self {
        Self {
            value,
            fail: false,
            reads: 0,
        }
    }
}

impl AnalogInput for FakeSensor {
    type Error = ();

    fn read_raw(&mut self) -> Result<u16, ()> {
        self.reads += 1;
        if self.fail {
            Err(())
        } else {
            Ok(self.value)
        }
    }
}

/// Byte link with a queued receive side and recorded writes
#[derive(Default)]
pub struct FakeLink {
    pub rx: VecDeque<u8>,
    pub written: Vec<Vec<u8>>,
    pub fail_writes: bool,
    pub fail_reads: bool,
}

impl FakeLink {
    pub fn push_rx(&mut self, data: &[u8]) {
        self.rx.extend(data.iter().copied());
    }

    /// Written reports as text lines
    pub fn lines(&self) -> Vec<String> {
        self.written
            .iter()
            .map(|line| String::from_utf8_lossy(line).into_owned())
            .collect()
    }
}

impl SerialRx for FakeLink {
    type Error = ();

    fn poll_byte(&mut self) -> Result<Option<u8>, ()> {
        if self.fail_reads {
            return Err(());
        }
        Ok(self.rx.pop_front())
    }
}

impl SerialTx for FakeLink {
    type Error = ();

    fn write_bytes(&mut self, data: &[u8]) -> Result<(), ()> {
        if self.fail_writes {
            return Err(());
        }
        self.written.push(data.to_vec());
        Ok(())
    }
}
