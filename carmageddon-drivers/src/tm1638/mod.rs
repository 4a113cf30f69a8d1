//! TM1638 LED&KEY module driver
//!
//! The TM1638 talks a 3-wire serial protocol: STB frames a transfer, CLK is
//! idle high and data is sampled on its rising edge, DIO is bidirectional.
//! Bytes travel LSB first.
//!
//! # Address map
//!
//! Display RAM holds 16 bytes. Even addresses drive the 7-segment digits,
//! odd addresses the indicator lamp next to each digit:
//!
//! ```text
//! 0xC0 digit 0 | 0xC1 lamp 0 | 0xC2 digit 1 | 0xC3 lamp 1 | ... | 0xCF lamp 7
//! ```

mod font;

pub use font::{segments, SEG_DP};

use carmageddon_core::traits::{ButtonPanel, LampBank, SegmentDisplay, DIGIT_COUNT, LAMP_COUNT};
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin};

/// TM1638 commands
mod cmd {
    /// Data command: write, auto-increment address
    pub const WRITE_AUTO: u8 = 0x40;
    /// Data command: read key scan data
    pub const READ_KEYS: u8 = 0x42;
    /// Data command: write, fixed address
    pub const WRITE_FIXED: u8 = 0x44;
    /// Display control: display on, OR in brightness 0-7
    pub const DISPLAY_ON: u8 = 0x88;
    /// Address command base
    pub const ADDRESS: u8 = 0xC0;
}

/// Bytes of display RAM
const RAM_SIZE: usize = 16;

/// Bytes of key scan data
const KEY_BYTES: u32 = 4;

/// Half clock period; the chip allows 1 MHz
const HALF_PERIOD_NS: u32 = 1_000;

/// TM1638 errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Tm1638Error {
    /// A pin could not be driven or read
    Pin,
    /// Brightness above 7
    InvalidBrightness,
}

/// Bidirectional data pin
///
/// DIO is driven by the host except while key data is clocked in.
pub trait DataPin: OutputPin + InputPin {
    /// Release the line so the module can drive it
    fn set_as_input(&mut self);

    /// Drive the line from the host
    fn set_as_output(&mut self);
}

/// TM1638 driver
pub struct Tm1638<STB, CLK, DIO, D> {
    stb: STB,
    clk: CLK,
    dio: DIO,
    delay: D,
}

impl<STB, CLK, DIO, D> Tm1638<STB, CLK, DIO, D>
where
    STB: OutputPin,
    CLK: OutputPin,
    DIO: DataPin,
    D: DelayNs,
{
    /// Create a new driver; call [`init`](Self::init) before use
    pub fn new(stb: STB, clk: CLK, dio: DIO, delay: D) -> Self {
        Self {
            stb,
            clk,
            dio,
            delay,
        }
    }

    /// Blank every digit and lamp, then switch the display on
    pub fn init(&mut self, brightness: u8) -> Result<(), Tm1638Error> {
        self.stb.set_high().map_err(|_| Tm1638Error::Pin)?;
        self.clk.set_high().map_err(|_| Tm1638Error::Pin)?;
        self.dio.set_as_output();
        self.clear()?;
        self.set_brightness(brightness)
    }

    /// Set brightness (0-7) and switch the display on
    pub fn set_brightness(&mut self, brightness: u8) -> Result<(), Tm1638Error> {
        if brightness > 7 {
            return Err(Tm1638Error::InvalidBrightness);
        }
        self.send_command(cmd::DISPLAY_ON | brightness)
    }

    /// Zero the whole display RAM
    pub fn clear(&mut self) -> Result<(), Tm1638Error> {
        self.send_command(cmd::WRITE_AUTO)?;
        self.begin_frame()?;
        self.shift_out(cmd::ADDRESS)?;
        for _ in 0..RAM_SIZE {
            self.shift_out(0)?;
        }
        self.end_frame()
    }

    /// Write a raw segment pattern to digit `position`
    pub fn write_segments(&mut self, position: u8, pattern: u8) -> Result<(), Tm1638Error> {
        if position >= DIGIT_COUNT {
            return Ok(());
        }
        self.write_fixed(cmd::ADDRESS + (position << 1), pattern)
    }

    /// Show `ascii` on digit `position`
    pub fn write_char(&mut self, position: u8, ascii: u8, dot: bool) -> Result<(), Tm1638Error> {
        let pattern = segments(ascii) | if dot { SEG_DP } else { 0 };
        self.write_segments(position, pattern)
    }

    /// Switch lamp `index`
    pub fn write_lamp(&mut self, index: u8, on: bool) -> Result<(), Tm1638Error> {
        if index >= LAMP_COUNT {
            return Ok(());
        }
        self.write_fixed(cmd::ADDRESS + (index << 1) + 1, on as u8)
    }

    /// Scan the keys
    ///
    /// The four scan bytes each carry two keys; shifting byte `i` left by
    /// `i` folds them into one mask with S1 in bit 0 and S8 in bit 7.
    pub fn read_keys(&mut self) -> Result<u32, Tm1638Error> {
        self.begin_frame()?;
        self.shift_out(cmd::READ_KEYS)?;
        self.dio.set_as_input();
        self.delay.delay_ns(HALF_PERIOD_NS);

        let mut keys = 0u32;
        let mut result = Ok(());
        for i in 0..KEY_BYTES {
            match self.shift_in() {
                Ok(byte) => keys |= (byte as u32) << i,
                Err(e) => {
                    result = Err(e);
                    break;
                }
            }
        }

        // Take the line back and close the frame even after a failed read
        self.dio.set_as_output();
        let closed = self.end_frame();
        result?;
        closed?;
        Ok(keys)
    }

    /// Fixed-address write of one RAM byte
    fn write_fixed(&mut self, address: u8, value: u8) -> Result<(), Tm1638Error> {
        self.send_command(cmd::WRITE_FIXED)?;
        self.begin_frame()?;
        self.shift_out(address)?;
        self.shift_out(value)?;
        self.end_frame()
    }

    /// Send a single-byte command in its own frame
    fn send_command(&mut self, command: u8) -> Result<(), Tm1638Error> {
        self.begin_frame()?;
        self.shift_out(command)?;
        self.end_frame()
    }

    fn begin_frame(&mut self) -> Result<(), Tm1638Error> {
        self.stb.set_low().map_err(|_| Tm1638Error::Pin)?;
        self.delay.delay_ns(HALF_PERIOD_NS);
        Ok(())
    }

    fn end_frame(&mut self) -> Result<(), Tm1638Error> {
        self.stb.set_high().map_err(|_| Tm1638Error::Pin)?;
        self.delay.delay_ns(HALF_PERIOD_NS);
        Ok(())
    }

    fn shift_out(&mut self, byte: u8) -> Result<(), Tm1638Error> {
        for bit in 0..8 {
            self.clk.set_low().map_err(|_| Tm1638Error::Pin)?;
            if byte & (1 << bit) != 0 {
                self.dio.set_high().map_err(|_| Tm1638Error::Pin)?;
            } else {
                self.dio.set_low().map_err(|_| Tm1638Error::Pin)?;
            }
            self.delay.delay_ns(HALF_PERIOD_NS);
            self.clk.set_high().map_err(|_| Tm1638Error::Pin)?;
            self.delay.delay_ns(HALF_PERIOD_NS);
        }
        Ok(())
    }

    fn shift_in(&mut self) -> Result<u8, Tm1638Error> {
        let mut byte = 0u8;
        for bit in 0..8 {
            self.clk.set_low().map_err(|_| Tm1638Error::Pin)?;
            self.delay.delay_ns(HALF_PERIOD_NS);
            if self.dio.is_high().map_err(|_| Tm1638Error::Pin)? {
                byte |= 1 << bit;
            }
            self.clk.set_high().map_err(|_| Tm1638Error::Pin)?;
            self.delay.delay_ns(HALF_PERIOD_NS);
        }
        Ok(byte)
    }
}

// The panel traits are infallible, so pin errors stop here.

impl<STB, CLK, DIO, D> LampBank for Tm1638<STB, CLK, DIO, D>
where
    STB: OutputPin,
    CLK: OutputPin,
    DIO: DataPin,
    D: DelayNs,
{
    fn set_lamp(&mut self, index: u8, on: bool) {
        let _ = self.write_lamp(index, on);
    }
}

impl<STB, CLK, DIO, D> SegmentDisplay for Tm1638<STB, CLK, DIO, D>
where
    STB: OutputPin,
    CLK: OutputPin,
    DIO: DataPin,
    D: DelayNs,
{
    fn set_digit(&mut self, position: u8, ascii: u8, dot: bool) {
        let _ = self.write_char(position, ascii, dot);
    }
}

impl<STB, CLK, DIO, D> ButtonPanel for Tm1638<STB, CLK, DIO, D>
where
    STB: OutputPin,
    CLK: OutputPin,
    DIO: DataPin,
    D: DelayNs,
{
    fn read_buttons(&mut self) -> u32 {
        self.read_keys().unwrap_or(0)
    }
}
