//! SSD1306 OLED driver
//!
//! Presents a 128x64 [`FrameBuffer`] over blocking I2C. The frame buffer's
//! page layout matches the controller's GDDRAM, so a flush is eight page
//! writes with no conversion.

use carmageddon_display::{FrameBuffer, FramePresenter, SurfaceError, PAGES, WIDTH};
use embedded_hal::i2c::I2c;

/// Default SSD1306 I2C address (0x3D with SA0 high)
pub const DEFAULT_ADDRESS: u8 = 0x3C;

/// Control byte: command stream follows
const CONTROL_COMMAND: u8 = 0x00;

/// Control byte: data stream follows
const CONTROL_DATA: u8 = 0x40;

/// SSD1306 commands
#[allow(dead_code)]
mod cmd {
    pub const DISPLAY_OFF: u8 = 0xAE;
    pub const DISPLAY_ON: u8 = 0xAF;
    pub const SET_CONTRAST: u8 = 0x81;
    pub const RESUME_RAM: u8 = 0xA4;
    pub const SET_NORMAL: u8 = 0xA6;
    pub const SET_INVERSE: u8 = 0xA7;
    pub const SET_DISPLAY_OFFSET: u8 = 0xD3;
    pub const SET_COM_PINS: u8 = 0xDA;
    pub const SET_VCOM_DETECT: u8 = 0xDB;
    pub const SET_CLOCK_DIV: u8 = 0xD5;
    pub const SET_PRECHARGE: u8 = 0xD9;
    pub const SET_MUX_RATIO: u8 = 0xA8;
    pub const SET_ADDRESSING_MODE: u8 = 0x20;
    pub const SET_LOW_COLUMN: u8 = 0x00;
    pub const SET_HIGH_COLUMN: u8 = 0x10;
    pub const SET_PAGE_ADDR: u8 = 0xB0;
    pub const SET_START_LINE: u8 = 0x40;
    pub const SEG_REMAP_OFF: u8 = 0xA0;
    pub const SEG_REMAP_ON: u8 = 0xA1;
    pub const COM_SCAN_INC: u8 = 0xC0;
    pub const COM_SCAN_DEC: u8 = 0xC8;
    pub const SET_CHARGE_PUMP: u8 = 0x8D;
    pub const DEACTIVATE_SCROLL: u8 = 0x2E;
}

/// Page addressing mode argument
const PAGE_ADDRESSING: u8 = 0x02;

/// SSD1306 errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Ssd1306Error<E> {
    /// I2C transfer failed
    Bus(E),
    /// Flush attempted before `init`
    NotInitialized,
}

/// SSD1306 OLED driver
pub struct Ssd1306<I2C> {
    i2c: I2C,
    address: u8,
    /// Mounted upside down
    rotated: bool,
    initialized: bool,
}

impl<I2C: I2c> Ssd1306<I2C> {
    /// Create a new driver; call [`init`](Self::init) before flushing
    pub fn new(i2c: I2C, address: u8, rotated: bool) -> Self {
        Self {
            i2c,
            address,
            rotated,
            initialized: false,
        }
    }

    /// Check whether `init` succeeded
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Initialize the display (internal charge pump, 128x64)
    ///
    /// Fails when the controller does not acknowledge, which is how a
    /// missing panel shows up.
    pub fn init(&mut self) -> Result<(), Ssd1306Error<I2C::Error>> {
        let (seg_remap, com_scan) = if self.rotated {
            (cmd::SEG_REMAP_OFF, cmd::COM_SCAN_INC)
        } else {
            (cmd::SEG_REMAP_ON, cmd::COM_SCAN_DEC)
        };

        let init_cmds: [u8; 25] = [
            cmd::DISPLAY_OFF,
            cmd::SET_CLOCK_DIV,
            0x80,
            cmd::SET_MUX_RATIO,
            0x3F, // 64 lines
            cmd::SET_DISPLAY_OFFSET,
            0x00,
            cmd::SET_START_LINE,
            cmd::SET_CHARGE_PUMP,
            0x14, // Enable charge pump
            cmd::SET_ADDRESSING_MODE,
            PAGE_ADDRESSING,
            seg_remap,
            com_scan,
            cmd::SET_COM_PINS,
            0x12,
            cmd::SET_CONTRAST,
            0xCF,
            cmd::SET_PRECHARGE,
            0xF1,
            cmd::SET_VCOM_DETECT,
            0x40,
            cmd::RESUME_RAM,
            cmd::SET_NORMAL,
            cmd::DEACTIVATE_SCROLL,
        ];

        self.initialized = false;
        for &c in init_cmds.iter() {
            self.command(c)?;
        }
        self.command(cmd::DISPLAY_ON)?;
        self.initialized = true;
        Ok(())
    }

    /// Send a command to the display
    fn command(&mut self, cmd: u8) -> Result<(), Ssd1306Error<I2C::Error>> {
        self.i2c
            .write(self.address, &[CONTROL_COMMAND, cmd])
            .map_err(Ssd1306Error::Bus)
    }

    /// Write the whole frame to display RAM
    pub fn flush(&mut self, frame: &FrameBuffer) -> Result<(), Ssd1306Error<I2C::Error>> {
        if !self.initialized {
            return Err(Ssd1306Error::NotInitialized);
        }

        let mut data = [0u8; WIDTH + 1];
        data[0] = CONTROL_DATA;
        for page in 0..PAGES {
            let Some(columns) = frame.page(page) else {
                break;
            };
            self.command(cmd::SET_PAGE_ADDR | page as u8)?;
            self.command(cmd::SET_LOW_COLUMN)?;
            self.command(cmd::SET_HIGH_COLUMN)?;

            data[1..].copy_from_slice(columns);
            self.i2c
                .write(self.address, &data)
                .map_err(Ssd1306Error::Bus)?;
        }

        Ok(())
    }
}

impl<I2C: I2c> FramePresenter for Ssd1306<I2C> {
    fn present(&mut self, frame: &FrameBuffer) -> Result<(), SurfaceError> {
        self.flush(frame).map_err(|e| match e {
            Ssd1306Error::Bus(_) => SurfaceError::Communication,
            Ssd1306Error::NotInitialized => SurfaceError::NotInitialized,
        })
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use carmageddon_display::{BufferedSurface, DrawSurface};
    use embedded_hal::i2c::ErrorKind;
    use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction as I2cTrans};
    use std::vec;
    use std::vec::Vec;

    fn command(c: u8) -> I2cTrans {
        I2cTrans::write(DEFAULT_ADDRESS, vec![CONTROL_COMMAND, c])
    }

    fn init_sequence(rotated: bool) -> Vec<I2cTrans> {
        let (seg, com) = if rotated { (0xA0, 0xC0) } else { (0xA1, 0xC8) };
        [
            0xAE, 0xD5, 0x80, 0xA8, 0x3F, 0xD3, 0x00, 0x40, 0x8D, 0x14, 0x20, 0x02, seg, com,
            0xDA, 0x12, 0x81, 0xCF, 0xD9, 0xF1, 0xDB, 0x40, 0xA4, 0xA6, 0x2E, 0xAF,
        ]
        .into_iter()
        .map(command)
        .collect()
    }

    fn page_write(page: u8, columns: &[u8; WIDTH]) -> Vec<I2cTrans> {
        let mut data = vec![CONTROL_DATA];
        data.extend_from_slice(columns);
        vec![
            command(0xB0 | page),
            command(0x00),
            command(0x10),
            I2cTrans::write(DEFAULT_ADDRESS, data),
        ]
    }

    #[test]
    fn test_init_sequence_rotated() {
        let expectations = init_sequence(true);
        let mut i2c = I2cMock::new(&expectations);
        let mut oled = Ssd1306::new(i2c.clone(), DEFAULT_ADDRESS, true);
        oled.init().unwrap();
        assert!(oled.is_initialized());
        i2c.done();
    }

    #[test]
    fn test_init_sequence_upright() {
        let expectations = init_sequence(false);
        let mut i2c = I2cMock::new(&expectations);
        let mut oled = Ssd1306::new(i2c.clone(), DEFAULT_ADDRESS, false);
        oled.init().unwrap();
        i2c.done();
    }

    #[test]
    fn test_init_fails_without_ack() {
        let expectations = [command(0xAE).with_error(ErrorKind::Other)];
        let mut i2c = I2cMock::new(&expectations);
        let mut oled = Ssd1306::new(i2c.clone(), DEFAULT_ADDRESS, true);
        assert_eq!(oled.init(), Err(Ssd1306Error::Bus(ErrorKind::Other)));
        assert!(!oled.is_initialized());
        i2c.done();
    }

    #[test]
    fn test_flush_before_init() {
        let mut i2c = I2cMock::new(&[]);
        let mut oled = Ssd1306::new(i2c.clone(), DEFAULT_ADDRESS, true);
        let frame = FrameBuffer::new();
        assert_eq!(oled.present(&frame), Err(SurfaceError::NotInitialized));
        i2c.done();
    }

    #[test]
    fn test_flush_writes_every_page() {
        let mut frame = FrameBuffer::new();
        frame.set_pixel(0, 0, true);
        frame.set_pixel(127, 63, true);

        let mut expectations = init_sequence(true);
        for page in 0..PAGES as u8 {
            expectations.extend(page_write(page, frame.page(page as usize).unwrap()));
        }

        let mut i2c = I2cMock::new(&expectations);
        let mut oled = Ssd1306::new(i2c.clone(), DEFAULT_ADDRESS, true);
        oled.init().unwrap();
        oled.flush(&frame).unwrap();
        i2c.done();
    }

    #[test]
    fn test_buffered_surface_presents_through_driver() {
        let mut expectations = init_sequence(true);
        let blank = [0u8; WIDTH];
        for page in 0..PAGES as u8 {
            expectations.extend(page_write(page, &blank));
        }

        let mut i2c = I2cMock::new(&expectations);
        let mut oled = Ssd1306::new(i2c.clone(), DEFAULT_ADDRESS, true);
        oled.init().unwrap();

        let mut surface = BufferedSurface::new(oled);
        surface.clear().unwrap();
        surface.present().unwrap();
        i2c.done();
    }

    #[test]
    fn test_bus_error_maps_to_communication() {
        let mut expectations = init_sequence(true);
        expectations.push(command(0xB0).with_error(ErrorKind::Other));

        let mut i2c = I2cMock::new(&expectations);
        let mut oled = Ssd1306::new(i2c.clone(), DEFAULT_ADDRESS, true);
        oled.init().unwrap();
        assert_eq!(
            oled.present(&FrameBuffer::new()),
            Err(SurfaceError::Communication)
        );
        i2c.done();
    }
}
