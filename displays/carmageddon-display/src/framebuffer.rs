//! Frame buffer
//!
//! A 128x64 monochrome buffer in the page layout used by SSD1306-class
//! controllers: 8 pages of 128 columns, one byte per column per page,
//! bit 0 at the top of the page.

use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::text::{Baseline, Text};

use crate::surface::Bitmap;

/// Display width in pixels
pub const WIDTH: usize = 128;

/// Display height in pixels
pub const HEIGHT: usize = 64;

/// Number of 8-pixel pages
pub const PAGES: usize = HEIGHT / 8;

/// Horizontal advance of one glyph in pixels
pub const GLYPH_WIDTH: u8 = 6;

/// Monochrome frame buffer
#[derive(Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    pages: [[u8; WIDTH]; PAGES],
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameBuffer {
    /// Create a blank frame
    pub const fn new() -> Self {
        Self {
            pages: [[0; WIDTH]; PAGES],
        }
    }

    /// Clear every pixel
    pub fn clear(&mut self) {
        for page in self.pages.iter_mut() {
            page.fill(0);
        }
    }

    /// Set or clear one pixel; coordinates off the frame are ignored
    pub fn set_pixel(&mut self, x: i32, y: i32, on: bool) {
        if x < 0 || y < 0 || x >= WIDTH as i32 || y >= HEIGHT as i32 {
            return;
        }
        let (x, y) = (x as usize, y as usize);
        let bit = 1u8 << (y % 8);
        if on {
            self.pages[y / 8][x] |= bit;
        } else {
            self.pages[y / 8][x] &= !bit;
        }
    }

    /// Read one pixel; coordinates off the frame read as clear
    pub fn pixel(&self, x: i32, y: i32) -> bool {
        if x < 0 || y < 0 || x >= WIDTH as i32 || y >= HEIGHT as i32 {
            return false;
        }
        let (x, y) = (x as usize, y as usize);
        self.pages[y / 8][x] & (1 << (y % 8)) != 0
    }

    /// Raw bytes of one page
    pub fn page(&self, page: usize) -> Option<&[u8; WIDTH]> {
        self.pages.get(page)
    }

    /// Number of lit pixels
    pub fn lit_pixels(&self) -> u32 {
        self.pages
            .iter()
            .flat_map(|page| page.iter())
            .map(|byte| byte.count_ones())
            .sum()
    }

    /// Draw text with its top-left corner at (`x`, `y`)
    ///
    /// Returns the x coordinate just past the last glyph.
    pub fn draw_text(&mut self, x: i32, y: i32, text: &str) -> i32 {
        let style = MonoTextStyle::new(&FONT_6X10, BinaryColor::On);
        match Text::with_baseline(text, Point::new(x, y), style, Baseline::Top).draw(self) {
            Ok(next) => next.x,
            Err(never) => match never {},
        }
    }

    /// Draw the set pixels of `bitmap` with its top-left corner at (`x`, `y`)
    pub fn blit(&mut self, x: i32, y: i32, bitmap: &Bitmap<'_>) {
        for row in 0..bitmap.height() {
            for col in 0..bitmap.width() {
                if bitmap.is_set(col, row) {
                    self.set_pixel(x + col as i32, y + row as i32, true);
                }
            }
        }
    }
}

impl OriginDimensions for FrameBuffer {
    fn size(&self) -> Size {
        Size::new(WIDTH as u32, HEIGHT as u32)
    }
}

impl DrawTarget for FrameBuffer {
    type Color = BinaryColor;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            self.set_pixel(point.x, point.y, color.is_on());
        }
        Ok(())
    }
}

impl core::fmt::Debug for FrameBuffer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FrameBuffer")
            .field("lit_pixels", &self.lit_pixels())
            .finish()
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for FrameBuffer {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "FrameBuffer[{} lit]", self.lit_pixels());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_page_layout() {
        let mut fb = FrameBuffer::new();
        fb.set_pixel(3, 0, true);
        fb.set_pixel(3, 9, true);
        assert_eq!(fb.page(0).unwrap()[3], 0b0000_0001);
        assert_eq!(fb.page(1).unwrap()[3], 0b0000_0010);
        assert!(fb.pixel(3, 9));

        fb.set_pixel(3, 9, false);
        assert!(!fb.pixel(3, 9));
        assert_eq!(fb.lit_pixels(), 1);
    }

    #[test]
    fn test_out_of_bounds_ignored() {
        let mut fb = FrameBuffer::new();
        fb.set_pixel(-1, 0, true);
        fb.set_pixel(0, HEIGHT as i32, true);
        fb.set_pixel(WIDTH as i32, 5, true);
        assert_eq!(fb.lit_pixels(), 0);
        assert!(!fb.pixel(-3, -3));
    }

    #[test]
    fn test_blit_only_sets_lit_pixels() {
        let mut fb = FrameBuffer::new();
        fb.set_pixel(1, 0, true); // under a clear bitmap pixel
        let data = [0b1000_0000u8, 0b0100_0000];
        fb.blit(0, 0, &Bitmap::new(&data, 2, 2));

        assert!(fb.pixel(0, 0));
        assert!(fb.pixel(1, 0)); // untouched
        assert!(!fb.pixel(0, 1));
        assert!(fb.pixel(1, 1));
        assert_eq!(fb.lit_pixels(), 3);
    }

    #[test]
    fn test_blit_clips_at_edges() {
        let mut fb = FrameBuffer::new();
        let data = [0xFFu8; 2];
        fb.blit(WIDTH as i32 - 4, HEIGHT as i32 - 1, &Bitmap::new(&data, 8, 2));
        assert_eq!(fb.lit_pixels(), 4);
    }

    #[test]
    fn test_draw_text_advances_by_glyph_width() {
        let mut fb = FrameBuffer::new();
        let end = fb.draw_text(10, 20, "x12");
        assert_eq!(end, 10 + 3 * GLYPH_WIDTH as i32);
        assert!(fb.lit_pixels() > 0);

        // Nothing drawn above or left of the origin
        for x in 0..WIDTH as i32 {
            for y in 0..20 {
                assert!(!fb.pixel(x, y));
            }
        }
        for y in 0..HEIGHT as i32 {
            for x in 0..10 {
                assert!(!fb.pixel(x, y));
            }
        }
    }

    #[test]
    fn test_clear() {
        let mut fb = FrameBuffer::new();
        fb.draw_text(0, 0, "TOY");
        fb.clear();
        assert_eq!(fb, FrameBuffer::new());
    }
}
