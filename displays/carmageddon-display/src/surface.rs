//! Drawing surface trait
//!
//! Defines the interface the renderer draws through.

/// Surface errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SurfaceError {
    /// Communication error with the panel
    Communication,
    /// Panel not initialized
    NotInitialized,
    /// Drawing data does not describe a valid image
    InvalidBitmap,
}

/// Monochrome sprite
///
/// Rows are packed MSB-first and padded to whole bytes, the layout used by
/// most 1-bit bitmap tooling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bitmap<'a> {
    data: &'a [u8],
    width: u16,
    height: u16,
}

impl<'a> Bitmap<'a> {
    /// Wrap packed bitmap data
    pub const fn new(data: &'a [u8], width: u16, height: u16) -> Self {
        Self {
            data,
            width,
            height,
        }
    }

    /// Width in pixels
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Height in pixels
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// Bytes per packed row
    pub const fn row_bytes(&self) -> usize {
        (self.width as usize + 7) / 8
    }

    /// Returns true if `data` holds every row
    pub fn is_complete(&self) -> bool {
        self.data.len() >= self.row_bytes() * self.height as usize
    }

    /// Check whether the pixel at (`x`, `y`) is set
    ///
    /// Out-of-range coordinates read as clear.
    pub fn is_set(&self, x: u16, y: u16) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        let index = y as usize * self.row_bytes() + x as usize / 8;
        self.data
            .get(index)
            .map(|byte| byte & (0x80 >> (x % 8)) != 0)
            .unwrap_or(false)
    }
}

/// Drawing surface
///
/// Everything except [`present`](DrawSurface::present) only mutates an
/// off-screen buffer; `present` is the single externally visible operation.
pub trait DrawSurface {
    /// Clear the draw buffer
    fn clear(&mut self) -> Result<(), SurfaceError>;

    /// Move the text cursor to pixel (`x`, `y`), top-left of the next glyph
    fn set_text_origin(&mut self, x: i32, y: i32);

    /// Draw text at the cursor and advance it past the text
    fn draw_text(&mut self, text: &str) -> Result<(), SurfaceError>;

    /// Draw the set pixels of `bitmap` with its top-left corner at (`x`, `y`)
    ///
    /// Clear pixels of the bitmap leave the buffer untouched.
    fn draw_bitmap(&mut self, x: i32, y: i32, bitmap: &Bitmap<'_>) -> Result<(), SurfaceError>;

    /// Push the draw buffer to the physical display
    fn present(&mut self) -> Result<(), SurfaceError>;

    /// Get the surface dimensions
    ///
    /// Returns (width, height) in pixels
    fn dimensions(&self) -> (u16, u16);
}

#[cfg(test)]
mod tests {
    use super::*;

    const ARROW: [u8; 4] = [0b1000_0000, 0b1000_0000, 0b0100_0000, 0b0000_0000];

    #[test]
    fn test_bitmap_bit_order() {
        let bmp = Bitmap::new(&ARROW, 9, 2);
        assert_eq!(bmp.row_bytes(), 2);
        assert!(bmp.is_set(0, 0));
        assert!(!bmp.is_set(1, 0));
        assert!(bmp.is_set(8, 0)); // MSB of the second byte
        assert!(bmp.is_set(1, 1));
        assert!(!bmp.is_set(8, 1));
    }

    #[test]
    fn test_bitmap_out_of_range_reads_clear() {
        let bmp = Bitmap::new(&ARROW, 9, 2);
        assert!(!bmp.is_set(9, 0));
        assert!(!bmp.is_set(0, 2));
    }

    #[test]
    fn test_bitmap_short_data() {
        let bmp = Bitmap::new(&ARROW[..3], 9, 2);
        assert!(!bmp.is_complete());
        assert!(!bmp.is_set(8, 1));
    }
}
