//! Frame-buffered drawing surface
//!
//! Drawing goes into a local [`FrameBuffer`]; a [`FramePresenter`] (the
//! panel driver) only sees complete frames.

use crate::framebuffer::{FrameBuffer, HEIGHT, WIDTH};
use crate::surface::{Bitmap, DrawSurface, SurfaceError};

/// Sink for complete frames
///
/// Implemented by panel drivers; `present` transfers the whole frame.
pub trait FramePresenter {
    /// Transfer `frame` to the panel
    fn present(&mut self, frame: &FrameBuffer) -> Result<(), SurfaceError>;
}

/// Drawing surface backed by a frame buffer
pub struct BufferedSurface<P> {
    presenter: P,
    frame: FrameBuffer,
    cursor: (i32, i32),
}

impl<P: FramePresenter> BufferedSurface<P> {
    /// Create a new surface around an initialized presenter
    pub fn new(presenter: P) -> Self {
        Self {
            presenter,
            frame: FrameBuffer::new(),
            cursor: (0, 0),
        }
    }

    /// Current contents of the draw buffer
    pub fn frame(&self) -> &FrameBuffer {
        &self.frame
    }

    /// Get access to the underlying presenter
    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    /// Get mutable access to the underlying presenter
    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    /// Current text cursor
    pub fn cursor(&self) -> (i32, i32) {
        self.cursor
    }
}

impl<P: FramePresenter> DrawSurface for BufferedSurface<P> {
    fn clear(&mut self) -> Result<(), SurfaceError> {
        self.frame.clear();
        Ok(())
    }

    fn set_text_origin(&mut self, x: i32, y: i32) {
        self.cursor = (x, y);
    }

    fn draw_text(&mut self, text: &str) -> Result<(), SurfaceError> {
        let (x, y) = self.cursor;
        self.cursor.0 = self.frame.draw_text(x, y, text);
        Ok(())
    }

    fn draw_bitmap(&mut self, x: i32, y: i32, bitmap: &Bitmap<'_>) -> Result<(), SurfaceError> {
        if !bitmap.is_complete() {
            return Err(SurfaceError::InvalidBitmap);
        }
        self.frame.blit(x, y, bitmap);
        Ok(())
    }

    fn present(&mut self) -> Result<(), SurfaceError> {
        self.presenter.present(&self.frame)
    }

    fn dimensions(&self) -> (u16, u16) {
        (WIDTH as u16, HEIGHT as u16)
    }
}
