//! Panel layout and dirty-gated rendering
//!
//! Layout (128x64):
//!
//! ```text
//! ♥        x<count>        ♥   y=0..12
//!             TOY              y=18
//!         CARMAGEDDON!         y=30
//! ♥         <speed>        ♥   y=height-12
//! ```

use core::fmt::Write;

use carmageddon_display::{Bitmap, DrawSurface, SurfaceError, GLYPH_WIDTH};
use heapless::String;

use crate::state::VehicleState;

/// Title lines and their top rows
pub const TITLE_LINES: [(&str, i32); 2] = [("TOY", 18), ("CARMAGEDDON!", 30)];

/// Top row of the collectible counter
pub const COUNT_Y: i32 = 2;

/// Distance of the speed line's top from the bottom edge
const SPEED_BOTTOM_OFFSET: i32 = 12;

/// Heart sprite size
pub const HEART_WIDTH: u16 = 16;
pub const HEART_HEIGHT: u16 = 12;

/// Heart sprite, MSB-first rows
#[rustfmt::skip]
pub const HEART: [u8; 24] = [
    0b0001_1110, 0b0111_1000,
    0b0011_1111, 0b1111_1100,
    0b0111_1111, 0b1111_1110,
    0b1111_1111, 0b1111_1111,
    0b1111_1111, 0b1111_1111,
    0b0111_1111, 0b1111_1110,
    0b0011_1111, 0b1111_1100,
    0b0001_1111, 0b1111_1000,
    0b0000_1111, 0b1111_0000,
    0b0000_0111, 0b1110_0000,
    0b0000_0011, 0b1100_0000,
    0b0000_0001, 0b1000_0000,
];

/// What a render call did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RenderOutcome {
    /// No display attached
    NoSurface,
    /// Display already shows the current values
    Skipped,
    /// New frame presented and committed
    Drawn,
    /// Drawing failed; the state stays dirty
    Failed(SurfaceError),
}

/// Left edge that centres `len` glyphs across `surface_width`
///
/// Text wider than the surface yields a negative origin.
pub fn centered_x(surface_width: u16, len: usize) -> i32 {
    (surface_width as i32 - (len * GLYPH_WIDTH as usize) as i32) / 2
}

/// Redraw the panel when `state` changed since the last completed render
pub fn render<S: DrawSurface>(surface: Option<&mut S>, state: &mut VehicleState) -> RenderOutcome {
    let Some(surface) = surface else {
        return RenderOutcome::NoSurface;
    };
    if !state.is_dirty() {
        return RenderOutcome::Skipped;
    }

    match draw_frame(surface, state) {
        Ok(()) => {
            state.commit_rendered();
            RenderOutcome::Drawn
        }
        Err(e) => RenderOutcome::Failed(e),
    }
}

fn draw_frame<S: DrawSurface>(surface: &mut S, state: &VehicleState) -> Result<(), SurfaceError> {
    let (width, height) = surface.dimensions();
    surface.clear()?;

    for (text, y) in TITLE_LINES {
        draw_centered(surface, width, y, text)?;
    }

    // Clamped values: "999.0" and "x255" are the longest possible
    let mut text: String<8> = String::new();
    let _ = write!(text, "{:.1}", state.speed());
    draw_centered(surface, width, height as i32 - SPEED_BOTTOM_OFFSET, &text)?;

    text.clear();
    let _ = write!(text, "x{}", state.collectible_count());
    draw_centered(surface, width, COUNT_Y, &text)?;

    draw_hearts(surface, width, height)?;
    surface.present()
}

fn draw_centered<S: DrawSurface>(
    surface: &mut S,
    width: u16,
    y: i32,
    text: &str,
) -> Result<(), SurfaceError> {
    surface.set_text_origin(centered_x(width, text.len()), y);
    surface.draw_text(text)
}

fn draw_hearts<S: DrawSurface>(surface: &mut S, width: u16, height: u16) -> Result<(), SurfaceError> {
    let heart = Bitmap::new(&HEART, HEART_WIDTH, HEART_HEIGHT);
    let right = width as i32 - HEART_WIDTH as i32;
    let bottom = height as i32 - HEART_HEIGHT as i32;
    for (x, y) in [(0, 0), (right, 0), (0, bottom), (right, bottom)] {
        surface.draw_bitmap(x, y, &heart)?;
    }
    Ok(())
}
