//! Display abstraction and frame buffer for the control panel OLED
//!
//! This crate provides:
//! - `DrawSurface` trait: the drawing contract the panel renderer targets
//! - `Bitmap`: 1 bit-per-pixel, MSB-first, row-major sprite data
//! - `FrameBuffer`: a 128x64 monochrome buffer organised in 8-pixel pages
//! - `BufferedSurface`: a `DrawSurface` that draws into a `FrameBuffer` and
//!   hands it to a `FramePresenter` (the panel driver) on `present()`
//!
//! # Architecture
//!
//! All drawing calls mutate the frame buffer only. Nothing reaches the glass
//! until `present()`, so a half-drawn frame is never visible.

#![no_std]
#![deny(unsafe_code)]

pub mod buffered;
pub mod framebuffer;
pub mod surface;

// Re-export key types
pub use buffered::{BufferedSurface, FramePresenter};
pub use framebuffer::{FrameBuffer, GLYPH_WIDTH, HEIGHT, PAGES, WIDTH};
pub use surface::{Bitmap, DrawSurface, SurfaceError};
