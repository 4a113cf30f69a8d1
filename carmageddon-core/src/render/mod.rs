//! OLED panel rendering

mod panel;

pub use panel::{
    centered_x, render, RenderOutcome, COUNT_Y, HEART, HEART_HEIGHT, HEART_WIDTH, TITLE_LINES,
};
