//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in carmageddon-core and carmageddon-display:
//!
//! - TM1638 LED&KEY module (8 lamps, 8 buttons, 8 7-segment digits)
//! - SSD1306 128x64 OLED over I2C

#![no_std]
#![deny(unsafe_code)]

pub mod ssd1306;
pub mod tm1638;

pub use ssd1306::{Ssd1306, Ssd1306Error};
pub use tm1638::{DataPin, Tm1638, Tm1638Error};
