//! Board-agnostic core logic for the control panel firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Panel traits (lamps, buttons, 7-segment digits)
//! - Vehicle state with render-dirty tracking
//! - OLED panel renderer
//! - Lamp and segment readout adapters
//! - Interval throttles
//! - The synchronization loop tying the link to the panel
//! - Configuration type definitions

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod output;
pub mod render;
pub mod state;
pub mod sync;
pub mod timing;
pub mod traits;
