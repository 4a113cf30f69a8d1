//! Hardware abstraction traits
//!
//! These traits define the interface between the application logic
//! and the panel module driver.

pub mod panel;

pub use panel::{ButtonPanel, LampBank, PanelModule, SegmentDisplay, DIGIT_COUNT, LAMP_COUNT};
