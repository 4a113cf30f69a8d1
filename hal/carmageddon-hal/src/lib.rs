//! Carmageddon Hardware Abstraction Layer
//!
//! This crate defines the low-level hardware traits the control panel core
//! consumes. Chip-specific glue (the RP2040 firmware, host test fakes)
//! implements them; the core never touches a register.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  carmageddon-core (sync loop, renderer) │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  carmageddon-hal (this crate - traits)  │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │   firmware    │       │  test fakes   │
//! │   (RP2040)    │       │    (host)     │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`adc::AnalogInput`] - Throttle potentiometer sampling
//! - [`uart::SerialRx`], [`uart::SerialTx`] - Non-blocking byte stream to the simulation

#![no_std]
#![deny(unsafe_code)]

pub mod adc;
pub mod uart;

// Re-export key traits at crate root for convenience
pub use adc::AnalogInput;
pub use uart::{Serial, SerialRx, SerialTx};
