//! Configuration types
//!
//! Board-agnostic configuration. The firmware generates a `PanelConfig`
//! constant from `panel.toml` at build time.

pub mod types;

pub use types::*;
