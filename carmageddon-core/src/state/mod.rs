//! Vehicle state
//!
//! The values mirrored from the simulation and the bookkeeping that decides
//! when the OLED needs a redraw.

mod vehicle;

pub use vehicle::{RenderMark, VehicleState, MAX_COLLECTIBLES, MAX_SPEED, SPEED_EPSILON};
