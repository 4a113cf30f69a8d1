//! Synchronization loop
//!
//! Mirrors vehicle state from the simulation onto the panel and reports the
//! panel's inputs back. One call to [`SyncLoop::tick`] does at most one pass:
//!
//! ```text
//! sample ──► inbound line ──► render ──► digits ──► lamps ──► send gate
//! ```

mod report;
mod sync_loop;

pub use report::{InboundOutcome, SendOutcome, StartupReport, TickReport};
pub use sync_loop::{SyncLoop, MAX_BYTES_PER_TICK};
