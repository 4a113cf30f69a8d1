//! Per-tick outcome reports for logging

use carmageddon_protocol::{InboundMessage, OutboundReport, ParseError};

use crate::render::RenderOutcome;

/// What happened to inbound data during a tick
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InboundOutcome {
    /// No complete line arrived
    Idle,
    /// A line was parsed and applied to the vehicle state
    Applied(InboundMessage),
    /// A line was discarded
    Rejected(ParseError),
    /// The link reported a receive error
    LinkError,
}

/// What the send gate decided during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SendOutcome {
    /// Send interval has not elapsed
    NotDue,
    /// No sensor sample available yet
    NoSample,
    /// Inputs equal the last sent report
    Unchanged,
    /// Report written to the link
    Sent(OutboundReport),
    /// Report did not fit the outbound line buffer
    EncodeFailed,
    /// The link refused the report; it will be retried
    LinkError,
}

/// Summary of one executed tick
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TickReport {
    pub inbound: InboundOutcome,
    pub render: RenderOutcome,
    /// 7-segment digits were rewritten
    pub readout_written: bool,
    /// Lamp bank was rewritten
    pub lamps_refreshed: bool,
    pub send: SendOutcome,
}

/// Hardware found by [`SyncLoop::begin`](super::SyncLoop::begin)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StartupReport {
    /// Surface attached; `Some` holds the blanking result
    pub surface: Option<Result<(), carmageddon_display::SurfaceError>>,
    /// Panel module attached
    pub panel: bool,
}

impl StartupReport {
    /// Check whether the OLED came up blank and ready
    pub fn surface_ready(&self) -> bool {
        matches!(self.surface, Some(Ok(())))
    }
}
