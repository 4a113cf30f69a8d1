//! Panel ⇄ simulation line protocol
//!
//! The control panel and the simulation exchange newline-terminated ASCII
//! records over a UART:
//!
//! ```text
//! simulation → panel:  "<speed>,<collectibles>\n"   e.g. "14.5,8\n"
//! panel → simulation:  "<sensor>,<buttons>\n"       e.g. "512,9\n"
//! ```
//!
//! There is no handshake and no retransmission. A line that fails to parse
//! is dropped whole; nothing is ever applied from a partial record.

#![no_std]
#![deny(unsafe_code)]

pub mod buttons;
pub mod line;
pub mod messages;

pub use buttons::ButtonMask;
pub use line::{LineAssembler, MAX_LINE_LEN};
pub use messages::{
    format_outbound, parse_inbound, EncodeError, InboundMessage, OutboundReport, ParseError,
    MAX_OUTBOUND_LEN,
};
