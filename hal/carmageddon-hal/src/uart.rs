//! UART serial communication abstractions
//!
//! The link to the simulation is a plain byte stream. Both halves are
//! non-blocking: the sync loop polls them from inside a tick and must never
//! wait on the wire.

/// Serial receiver
pub trait SerialRx {
    /// Error type for receive operations
    type Error;

    /// Take the next received byte, if one is buffered
    ///
    /// Returns `Ok(None)` immediately when nothing is pending.
    fn poll_byte(&mut self) -> Result<Option<u8>, Self::Error>;
}

/// Serial transmitter
pub trait SerialTx {
    /// Error type for transmit operations
    type Error;

    /// Queue `data` for transmission
    ///
    /// Either the whole slice is accepted or an error is returned.
    fn write_bytes(&mut self, data: &[u8]) -> Result<(), Self::Error>;
}

/// Combined serial interface
///
/// For UARTs that provide both TX and RX on a single peripheral.
pub trait Serial: SerialRx + SerialTx {}

// Blanket implementation
impl<T: SerialRx + SerialTx> Serial for T {}

/// Link speed used by the simulation side
pub const LINK_BAUDRATE: u32 = 115_200;
