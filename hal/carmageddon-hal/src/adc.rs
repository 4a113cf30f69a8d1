//! Analog input abstractions
//!
//! The throttle on the panel is a plain potentiometer on an ADC pin.

/// Single-ended analog input channel
///
/// Implementations perform one conversion per call. The returned value is in
/// the channel's native range (e.g. 0..=4095 for a 12-bit converter) unless
/// the implementation documents a rescale.
pub trait AnalogInput {
    /// Error type for conversions
    type Error;

    /// Sample the channel once
    fn read_raw(&mut self) -> Result<u16, Self::Error>;
}

/// Analog input with its resolution reduced by a right shift
///
/// Lets a 12-bit converter report in the 10-bit range a remote peer expects.
#[derive(Debug)]
pub struct Rescaled<A> {
    inner: A,
    shift: u8,
}

impl<A: AnalogInput> Rescaled<A> {
    /// Wrap `inner`, dropping the `shift` least significant bits of every sample
    pub fn new(inner: A, shift: u8) -> Self {
        Self {
            inner,
            shift: shift.min(15),
        }
    }

    /// Get access to the wrapped input
    pub fn inner(&self) -> &A {
        &self.inner
    }
}

impl<A: AnalogInput> AnalogInput for Rescaled<A> {
    type Error = A::Error;

    fn read_raw(&mut self) -> Result<u16, Self::Error> {
        self.inner.read_raw().map(|v| v >> self.shift)
    }
}
