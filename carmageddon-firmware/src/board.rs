//! Adapters from embassy-rp peripherals to the panel traits

use core::convert::Infallible;

use carmageddon_drivers::DataPin;
use carmageddon_hal::{AnalogInput, SerialRx, SerialTx};
use embassy_rp::adc::{self, Adc, Blocking, Channel};
use embassy_rp::gpio::Flex;
use embedded_hal::digital::{ErrorType, InputPin, OutputPin};
use embedded_io::{Read, ReadReady, Write};

/// Potentiometer on an ADC channel
pub struct Potentiometer<'d> {
    adc: Adc<'d, Blocking>,
    channel: Channel<'d>,
}

impl<'d> Potentiometer<'d> {
    pub fn new(adc: Adc<'d, Blocking>, channel: Channel<'d>) -> Self {
        Self { adc, channel }
    }
}

impl AnalogInput for Potentiometer<'_> {
    type Error = adc::Error;

    fn read_raw(&mut self) -> Result<u16, Self::Error> {
        self.adc.blocking_read(&mut self.channel)
    }
}

/// Non-blocking byte link over an `embedded-io` stream
///
/// Reads only when the driver reports buffered data, so `poll_byte` never
/// waits on the wire.
pub struct IoSerial<T>(pub T);

impl<T: Read + ReadReady> SerialRx for IoSerial<T> {
    type Error = T::Error;

    fn poll_byte(&mut self) -> Result<Option<u8>, Self::Error> {
        if !self.0.read_ready()? {
            return Ok(None);
        }
        let mut byte = [0u8; 1];
        match self.0.read(&mut byte)? {
            0 => Ok(None),
            _ => Ok(Some(byte[0])),
        }
    }
}

impl<T: Write> SerialTx for IoSerial<T> {
    type Error = T::Error;

    fn write_bytes(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        self.0.write_all(data)
    }
}

/// TM1638 DIO on a flexible GPIO
pub struct FlexDio<'d>(Flex<'d>);

impl<'d> FlexDio<'d> {
    pub fn new(mut pin: Flex<'d>) -> Self {
        pin.set_high();
        pin.set_as_output();
        Self(pin)
    }
}

impl ErrorType for FlexDio<'_> {
    type Error = Infallible;
}

impl OutputPin for FlexDio<'_> {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.0.set_low();
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.0.set_high();
        Ok(())
    }
}

impl InputPin for FlexDio<'_> {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.0.is_high())
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(self.0.is_low())
    }
}

impl DataPin for FlexDio<'_> {
    fn set_as_input(&mut self) {
        self.0.set_as_input();
    }

    fn set_as_output(&mut self) {
        self.0.set_as_output();
    }
}
