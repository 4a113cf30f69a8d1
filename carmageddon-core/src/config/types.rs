//! Configuration type definitions

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Highest TM1638 brightness step
pub const MAX_BRIGHTNESS: u8 = 7;

/// Largest ADC shift that still leaves one bit of resolution
pub const MAX_SENSOR_SHIFT: u8 = 15;

/// Configuration validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// A timing interval is zero
    ZeroInterval,
    /// Send interval is shorter than the tick interval
    SendFasterThanTick,
    /// Sensor shift exceeds the reading width
    SensorShiftTooLarge,
    /// I2C address outside the 7-bit range
    InvalidI2cAddress,
    /// Brightness above the module maximum
    BrightnessOutOfRange,
}

/// Loop cadences
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TimingConfig {
    /// Minimum time between loop ticks (ms)
    pub tick_interval_ms: u32,
    /// Minimum time between outbound reports (ms)
    pub send_interval_ms: u32,
    /// Minimum time between lamp bank refreshes (ms)
    pub lamp_interval_ms: u32,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 50,
            send_interval_ms: 50,
            lamp_interval_ms: 1000,
        }
    }
}

/// Throttle sensor scaling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SensorConfig {
    /// Right shift applied to raw ADC readings
    ///
    /// The simulation expects 0..1023; a 12-bit ADC needs a shift of 2.
    pub shift: u8,
}

impl Default for SensorConfig {
    fn default() -> Self {
        Self { shift: 2 }
    }
}

/// OLED panel settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DisplayConfig {
    /// 7-bit I2C address
    pub i2c_address: u8,
    /// Mount the panel upside down (180°)
    pub rotated: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            i2c_address: 0x3C,
            rotated: true,
        }
    }
}

/// 7-segment module settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SegmentConfig {
    /// Brightness step, 0 (dimmest) to 7
    pub brightness: u8,
}

impl Default for SegmentConfig {
    fn default() -> Self {
        Self {
            brightness: MAX_BRIGHTNESS,
        }
    }
}

/// Complete panel configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PanelConfig {
    pub timing: TimingConfig,
    pub sensor: SensorConfig,
    pub display: DisplayConfig,
    pub segment: SegmentConfig,
}

impl PanelConfig {
    /// Check the configuration for values the hardware cannot honour
    pub fn validate(&self) -> Result<(), ConfigError> {
        let timing = &self.timing;
        if timing.tick_interval_ms == 0 || timing.send_interval_ms == 0 || timing.lamp_interval_ms == 0
        {
            return Err(ConfigError::ZeroInterval);
        }
        if timing.send_interval_ms < timing.tick_interval_ms {
            return Err(ConfigError::SendFasterThanTick);
        }
        if self.sensor.shift > MAX_SENSOR_SHIFT {
            return Err(ConfigError::SensorShiftTooLarge);
        }
        if self.display.i2c_address > 0x7F {
            return Err(ConfigError::InvalidI2cAddress);
        }
        if self.segment.brightness > MAX_BRIGHTNESS {
            return Err(ConfigError::BrightnessOutOfRange);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = PanelConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.timing.tick_interval_ms, 50);
        assert_eq!(config.timing.lamp_interval_ms, 1000);
        assert_eq!(config.sensor.shift, 2);
        assert_eq!(config.display.i2c_address, 0x3C);
    }

    #[test]
    fn test_zero_interval_rejected() {
        let mut config = PanelConfig::default();
        config.timing.lamp_interval_ms = 0;
        assert_eq!(config.validate(), Err(ConfigError::ZeroInterval));
    }

    #[test]
    fn test_send_faster_than_tick_rejected() {
        let mut config = PanelConfig::default();
        config.timing.send_interval_ms = 20;
        assert_eq!(config.validate(), Err(ConfigError::SendFasterThanTick));
    }

    #[test]
    fn test_hardware_ranges() {
        let mut config = PanelConfig::default();
        config.display.i2c_address = 0x80;
        assert_eq!(config.validate(), Err(ConfigError::InvalidI2cAddress));

        let mut config = PanelConfig::default();
        config.segment.brightness = 8;
        assert_eq!(config.validate(), Err(ConfigError::BrightnessOutOfRange));

        let mut config = PanelConfig::default();
        config.sensor.shift = 16;
        assert_eq!(config.validate(), Err(ConfigError::SensorShiftTooLarge));
    }
}
