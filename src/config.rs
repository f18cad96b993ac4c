//! Controller and channel configuration

use crate::channel::ChannelId;
use crate::strip_type::StripType;

/// Default signal frequency (800 kHz)
pub const DEFAULT_FREQUENCY_HZ: u32 = 800_000;

/// Default DMA channel
pub const DEFAULT_DMA: u8 = 10;

/// Default brightness (full)
pub const DEFAULT_BRIGHTNESS: u8 = 255;

/// Default power ceiling per channel
pub const DEFAULT_AVAILABLE_WATTS: f32 = 5.0;

/// Configuration of one output channel
///
/// Programmed into the engine by `begin()`. Brightness and available watts
/// can be changed afterwards through the channel handle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChannelConfig {
    pub pixel_count: usize,
    pub gpio_pin: u8,
    pub invert: bool,
    pub brightness: u8,
    pub available_watts: f32,
    pub strip_type: StripType,
}

impl ChannelConfig {
    /// Unused channel: no pixels, no pin
    pub const DISABLED: Self = Self::new(0, 0);

    pub const fn new(pixel_count: usize, gpio_pin: u8) -> Self {
        Self {
            pixel_count,
            gpio_pin,
            invert: false,
            brightness: DEFAULT_BRIGHTNESS,
            available_watts: DEFAULT_AVAILABLE_WATTS,
            strip_type: StripType::Rgb,
        }
    }

    #[must_use]
    pub const fn with_invert(self, invert: bool) -> Self {
        Self { invert, ..self }
    }

    #[must_use]
    pub const fn with_brightness(self, brightness: u8) -> Self {
        Self { brightness, ..self }
    }

    #[must_use]
    pub const fn with_available_watts(self, available_watts: f32) -> Self {
        Self {
            available_watts,
            ..self
        }
    }

    #[must_use]
    pub const fn with_strip_type(self, strip_type: StripType) -> Self {
        Self { strip_type, ..self }
    }
}

impl Default for ChannelConfig {
    fn default() -> Self {
        Self::DISABLED
    }
}

/// Configuration of the whole controller
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControllerConfig {
    /// Signal frequency shared by both channels
    pub frequency_hz: u32,
    /// DMA channel shared by both channels
    pub dma: u8,
    pub channels: [ChannelConfig; 2],
}

impl ControllerConfig {
    pub const fn new(channels: [ChannelConfig; 2]) -> Self {
        Self {
            frequency_hz: DEFAULT_FREQUENCY_HZ,
            dma: DEFAULT_DMA,
            channels,
        }
    }

    /// Only the first channel drives LEDs
    pub const fn single(channel: ChannelConfig) -> Self {
        Self::new([channel, ChannelConfig::DISABLED])
    }

    #[must_use]
    pub const fn with_frequency(self, frequency_hz: u32) -> Self {
        Self {
            frequency_hz,
            ..self
        }
    }

    #[must_use]
    pub const fn with_dma(self, dma: u8) -> Self {
        Self { dma, ..self }
    }

    pub const fn channel(&self, id: ChannelId) -> &ChannelConfig {
        match id {
            ChannelId::Pwm0 => &self.channels[0],
            ChannelId::Pwm1 => &self.channels[1],
        }
    }
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self::new([ChannelConfig::DISABLED; 2])
    }
}
