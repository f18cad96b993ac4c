//! Channel identifiers and live per-channel views
//!
//! Both channels share one engine context. A [`ChannelHandle`] borrows that
//! context for a single channel, so the two channels can never be addressed
//! through a stray index.

use crate::engine::Engine;
use crate::error::{Error, Result};
use crate::pixels::PixelBuffer;
use crate::strip_type::StripType;

/// One of the two hardware outputs of the engine
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ChannelId {
    Pwm0 = 0,
    Pwm1 = 1,
}

impl ChannelId {
    /// Both channels in engine order
    pub const ALL: [Self; 2] = [Self::Pwm0, Self::Pwm1];

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Pwm0),
            1 => Some(Self::Pwm1),
            _ => None,
        }
    }
}

impl TryFrom<usize> for ChannelId {
    type Error = Error;

    fn try_from(index: usize) -> Result<Self> {
        Self::from_index(index).ok_or(Error::InvalidChannel(index))
    }
}

/// Live handle into the engine state of one channel
///
/// Every call reads or writes the engine directly. Nothing is cached, and no
/// call here triggers a render.
pub struct ChannelHandle<'a, E: Engine> {
    engine: &'a mut E,
    id: ChannelId,
}

impl<'a, E: Engine> ChannelHandle<'a, E> {
    pub(crate) fn new(engine: &'a mut E, id: ChannelId) -> Self {
        Self { engine, id }
    }

    pub const fn id(&self) -> ChannelId {
        self.id
    }

    /// Pixel count reported by the engine
    pub fn pixel_count(&self) -> usize {
        self.engine.count(self.id)
    }

    pub fn gpio_pin(&self) -> u8 {
        self.engine.gpio_pin(self.id)
    }

    pub fn is_inverted(&self) -> bool {
        self.engine.invert(self.id)
    }

    pub fn strip_type(&self) -> StripType {
        self.engine.strip_type(self.id)
    }

    pub fn brightness(&self) -> u8 {
        self.engine.brightness(self.id)
    }

    /// Set the brightness scale applied at render time (0 dark, 255 full)
    pub fn set_brightness(&mut self, brightness: u8) {
        self.engine.set_brightness(self.id, brightness);
    }

    pub fn available_watts(&self) -> f32 {
        self.engine.available_watts(self.id)
    }

    /// Set the power ceiling of this channel
    ///
    /// Takes effect on the next render.
    pub fn set_available_watts(&mut self, watts: f32) {
        self.engine.set_available_watts(self.id, watts);
    }

    /// Turn the handle into a view over the channel's pixels
    pub fn into_pixels(self) -> PixelBuffer<'a, E> {
        PixelBuffer::new(self.engine, self.id)
    }
}
