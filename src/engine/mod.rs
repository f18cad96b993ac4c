//! Rendering engine seam
//!
//! The engine owns the hardware side of the strip: it generates the PWM/DMA
//! bitstream, holds the live pixel buffers and reports status codes. This
//! crate only talks to it through [`Engine`].

mod memory;
mod return_code;

pub use memory::{EngineProbe, MemoryEngine};
pub use return_code::ReturnCode;

use crate::channel::ChannelId;
use crate::color::Color;
use crate::strip_type::StripType;

/// Call surface of a two-channel rendering engine
///
/// An engine value is the engine context. Creating the value allocates the
/// context and [`Engine::release`] destroys it; the controller calls
/// `release` exactly once.
///
/// Implement this trait to drive different engines (a native library
/// binding, a simulator, a network bridge).
pub trait Engine {
    /// Set the signal frequency shared by both channels
    fn set_frequency(&mut self, hz: u32);
    fn frequency(&self) -> u32;

    /// Set the DMA channel shared by both channels
    fn set_dma(&mut self, dma: u8);
    fn dma(&self) -> u8;

    fn set_count(&mut self, channel: ChannelId, count: usize);
    /// Live pixel count of a channel
    fn count(&self, channel: ChannelId) -> usize;

    fn set_gpio_pin(&mut self, channel: ChannelId, pin: u8);
    fn gpio_pin(&self, channel: ChannelId) -> u8;

    fn set_invert(&mut self, channel: ChannelId, invert: bool);
    fn invert(&self, channel: ChannelId) -> bool;

    fn set_brightness(&mut self, channel: ChannelId, brightness: u8);
    fn brightness(&self, channel: ChannelId) -> u8;

    fn set_strip_type(&mut self, channel: ChannelId, strip_type: StripType);
    fn strip_type(&self, channel: ChannelId) -> StripType;

    fn set_available_watts(&mut self, channel: ChannelId, watts: f32);
    fn available_watts(&self, channel: ChannelId) -> f32;

    /// Acquire hardware resources for the configured channels
    fn init(&mut self) -> ReturnCode;

    /// Push the current buffers of both channels to the LEDs
    ///
    /// Blocks until the engine has accepted the frame.
    fn render(&mut self) -> ReturnCode;

    /// Human readable description of a status code
    fn describe(&self, code: ReturnCode) -> &'static str {
        code.description()
    }

    /// Read one pixel
    fn led_get(&self, channel: ChannelId, position: usize) -> Color;

    /// Write one pixel
    fn led_set(&mut self, channel: ChannelId, position: usize, color: Color);

    /// Write many pixels in one call
    ///
    /// `positions[i]` receives `values[i]`; positions without a matching
    /// value receive `default`.
    fn led_set_multi(
        &mut self,
        channel: ChannelId,
        positions: &[usize],
        values: &[Color],
        default: Color,
    );

    /// Release the engine context and every hardware resource it holds
    fn release(&mut self);
}
