use embassy_time::{Duration, Instant};
use log::{debug, error, info, trace, warn};

use crate::channel::{ChannelHandle, ChannelId};
use crate::color::Color;
use crate::config::ControllerConfig;
use crate::engine::Engine;
use crate::error::{Error, Result};
use crate::pixels::PixelBuffer;
use crate::writer::StripWriter;

/// Lifecycle of a [`StripController`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleState {
    /// Engine context exists but holds no hardware resources yet
    Uninitialized,
    /// `begin()` succeeded, buffers can be written and rendered
    Initialized,
    /// Engine context has been released. Terminal.
    Released,
}

/// Two-channel strip controller - owns the engine context
///
/// The controller is the only owner of the engine. Dropping it tears the
/// engine down if `teardown()` was not called explicitly.
pub struct StripController<E: Engine> {
    config: ControllerConfig,
    engine: Option<E>,
    state: LifecycleState,
    last_render: Option<Duration>,
}

impl<E: Engine> StripController<E> {
    /// Create an uninitialized controller around an engine context
    pub fn new(engine: E, config: ControllerConfig) -> Self {
        Self {
            config,
            engine: Some(engine),
            state: LifecycleState::Uninitialized,
            last_render: None,
        }
    }

    pub const fn state(&self) -> LifecycleState {
        self.state
    }

    pub const fn config(&self) -> &ControllerConfig {
        &self.config
    }

    /// Engine context, if it has not been released
    pub fn engine(&self) -> Option<&E> {
        self.engine.as_ref()
    }

    /// How long the most recent successful render took
    pub const fn last_render_duration(&self) -> Option<Duration> {
        self.last_render
    }

    /// Program the configuration into the engine and initialize it
    ///
    /// On failure the controller stays uninitialized.
    pub fn begin(&mut self) -> Result<()> {
        match self.state {
            LifecycleState::Uninitialized => {}
            LifecycleState::Initialized => return Err(Error::AlreadyInitialized),
            LifecycleState::Released => return Err(Error::Released),
        }
        let config = self.config;
        let engine = self.engine.as_mut().ok_or(Error::Released)?;

        debug!(
            "programming engine: {} Hz, dma {}",
            config.frequency_hz, config.dma
        );
        engine.set_frequency(config.frequency_hz);
        engine.set_dma(config.dma);
        for id in ChannelId::ALL {
            let channel = config.channel(id);
            debug!(
                "channel {:?}: {} pixels on gpio {}, {}",
                id,
                channel.pixel_count,
                channel.gpio_pin,
                channel.strip_type.as_str()
            );
            engine.set_count(id, channel.pixel_count);
            engine.set_gpio_pin(id, channel.gpio_pin);
            engine.set_invert(id, channel.invert);
            engine.set_brightness(id, channel.brightness);
            engine.set_strip_type(id, channel.strip_type);
            engine.set_available_watts(id, channel.available_watts);
        }

        let code = engine.init();
        if !code.is_success() {
            let description = engine.describe(code);
            error!("ws2811_init failed with code {} ({})", code, description);
            return Err(Error::Initialization { code, description });
        }

        info!("engine initialized");
        self.state = LifecycleState::Initialized;
        Ok(())
    }

    /// Render the current buffers of both channels
    ///
    /// A failed render leaves the controller initialized, so it can be retried.
    pub fn show(&mut self) -> Result<()> {
        let engine = self.live_engine()?;

        let started = Instant::now();
        let code = engine.render();
        if !code.is_success() {
            let description = engine.describe(code);
            warn!("ws2811_render failed with code {} ({})", code, description);
            return Err(Error::Render { code, description });
        }
        let elapsed = started.elapsed();
        trace!("render took {} us", elapsed.as_micros());

        self.last_render = Some(elapsed);
        Ok(())
    }

    /// Pixel buffer view of a channel
    pub fn pixels(&mut self, channel: ChannelId) -> Result<PixelBuffer<'_, E>> {
        Ok(PixelBuffer::new(self.live_engine()?, channel))
    }

    /// Live handle to the engine state of a channel
    pub fn channel(&mut self, channel: ChannelId) -> Result<ChannelHandle<'_, E>> {
        Ok(ChannelHandle::new(self.live_engine()?, channel))
    }

    /// `SmartLedsWrite` adapter rendering one channel
    pub fn writer(&mut self, channel: ChannelId) -> Result<StripWriter<'_, E>> {
        self.live_engine()?;
        Ok(StripWriter::new(self, channel))
    }

    /// Pixel count of a channel as reported by the engine
    pub fn num_pixels(&mut self, channel: ChannelId) -> Result<usize> {
        Ok(self.live_engine()?.count(channel))
    }

    pub fn brightness(&mut self, channel: ChannelId) -> Result<u8> {
        Ok(self.channel(channel)?.brightness())
    }

    /// Set the brightness of a channel; visible after the next `show()`
    pub fn set_brightness(&mut self, channel: ChannelId, brightness: u8) -> Result<()> {
        self.channel(channel)?.set_brightness(brightness);
        Ok(())
    }

    pub fn available_watts(&mut self, channel: ChannelId) -> Result<f32> {
        Ok(self.channel(channel)?.available_watts())
    }

    /// Set the power ceiling of a channel and render immediately
    pub fn set_available_watts(&mut self, channel: ChannelId, watts: f32) -> Result<()> {
        self.channel(channel)?.set_available_watts(watts);
        self.show()
    }

    pub fn set_pixel_color(&mut self, channel: ChannelId, n: usize, color: Color) -> Result<()> {
        self.pixels(channel)?.set(n, color)
    }

    pub fn set_pixel_color_rgb(
        &mut self,
        channel: ChannelId,
        n: usize,
        red: u8,
        green: u8,
        blue: u8,
        white: u8,
    ) -> Result<()> {
        self.set_pixel_color(channel, n, Color::pack(red, green, blue, white))
    }

    pub fn pixel_color(&mut self, channel: ChannelId, n: usize) -> Result<Color> {
        self.pixels(channel)?.get(n)
    }

    /// Release the engine context
    ///
    /// Safe to call any number of times; only the first call reaches the
    /// engine.
    pub fn teardown(&mut self) {
        if let Some(mut engine) = self.engine.take() {
            debug!("releasing engine context");
            engine.release();
        }
        self.state = LifecycleState::Released;
    }

    fn live_engine(&mut self) -> Result<&mut E> {
        match self.state {
            LifecycleState::Initialized => self.engine.as_mut().ok_or(Error::Released),
            LifecycleState::Uninitialized => Err(Error::NotInitialized),
            LifecycleState::Released => Err(Error::Released),
        }
    }
}

impl<E: Engine> Drop for StripController<E> {
    fn drop(&mut self) {
        self.teardown();
    }
}
