//! Pixel buffer view of one channel
//!
//! The view holds no storage of its own. Every read and write is a live call
//! into the engine keyed by `(channel, position)`, so reads always reflect
//! the engine's current buffer.

use crate::channel::ChannelId;
use crate::color::Color;
use crate::engine::Engine;
use crate::error::{Error, Result};
use crate::range::PixelRange;

/// Ordered pixel colors of a single channel
pub struct PixelBuffer<'a, E: Engine> {
    engine: &'a mut E,
    channel: ChannelId,
}

impl<'a, E: Engine> PixelBuffer<'a, E> {
    pub(crate) fn new(engine: &'a mut E, channel: ChannelId) -> Self {
        Self { engine, channel }
    }

    pub const fn channel(&self) -> ChannelId {
        self.channel
    }

    /// Pixel count reported by the engine
    pub fn len(&self) -> usize {
        self.engine.count(self.channel)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Read the color at `index`
    pub fn get(&self, index: usize) -> Result<Color> {
        self.check_index(index)?;
        Ok(self.engine.led_get(self.channel, index))
    }

    /// Write the color at `index`
    pub fn set(&mut self, index: usize, color: Color) -> Result<()> {
        self.check_index(index)?;
        self.engine.led_set(self.channel, index, color);
        Ok(())
    }

    /// Read every pixel covered by `range`, in range order
    pub fn get_range(&self, range: impl Into<PixelRange>) -> Result<Vec<Color>> {
        let positions = range.into().resolve(self.len())?;
        Ok(positions
            .into_iter()
            .map(|position| self.engine.led_get(self.channel, position))
            .collect())
    }

    /// Write `colors` to the pixels covered by `range` in one engine call
    ///
    /// The i-th resolved position receives `colors[i]`; both sides must have
    /// the same length.
    pub fn set_range(&mut self, range: impl Into<PixelRange>, colors: &[Color]) -> Result<()> {
        let positions = range.into().resolve(self.len())?;
        if positions.len() != colors.len() {
            return Err(Error::LengthMismatch {
                positions: positions.len(),
                values: colors.len(),
            });
        }
        self.engine
            .led_set_multi(self.channel, &positions, colors, Color::BLACK);
        Ok(())
    }

    /// Set every pixel to `color` in one engine call
    pub fn fill(&mut self, color: Color) -> Result<()> {
        let colors = vec![color; self.len()];
        self.set_range(PixelRange::FULL, &colors)
    }

    /// Snapshot of the whole channel
    pub fn to_vec(&self) -> Vec<Color> {
        (0..self.len())
            .map(|position| self.engine.led_get(self.channel, position))
            .collect()
    }

    fn check_index(&self, index: usize) -> Result<()> {
        let len = self.len();
        if index < len {
            Ok(())
        } else {
            Err(Error::PixelOutOfRange { index, len })
        }
    }
}
