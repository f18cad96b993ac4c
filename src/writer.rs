//! `smart-leds` integration
//!
//! Lets code written against [`SmartLedsWrite`] drive one channel of a
//! controller: the colors land in the channel buffer and both channels are
//! rendered.

use log::debug;
use smart_leds::SmartLedsWrite;

use crate::channel::ChannelId;
use crate::color::Color;
use crate::controller::StripController;
use crate::engine::Engine;
use crate::error::{Error, Result};

/// Writer for one channel of a [`StripController`]
pub struct StripWriter<'a, E: Engine> {
    controller: &'a mut StripController<E>,
    channel: ChannelId,
}

impl<'a, E: Engine> StripWriter<'a, E> {
    pub(crate) fn new(controller: &'a mut StripController<E>, channel: ChannelId) -> Self {
        Self {
            controller,
            channel,
        }
    }

    pub const fn channel(&self) -> ChannelId {
        self.channel
    }
}

impl<E: Engine> SmartLedsWrite for StripWriter<'_, E> {
    type Error = Error;
    type Color = Color;

    /// Write colors from the first pixel on and render
    ///
    /// Colors past the end of the channel are ignored.
    fn write<T, I>(&mut self, iterator: T) -> Result<()>
    where
        T: IntoIterator<Item = I>,
        I: Into<Self::Color>,
    {
        let mut pixels = self.controller.pixels(self.channel)?;
        let len = pixels.len();
        let mut written = 0;
        for (position, color) in iterator.into_iter().take(len).enumerate() {
            pixels.set(position, color.into())?;
            written += 1;
        }
        debug!("wrote {} of {} pixels on {:?}", written, len, self.channel);
        self.controller.show()
    }
}
