//! Two-channel WS281x (`NeoPixel`) strip driver
//!
//! The waveform generation lives in an external rendering engine. This crate
//! is the layer above it: channel configuration, the packed color format,
//! pixel buffer access keyed by channel and position, and the
//! configure → `begin` → write → `show` → `teardown` lifecycle.
//!
//! ```
//! use myrtio_neopixel::{ChannelConfig, ChannelId, Color, ControllerConfig, MemoryEngine, StripController};
//!
//! let config = ControllerConfig::single(ChannelConfig::new(10, 18));
//! let mut strip = StripController::new(MemoryEngine::new(), config);
//! strip.begin()?;
//! strip.set_pixel_color(ChannelId::Pwm0, 0, Color::rgb(255, 0, 0))?;
//! strip.show()?;
//! assert_eq!(strip.pixel_color(ChannelId::Pwm0, 0)?.raw(), 0x00FF_0000);
//! # Ok::<(), myrtio_neopixel::Error>(())
//! ```

pub mod channel;
pub mod color;
pub mod config;
pub mod controller;
pub mod engine;
mod error;
pub mod pixels;
pub mod range;
pub mod strip_type;
pub mod writer;

pub use channel::{ChannelHandle, ChannelId};
pub use color::{Color, pack};
pub use config::{ChannelConfig, ControllerConfig};
pub use controller::{LifecycleState, StripController};
pub use engine::{Engine, EngineProbe, MemoryEngine, ReturnCode};
pub use error::{Error, Result};
pub use pixels::PixelBuffer;
pub use range::PixelRange;
pub use strip_type::StripType;
pub use writer::StripWriter;

pub use smart_leds::{RGB8, RGBW, SmartLedsWrite};
