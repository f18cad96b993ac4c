//! In-process rendering engine
//!
//! Behaves like the hardware engine as far as the channel layer can tell:
//! it validates pins and DMA at init, keeps the pixel buffers, applies
//! brightness and the power ceiling at render time and reports status codes.
//! Renders land in an output frame per channel instead of on a GPIO.

use core::cell::RefCell;
use core::fmt;
use std::collections::VecDeque;
use std::sync::Arc;

use critical_section::Mutex;

use super::{Engine, ReturnCode};
use crate::channel::ChannelId;
use crate::color::Color;
use crate::strip_type::StripType;

/// Pins each PWM channel can drive
const PWM0_PINS: [u8; 4] = [12, 18, 40, 52];
const PWM1_PINS: [u8; 5] = [13, 19, 41, 45, 53];

/// Highest usable DMA channel
const MAX_DMA: u8 = 14;

/// Draw of one fully lit color component (20 mA at 5 V)
const WATTS_PER_COMPONENT: f32 = 0.1;

#[derive(Debug, Default, Clone, Copy)]
struct ProbeCounters {
    inits: usize,
    renders: usize,
    releases: usize,
}

/// Shared view of the calls a [`MemoryEngine`] has received
///
/// Clones observe the same counters, so a probe kept by the caller still
/// works after the engine moved into a controller or was dropped.
#[derive(Clone)]
pub struct EngineProbe {
    counters: Arc<Mutex<RefCell<ProbeCounters>>>,
}

impl EngineProbe {
    pub fn new() -> Self {
        Self {
            counters: Arc::new(Mutex::new(RefCell::new(ProbeCounters::default()))),
        }
    }

    /// Number of `init` calls, failed ones included
    pub fn inits(&self) -> usize {
        self.read(|counters| counters.inits)
    }

    /// Number of `render` calls, failed ones included
    pub fn renders(&self) -> usize {
        self.read(|counters| counters.renders)
    }

    /// Number of `release` calls
    pub fn releases(&self) -> usize {
        self.read(|counters| counters.releases)
    }

    fn read(&self, f: impl FnOnce(&ProbeCounters) -> usize) -> usize {
        critical_section::with(|cs| f(&*self.counters.borrow(cs).borrow()))
    }

    fn record(&self, f: impl FnOnce(&mut ProbeCounters)) {
        critical_section::with(|cs| f(&mut *self.counters.borrow(cs).borrow_mut()));
    }

    fn snapshot(&self) -> ProbeCounters {
        critical_section::with(|cs| *self.counters.borrow(cs).borrow())
    }
}

impl Default for EngineProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for EngineProbe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let counters = self.snapshot();
        f.debug_struct("EngineProbe")
            .field("inits", &counters.inits)
            .field("renders", &counters.renders)
            .field("releases", &counters.releases)
            .finish()
    }
}

#[derive(Debug, Clone, Default)]
struct MemoryChannel {
    count: usize,
    gpio_pin: u8,
    invert: bool,
    brightness: u8,
    strip_type: StripType,
    available_watts: f32,
    leds: Vec<Color>,
    output: Vec<Color>,
}

impl MemoryChannel {
    fn is_pin_valid(&self, id: ChannelId) -> bool {
        match id {
            ChannelId::Pwm0 => PWM0_PINS.contains(&self.gpio_pin),
            ChannelId::Pwm1 => PWM1_PINS.contains(&self.gpio_pin),
        }
    }

    fn render(&mut self) {
        let scale = u32::from(self.brightness) + 1;
        let has_white = self.strip_type.has_white();
        let scaled: Vec<Color> = self
            .leds
            .iter()
            .map(|color| {
                let white = if has_white { color.white() } else { 0 };
                Color::pack(
                    scale8(color.red(), scale),
                    scale8(color.green(), scale),
                    scale8(color.blue(), scale),
                    scale8(white, scale),
                )
            })
            .collect();

        let estimate = estimate_watts(&scaled);
        self.output = if self.available_watts > 0.0 && estimate > self.available_watts {
            let factor = self.available_watts / estimate;
            scaled
                .into_iter()
                .map(|color| {
                    Color::pack(
                        limit(color.red(), factor),
                        limit(color.green(), factor),
                        limit(color.blue(), factor),
                        limit(color.white(), factor),
                    )
                })
                .collect()
        } else {
            scaled
        };
    }
}

#[allow(clippy::cast_possible_truncation)]
fn scale8(component: u8, scale: u32) -> u8 {
    ((u32::from(component) * scale) >> 8) as u8
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn limit(component: u8, factor: f32) -> u8 {
    (f32::from(component) * factor) as u8
}

/// Estimated draw of a rendered frame in watts
#[allow(clippy::cast_precision_loss)]
fn estimate_watts(frame: &[Color]) -> f32 {
    let total: u64 = frame
        .iter()
        .map(|color| {
            u64::from(color.red())
                + u64::from(color.green())
                + u64::from(color.blue())
                + u64::from(color.white())
        })
        .sum();
    total as f32 / 255.0 * WATTS_PER_COMPONENT
}

/// Software engine keeping both channels in memory
#[derive(Debug, Default)]
pub struct MemoryEngine {
    frequency: u32,
    dma: u8,
    channels: [MemoryChannel; 2],
    initialized: bool,
    released: bool,
    init_failure: Option<ReturnCode>,
    render_failures: VecDeque<ReturnCode>,
    probe: EngineProbe,
}

impl MemoryEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine reporting its calls to `probe`
    pub fn with_probe(probe: EngineProbe) -> Self {
        Self {
            probe,
            ..Self::default()
        }
    }

    /// Probe observing this engine
    pub fn probe(&self) -> EngineProbe {
        self.probe.clone()
    }

    /// Make the next `init` fail with `code`
    pub fn fail_next_init(&mut self, code: ReturnCode) {
        self.init_failure = Some(code);
    }

    /// Queue a failing `render`; queued codes are consumed one per call
    pub fn fail_next_render(&mut self, code: ReturnCode) {
        self.render_failures.push_back(code);
    }

    pub const fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub const fn is_released(&self) -> bool {
        self.released
    }

    /// Colors produced by the most recent successful render
    pub fn output(&self, channel: ChannelId) -> &[Color] {
        &self.channel(channel).output
    }

    /// Estimated draw of the most recent render of a channel
    pub fn output_watts(&self, channel: ChannelId) -> f32 {
        estimate_watts(self.output(channel))
    }

    fn channel(&self, id: ChannelId) -> &MemoryChannel {
        match id {
            ChannelId::Pwm0 => &self.channels[0],
            ChannelId::Pwm1 => &self.channels[1],
        }
    }

    fn channel_mut(&mut self, id: ChannelId) -> &mut MemoryChannel {
        match id {
            ChannelId::Pwm0 => &mut self.channels[0],
            ChannelId::Pwm1 => &mut self.channels[1],
        }
    }

    fn validate(&self) -> ReturnCode {
        if self.dma > MAX_DMA {
            return ReturnCode::ERROR_DMA;
        }
        let bad_pin = ChannelId::ALL.into_iter().any(|id| {
            let channel = self.channel(id);
            channel.count > 0 && !channel.is_pin_valid(id)
        });
        if bad_pin {
            return ReturnCode::ERROR_ILLEGAL_GPIO;
        }
        ReturnCode::SUCCESS
    }
}

impl Engine for MemoryEngine {
    fn set_frequency(&mut self, hz: u32) {
        self.frequency = hz;
    }

    fn frequency(&self) -> u32 {
        self.frequency
    }

    fn set_dma(&mut self, dma: u8) {
        self.dma = dma;
    }

    fn dma(&self) -> u8 {
        self.dma
    }

    fn set_count(&mut self, channel: ChannelId, count: usize) {
        self.channel_mut(channel).count = count;
    }

    fn count(&self, channel: ChannelId) -> usize {
        self.channel(channel).count
    }

    fn set_gpio_pin(&mut self, channel: ChannelId, pin: u8) {
        self.channel_mut(channel).gpio_pin = pin;
    }

    fn gpio_pin(&self, channel: ChannelId) -> u8 {
        self.channel(channel).gpio_pin
    }

    fn set_invert(&mut self, channel: ChannelId, invert: bool) {
        self.channel_mut(channel).invert = invert;
    }

    fn invert(&self, channel: ChannelId) -> bool {
        self.channel(channel).invert
    }

    fn set_brightness(&mut self, channel: ChannelId, brightness: u8) {
        self.channel_mut(channel).brightness = brightness;
    }

    fn brightness(&self, channel: ChannelId) -> u8 {
        self.channel(channel).brightness
    }

    fn set_strip_type(&mut self, channel: ChannelId, strip_type: StripType) {
        self.channel_mut(channel).strip_type = strip_type;
    }

    fn strip_type(&self, channel: ChannelId) -> StripType {
        self.channel(channel).strip_type
    }

    fn set_available_watts(&mut self, channel: ChannelId, watts: f32) {
        self.channel_mut(channel).available_watts = watts;
    }

    fn available_watts(&self, channel: ChannelId) -> f32 {
        self.channel(channel).available_watts
    }

    fn init(&mut self) -> ReturnCode {
        self.probe.record(|counters| counters.inits += 1);
        if let Some(code) = self.init_failure.take() {
            return code;
        }
        if self.released {
            return ReturnCode::ERROR_GENERIC;
        }
        let status = self.validate();
        if !status.is_success() {
            return status;
        }
        let mut buffers: [Vec<Color>; 2] = Default::default();
        for (leds, channel) in buffers.iter_mut().zip(&self.channels) {
            if leds.try_reserve_exact(channel.count).is_err() {
                return ReturnCode::ERROR_OUT_OF_MEMORY;
            }
            leds.resize(channel.count, Color::BLACK);
        }
        for (channel, leds) in self.channels.iter_mut().zip(buffers) {
            channel.leds = leds;
            channel.output.clear();
        }
        self.initialized = true;
        ReturnCode::SUCCESS
    }

    fn render(&mut self) -> ReturnCode {
        self.probe.record(|counters| counters.renders += 1);
        if let Some(code) = self.render_failures.pop_front() {
            return code;
        }
        if !self.initialized {
            return ReturnCode::ERROR_GENERIC;
        }
        for channel in &mut self.channels {
            channel.render();
        }
        ReturnCode::SUCCESS
    }

    fn led_get(&self, channel: ChannelId, position: usize) -> Color {
        self.channel(channel)
            .leds
            .get(position)
            .copied()
            .unwrap_or(Color::BLACK)
    }

    fn led_set(&mut self, channel: ChannelId, position: usize, color: Color) {
        if let Some(led) = self.channel_mut(channel).leds.get_mut(position) {
            *led = color;
        }
    }

    fn led_set_multi(
        &mut self,
        channel: ChannelId,
        positions: &[usize],
        values: &[Color],
        default: Color,
    ) {
        let leds = &mut self.channel_mut(channel).leds;
        for (i, &position) in positions.iter().enumerate() {
            if let Some(led) = leds.get_mut(position) {
                *led = values.get(i).copied().unwrap_or(default);
            }
        }
    }

    fn release(&mut self) {
        self.probe.record(|counters| counters.releases += 1);
        for channel in &mut self.channels {
            channel.leds = Vec::new();
            channel.output = Vec::new();
        }
        self.initialized = false;
        self.released = true;
    }
}
