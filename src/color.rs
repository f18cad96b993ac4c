//! Packed pixel colors
//!
//! The engine stores every pixel as a single 32-bit word laid out as
//! `0xWWRRGGBB`. Components are `u8`, so packing can never bleed one field
//! into its neighbour.

use core::fmt;

use smart_leds::{RGB8, RGBW, White};

/// Packed `0xWWRRGGBB` pixel value as stored by the engine
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Color(u32);

#[allow(clippy::cast_possible_truncation, clippy::cast_lossless)]
impl Color {
    pub const BLACK: Self = Self(0);

    /// Pack four intensity components into one word
    pub const fn pack(red: u8, green: u8, blue: u8, white: u8) -> Self {
        Self(
            ((white as u32) << 24)
                | ((red as u32) << 16)
                | ((green as u32) << 8)
                | blue as u32,
        )
    }

    /// Pack a color without a white component
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self::pack(red, green, blue, 0)
    }

    /// Wrap a raw engine word
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Raw engine word
    pub const fn raw(self) -> u32 {
        self.0
    }

    pub const fn white(self) -> u8 {
        (self.0 >> 24) as u8
    }

    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn blue(self) -> u8 {
        self.0 as u8
    }

    /// Same color with the white component cleared
    pub const fn without_white(self) -> Self {
        Self(self.0 & 0x00FF_FFFF)
    }
}

/// Pack red, green, blue and white into a [`Color`]
///
/// Free-function form of [`Color::pack`].
pub const fn pack(red: u8, green: u8, blue: u8, white: u8) -> Color {
    Color::pack(red, green, blue, white)
}

impl From<u32> for Color {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

impl From<Color> for u32 {
    fn from(color: Color) -> Self {
        color.0
    }
}

impl From<RGB8> for Color {
    fn from(rgb: RGB8) -> Self {
        Self::rgb(rgb.r, rgb.g, rgb.b)
    }
}

impl From<RGBW<u8>> for Color {
    fn from(rgbw: RGBW<u8>) -> Self {
        Self::pack(rgbw.r, rgbw.g, rgbw.b, rgbw.a.0)
    }
}

impl From<Color> for RGB8 {
    fn from(color: Color) -> Self {
        RGB8::new(color.red(), color.green(), color.blue())
    }
}

impl From<Color> for RGBW<u8> {
    fn from(color: Color) -> Self {
        RGBW {
            r: color.red(),
            g: color.green(),
            b: color.blue(),
            a: White(color.white()),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08X}", self.0)
    }
}
