//! Wire-level color ordering of the attached LEDs
//!
//! The raw values match the engine's strip type constants: the low three
//! bytes hold the red, green and blue shifts, the top byte the white shift
//! (zero for 3-color strips).

const STRIP_NAME_RGB: &str = "rgb";
const STRIP_NAME_RBG: &str = "rbg";
const STRIP_NAME_GRB: &str = "grb";
const STRIP_NAME_GBR: &str = "gbr";
const STRIP_NAME_BRG: &str = "brg";
const STRIP_NAME_BGR: &str = "bgr";
const STRIP_NAME_RGBW: &str = "rgbw";
const STRIP_NAME_RBGW: &str = "rbgw";
const STRIP_NAME_GRBW: &str = "grbw";
const STRIP_NAME_GBRW: &str = "gbrw";
const STRIP_NAME_BRGW: &str = "brgw";
const STRIP_NAME_BGRW: &str = "bgrw";

const STRIP_RAW_RGB: u32 = 0x0010_0800;
const STRIP_RAW_RBG: u32 = 0x0010_0008;
const STRIP_RAW_GRB: u32 = 0x0008_1000;
const STRIP_RAW_GBR: u32 = 0x0008_0010;
const STRIP_RAW_BRG: u32 = 0x0000_1008;
const STRIP_RAW_BGR: u32 = 0x0000_0810;
const STRIP_RAW_RGBW: u32 = 0x1810_0800;
const STRIP_RAW_RBGW: u32 = 0x1810_0008;
const STRIP_RAW_GRBW: u32 = 0x1808_1000;
const STRIP_RAW_GBRW: u32 = 0x1808_0010;
const STRIP_RAW_BRGW: u32 = 0x1800_1008;
const STRIP_RAW_BGRW: u32 = 0x1800_0810;

/// Color order tag passed to the engine for each channel
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum StripType {
    #[default]
    Rgb = STRIP_RAW_RGB,
    Rbg = STRIP_RAW_RBG,
    Grb = STRIP_RAW_GRB,
    Gbr = STRIP_RAW_GBR,
    Brg = STRIP_RAW_BRG,
    Bgr = STRIP_RAW_BGR,
    Rgbw = STRIP_RAW_RGBW,
    Rbgw = STRIP_RAW_RBGW,
    Grbw = STRIP_RAW_GRBW,
    Gbrw = STRIP_RAW_GBRW,
    Brgw = STRIP_RAW_BRGW,
    Bgrw = STRIP_RAW_BGRW,
}

impl StripType {
    /// WS2812 / WS2812B strips
    pub const WS2812: Self = Self::Grb;
    /// SK6812 strips without a white die
    pub const SK6812: Self = Self::Grb;
    /// SK6812 RGBW strips
    pub const SK6812W: Self = Self::Grbw;

    pub const fn raw(self) -> u32 {
        self as u32
    }

    pub const fn from_raw(value: u32) -> Option<Self> {
        Some(match value {
            STRIP_RAW_RGB => Self::Rgb,
            STRIP_RAW_RBG => Self::Rbg,
            STRIP_RAW_GRB => Self::Grb,
            STRIP_RAW_GBR => Self::Gbr,
            STRIP_RAW_BRG => Self::Brg,
            STRIP_RAW_BGR => Self::Bgr,
            STRIP_RAW_RGBW => Self::Rgbw,
            STRIP_RAW_RBGW => Self::Rbgw,
            STRIP_RAW_GRBW => Self::Grbw,
            STRIP_RAW_GBRW => Self::Gbrw,
            STRIP_RAW_BRGW => Self::Brgw,
            STRIP_RAW_BGRW => Self::Bgrw,
            _ => return None,
        })
    }

    pub fn parse_from_str(value: &str) -> Option<Self> {
        Some(match value {
            STRIP_NAME_RGB => Self::Rgb,
            STRIP_NAME_RBG => Self::Rbg,
            STRIP_NAME_GRB => Self::Grb,
            STRIP_NAME_GBR => Self::Gbr,
            STRIP_NAME_BRG => Self::Brg,
            STRIP_NAME_BGR => Self::Bgr,
            STRIP_NAME_RGBW => Self::Rgbw,
            STRIP_NAME_RBGW => Self::Rbgw,
            STRIP_NAME_GRBW => Self::Grbw,
            STRIP_NAME_GBRW => Self::Gbrw,
            STRIP_NAME_BRGW => Self::Brgw,
            STRIP_NAME_BGRW => Self::Bgrw,
            _ => return None,
        })
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Rgb => STRIP_NAME_RGB,
            Self::Rbg => STRIP_NAME_RBG,
            Self::Grb => STRIP_NAME_GRB,
            Self::Gbr => STRIP_NAME_GBR,
            Self::Brg => STRIP_NAME_BRG,
            Self::Bgr => STRIP_NAME_BGR,
            Self::Rgbw => STRIP_NAME_RGBW,
            Self::Rbgw => STRIP_NAME_RBGW,
            Self::Grbw => STRIP_NAME_GRBW,
            Self::Gbrw => STRIP_NAME_GBRW,
            Self::Brgw => STRIP_NAME_BRGW,
            Self::Bgrw => STRIP_NAME_BGRW,
        }
    }

    /// Whether the LEDs carry a dedicated white die
    pub const fn has_white(self) -> bool {
        self.raw() >> 24 != 0
    }
}
