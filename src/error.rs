use derive_more::{Display, Error};

use crate::engine::ReturnCode;

/// Result type used throughout the crate
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Errors raised by the controller and its channel views
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Engine refused to initialize (GPIO, DMA or permission problem)
    #[display("ws2811_init failed with code {code} ({description})")]
    Initialization {
        code: ReturnCode,
        description: &'static str,
    },
    /// Engine failed to render the current buffers
    #[display("ws2811_render failed with code {code} ({description})")]
    Render {
        code: ReturnCode,
        description: &'static str,
    },
    #[display("controller is not initialized, call begin() first")]
    NotInitialized,
    #[display("controller is already initialized")]
    AlreadyInitialized,
    #[display("controller has been torn down")]
    Released,
    #[display("pixel {index} is out of range for a channel of {len} pixels")]
    PixelOutOfRange { index: usize, len: usize },
    #[display("bulk write pairs {positions} positions with {values} values")]
    LengthMismatch { positions: usize, values: usize },
    #[display("pixel range step cannot be zero")]
    ZeroStep,
    #[display("no channel with index {_0}")]
    InvalidChannel(#[error(not(source))] usize),
}

impl Error {
    /// Engine status code carried by engine failures
    pub const fn code(&self) -> Option<ReturnCode> {
        match self {
            Self::Initialization { code, .. } | Self::Render { code, .. } => Some(*code),
            _ => None,
        }
    }
}
