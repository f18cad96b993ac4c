use core::fmt;

const DESCRIPTIONS: [&str; 15] = [
    "Success",
    "Generic failure",
    "Out of memory",
    "Hardware revision is not supported",
    "Memory lock failed",
    "mmap() failed",
    "Unable to map registers into userspace",
    "Unable to initialize GPIO",
    "Unable to initialize PWM",
    "Failed to create mailbox device",
    "DMA error",
    "Selected GPIO not possible",
    "Unable to initialize PCM",
    "Unable to initialize SPI",
    "SPI transfer error",
];

/// Status code returned by engine calls
///
/// Zero is success, failures are negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ReturnCode(pub i32);

impl ReturnCode {
    pub const SUCCESS: Self = Self(0);
    pub const ERROR_GENERIC: Self = Self(-1);
    pub const ERROR_OUT_OF_MEMORY: Self = Self(-2);
    pub const ERROR_HW_NOT_SUPPORTED: Self = Self(-3);
    pub const ERROR_MEM_LOCK: Self = Self(-4);
    pub const ERROR_MMAP: Self = Self(-5);
    pub const ERROR_MAP_REGISTERS: Self = Self(-6);
    pub const ERROR_GPIO_INIT: Self = Self(-7);
    pub const ERROR_PWM_SETUP: Self = Self(-8);
    pub const ERROR_MAILBOX_DEVICE: Self = Self(-9);
    pub const ERROR_DMA: Self = Self(-10);
    pub const ERROR_ILLEGAL_GPIO: Self = Self(-11);
    pub const ERROR_PCM_SETUP: Self = Self(-12);
    pub const ERROR_SPI_SETUP: Self = Self(-13);
    pub const ERROR_SPI_TRANSFER: Self = Self(-14);

    pub const fn is_success(self) -> bool {
        self.0 == Self::SUCCESS.0
    }

    /// Description from the engine's status table
    pub fn description(self) -> &'static str {
        self.0
            .checked_neg()
            .and_then(|index| usize::try_from(index).ok())
            .and_then(|index| DESCRIPTIONS.get(index))
            .copied()
            .unwrap_or("Unknown error")
    }
}

impl fmt::Display for ReturnCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
