use core::fmt;
use core::ops::Not;

/// Identifies one physical GPIO line. How the number maps onto hardware is
/// up to the platform.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct PinId(pub u8);

impl fmt::Display for PinId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Direction of a pin
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PinMode {
    Input,
    Output,
}

/// Level driven onto an output pin
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Level {
    Low = 0,
    High = 1,
}

impl Level {
    pub fn is_high(self) -> bool {
        match self {
            Level::High => true,
            Level::Low => false,
        }
    }

    pub fn is_low(self) -> bool {
        !self.is_high()
    }

    pub fn toggled(self) -> Level {
        match self {
            Level::Low => Level::High,
            Level::High => Level::Low,
        }
    }
}

impl Not for Level {
    type Output = Level;

    fn not(self) -> Level {
        self.toggled()
    }
}

impl From<bool> for Level {
    fn from(high: bool) -> Self {
        if high {
            Level::High
        } else {
            Level::Low
        }
    }
}

impl From<Level> for bool {
    fn from(level: Level) -> Self {
        level.is_high()
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::High => f.write_str("HIGH"),
            Level::Low => f.write_str("LOW"),
        }
    }
}
