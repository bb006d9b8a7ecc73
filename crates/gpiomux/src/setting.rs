//! Pin configuration values and the two arbitration modes.
//!
//! A [`Setting`] is a plain value describing the complete electrical setup of
//! one multiplexed pin. Settings are always copied, never shared; the table
//! owns the installed copies and hands out further copies on read.

use core::fmt;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Alternate-function selector for a multiplexed pin.
///
/// Function numbering is chip specific; by convention function 0 routes the
/// pin to plain GPIO.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Func(pub u8);

impl Func {
    /// The conventional plain-GPIO function.
    pub const GPIO: Func = Func(0);
}

impl From<u8> for Func {
    #[inline]
    fn from(value: u8) -> Self {
        Self(value)
    }
}

impl fmt::Display for Func {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Signal direction, including the initial level driven on an output.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// High-impedance input.
    #[default]
    Input,
    /// Output, driven high when the setting is applied.
    OutputHigh,
    /// Output, driven low when the setting is applied.
    OutputLow,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Input => "in",
            Self::OutputHigh => "out-high",
            Self::OutputLow => "out-low",
        };
        write!(f, "{name}")
    }
}

/// Output drive strength in 2 mA steps.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DriveStrength {
    #[default]
    Ma2,
    Ma4,
    Ma6,
    Ma8,
    Ma10,
    Ma12,
    Ma14,
    Ma16,
}

impl DriveStrength {
    /// Nominal drive current in milliamperes.
    pub const fn milliamps(self) -> u8 {
        match self {
            Self::Ma2 => 2,
            Self::Ma4 => 4,
            Self::Ma6 => 6,
            Self::Ma8 => 8,
            Self::Ma10 => 10,
            Self::Ma12 => 12,
            Self::Ma14 => 14,
            Self::Ma16 => 16,
        }
    }
}

impl fmt::Display for DriveStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}mA", self.milliamps())
    }
}

/// Pull resistor configuration.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pull {
    /// No pull; the pin floats when undriven.
    #[default]
    None,
    Down,
    /// Bus keeper: weakly holds the last driven level.
    Keeper,
    Up,
}

impl fmt::Display for Pull {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::None => "none",
            Self::Down => "down",
            Self::Keeper => "keeper",
            Self::Up => "up",
        };
        write!(f, "{name}")
    }
}

/// Complete electrical configuration of one pin.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Setting {
    pub func: Func,
    pub dir: Direction,
    pub drive: DriveStrength,
    pub pull: Pull,
}

impl Setting {
    pub const fn new(func: Func, dir: Direction, drive: DriveStrength, pull: Pull) -> Self {
        Self {
            func,
            dir,
            drive,
            pull,
        }
    }
}

impl fmt::Display for Setting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "func:{} dir:{} drv:{} pull:{}",
            self.func, self.dir, self.drive, self.pull
        )
    }
}

/// The two states a pin's owning peripheral can be in.
///
/// Which of the two installed settings reaches the hardware is decided by the
/// pin's active reference count: [`Mode::Active`] while any client holds the
/// pin, [`Mode::Suspended`] otherwise.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    Active,
    Suspended,
}

impl Mode {
    /// Number of per-pin setting slots.
    pub const COUNT: usize = 2;

    /// Both modes, in the order bulk installation walks them.
    pub const ALL: [Mode; Mode::COUNT] = [Mode::Active, Mode::Suspended];

    pub(crate) const fn index(self) -> usize {
        match self {
            Self::Active => 0,
            Self::Suspended => 1,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Active => "active",
            Self::Suspended => "suspended",
        };
        write!(f, "{name}")
    }
}
