//! Wire-level settings: panel brightness and built-in animation presets

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Panel brightness levels accepted by the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[repr(u8)]
pub enum Brightness {
    Off = 0,
    Dim = 1,
    #[default]
    Medium = 2,
    Full = 3,
}

impl Brightness {
    /// Parse a brightness level from its wire byte
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            0 => Some(Brightness::Off),
            1 => Some(Brightness::Dim),
            2 => Some(Brightness::Medium),
            3 => Some(Brightness::Full),
            _ => None,
        }
    }

    /// Convert to wire byte
    pub fn to_byte(self) -> u8 {
        self as u8
    }
}

/// Animation played while the machine boots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Startup {
    #[default]
    GlitchConstruction,
    StaticEmergence,
}

/// Animation played on shutdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Shutdown {
    #[default]
    GlitchOut,
    SeeYa,
}

/// Animation played while asleep
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Sleeping {
    #[default]
    BannerSwipe,
    Starfield,
}

/// Animation played while the machine is running
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Running {
    #[default]
    BinaryBannerScroll,
    RogLogoGlitch,
}

// Bit positions in the selector byte
const RUNNING_BIT: u8 = 0;
const SLEEPING_BIT: u8 = 1;
const SHUTDOWN_BIT: u8 = 2;
const STARTUP_BIT: u8 = 3;

/// Selection of the four firmware animations
///
/// Each phase picks one of two presets, packed into a single selector
/// byte: `running | sleeping << 1 | shutdown << 2 | startup << 3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BuiltInAnimation {
    pub running: Running,
    pub sleeping: Sleeping,
    pub shutdown: Shutdown,
    pub startup: Startup,
}

impl BuiltInAnimation {
    /// Create a selection from the four presets
    pub const fn new(
        running: Running,
        sleeping: Sleeping,
        shutdown: Shutdown,
        startup: Startup,
    ) -> Self {
        Self {
            running,
            sleeping,
            shutdown,
            startup,
        }
    }

    /// Pack into the selector byte
    pub fn to_byte(self) -> u8 {
        let running = matches!(self.running, Running::RogLogoGlitch) as u8;
        let sleeping = matches!(self.sleeping, Sleeping::Starfield) as u8;
        let shutdown = matches!(self.shutdown, Shutdown::SeeYa) as u8;
        let startup = matches!(self.startup, Startup::StaticEmergence) as u8;

        (running << RUNNING_BIT)
            | (sleeping << SLEEPING_BIT)
            | (shutdown << SHUTDOWN_BIT)
            | (startup << STARTUP_BIT)
    }

    /// Unpack a selector byte
    ///
    /// Returns `None` if any bit above the four selector bits is set.
    pub fn from_byte(byte: u8) -> Option<Self> {
        if byte & !0x0F != 0 {
            return None;
        }
        let bit = |n: u8| byte & (1 << n) != 0;

        Some(Self {
            running: if bit(RUNNING_BIT) {
                Running::RogLogoGlitch
            } else {
                Running::BinaryBannerScroll
            },
            sleeping: if bit(SLEEPING_BIT) {
                Sleeping::Starfield
            } else {
                Sleeping::BannerSwipe
            },
            shutdown: if bit(SHUTDOWN_BIT) {
                Shutdown::SeeYa
            } else {
                Shutdown::GlitchOut
            },
            startup: if bit(STARTUP_BIT) {
                Startup::StaticEmergence
            } else {
                Startup::GlitchConstruction
            },
        })
    }
}
