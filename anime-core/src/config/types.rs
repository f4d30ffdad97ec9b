//! Configuration type definitions

use alloc::string::String;

use anime_protocol::{Brightness, BuiltInAnimation, Running, Shutdown, Sleeping, Startup};

use crate::geometry::HardwareVariant;
use crate::raster::ImageOptions;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Current configuration format version
pub const CONFIG_VERSION: u8 = 1;

/// Configuration loading errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// TOML parsing failed
    TomlParse,
    /// Config bytes are not valid UTF-8
    InvalidUtf8,
    /// Config was written for a different format version
    UnsupportedVersion(u8),
}

/// Firmware animation settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BuiltInConfig {
    /// Let the firmware play its own animations
    pub enabled: bool,
    pub running: Running,
    pub sleeping: Sleeping,
    pub shutdown: Shutdown,
    pub startup: Startup,
}

impl BuiltInConfig {
    /// Preset selection to send to the controller
    pub fn selection(&self) -> BuiltInAnimation {
        BuiltInAnimation::new(self.running, self.sleeping, self.shutdown, self.startup)
    }
}

/// Complete matrix configuration
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MatrixConfig {
    /// Format version
    pub version: u8,
    /// Laptop model name, used to pick the variant
    pub model: Option<String>,
    /// Explicit variant, overrides `model`
    pub variant: Option<HardwareVariant>,
    /// Panel brightness
    pub brightness: Brightness,
    /// Panel on/off
    pub display_enabled: bool,
    /// Firmware animations
    pub builtin: BuiltInConfig,
    /// Image placement
    pub image: ImageOptions,
}

impl Default for MatrixConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            model: None,
            variant: None,
            brightness: Brightness::default(),
            display_enabled: true,
            builtin: BuiltInConfig::default(),
            image: ImageOptions::default(),
        }
    }
}

impl MatrixConfig {
    /// Resolve the hardware variant
    ///
    /// Explicit variant first, then the model name, then GA402.
    pub fn variant(&self) -> HardwareVariant {
        if let Some(variant) = self.variant {
            return variant;
        }
        self.model
            .as_ref()
            .map(|model| HardwareVariant::from_model_name(model))
            .unwrap_or_default()
    }
}
