//! TOML loading
//!
//! ```toml
//! version = 1
//! model = "ROG Zephyrus G14 GA401QM"
//! brightness = "full"
//! display_enabled = true
//!
//! [builtin]
//! enabled = false
//! running = "rog_logo_glitch"
//!
//! [image]
//! zoom = 120.0
//! pan_x = 4
//! quality = "bilinear"
//! ```
//!
//! Every key is optional; missing keys take their defaults.

use super::types::{ConfigError, MatrixConfig, CONFIG_VERSION};

impl MatrixConfig {
    /// Parse a TOML document
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: MatrixConfig = toml::from_str(text).map_err(|_| ConfigError::TomlParse)?;
        if config.version != CONFIG_VERSION {
            return Err(ConfigError::UnsupportedVersion(config.version));
        }
        Ok(config)
    }

    /// Parse TOML from raw bytes
    pub fn from_toml_bytes(bytes: &[u8]) -> Result<Self, ConfigError> {
        let text = core::str::from_utf8(bytes).map_err(|_| ConfigError::InvalidUtf8)?;
        Self::from_toml_str(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::HardwareVariant;
    use crate::raster::ImageQuality;
    use anime_protocol::{Brightness, Running, Sleeping};

    #[test]
    fn test_empty_document_is_default() {
        let config = MatrixConfig::from_toml_str("").unwrap();
        assert_eq!(config, MatrixConfig::default());
    }

    #[test]
    fn test_full_document() {
        let text = r#"
            version = 1
            model = "ROG Zephyrus G14 GA401QM"
            brightness = "full"
            display_enabled = false

            [builtin]
            enabled = true
            running = "rog_logo_glitch"
            sleeping = "starfield"

            [image]
            zoom = 120.0
            pan_x = 4
            quality = "bilinear"
        "#;
        let config = MatrixConfig::from_toml_str(text).unwrap();

        assert_eq!(config.variant(), HardwareVariant::Ga401);
        assert_eq!(config.brightness, Brightness::Full);
        assert!(!config.display_enabled);
        assert!(config.builtin.enabled);
        assert_eq!(config.builtin.running, Running::RogLogoGlitch);
        assert_eq!(config.builtin.sleeping, Sleeping::Starfield);
        assert_eq!(config.image.zoom, 120.0);
        assert_eq!(config.image.pan_x, 4);
        assert_eq!(config.image.pan_y, 0);
        assert_eq!(config.image.quality, ImageQuality::Bilinear);
    }

    #[test]
    fn test_explicit_variant() {
        let config = MatrixConfig::from_toml_str("variant = \"gu604\"").unwrap();
        assert_eq!(config.variant(), HardwareVariant::Gu604);
    }

    #[test]
    fn test_long_model_name() {
        let text = r#"
            model = "ASUSTeK ROG Zephyrus G14 GA401QM_GA401QM"
            brightness = "dim"
        "#;
        let config = MatrixConfig::from_toml_str(text).unwrap();
        assert_eq!(config.variant(), HardwareVariant::Ga401);
        assert_eq!(config.brightness, Brightness::Dim);
    }

    #[test]
    fn test_rejects_bad_input() {
        assert_eq!(
            MatrixConfig::from_toml_str("version = 2"),
            Err(ConfigError::UnsupportedVersion(2))
        );
        assert_eq!(
            MatrixConfig::from_toml_str("brightness = \"blinding\""),
            Err(ConfigError::TomlParse)
        );
        assert_eq!(
            MatrixConfig::from_toml_bytes(&[0xFF, 0xFE]),
            Err(ConfigError::InvalidUtf8)
        );
    }
}
