//! Rasterization onto the rotated LED grid
//!
//! Everything is drawn into a [`PixelGrid`] first and then copied onto the
//! frame buffer through the diagonal transform. Two placement modes exist:
//!
//! - Text mode: a canvas as wide as the panel diagonal, copied with a
//!   caller-supplied delta and an optional brightness threshold
//! - Image mode: a scaled and panned image on a canvas twice the panel
//!   width, copied with the model's image delta

mod diagonal;
mod font;
mod grid;

pub use diagonal::{
    draw_image, draw_text_diagonal, image_canvas, image_placement, text_canvas, TextLayout,
    BACKGROUND_CUTOFF, TEXT_THRESHOLD,
};
pub use font::MonoTextRasterizer;
pub use grid::PixelGrid;

pub use crate::traits::ImageQuality;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Scaling and panning applied in image mode
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ImageOptions {
    /// Zoom in percent of the fitted size
    pub zoom: f32,
    /// Horizontal pan in canvas pixels
    pub pan_x: i32,
    /// Vertical pan in canvas pixels
    pub pan_y: i32,
    /// Resampling passed to the image source
    pub quality: ImageQuality,
}

impl Default for ImageOptions {
    fn default() -> Self {
        Self {
            zoom: 100.0,
            pan_x: 0,
            pan_y: 0,
            quality: ImageQuality::Nearest,
        }
    }
}
