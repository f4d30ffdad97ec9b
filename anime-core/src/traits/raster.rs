//! Text and image sources

use crate::raster::PixelGrid;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Destination rectangle of a scaled image on a canvas
///
/// The origin may be negative or past the canvas edge; implementations
/// clip against the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Placement {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

/// Resampling used when an image is scaled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ImageQuality {
    /// Nearest source pixel, hard edges
    #[default]
    Nearest,
    /// Weighted average of the four surrounding source pixels
    Bilinear,
}

/// Draws text as grayscale pixels
pub trait TextRasterizer {
    /// Size of the rendered text in pixels as `(width, height)`
    fn measure(&self, text: &str, size: f32) -> (u32, u32);

    /// Draw text with its top-left corner at `(x, y)`
    ///
    /// - `size`: nominal font size in pixels
    ///
    /// Only pixels covered by glyphs are written. Pixels outside the
    /// canvas are dropped.
    fn draw(&self, canvas: &mut PixelGrid, text: &str, size: f32, x: i32, y: i32);
}

/// A grayscale image that can be drawn scaled onto a canvas
pub trait ImageSource {
    /// Source size in pixels as `(width, height)`
    fn dimensions(&self) -> (u32, u32);

    /// Draw the whole image stretched into `dest`
    ///
    /// `quality` is a hint; sources that only have one resampler may
    /// ignore it.
    fn draw_scaled(&self, canvas: &mut PixelGrid, dest: Placement, quality: ImageQuality);
}

impl<T: TextRasterizer + ?Sized> TextRasterizer for &T {
    fn measure(&self, text: &str, size: f32) -> (u32, u32) {
        (**self).measure(text, size)
    }

    fn draw(&self, canvas: &mut PixelGrid, text: &str, size: f32, x: i32, y: i32) {
        (**self).draw(canvas, text, size, x, y)
    }
}
