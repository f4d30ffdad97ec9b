//! Bitmap font rasterizer backed by the embedded-graphics mono fonts

use embedded_graphics::mono_font::ascii::{
    FONT_10X20, FONT_4X6, FONT_5X8, FONT_6X10, FONT_6X12, FONT_7X13, FONT_7X14, FONT_9X15,
    FONT_9X18,
};
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::{Gray8, GrayColor};
use embedded_graphics::prelude::{Drawable, Point};
use embedded_graphics::text::renderer::TextRenderer;
use embedded_graphics::text::{Baseline, Text};

use crate::raster::PixelGrid;
use crate::traits::TextRasterizer;

/// Text rasterizer using the built-in ASCII bitmap fonts
///
/// The requested size is rounded to whole pixels and mapped to the
/// largest font whose glyph height does not exceed it (4x6 for anything
/// smaller). Glyphs are drawn at full brightness.
#[derive(Debug, Clone, Copy, Default)]
pub struct MonoTextRasterizer;

impl MonoTextRasterizer {
    pub const fn new() -> Self {
        Self
    }

    /// Font chosen for a nominal pixel size
    pub fn font_for_size(size: f32) -> &'static MonoFont<'static> {
        let px = libm::roundf(size) as i32;
        match px {
            i32::MIN..=7 => &FONT_4X6,
            8..=9 => &FONT_5X8,
            10..=11 => &FONT_6X10,
            12 => &FONT_6X12,
            13 => &FONT_7X13,
            14 => &FONT_7X14,
            15..=17 => &FONT_9X15,
            18..=19 => &FONT_9X18,
            _ => &FONT_10X20,
        }
    }

    fn style(size: f32) -> MonoTextStyle<'static, Gray8> {
        MonoTextStyle::new(Self::font_for_size(size), Gray8::WHITE)
    }
}

impl TextRasterizer for MonoTextRasterizer {
    fn measure(&self, text: &str, size: f32) -> (u32, u32) {
        let metrics = Self::style(size).measure_string(text, Point::zero(), Baseline::Top);
        let size = metrics.bounding_box.size;
        (size.width, size.height)
    }

    fn draw(&self, canvas: &mut PixelGrid, text: &str, size: f32, x: i32, y: i32) {
        let _ = Text::with_baseline(text, Point::new(x, y), Self::style(size), Baseline::Top)
            .draw(canvas);
    }
}
