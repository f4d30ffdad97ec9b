//! Ready-made scenes: diagonal text, clock and two-line banner

use core::fmt::Write;

use heapless::String;

use crate::framebuffer::FrameBuffer;
use crate::raster::{draw_image, draw_text_diagonal, ImageOptions, PixelGrid, TextLayout};
use crate::traits::TextRasterizer;

/// Font size of full-panel diagonal text
pub const DIAGONAL_TEXT_SIZE: f32 = 13.0;

/// Longest clock line ("yy. MM. dd")
pub const MAX_CLOCK_TEXT: usize = 10;

/// Local wall-clock time, supplied by the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WallClock {
    pub year: u16,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl WallClock {
    /// `HH:mm`, with the colon replaced by two blanks on odd seconds
    ///
    /// Fields are taken modulo 100 so each one stays two digits wide.
    pub fn time_text(&self) -> String<MAX_CLOCK_TEXT> {
        let separator = if self.second % 2 == 0 { ":" } else { "  " };
        let mut text = String::new();
        write!(
            text,
            "{:02}{}{:02}",
            self.hour % 100,
            separator,
            self.minute % 100
        )
        .ok();
        text
    }

    /// `yy. MM. dd`, fields taken modulo 100
    pub fn date_text(&self) -> String<MAX_CLOCK_TEXT> {
        let mut text = String::new();
        write!(
            text,
            "{:02}. {:02}. {:02}",
            self.year % 100,
            self.month % 100,
            self.day % 100
        )
        .ok();
        text
    }
}

/// Clear the buffer and draw one line of text across the panel diagonal
///
/// Every canvas pixel is copied, so the text keeps its anti-aliasing.
pub fn draw_diagonal_text<R: TextRasterizer + ?Sized>(
    buffer: &mut FrameBuffer,
    rasterizer: &R,
    text: &str,
) {
    buffer.clear();
    let layout = TextLayout {
        size: DIAGONAL_TEXT_SIZE,
        x: 4,
        y: 1,
        delta_x: 0,
        delta_y: 10,
        threshold: None,
    };
    draw_text_diagonal(buffer, rasterizer, text, &layout);
}

/// Clear the buffer and draw time and date
pub fn draw_clock<R: TextRasterizer + ?Sized>(
    buffer: &mut FrameBuffer,
    rasterizer: &R,
    clock: &WallClock,
) {
    let shift = buffer.variant().text_shift();
    buffer.clear();

    let time = TextLayout::thresholded(15.0, 12, shift + 11);
    draw_text_diagonal(buffer, rasterizer, &clock.time_text(), &time);

    let date = TextLayout::thresholded(11.5, 3, shift);
    draw_text_diagonal(buffer, rasterizer, &clock.date_text(), &date);
}

/// Render a right-aligned two-line banner onto a fresh canvas
///
/// The canvas is `cols * 3` by `rows`. The first line is drawn at 22 px,
/// the optional second line at 18 px below it.
pub fn compose_banner<R: TextRasterizer + ?Sized>(
    buffer: &FrameBuffer,
    rasterizer: &R,
    line1: &str,
    line2: &str,
) -> PixelGrid {
    let variant = buffer.variant();
    let width = variant.max_columns() * 3;
    let mut canvas = PixelGrid::new(width as u32, variant.max_rows() as u32);

    let (w, _) = rasterizer.measure(line1, 22.0);
    rasterizer.draw(&mut canvas, line1, 22.0, width - w as i32 + 3, -4);

    if !line2.is_empty() {
        let (w, _) = rasterizer.measure(line2, 18.0);
        rasterizer.draw(&mut canvas, line2, 18.0, width - w as i32 + 1, 25);
    }
    canvas
}

/// Render a banner and place it on the buffer in image mode
pub fn draw_banner<R: TextRasterizer + ?Sized>(
    buffer: &mut FrameBuffer,
    rasterizer: &R,
    line1: &str,
    line2: &str,
) {
    let canvas = compose_banner(buffer, rasterizer, line1, line2);
    draw_image(buffer, &canvas, &ImageOptions::default());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::HardwareVariant;
    use crate::raster::MonoTextRasterizer;

    fn clock(second: u8) -> WallClock {
        WallClock {
            year: 2026,
            month: 3,
            day: 7,
            hour: 9,
            minute: 5,
            second,
        }
    }

    #[test]
    fn test_time_colon_blinks() {
        assert_eq!(clock(0).time_text().as_str(), "09:05");
        assert_eq!(clock(1).time_text().as_str(), "09  05");
    }

    #[test]
    fn test_date_format() {
        assert_eq!(clock(0).date_text().as_str(), "26. 03. 07");
    }

    #[test]
    fn test_out_of_range_fields_keep_layout() {
        let odd = WallClock {
            year: 2026,
            month: 123,
            day: 7,
            hour: 250,
            minute: 5,
            second: 1,
        };
        assert_eq!(odd.date_text().as_str(), "26. 23. 07");
        assert_eq!(odd.time_text().as_str(), "50  05");
    }

    #[test]
    fn test_clock_lights_panel() {
        let mut fb = FrameBuffer::new(HardwareVariant::Ga402);
        fb.fill(3);
        draw_clock(&mut fb, &MonoTextRasterizer::new(), &clock(0));

        // Cleared first, then only bright glyph pixels are written
        assert!(fb.as_slice().iter().all(|&v| v == 0 || v == 255));
        assert!(fb.as_slice().iter().any(|&v| v == 255));
    }

    #[test]
    fn test_diagonal_text_clears_first() {
        let mut fb = FrameBuffer::new(HardwareVariant::Ga401);
        fb.fill(3);
        draw_diagonal_text(&mut fb, &MonoTextRasterizer::new(), "");
        assert!(fb.as_slice().iter().all(|&v| v == 0));

        draw_diagonal_text(&mut fb, &MonoTextRasterizer::new(), "HELLO");
        assert!(fb.as_slice().iter().any(|&v| v == 255));
    }

    #[test]
    fn test_banner_right_aligned() {
        let fb = FrameBuffer::new(HardwareVariant::Ga402);
        let r = MonoTextRasterizer::new();
        let canvas = compose_banner(&fb, &r, "AB", "");

        assert_eq!(canvas.width(), 102);
        assert_eq!(canvas.height(), 61);
        // Two 10x20 glyphs end 3 px past the right edge
        let lit_columns: alloc::vec::Vec<i32> = canvas
            .pixels()
            .filter(|&(_, _, v)| v != 0)
            .map(|(x, _, _)| x)
            .collect();
        assert!(!lit_columns.is_empty());
        assert!(lit_columns.iter().all(|&x| x >= 102 - 20 + 3));
    }

    #[test]
    fn test_banner_renders_to_leds() {
        let mut fb = FrameBuffer::new(HardwareVariant::Ga402);
        draw_banner(&mut fb, &MonoTextRasterizer::new(), "88", "OK");
        assert!(fb.as_slice().iter().any(|&v| v == 255));
    }
}
