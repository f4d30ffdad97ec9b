//! Canvas to LED transfer in text and image mode

use crate::framebuffer::FrameBuffer;
use crate::geometry::HardwareVariant;
use crate::raster::{ImageOptions, PixelGrid};
use crate::traits::{ImageSource, Placement, TextRasterizer};

/// Text pixels at or below this brightness are skipped in thresholded mode
pub const TEXT_THRESHOLD: u8 = 100;

/// Image pixels below this brightness are written as 0
pub const BACKGROUND_CUTOFF: u8 = 10;

/// Where and how text is placed in text mode
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TextLayout {
    /// Nominal font size in pixels
    pub size: f32,
    /// Text origin on the canvas
    pub x: i32,
    pub y: i32,
    /// Diagonal transform deltas
    pub delta_x: i32,
    pub delta_y: i32,
    /// Only copy pixels brighter than this; `None` copies every pixel
    pub threshold: Option<u8>,
}

impl TextLayout {
    /// Layout at the canvas origin, copying only bright pixels
    pub const fn thresholded(size: f32, delta_x: i32, delta_y: i32) -> Self {
        Self {
            size,
            x: 0,
            y: 0,
            delta_x,
            delta_y,
            threshold: Some(TEXT_THRESHOLD),
        }
    }
}

/// Canvas for text mode: `floor(sqrt(rows² + cols²))` by `rows`
pub fn text_canvas(variant: HardwareVariant) -> PixelGrid {
    let rows = variant.max_rows() as f64;
    let cols = variant.max_columns() as f64;
    let width = libm::sqrt(rows * rows + cols * cols) as u32;
    PixelGrid::new(width, variant.max_rows() as u32)
}

/// Canvas for image mode: twice the panel width by `rows`
pub fn image_canvas(variant: HardwareVariant) -> PixelGrid {
    PixelGrid::new(
        (variant.max_columns() * 2) as u32,
        variant.max_rows() as u32,
    )
}

/// Rasterize text and copy it onto the buffer through the diagonal transform
///
/// The buffer is not cleared first.
pub fn draw_text_diagonal<R: TextRasterizer + ?Sized>(
    buffer: &mut FrameBuffer,
    rasterizer: &R,
    text: &str,
    layout: &TextLayout,
) {
    let mut canvas = text_canvas(buffer.variant());
    rasterizer.draw(&mut canvas, text, layout.size, layout.x, layout.y);

    for (x, y, value) in canvas.pixels() {
        if let Some(threshold) = layout.threshold {
            if value <= threshold {
                continue;
            }
        }
        buffer.set_diagonal(x, y, value, layout.delta_x, layout.delta_y);
    }
}

/// Destination rectangle of an image on the image-mode canvas
///
/// The image is fitted into a `cols / 2 * 6` by `rows` box, zoomed, then
/// squeezed horizontally onto the `cols * 2` wide canvas and right-aligned
/// before panning. Rounding is half-to-even.
pub fn image_placement(
    variant: HardwareVariant,
    (image_width, image_height): (u32, u32),
    options: &ImageOptions,
) -> Placement {
    if image_width == 0 || image_height == 0 {
        return Placement {
            x: 0,
            y: -options.pan_y,
            width: 0,
            height: 0,
        };
    }

    let box_width = (variant.max_columns() / 2 * 6) as f32;
    let box_height = variant.max_rows() as f32;
    let target_width = (variant.max_columns() * 2) as f32;

    let scale = (box_width / image_width as f32).min(box_height / image_height as f32)
        * options.zoom
        / 100.0;
    let scaled_width = image_width as f32 * scale;
    let scaled_height = image_height as f32 * scale;

    let x = target_width - (scaled_width + options.pan_x as f32) * target_width / box_width;
    Placement {
        x: libm::rintf(x) as i32,
        y: -options.pan_y,
        width: libm::rintf(scaled_width * target_width / box_width) as u32,
        height: libm::rintf(scaled_height) as u32,
    }
}

/// Scale an image onto the image-mode canvas and copy it onto the buffer
///
/// Every canvas pixel is written, so areas outside the image go dark.
pub fn draw_image<S: ImageSource + ?Sized>(
    buffer: &mut FrameBuffer,
    source: &S,
    options: &ImageOptions,
) {
    let variant = buffer.variant();
    let mut canvas = image_canvas(variant);
    let dest = image_placement(variant, source.dimensions(), options);
    source.draw_scaled(&mut canvas, dest, options.quality);

    for (x, y, value) in canvas.pixels() {
        let value = if value < BACKGROUND_CUTOFF { 0 } else { value };
        buffer.set_diagonal(x, y, value, 0, variant.image_shift_y());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::ImageQuality;
    use alloc::vec;

    /// Writes fixed pixels regardless of the text
    struct Dots(&'static [(i32, i32, u8)]);

    impl TextRasterizer for Dots {
        fn measure(&self, _text: &str, _size: f32) -> (u32, u32) {
            (0, 0)
        }

        fn draw(&self, canvas: &mut PixelGrid, _text: &str, _size: f32, x: i32, y: i32) {
            for &(dx, dy, v) in self.0 {
                canvas.set(x + dx, y + dy, v);
            }
        }
    }

    #[test]
    fn test_text_canvas_sizes() {
        let c = text_canvas(HardwareVariant::Ga402);
        assert_eq!((c.width(), c.height()), (69, 61));
        let c = text_canvas(HardwareVariant::Ga401);
        assert_eq!((c.width(), c.height()), (64, 55));
        let c = text_canvas(HardwareVariant::Gu604);
        assert_eq!((c.width(), c.height()), (99, 92));
    }

    #[test]
    fn test_threshold_skips_dim_pixels() {
        let mut fb = FrameBuffer::new(HardwareVariant::Ga402);
        fb.set_linear(0, 7);
        let layout = TextLayout::thresholded(13.0, 0, 0);
        draw_text_diagonal(&mut fb, &Dots(&[(0, 0, 50), (1, 0, 200)]), "x", &layout);

        // (1, 0) -> planar (0, 1) -> address 34; (0, 0) was too dim
        assert_eq!(fb.get(34), Some(200));
        assert_eq!(fb.get(0), Some(7));
    }

    #[test]
    fn test_unthresholded_copies_everything() {
        let mut fb = FrameBuffer::new(HardwareVariant::Ga402);
        fb.fill(9);
        let layout = TextLayout {
            threshold: None,
            ..TextLayout::thresholded(13.0, 0, 0)
        };
        draw_text_diagonal(&mut fb, &Dots(&[(0, 0, 50)]), "x", &layout);

        assert_eq!(fb.get(0), Some(50));
        // Dark canvas pixels overwrite the previous contents
        assert_eq!(fb.get(34), Some(0));
    }

    #[test]
    fn test_text_origin_offsets_canvas() {
        let mut a = FrameBuffer::new(HardwareVariant::Ga402);
        let mut b = FrameBuffer::new(HardwareVariant::Ga402);
        let layout = TextLayout {
            x: 4,
            y: 1,
            ..TextLayout::thresholded(13.0, 0, 0)
        };
        draw_text_diagonal(&mut a, &Dots(&[(0, 0, 255)]), "x", &layout);
        b.set_diagonal(4, 1, 255, 0, 0);
        assert_eq!(a, b);
        // (4, 1) -> planar (1, 5)
        assert_eq!(a.get(b.variant().row_to_linear_address(5) + 1), Some(255));
    }

    #[test]
    fn test_square_image_placement() {
        let p = image_placement(HardwareVariant::Ga402, (10, 10), &ImageOptions::default());
        // box 102x61, canvas 68 wide: fitted 61x61, squeezed to 40.67 wide
        assert_eq!(
            p,
            Placement {
                x: 27,
                y: 0,
                width: 41,
                height: 61
            }
        );
    }

    #[test]
    fn test_zoom_and_pan() {
        let options = ImageOptions {
            zoom: 50.0,
            pan_x: 3,
            pan_y: 4,
            ..Default::default()
        };
        let p = image_placement(HardwareVariant::Ga402, (10, 10), &options);
        // fitted 30.5 square; x = 68 - (30.5 + 3) * 68 / 102 = 45.67
        assert_eq!(p.x, 46);
        assert_eq!(p.y, -4);
        assert_eq!(p.width, 20);
        assert_eq!(p.height, 30);
    }

    #[test]
    fn test_empty_image_placement() {
        let p = image_placement(HardwareVariant::Ga401, (0, 5), &ImageOptions::default());
        assert_eq!((p.width, p.height), (0, 0));
    }

    #[test]
    fn test_draw_image_background_cutoff() {
        let mut fb = FrameBuffer::new(HardwareVariant::Ga402);
        fb.fill(1);
        let dim = PixelGrid::from_luma(4, 4, vec![9; 16]).unwrap();
        draw_image(&mut fb, &dim, &ImageOptions::default());
        assert!(fb.as_slice().iter().all(|&v| v == 0 || v == 1));
        assert!(fb.as_slice().iter().any(|&v| v == 0));
    }

    #[test]
    fn test_draw_image_lights_leds() {
        let mut fb = FrameBuffer::new(HardwareVariant::Ga402);
        let white = PixelGrid::from_luma(10, 10, vec![255; 100]).unwrap();
        draw_image(&mut fb, &white, &ImageOptions::default());

        let lit = fb.as_slice().iter().filter(|&&v| v == 255).count();
        assert!(lit > 100);
        assert!(fb.as_slice().iter().all(|&v| v == 0 || v == 255));
    }

    #[test]
    fn test_draw_image_quality() {
        let ramp = PixelGrid::from_luma(2, 1, vec![0, 255]).unwrap();
        let is_hard = |v: u8| v == 0 || v == 255;

        let mut nearest = FrameBuffer::new(HardwareVariant::Ga402);
        draw_image(&mut nearest, &ramp, &ImageOptions::default());
        assert!(nearest.as_slice().iter().all(|&v| is_hard(v)));

        let mut smooth = FrameBuffer::new(HardwareVariant::Ga402);
        let options = ImageOptions {
            quality: ImageQuality::Bilinear,
            ..Default::default()
        };
        draw_image(&mut smooth, &ramp, &options);
        assert!(smooth.as_slice().iter().any(|&v| !is_hard(v)));
    }
}
