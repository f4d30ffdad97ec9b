//! Grayscale pixel canvas
//!
//! Row-major, one luma byte per pixel. Implements `DrawTarget` so any
//! embedded-graphics primitive, font or image can be drawn into it.

use alloc::vec;
use alloc::vec::Vec;
use core::convert::Infallible;

use embedded_graphics::pixelcolor::{Gray8, GrayColor};
use embedded_graphics::prelude::{DrawTarget, OriginDimensions, Pixel, Size};

use crate::traits::{ImageQuality, ImageSource, Placement};

/// Rectangular grayscale canvas
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl PixelGrid {
    /// Create an all-black canvas
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; (width as usize) * (height as usize)],
        }
    }

    /// Wrap existing luma bytes
    ///
    /// Returns `None` if the byte count does not match the size.
    pub fn from_luma(width: u32, height: u32, pixels: Vec<u8>) -> Option<Self> {
        if pixels.len() != (width as usize) * (height as usize) {
            return None;
        }
        Some(Self {
            width,
            height,
            pixels,
        })
    }

    /// Convert packed RGB888 bytes, averaging the three channels
    pub fn from_rgb8(width: u32, height: u32, rgb: &[u8]) -> Option<Self> {
        if rgb.len() != (width as usize) * (height as usize) * 3 {
            return None;
        }
        let pixels = rgb
            .chunks_exact(3)
            .map(|c| ((c[0] as u16 + c[1] as u16 + c[2] as u16) / 3) as u8)
            .collect();
        Some(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.pixels
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    /// Pixel value, 0 outside the canvas
    pub fn get(&self, x: i32, y: i32) -> u8 {
        self.index(x, y)
            .and_then(|i| self.pixels.get(i).copied())
            .unwrap_or(0)
    }

    /// Set a pixel; no-op outside the canvas
    pub fn set(&mut self, x: i32, y: i32, value: u8) {
        if let Some(i) = self.index(x, y) {
            if let Some(pixel) = self.pixels.get_mut(i) {
                *pixel = value;
            }
        }
    }

    /// Iterate `(x, y, value)` in row-major order
    pub fn pixels(&self) -> impl Iterator<Item = (i32, i32, u8)> + '_ {
        let width = self.width.max(1) as usize;
        self.pixels
            .iter()
            .enumerate()
            .map(move |(i, &v)| ((i % width) as i32, (i / width) as i32, v))
    }
}

impl OriginDimensions for PixelGrid {
    fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

impl DrawTarget for PixelGrid {
    type Color = Gray8;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            self.set(point.x, point.y, color.luma());
        }
        Ok(())
    }
}

impl PixelGrid {
    /// Bilinear sample at a source position given in pixel centres
    fn sample_bilinear(&self, sx: f32, sy: f32) -> u8 {
        let max_x = (self.width - 1) as f32;
        let max_y = (self.height - 1) as f32;
        let sx = sx.clamp(0.0, max_x);
        let sy = sy.clamp(0.0, max_y);

        let x0 = libm::floorf(sx);
        let y0 = libm::floorf(sy);
        let fx = sx - x0;
        let fy = sy - y0;
        let (x0, y0) = (x0 as i32, y0 as i32);
        let x1 = (x0 + 1).min(max_x as i32);
        let y1 = (y0 + 1).min(max_y as i32);

        let lerp = |a: u8, b: u8, t: f32| a as f32 + (b as f32 - a as f32) * t;
        let top = lerp(self.get(x0, y0), self.get(x1, y0), fx);
        let bottom = lerp(self.get(x0, y1), self.get(x1, y1), fx);
        libm::rintf(top + (bottom - top) * fy).clamp(0.0, 255.0) as u8
    }
}

impl ImageSource for PixelGrid {
    fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn draw_scaled(&self, canvas: &mut PixelGrid, dest: Placement, quality: ImageQuality) {
        if dest.width == 0 || dest.height == 0 || self.width == 0 || self.height == 0 {
            return;
        }

        let x0 = dest.x.max(0);
        let y0 = dest.y.max(0);
        let x1 = (dest.x as i64 + dest.width as i64).min(canvas.width as i64) as i32;
        let y1 = (dest.y as i64 + dest.height as i64).min(canvas.height as i64) as i32;

        let step_x = self.width as f32 / dest.width as f32;
        let step_y = self.height as f32 / dest.height as f32;

        for cy in y0..y1 {
            let dy = cy - dest.y;
            for cx in x0..x1 {
                let dx = cx - dest.x;
                let value = match quality {
                    ImageQuality::Nearest => {
                        let sx = (dx as u64 * self.width as u64 / dest.width as u64) as i32;
                        let sy = (dy as u64 * self.height as u64 / dest.height as u64) as i32;
                        self.get(sx, sy)
                    }
                    ImageQuality::Bilinear => self.sample_bilinear(
                        (dx as f32 + 0.5) * step_x - 0.5,
                        (dy as f32 + 0.5) * step_y - 0.5,
                    ),
                };
                canvas.set(cx, cy, value);
            }
        }
    }
}
