//! Rasterization collaborator traits
//!
//! The core never depends on a particular font engine or image decoder.
//! Callers plug in anything that can draw grayscale pixels onto a
//! [`PixelGrid`](crate::raster::PixelGrid) canvas.

pub mod raster;

pub use raster::{ImageQuality, ImageSource, Placement, TextRasterizer};
