//! Device-agnostic core logic for the Anime Matrix LED lid
//!
//! This crate contains everything that does not touch a transport:
//!
//! - Per-model geometry of the staggered LED rows
//! - The linear brightness buffer and its addressing rules
//! - Animation frame storage and playback order
//! - Rasterization of grayscale pixel grids onto the rotated LED grid
//! - Clock and banner scenes
//! - Legacy diagnostic patterns
//! - Configuration type definitions

#![no_std]
#![deny(unsafe_code)]

extern crate alloc;

pub mod animation;
pub mod config;
pub mod diagnostics;
pub mod framebuffer;
pub mod geometry;
pub mod raster;
pub mod scene;
pub mod traits;

pub use animation::AnimationSequencer;
pub use framebuffer::{Frame, FrameBuffer, MAX_LED_COUNT};
pub use geometry::{HardwareVariant, VariantSpec};
pub use raster::{ImageOptions, PixelGrid};
