//! Anime Matrix driver
//!
//! Ties the core geometry and rasterization to a report transport:
//!
//! ```text
//!   draw (text, image, clock, patterns)
//!        |
//!        v
//!   FrameBuffer --present--> write-range pages + commit --> Transport
//!        ^
//!        |
//!   AnimationSequencer (stored frames, played in order)
//! ```
//!
//! # Example
//!
//! ```
//! use anime_device::mock::EmulatedMatrix;
//! use anime_device::{AnimeMatrix, HardwareVariant};
//!
//! let variant = HardwareVariant::Ga402;
//! let mut matrix = AnimeMatrix::new(EmulatedMatrix::new(variant), variant);
//! matrix.wake_up().unwrap();
//! matrix.set_linear(0, 255);
//! matrix.present().unwrap();
//! assert_eq!(matrix.transport().visible()[0], 255);
//! ```

#![no_std]
#![deny(unsafe_code)]

extern crate alloc;

// Must come first so the logging macros are visible to the other modules
mod fmt;

pub mod error;
pub mod matrix;
pub mod mock;

pub use anime_core::HardwareVariant;
pub use error::DeviceError;
pub use matrix::AnimeMatrix;
