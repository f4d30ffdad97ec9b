//! Anime Matrix Hardware Abstraction Layer
//!
//! This crate defines the seam between the matrix driver and whatever
//! actually moves bytes to the panel (hidapi, rusb, a kernel hidraw node,
//! or a test double). The driver never enumerates devices itself.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  anime-device (AnimeMatrix presenter)   │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  anime-hal (this crate - traits)        │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │  USB HID      │       │  mock /       │
//! │  backend      │       │  emulator     │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`transport::Transport`] - Fixed-size report output

#![no_std]
#![deny(unsafe_code)]

pub mod transport;

// Re-export key items at crate root for convenience
pub use transport::{HidDeviceId, Transport, ANIME_MATRIX_HID};
