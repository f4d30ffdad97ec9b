//! Anime Matrix Report Protocol
//!
//! This crate defines the vendor HID protocol spoken by the LED matrix
//! controller in ROG laptop lids. Every command travels in a fixed-size
//! feature report:
//!
//! ```text
//! ┌───────────┬────────────────────────────┬──────────────┐
//! │ REPORT ID │ COMMAND (opcode + args)    │ ZERO PADDING │
//! │ 1B (0x5E) │ 0–639B                     │ to 640B      │
//! └───────────┴────────────────────────────┴──────────────┘
//! ```
//!
//! The controller keeps a staging copy of the LED buffer. Write-range
//! commands fill it, and nothing becomes visible until a commit.

#![no_std]
#![deny(unsafe_code)]

pub mod commands;
pub mod packet;
pub mod settings;

pub use commands::{Command, MAX_WRITE_LEN, WAKE_HANDSHAKE};
pub use packet::{Packet, PacketError, MAX_PAYLOAD_SIZE, REPORT_ID, REPORT_LEN};
pub use settings::{Brightness, BuiltInAnimation, Running, Shutdown, Sleeping, Startup};
