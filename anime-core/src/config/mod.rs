//! Configuration types
//!
//! Model-agnostic matrix settings, loadable from TOML when the `toml`
//! feature is enabled.

#[cfg(feature = "toml")]
mod loader;
pub mod types;

pub use types::*;
