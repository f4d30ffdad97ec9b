//! Linear LED brightness buffer
//!
//! One byte per LED, indexed by the controller's linear address. All
//! writes are bounds checked against the model's LED count and silently
//! ignored when out of range, so callers can rasterize without clipping.

use alloc::boxed::Box;
use heapless::Vec;

use crate::geometry::HardwareVariant;

/// LED count of the largest supported model
pub const MAX_LED_COUNT: usize = 1711;

/// Map a rotated-grid coordinate to a planar one
///
/// Coordinates are first shifted by `(delta_x, -delta_y)`, then
/// `col = (x - y) / 2` (truncating) and `row = x + y`.
pub const fn diagonal_to_planar(x: i32, y: i32, delta_x: i32, delta_y: i32) -> (i32, i32) {
    let x = x + delta_x;
    let y = y - delta_y;
    ((x - y) / 2, x + y)
}

/// Brightness buffer of one matrix
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    variant: HardwareVariant,
    leds: Vec<u8, MAX_LED_COUNT>,
}

impl FrameBuffer {
    /// Create an all-dark buffer sized for the model
    pub fn new(variant: HardwareVariant) -> Self {
        let mut leds = Vec::new();
        // Every model's LED count fits MAX_LED_COUNT
        let _ = leds.resize(variant.led_count(), 0);
        Self { variant, leds }
    }

    pub fn variant(&self) -> HardwareVariant {
        self.variant
    }

    /// Number of LEDs (always the model's LED count)
    pub fn len(&self) -> usize {
        self.leds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.leds.is_empty()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.leds
    }

    /// Brightness at a linear address
    pub fn get(&self, address: i32) -> Option<u8> {
        if !self.variant.is_addressable(address) {
            return None;
        }
        self.leds.get(address as usize).copied()
    }

    /// Set one LED by linear address
    ///
    /// No-op outside `[0, led_count)`.
    pub fn set_linear(&mut self, address: i32, value: u8) {
        if !self.variant.is_addressable(address) {
            return;
        }
        if let Some(led) = self.leds.get_mut(address as usize) {
            *led = value;
        }
    }

    /// Set one LED by planar coordinate
    ///
    /// No-op unless `first_x(row) <= col < width` and the resulting
    /// address is inside the buffer.
    pub fn set_planar(&mut self, col: i32, row: i32, value: u8) {
        if let Some(address) = self.variant.planar_to_linear(col, row) {
            self.set_linear(address, value);
        }
    }

    /// Set one LED by rotated-grid coordinate
    pub fn set_diagonal(&mut self, x: i32, y: i32, value: u8, delta_x: i32, delta_y: i32) {
        let (col, row) = diagonal_to_planar(x, y, delta_x, delta_y);
        self.set_planar(col, row, value);
    }

    /// Set every LED to the same brightness
    pub fn fill(&mut self, value: u8) {
        self.leds.iter_mut().for_each(|led| *led = value);
    }

    /// Set every LED to 0
    pub fn clear(&mut self) {
        self.fill(0);
    }

    /// Copy of the current contents
    pub fn snapshot(&self) -> Frame {
        Frame {
            leds: Box::from(self.as_slice()),
        }
    }

    /// Overwrite the buffer with a stored frame
    ///
    /// Frames are always taken from a buffer of the same model; if the
    /// lengths ever differ only the common prefix is copied.
    pub fn restore(&mut self, frame: &Frame) {
        let n = self.leds.len().min(frame.leds.len());
        self.leds[..n].copy_from_slice(&frame.leds[..n]);
    }
}

/// Immutable copy of a buffer, used as an animation frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    leds: Box<[u8]>,
}

impl Frame {
    pub fn as_slice(&self) -> &[u8] {
        &self.leds
    }

    pub fn len(&self) -> usize {
        self.leds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.leds.is_empty()
    }
}
