//! Host-side animation playback
//!
//! Frames are buffer snapshots played back in insertion order. The cursor
//! wraps to the first frame once every frame has been shown.

use alloc::vec::Vec;

use crate::framebuffer::{Frame, FrameBuffer};

/// Ordered list of frames plus a playback cursor
#[derive(Debug, Clone, Default)]
pub struct AnimationSequencer {
    frames: Vec<Frame>,
    cursor: usize,
}

impl AnimationSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a copy of the buffer as the next frame
    pub fn add_frame(&mut self, buffer: &FrameBuffer) {
        self.frames.push(buffer.snapshot());
    }

    /// Append an already captured frame
    pub fn push(&mut self, frame: Frame) {
        self.frames.push(frame);
    }

    /// Drop all frames and rewind
    pub fn clear(&mut self) {
        self.frames.clear();
        self.cursor = 0;
    }

    /// Index of the frame the next `advance` would return (before wrapping)
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Whether the next `advance` starts over at the first frame
    pub fn will_wrap(&self) -> bool {
        !self.frames.is_empty() && self.cursor >= self.frames.len()
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Return the next frame and its index, then move the cursor
    ///
    /// Returns `None` when there are no frames.
    pub fn advance(&mut self) -> Option<(usize, &Frame)> {
        if self.frames.is_empty() {
            return None;
        }
        if self.cursor >= self.frames.len() {
            self.cursor = 0;
        }
        let index = self.cursor;
        self.cursor += 1;
        self.frames.get(index).map(|frame| (index, frame))
    }
}
