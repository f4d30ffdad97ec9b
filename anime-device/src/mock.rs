//! Mock transports for testing
//!
//! - [`RecordingTransport`] stores every report and can fail on demand
//! - [`EmulatedMatrix`] decodes reports and behaves like a real panel:
//!   range writes are staged and only become visible on commit

#![cfg(any(test, feature = "mock"))]

use alloc::vec;
use alloc::vec::Vec;

use anime_core::HardwareVariant;
use anime_hal::Transport;
use anime_protocol::{Brightness, BuiltInAnimation, Command, Packet, PacketError};

/// Error injected by [`RecordingTransport`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SendFailed {
    /// 0-based index of the failed send attempt
    pub attempt: usize,
}

/// Transport that records every report
#[derive(Debug, Clone, Default)]
pub struct RecordingTransport {
    reports: Vec<Vec<u8>>,
    attempts: usize,
    fail_at: Option<usize>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail the send attempt with this 0-based index
    ///
    /// The failed report is not recorded; later sends succeed again.
    pub fn failing_at(attempt: usize) -> Self {
        Self {
            fail_at: Some(attempt),
            ..Self::default()
        }
    }

    /// Successfully sent reports, oldest first
    pub fn reports(&self) -> &[Vec<u8>] {
        &self.reports
    }

    /// Number of send attempts, including the failed one
    pub fn attempts(&self) -> usize {
        self.attempts
    }

    pub fn clear(&mut self) {
        self.reports.clear();
    }
}

impl Transport for RecordingTransport {
    type Error = SendFailed;

    fn send_report(&mut self, report: &[u8]) -> Result<(), Self::Error> {
        let attempt = self.attempts;
        self.attempts += 1;
        if self.fail_at == Some(attempt) {
            return Err(SendFailed { attempt });
        }
        self.reports.push(report.to_vec());
        Ok(())
    }
}

/// Errors reported by [`EmulatedMatrix`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmulatorError {
    /// Report could not be decoded
    Packet(PacketError),
    /// Range write past the end of the LED buffer
    OutOfRange { start: usize, len: usize },
}

impl From<PacketError> for EmulatorError {
    fn from(e: PacketError) -> Self {
        EmulatorError::Packet(e)
    }
}

/// Software model of the matrix controller
#[derive(Debug, Clone)]
pub struct EmulatedMatrix {
    staged: Vec<u8>,
    visible: Vec<u8>,
    commits: usize,
    awake: bool,
    display_enabled: bool,
    brightness: Brightness,
    builtin_enabled: bool,
    builtin: BuiltInAnimation,
}

impl EmulatedMatrix {
    /// Dark panel sized for the model
    pub fn new(variant: HardwareVariant) -> Self {
        Self {
            staged: vec![0; variant.led_count()],
            visible: vec![0; variant.led_count()],
            commits: 0,
            awake: false,
            display_enabled: true,
            brightness: Brightness::default(),
            builtin_enabled: false,
            builtin: BuiltInAnimation::default(),
        }
    }

    /// What the panel currently shows
    pub fn visible(&self) -> &[u8] {
        &self.visible
    }

    /// Writes received since the last commit
    pub fn staged(&self) -> &[u8] {
        &self.staged
    }

    pub fn commits(&self) -> usize {
        self.commits
    }

    pub fn is_awake(&self) -> bool {
        self.awake
    }

    pub fn display_enabled(&self) -> bool {
        self.display_enabled
    }

    pub fn brightness(&self) -> Brightness {
        self.brightness
    }

    pub fn builtin_enabled(&self) -> bool {
        self.builtin_enabled
    }

    pub fn builtin(&self) -> BuiltInAnimation {
        self.builtin
    }
}

impl Transport for EmulatedMatrix {
    type Error = EmulatorError;

    fn send_report(&mut self, report: &[u8]) -> Result<(), Self::Error> {
        let packet = Packet::from_report(report)?;

        match Command::from_packet(&packet)? {
            Command::WriteRange { start, data } => {
                let start = start as usize;
                let target = self
                    .staged
                    .get_mut(start..start + data.len())
                    .ok_or(EmulatorError::OutOfRange {
                        start,
                        len: data.len(),
                    })?;
                target.copy_from_slice(data);
            }
            Command::Commit => {
                self.visible.copy_from_slice(&self.staged);
                self.commits += 1;
            }
            Command::SetBrightness(level) => self.brightness = level,
            Command::SetDisplay { enabled } => self.display_enabled = enabled,
            Command::SetBuiltInEnabled { enabled } => self.builtin_enabled = enabled,
            Command::SelectBuiltIn(selection) => self.builtin = selection,
            Command::WakeUp => self.awake = true,
        }
        Ok(())
    }
}
