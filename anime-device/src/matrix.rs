//! Matrix driver
//!
//! Owns the transport, the frame buffer and the animation frames. Drawing
//! operations only touch the buffer; nothing reaches the panel until
//! [`AnimeMatrix::present`] pages the buffer out and commits it.
//!
//! # Present sequence
//!
//! ```text
//! C0 02 | start+1 | len | leds[0 .. page]
//! C0 02 | start+1 | len | leds[page .. 2*page]
//! ...
//! C0 03                                   <- commit, panel updates
//! ```

use anime_core::config::MatrixConfig;
use anime_core::diagnostics::DiagnosticPattern;
use anime_core::raster::{self, ImageOptions};
use anime_core::scene::{self, WallClock};
use anime_core::traits::{ImageSource, TextRasterizer};
use anime_core::{AnimationSequencer, FrameBuffer, HardwareVariant};
use anime_hal::Transport;
use anime_protocol::{Brightness, BuiltInAnimation, Command, Packet};

use crate::error::DeviceError;

type Result<T, E> = core::result::Result<T, DeviceError<E>>;

fn send<T: Transport>(transport: &mut T, command: Command<'_>) -> Result<(), T::Error> {
    let packet = command.to_packet()?;
    transport
        .send_report(packet.as_bytes())
        .map_err(DeviceError::Transport)
}

/// Anime Matrix panel behind a report transport
pub struct AnimeMatrix<T: Transport> {
    transport: T,
    buffer: FrameBuffer,
    animation: AnimationSequencer,
}

impl<T: Transport> AnimeMatrix<T> {
    /// Create a driver with a dark buffer for the given model
    ///
    /// Nothing is sent; call [`wake_up`](Self::wake_up) first on a cold
    /// controller.
    pub fn new(transport: T, variant: HardwareVariant) -> Self {
        info!(
            "anime matrix: variant {:?}, {} LEDs",
            variant,
            variant.led_count()
        );
        Self {
            transport,
            buffer: FrameBuffer::new(variant),
            animation: AnimationSequencer::new(),
        }
    }

    /// Create a driver for the model named in a configuration
    pub fn from_config(transport: T, config: &MatrixConfig) -> Self {
        Self::new(transport, config.variant())
    }

    pub fn variant(&self) -> HardwareVariant {
        self.buffer.variant()
    }

    /// Current buffer contents
    pub fn buffer(&self) -> &FrameBuffer {
        &self.buffer
    }

    /// Direct buffer access for custom drawing
    pub fn buffer_mut(&mut self) -> &mut FrameBuffer {
        &mut self.buffer
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// Release the transport
    pub fn into_inner(self) -> T {
        self.transport
    }

    // ---- Buffer operations ----

    /// Set one LED by linear address (buffer only)
    pub fn set_linear(&mut self, address: i32, value: u8) {
        self.buffer.set_linear(address, value);
    }

    /// Set one LED by planar coordinate (buffer only)
    pub fn set_planar(&mut self, col: i32, row: i32, value: u8) {
        self.buffer.set_planar(col, row, value);
    }

    /// Set one LED by rotated-grid coordinate (buffer only)
    pub fn set_diagonal(&mut self, x: i32, y: i32, value: u8, delta_x: i32, delta_y: i32) {
        self.buffer.set_diagonal(x, y, value, delta_x, delta_y);
    }

    /// Set one LED and push it to the panel right away
    ///
    /// Sends a one-byte range write plus a commit. Out-of-range addresses
    /// are ignored and send nothing.
    pub fn set_linear_immediate(&mut self, address: i32, value: u8) -> Result<(), T::Error> {
        if !self.variant().is_addressable(address) {
            return Ok(());
        }
        self.buffer.set_linear(address, value);

        let data = [value];
        send(
            &mut self.transport,
            Command::WriteRange {
                start: address as u16,
                data: &data,
            },
        )?;
        send(&mut self.transport, Command::Commit)
    }

    /// Zero the buffer, optionally presenting the result
    pub fn clear(&mut self, present: bool) -> Result<(), T::Error> {
        self.buffer.clear();
        if present {
            self.present()?;
        }
        Ok(())
    }

    // ---- Transmission ----

    /// Send the whole buffer in pages, then commit
    ///
    /// Stops at the first failed report; the panel keeps showing the last
    /// committed frame in that case.
    pub fn present(&mut self) -> Result<(), T::Error> {
        let page = self.buffer.variant().update_page_length();
        let leds = self.buffer.as_slice();
        debug!("present: {} pages", leds.len().div_ceil(page));

        for (index, data) in leds.chunks(page).enumerate() {
            let start = (index * page) as u16;
            trace!("present: page {} at {} ({} LEDs)", index, start, data.len());

            if let Err(e) = send(&mut self.transport, Command::WriteRange { start, data }) {
                warn!("present: page {} failed", index);
                return Err(e);
            }
        }

        if let Err(e) = send(&mut self.transport, Command::Commit) {
            warn!("present: commit failed");
            return Err(e);
        }
        Ok(())
    }

    /// Send the identification handshake
    pub fn wake_up(&mut self) -> Result<(), T::Error> {
        info!("anime matrix: wake up");
        send(&mut self.transport, Command::WakeUp)
    }

    /// Turn the panel on or off
    pub fn set_display_state(&mut self, enabled: bool) -> Result<(), T::Error> {
        info!("anime matrix: display {}", enabled);
        send(&mut self.transport, Command::SetDisplay { enabled })
    }

    pub fn set_brightness(&mut self, level: Brightness) -> Result<(), T::Error> {
        info!("anime matrix: brightness {}", level.to_byte());
        send(&mut self.transport, Command::SetBrightness(level))
    }

    /// Enable or disable the firmware animations
    pub fn set_builtin_animation_enabled(&mut self, enabled: bool) -> Result<(), T::Error> {
        info!("anime matrix: built-in animation {}", enabled);
        send(&mut self.transport, Command::SetBuiltInEnabled { enabled })
    }

    /// Enable or disable the firmware animations, then select presets
    pub fn set_builtin_animation(
        &mut self,
        enabled: bool,
        selection: BuiltInAnimation,
    ) -> Result<(), T::Error> {
        self.set_builtin_animation_enabled(enabled)?;
        debug!("anime matrix: built-in selection {}", selection.to_byte());
        send(&mut self.transport, Command::SelectBuiltIn(selection))
    }

    /// Wrap arbitrary payload bytes in a report and send it
    pub fn send_raw(&mut self, payload: &[u8]) -> Result<(), T::Error> {
        let packet = Packet::new(payload)?;
        self.transport
            .send_report(packet.as_bytes())
            .map_err(DeviceError::Transport)
    }

    /// Push display, brightness and built-in animation settings
    pub fn apply_config(&mut self, config: &MatrixConfig) -> Result<(), T::Error> {
        info!("anime matrix: applying configuration");
        self.set_display_state(config.display_enabled)?;
        self.set_brightness(config.brightness)?;
        self.set_builtin_animation(config.builtin.enabled, config.builtin.selection())
    }

    // ---- Animation ----

    /// Store a copy of the current buffer as the next animation frame
    pub fn add_frame(&mut self) {
        self.animation.add_frame(&self.buffer);
        debug!("animation: {} frames", self.animation.len());
    }

    /// Drop all animation frames
    pub fn clear_frames(&mut self) {
        self.animation.clear();
    }

    pub fn frame_count(&self) -> usize {
        self.animation.len()
    }

    /// Load and present the next animation frame
    ///
    /// Returns the index of the presented frame, or `None` without
    /// sending anything when no frames are stored.
    pub fn present_next_frame(&mut self) -> Result<Option<usize>, T::Error> {
        let wrapped = self.animation.will_wrap();
        let Some((index, frame)) = self.animation.advance() else {
            return Ok(None);
        };
        self.buffer.restore(frame);
        if wrapped {
            debug!("animation: wrapped after {} frames", self.animation.len());
        }
        trace!("animation: frame {} of {}", index, self.animation.len());
        self.present()?;
        Ok(Some(index))
    }

    // ---- Scenes ----

    /// Draw one line of text across the panel diagonal and present it
    pub fn present_text_diagonal<R: TextRasterizer + ?Sized>(
        &mut self,
        rasterizer: &R,
        text: &str,
    ) -> Result<(), T::Error> {
        scene::draw_diagonal_text(&mut self.buffer, rasterizer, text);
        self.present()
    }

    /// Draw a two-line banner and present it
    pub fn present_text<R: TextRasterizer + ?Sized>(
        &mut self,
        rasterizer: &R,
        line1: &str,
        line2: &str,
    ) -> Result<(), T::Error> {
        scene::draw_banner(&mut self.buffer, rasterizer, line1, line2);
        self.present()
    }

    /// Draw time and date and present them
    pub fn present_clock<R: TextRasterizer + ?Sized>(
        &mut self,
        rasterizer: &R,
        clock: &WallClock,
    ) -> Result<(), T::Error> {
        scene::draw_clock(&mut self.buffer, rasterizer, clock);
        self.present()
    }

    /// Scale an image onto the buffer (not presented)
    pub fn generate_frame<S: ImageSource + ?Sized>(&mut self, image: &S, options: &ImageOptions) {
        raster::draw_image(&mut self.buffer, image, options);
    }

    /// Scale an image onto the panel and present it
    pub fn present_image<S: ImageSource + ?Sized>(
        &mut self,
        image: &S,
        options: &ImageOptions,
    ) -> Result<(), T::Error> {
        self.generate_frame(image, options);
        self.present()
    }

    /// Draw a diagnostic pattern and present it
    pub fn present_diagnostic(&mut self, pattern: DiagnosticPattern) -> Result<(), T::Error> {
        debug!("anime matrix: diagnostic {:?}", pattern);
        pattern.draw(&mut self.buffer);
        self.present()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::RecordingTransport;
    use anime_protocol::{Running, Shutdown, Sleeping, Startup};

    fn matrix(variant: HardwareVariant) -> AnimeMatrix<RecordingTransport> {
        AnimeMatrix::new(RecordingTransport::new(), variant)
    }

    #[test]
    fn test_new_sends_nothing() {
        let m = matrix(HardwareVariant::Ga402);
        assert!(m.transport().reports().is_empty());
        assert_eq!(m.buffer().len(), 1450);
    }

    #[test]
    fn test_immediate_write() {
        let mut m = matrix(HardwareVariant::Ga402);
        m.set_linear_immediate(5, 200).unwrap();

        let reports = m.transport().reports();
        assert_eq!(reports.len(), 2);
        assert_eq!(&reports[0][1..8], &[0xC0, 0x02, 0x06, 0x00, 0x01, 0x00, 200]);
        assert_eq!(&reports[1][1..3], &[0xC0, 0x03]);
        assert_eq!(m.buffer().get(5), Some(200));
    }

    #[test]
    fn test_immediate_write_out_of_range() {
        let mut m = matrix(HardwareVariant::Ga402);
        m.set_linear_immediate(1450, 200).unwrap();
        m.set_linear_immediate(-3, 200).unwrap();
        assert!(m.transport().reports().is_empty());
    }

    #[test]
    fn test_control_commands() {
        let mut m = matrix(HardwareVariant::Ga401);
        m.wake_up().unwrap();
        m.set_display_state(false).unwrap();
        m.set_brightness(Brightness::Dim).unwrap();

        let reports = m.transport().reports();
        assert_eq!(&reports[0][1..15], b"ASUS Tech.Inc.");
        assert_eq!(&reports[1][1..4], &[0xC3, 0x01, 0x80]);
        assert_eq!(&reports[2][1..4], &[0xC0, 0x04, 0x01]);
    }

    #[test]
    fn test_builtin_animation_sends_enable_then_select() {
        let mut m = matrix(HardwareVariant::Ga402);
        let selection = BuiltInAnimation::new(
            Running::RogLogoGlitch,
            Sleeping::BannerSwipe,
            Shutdown::SeeYa,
            Startup::GlitchConstruction,
        );
        m.set_builtin_animation(true, selection).unwrap();

        let reports = m.transport().reports();
        assert_eq!(reports.len(), 2);
        assert_eq!(&reports[0][1..4], &[0xC4, 0x01, 0x00]);
        assert_eq!(&reports[1][1..3], &[0xC5, 0b0101]);
    }

    #[test]
    fn test_send_raw() {
        let mut m = matrix(HardwareVariant::Ga402);
        m.send_raw(&[0xC0, 0x04, 0x03]).unwrap();
        assert_eq!(&m.transport().reports()[0][..4], &[0x5E, 0xC0, 0x04, 0x03]);

        let too_big = [0u8; 640];
        assert!(matches!(
            m.send_raw(&too_big),
            Err(DeviceError::Packet(_))
        ));
    }

    #[test]
    fn test_clear_with_present() {
        let mut m = matrix(HardwareVariant::Ga402);
        m.set_linear(10, 1);
        m.clear(false).unwrap();
        assert!(m.transport().reports().is_empty());
        assert_eq!(m.buffer().get(10), Some(0));

        m.clear(true).unwrap();
        assert_eq!(m.transport().reports().len(), 4);
    }

    #[test]
    fn test_apply_config_order() {
        let mut m = matrix(HardwareVariant::Ga402);
        let mut config = MatrixConfig::default();
        config.brightness = Brightness::Full;
        config.builtin.enabled = true;
        m.apply_config(&config).unwrap();

        let opcodes: heapless::Vec<u8, 8> = m
            .transport()
            .reports()
            .iter()
            .map(|r| r[1])
            .collect();
        assert_eq!(&opcodes[..], &[0xC3, 0xC0, 0xC4, 0xC5]);
        assert_eq!(m.transport().reports()[1][3], 3);
    }

    #[test]
    fn test_present_next_frame_empty() {
        let mut m = matrix(HardwareVariant::Ga402);
        assert_eq!(m.present_next_frame().unwrap(), None);
        assert!(m.transport().reports().is_empty());
    }

    #[test]
    fn test_diagnostic_presents() {
        let mut m = matrix(HardwareVariant::Ga401);
        m.present_diagnostic(DiagnosticPattern::Border).unwrap();
        // 1245 LEDs in pages of 410: four writes plus commit
        assert_eq!(m.transport().reports().len(), 5);
        assert_eq!(m.buffer().get(1), Some(255));
    }
}
