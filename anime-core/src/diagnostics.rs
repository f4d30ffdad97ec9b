//! Legacy diagnostic patterns
//!
//! These predate the per-model geometry tables and use a hand-fitted row
//! formula measured on GA401 hardware. They are kept for bring-up and
//! LED mapping checks only; nothing else in the crate relies on them.

use crate::framebuffer::FrameBuffer;

/// LEDs in a full legacy row
const LEGACY_ROW_LEDS: i32 = 33;

/// Rows covered by the legacy border
const LEGACY_ROWS: i32 = 55;

/// Test patterns selectable by a numeric code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DiagnosticPattern {
    /// Every LED from address 1 up at full brightness
    AllOn,
    /// The 60x36 diagonal grid fully lit
    DiagonalFill,
    /// The 60x36 diagonal grid in a checkerboard
    Checkerboard,
    /// Outline of the legacy rows
    Border,
}

impl DiagnosticPattern {
    /// Map a numeric code: 0 is all-on, -1 the diagonal fill, anything
    /// else the checkerboard
    pub fn from_code(code: i32) -> Self {
        match code {
            0 => DiagnosticPattern::AllOn,
            -1 => DiagnosticPattern::DiagonalFill,
            _ => DiagnosticPattern::Checkerboard,
        }
    }

    /// Clear the buffer and draw the pattern
    pub fn draw(self, buffer: &mut FrameBuffer) {
        buffer.clear();
        match self {
            DiagnosticPattern::AllOn => {
                for address in 1..=buffer.len() as i32 {
                    buffer.set_linear(address, 255);
                }
            }
            DiagnosticPattern::DiagonalFill => diagonal_grid(buffer, |_, _| true),
            DiagnosticPattern::Checkerboard => diagonal_grid(buffer, |x, y| (x + y) % 2 == 1),
            DiagnosticPattern::Border => draw_border(buffer),
        }
    }
}

fn diagonal_grid(buffer: &mut FrameBuffer, lit: impl Fn(i32, i32) -> bool) {
    for x in 1..=60 {
        for y in 1..=36 {
            if lit(x, y) {
                buffer.set_diagonal(x, y, 255, 0, 34);
            }
        }
    }
}

/// First and last linear address of a legacy row (1-based rows)
pub fn legacy_row_span(row: i32) -> (i32, i32) {
    // One LED fewer every two rows from row 8 on
    let shrink = if row > 7 { (row - 6) / 2 } else { 0 };
    let skipped = shrink * shrink + shrink * (row % 2);

    let gap = match row {
        r if r > 4 => 4,
        r if r > 2 => 2,
        _ => 0,
    };
    let extra = if row > 6 { (row - 5) / 2 } else { 0 };

    let last = row * LEGACY_ROW_LEDS + gap + extra - skipped;
    let first = last - LEGACY_ROW_LEDS + 1 + shrink;
    (first, last)
}

/// Outline of the legacy rows: both ends of every row plus the
/// first and last row filled in
pub fn draw_border(buffer: &mut FrameBuffer) {
    for row in 1..=LEGACY_ROWS {
        let (first, last) = legacy_row_span(row);
        buffer.set_linear(first, 255);
        buffer.set_linear(last, 255);
        if row == 1 || row == LEGACY_ROWS {
            for address in first + 1..last {
                buffer.set_linear(address, 255);
            }
        }
    }
}

/// Legacy diagonal addressing through the row formula
pub fn set_diagonal_legacy(buffer: &mut FrameBuffer, x: i32, y: i32, value: u8) {
    let row = x + 3;
    let (first, last) = legacy_row_span(row);

    let mut address = first + (row - y);
    if row < 6 {
        address -= 1;
    }
    if row < 4 {
        address -= 1;
    }
    if row < 2 {
        address -= 1;
    }

    if y == row && y == 4 {
        return;
    }
    if address > last {
        return;
    }
    buffer.set_linear(address, value);
}
