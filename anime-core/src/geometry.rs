//! Per-model geometry of the LED matrix
//!
//! The LEDs are not laid out as a rectangle. Physically the panel is a
//! rotated hexagon: rows are staggered, and both the first usable column
//! and the number of LEDs change from row to row. The controller stores the
//! LEDs row after row in one flat buffer, so every planar (column, row)
//! coordinate has to be mapped through the row table of the model.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Supported matrix models
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum HardwareVariant {
    /// Zephyrus G14 2020/2021
    Ga401,
    /// Zephyrus G14 2022 and the fallback for unknown models
    #[default]
    Ga402,
    /// Zephyrus M16 2023
    Gu604,
}

/// Immutable constants of one matrix model
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct VariantSpec {
    /// Total LEDs in the flat buffer
    pub led_count: usize,
    /// Number of planar rows
    pub max_rows: i32,
    /// Number of planar columns (also the row width)
    pub max_columns: i32,
    /// Address of the first LED of row 0
    pub led_start: i32,
    /// Largest LED range sent in one write-range report
    pub update_page_length: usize,
    /// Vertical offset used to place text baselines
    pub text_shift: i32,
    /// Vertical delta of the diagonal transform in image mode
    pub image_shift_y: i32,
}

const GA401_SPEC: VariantSpec = VariantSpec {
    led_count: 1245,
    max_rows: 55,
    max_columns: 33,
    led_start: 1,
    update_page_length: 410,
    text_shift: 11,
    image_shift_y: 34,
};

const GA402_SPEC: VariantSpec = VariantSpec {
    led_count: 1450,
    max_rows: 61,
    max_columns: 34,
    led_start: 0,
    update_page_length: 490,
    text_shift: 8,
    image_shift_y: 34,
};

const GU604_SPEC: VariantSpec = VariantSpec {
    led_count: 1711,
    max_rows: 92,
    max_columns: 39,
    led_start: 0,
    update_page_length: 630,
    text_shift: 10,
    image_shift_y: 34,
};

/// `ceil(max(0, row - offset) / 2)`
const fn staggered_start(row: i32, offset: i32) -> i32 {
    let past = if row > offset { row - offset } else { 0 };
    (past + 1) / 2
}

impl HardwareVariant {
    /// All supported models
    pub const ALL: [HardwareVariant; 3] = [
        HardwareVariant::Ga401,
        HardwareVariant::Ga402,
        HardwareVariant::Gu604,
    ];

    /// Resolve a model from the laptop's model name (e.g. "ROG Zephyrus G14 GA401QM")
    ///
    /// Unknown names fall back to GA402, which is what the vendor tooling
    /// does too.
    pub fn from_model_name(model: &str) -> Self {
        if model.contains("GU604") {
            HardwareVariant::Gu604
        } else if model.contains("401") {
            HardwareVariant::Ga401
        } else {
            HardwareVariant::Ga402
        }
    }

    /// Model constants
    pub const fn spec(self) -> &'static VariantSpec {
        match self {
            HardwareVariant::Ga401 => &GA401_SPEC,
            HardwareVariant::Ga402 => &GA402_SPEC,
            HardwareVariant::Gu604 => &GU604_SPEC,
        }
    }

    pub const fn led_count(self) -> usize {
        self.spec().led_count
    }

    pub const fn max_rows(self) -> i32 {
        self.spec().max_rows
    }

    pub const fn max_columns(self) -> i32 {
        self.spec().max_columns
    }

    pub const fn led_start(self) -> i32 {
        self.spec().led_start
    }

    pub const fn update_page_length(self) -> usize {
        self.spec().update_page_length
    }

    pub const fn text_shift(self) -> i32 {
        self.spec().text_shift
    }

    pub const fn image_shift_y(self) -> i32 {
        self.spec().image_shift_y
    }

    /// Total planar columns
    pub const fn width(self) -> i32 {
        self.spec().max_columns
    }

    /// First valid column of a row
    pub const fn first_x(self, row: i32) -> i32 {
        match self {
            HardwareVariant::Ga401 => {
                if row < 5 && row % 2 == 0 {
                    1
                } else {
                    staggered_start(row, 5)
                }
            }
            HardwareVariant::Gu604 => {
                if row < 9 && row % 2 == 0 {
                    1
                } else {
                    staggered_start(row, 9)
                }
            }
            HardwareVariant::Ga402 => staggered_start(row, 11),
        }
    }

    /// Number of LEDs in a row
    ///
    /// Never negative. The GU604 formula runs out of columns near the
    /// bottom of its row range, those rows have a pitch of 0.
    pub const fn pitch(self, row: i32) -> i32 {
        let pitch = match self {
            HardwareVariant::Ga401 => match row {
                0 | 2 | 4 => 33,
                1 | 3 => 35,
                _ => 36 - row / 2,
            },
            HardwareVariant::Gu604 => match row {
                0 | 2 | 4 | 6 | 8 => 38,
                1 | 3 | 5 | 7 | 9 => 39,
                _ => self.width() - self.first_x(row),
            },
            HardwareVariant::Ga402 => self.width() - self.first_x(row),
        };
        if pitch < 0 {
            0
        } else {
            pitch
        }
    }

    /// Linear address of the first LED of a row
    ///
    /// `led_start + Σ pitch(i) for i in [0, row)`
    pub fn row_to_linear_address(self, row: i32) -> i32 {
        (0..row).fold(self.led_start(), |address, i| address + self.pitch(i))
    }

    /// Number of leading rows that hold at least one LED
    pub fn planar_rows(self) -> i32 {
        (0..self.max_rows())
            .take_while(|&row| self.pitch(row) > 0)
            .count() as i32
    }

    /// Map a planar coordinate to a linear address
    ///
    /// Returns `None` when the row is outside the matrix or the column
    /// outside `[first_x(row), width())`. The address itself may still lie
    /// past `led_count`; the buffer rejects those writes.
    pub fn planar_to_linear(self, col: i32, row: i32) -> Option<i32> {
        if row < 0 || row >= self.max_rows() {
            return None;
        }
        let first = self.first_x(row);
        if col < first || col >= self.width() {
            return None;
        }
        Some(self.row_to_linear_address(row) - first + col)
    }

    /// Whether a linear address is inside the LED buffer
    pub fn is_addressable(self, address: i32) -> bool {
        address >= 0 && (address as usize) < self.led_count()
    }
}
