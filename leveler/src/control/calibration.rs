// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Calibration offset.
//!
//! The offset is captured from the outputs of the last completed sampling cycle and subtracted from
//! every later mapping. Captures compose: each one adds the current distance from center on top of
//! the offset already in effect. Nothing is persisted; the offset is zero after reset.

use core::fmt;

use crate::config::CENTER;
use crate::control::OutputPair;

/// Signed correction subtracted from the mapped outputs.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct CalibrationOffset {
    pub x: i16,
    pub y: i16,
}

impl CalibrationOffset {
    pub const ZERO: Self = Self { x: 0, y: 0 };

    pub const fn new(x: i16, y: i16) -> Self {
        Self { x, y }
    }

    /// Fold the current outputs into the offset: `offset += current - CENTER`, per axis, 16-bit
    /// wrapping.
    ///
    /// `current` must be the outputs as last written to the timers, i.e. with the previous offset
    /// already subtracted. That is what makes repeated captures converge on the new level.
    pub fn capture(&mut self, current: OutputPair) {
        self.x = (current.x.wrapping_sub(CENTER) as i16).wrapping_add(self.x);
        self.y = (current.y.wrapping_sub(CENTER) as i16).wrapping_add(self.y);
    }

    /// Subtract this offset from a freshly mapped pair.
    #[inline]
    pub fn apply(self, outputs: OutputPair) -> OutputPair {
        OutputPair {
            x: outputs.x.wrapping_sub(self.x as u16),
            y: outputs.y.wrapping_sub(self.y as u16),
        }
    }
}

impl fmt::Display for CalibrationOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x={} y={}", self.x, self.y)
    }
}
