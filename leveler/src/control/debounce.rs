// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Level detection with a debounced ON transition.
//!
//! The indicator turns on only after both outputs have stayed inside the level band for
//! [`HOLD_CYCLES`] consecutive cycles. It turns off on the first cycle outside the band.

use crate::config::{CENTER, HOLD_CYCLES, LEVEL_THRESHOLD};
use crate::control::OutputPair;

/// True when `v` lies strictly inside `(CENTER - LEVEL_THRESHOLD, CENTER + LEVEL_THRESHOLD)`.
#[inline]
pub fn within_band(v: u16) -> bool {
    v > CENTER - LEVEL_THRESHOLD && v < CENTER + LEVEL_THRESHOLD
}

/// Hysteresis counter plus the indicator state it drives.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct LevelDebouncer {
    /// Cycles left before the next ON confirmation.
    count: u8,
    on: bool,
}

impl LevelDebouncer {
    pub const fn new() -> Self {
        Self {
            count: HOLD_CYCLES,
            on: false,
        }
    }

    /// Feed one cycle's outputs and return the indicator state.
    ///
    /// While level, the counter keeps running: every time it reaches zero the indicator is
    /// (re)asserted and the counter reloads.
    pub fn update(&mut self, outputs: OutputPair) -> bool {
        if within_band(outputs.x) && within_band(outputs.y) {
            self.count -= 1;
            if self.count == 0 {
                self.on = true;
                self.count = HOLD_CYCLES;
            }
        } else {
            self.count = HOLD_CYCLES;
            self.on = false;
        }
        self.on
    }

    #[inline]
    pub fn is_on(&self) -> bool {
        self.on
    }

    /// Cycles left before the next ON confirmation.
    #[inline]
    pub fn remaining(&self) -> u8 {
        self.count
    }
}

impl Default for LevelDebouncer {
    fn default() -> Self {
        Self::new()
    }
}
