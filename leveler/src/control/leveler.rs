// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Process-wide leveling state.
//!
//! [`Leveler`] owns everything that survives between interrupts: the last outputs, the calibration
//! offset and the debouncer. It is created once before the first tick and lives until power-off.
//! It never touches hardware; [`LevelController`](crate::control::LevelController) wires it to
//! the sensor and outputs.

use crate::control::{map, CalibrationOffset, LevelDebouncer, Orientation, OutputPair};
use crate::drivers::AxisSample;

/// What one sampling cycle decided.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Cycle {
    pub orientation: Orientation,
    pub outputs: OutputPair,
    pub level: bool,
    /// The indicator flipped on this cycle.
    pub changed: bool,
}

pub struct Leveler {
    outputs: OutputPair,
    offset: CalibrationOffset,
    debouncer: LevelDebouncer,
}

impl Leveler {
    /// Power-up state: outputs centered, zero offset, counter full, indicator off.
    pub const fn new() -> Self {
        Self {
            outputs: OutputPair::NEUTRAL,
            offset: CalibrationOffset::ZERO,
            debouncer: LevelDebouncer::new(),
        }
    }

    /// Run selection, mapping and debouncing for one sample.
    pub fn update(&mut self, sample: AxisSample) -> Cycle {
        let was_level = self.debouncer.is_on();
        let (orientation, outputs) = map(sample, self.offset);
        self.outputs = outputs;
        let level = self.debouncer.update(outputs);

        Cycle {
            orientation,
            outputs,
            level,
            changed: level != was_level,
        }
    }

    /// Re-zero at the current orientation, using the outputs of the last completed cycle.
    ///
    /// Takes effect from the next [`update`](Self::update); the current outputs are not touched.
    pub fn calibrate(&mut self) -> CalibrationOffset {
        self.offset.capture(self.outputs);
        self.offset
    }

    #[inline]
    pub fn outputs(&self) -> OutputPair {
        self.outputs
    }

    #[inline]
    pub fn offset(&self) -> CalibrationOffset {
        self.offset
    }

    #[inline]
    pub fn is_level(&self) -> bool {
        self.debouncer.is_on()
    }
}

impl Default for Leveler {
    fn default() -> Self {
        Self::new()
    }
}
