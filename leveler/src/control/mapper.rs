// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Tilt-to-output mapping.
//!
//! Converts the selected axis pair into two PWM compare values centered on
//! [`CENTER`](crate::config::CENTER). All arithmetic is 16-bit and wraps: a hard enough tilt rolls
//! the output over instead of pinning it at full scale.

use core::fmt;

use crate::config::{CENTER, SCALE};
use crate::control::{CalibrationOffset, Orientation};
use crate::drivers::AxisSample;

/// Compare values for the horizontal (X) and vertical (Y) outputs.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct OutputPair {
    pub x: u16,
    pub y: u16,
}

impl OutputPair {
    /// Both outputs at exact level.
    pub const NEUTRAL: Self = Self {
        x: CENTER,
        y: CENTER,
    };

    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }
}

impl Default for OutputPair {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

impl fmt::Display for OutputPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x={:#06X} y={:#06X}", self.x, self.y)
    }
}

/// Scale one raw count around center: `raw * SCALE + CENTER`, modulo 2^16.
#[inline]
pub fn scale_axis(raw: i16) -> u16 {
    (raw as u16).wrapping_mul(SCALE).wrapping_add(CENTER)
}

/// Map a sample onto the two outputs.
///
/// For a resolved orientation the scaled pair is computed first and the calibration offset is
/// subtracted afterwards. A transitional sample yields [`OutputPair::NEUTRAL`] with no offset
/// applied.
pub fn map(sample: AxisSample, offset: CalibrationOffset) -> (Orientation, OutputPair) {
    let orientation = Orientation::classify(sample);
    let outputs = match orientation.plane(sample) {
        Some((h, v)) => offset.apply(OutputPair::new(scale_axis(h), scale_axis(v))),
        None => OutputPair::NEUTRAL,
    };
    (orientation, outputs)
}
