// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Orientation selection.
//!
//! Decides which two sensor axes currently span the level plane. The check is an ordered priority
//! chain over the three axes: the first axis whose magnitude strictly exceeds
//! [`AXIS_TOLERANCE`](crate::config::AXIS_TOLERANCE) wins, and Z is checked before X before Y.

use core::fmt;

use crate::config::AXIS_TOLERANCE;
use crate::drivers::AxisSample;

/// Which face of the device is pointing up.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Orientation {
    /// Lying on its reference face; Z carries gravity.
    Flat,
    /// Rolled 90 degrees; X carries gravity.
    Rolled,
    /// Pitched 90 degrees; Y carries gravity.
    Pitched,
    /// No axis clears the tolerance; the device is between faces.
    Transitional,
}

/// True when `v` lies outside `[-AXIS_TOLERANCE, AXIS_TOLERANCE]`.
#[inline]
fn exceeds(v: i16) -> bool {
    v > AXIS_TOLERANCE || v < -AXIS_TOLERANCE
}

impl Orientation {
    /// Classify a sample. First match wins: Z, then X, then Y.
    pub fn classify(sample: AxisSample) -> Self {
        match sample {
            s if exceeds(s.z) => Orientation::Flat,
            s if exceeds(s.x) => Orientation::Rolled,
            s if exceeds(s.y) => Orientation::Pitched,
            _ => Orientation::Transitional,
        }
    }

    /// The (horizontal, vertical) raw pair for this orientation, with the vertical sign flip already
    /// applied. `None` for [`Orientation::Transitional`].
    ///
    /// Negation wraps, so `i16::MIN` maps to itself.
    pub fn plane(self, s: AxisSample) -> Option<(i16, i16)> {
        match self {
            Orientation::Flat => Some((s.x, s.y.wrapping_neg())),
            Orientation::Rolled => Some((s.z, s.y.wrapping_neg())),
            Orientation::Pitched => Some((s.x, s.z.wrapping_neg())),
            Orientation::Transitional => None,
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Orientation::Flat => "flat",
            Orientation::Rolled => "rolled",
            Orientation::Pitched => "pitched",
            Orientation::Transitional => "transitional",
        };
        f.write_str(name)
    }
}
