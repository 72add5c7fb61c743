// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Compile-time tuning constants.
//!
//! None of these can change at runtime; the only runtime adjustment is the calibration offset.

/// Raw sensor counts an axis must exceed (strictly, in magnitude) to be trusted for plane selection.
pub const AXIS_TOLERANCE: i16 = 170;

/// Output counts per raw sensor count.
pub const SCALE: u16 = 200;

/// Compare value that represents exact level (50% duty).
pub const CENTER: u16 = 0x8000;

/// Half-width of the level band around [`CENTER`], exclusive on both ends.
pub const LEVEL_THRESHOLD: u16 = 0x1000;

/// Consecutive in-band cycles required before the indicator turns on.
pub const HOLD_CYCLES: u8 = 100;
