// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Leveler Core
//!
//! Hardware-independent core of the self-leveling indicator. The crate reads a 3-axis tilt sensor,
//! picks the axis pair that currently forms the level plane, maps tilt onto two 16-bit PWM compare
//! values and lights a center indicator once the device has stayed level long enough.
//!
//! ## Crate Structure
//!
//! | Module | Purpose |
//! | ------ | -------- |
//! | [`hw`] | Seam traits implemented by the board crate (SPI byte bus, chip select, PWM, LED) |
//! | [`drivers`] | Device-level drivers (ADXL345) |
//! | [`control`] | Orientation selection, tilt mapping, calibration, level debouncing |
//! | [`config`] | Compile-time tuning constants |
//! | [`sync`] | Interrupt-shared state cell |
//!
//! ## Getting Started
//!
//! Run the host tests:
//!
//! ```bash
//! cargo test
//! ```
//!
//! Flash the board (from `firmware/`):
//!
//! ```bash
//! cargo run --release
//! ```
//!
//! ## License
//!
//! Licensed under the **MIT License**.
//! See the `LICENSE` file in the repository root for full terms.
//!
//! © 2025–2026 Christopher Liu

#![no_std]

pub mod config;
pub mod control;
pub mod drivers;
pub mod hw;
pub mod sync;

pub use control::{CalibrationOffset, Cycle, LevelController, Leveler, Orientation, OutputPair};
pub use drivers::adxl345::AxisSample;
