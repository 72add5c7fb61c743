// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Device-Specific Drivers
//!
//! This module contains device-specific drivers that sit above the [`hw`](crate::hw) seams and
//! below the control logic.
//!
//! ## Existing drivers
//!
//! - [`adxl345`] – Analog Devices ADXL345 3-axis accelerometer over 4-wire SPI

pub mod adxl345;

pub use adxl345::{Adxl345, AxisSample};
