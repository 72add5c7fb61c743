// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Leveling Control
//!
//! The per-tick pipeline, leaves first.
//!
//! ## Modules
//!
//! - [`orientation`] - Which axis pair spans the level plane.
//! - [`mapper`] - Raw tilt to PWM compare values.
//! - [`calibration`] - User re-zero offset.
//! - [`debounce`] - Level band check with a debounced indicator.
//! - [`leveler`] - State carried between ticks.
//! - [`level_controller`] - State plus sensor and outputs, stepped once per tick.

pub mod calibration;
pub mod debounce;
pub mod level_controller;
pub mod leveler;
pub mod mapper;
pub mod orientation;

pub use calibration::CalibrationOffset;
pub use debounce::LevelDebouncer;
pub use level_controller::LevelController;
pub use leveler::{Cycle, Leveler};
pub use mapper::{map, OutputPair};
pub use orientation::Orientation;
