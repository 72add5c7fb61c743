// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! MCU-level wrappers for the Nucleo-F767ZI, implementing the `leveler::hw` seams.

pub mod button;
pub mod led;
pub mod pins;
pub mod pwm;
pub mod spi;
pub mod usart;

pub use button::Button;
pub use led::Led;
pub use pins::BoardPins;
pub use pwm::{CompareChannel, Pwm};
pub use spi::{ChipSelect, SpiBus};
pub use usart::Usart;
