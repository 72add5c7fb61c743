// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Hardware Seams
//!
//! Traits the board crate implements on top of its MCU-level wrappers. Everything above this layer
//! is generic over them, so the control logic runs unchanged against mocks on the host.

/// Blocking, full-duplex exchange of one byte on a synchronous serial bus.
///
/// Implementations wait for the peripheral to report completion before returning. There is no
/// timeout: a bus that never signals ready hangs the caller.
pub trait ByteBus {
    type Error;

    fn transfer_byte(&mut self, byte: u8) -> Result<u8, Self::Error>;
}

/// Chip-select line for one device on a shared bus.
pub trait SelectLine {
    /// Assert the chip select.
    fn select(&mut self);

    /// Deassert the chip select.
    fn deselect(&mut self);
}

/// One 16-bit timer compare register driving a PWM output.
pub trait DutyOutput {
    fn set_duty(&mut self, compare: u16);
}

/// Binary indicator output.
pub trait IndicatorLine {
    /// Drive the indicator logically ON (true) or OFF (false).
    fn set(&mut self, on: bool);
}
