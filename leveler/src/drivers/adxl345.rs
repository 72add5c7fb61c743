// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! ADXL345 3-axis accelerometer over 4-wire SPI.
//!
//! This module handles SPI framing and register access for the ADXL345. Every transaction is a
//! single register: address byte, then one data byte, framed by chip select. Multi-byte burst reads
//! are not used.

use crate::hw::{ByteBus, SelectLine};

// Register addresses
pub mod reg {
    pub const DEVID: u8 = 0x00;
    pub const BW_RATE: u8 = 0x2C;
    pub const POWER_CTL: u8 = 0x2D;
    pub const DATA_FORMAT: u8 = 0x31;
    pub const DATAX0: u8 = 0x32;
    pub const DATAX1: u8 = 0x33;
    pub const DATAY0: u8 = 0x34;
    pub const DATAY1: u8 = 0x35;
    pub const DATAZ0: u8 = 0x36;
    pub const DATAZ1: u8 = 0x37;
}

/// Value of the DEVID register on a genuine part.
pub const DEVICE_ID: u8 = 0xE5;

/// Address bit that marks a read transaction.
pub const READ_FLAG: u8 = 0x80;

/// Byte clocked out while receiving register contents.
pub const DUMMY: u8 = 0xFF;

/// POWER_CTL: Measure bit, everything else (sleep, auto-sleep, link) off.
pub const POWER_CTL_MEASURE: u8 = 0x08;

/// DATA_FORMAT: +/-2 g, right-justified, sign-extended, 4-wire SPI.
pub const DATA_FORMAT_2G: u8 = 0x00;

/// One raw reading of all three axes, in sensor counts.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct AxisSample {
    pub x: i16,
    pub y: i16,
    pub z: i16,
}

impl AxisSample {
    pub const fn new(x: i16, y: i16, z: i16) -> Self {
        Self { x, y, z }
    }

    /// Combine a low/high register pair into one signed count.
    #[inline]
    pub const fn from_bytes(low: u8, high: u8) -> i16 {
        i16::from_le_bytes([low, high])
    }
}

/// ADXL345 driver bound to a specific chip-select line.
///
/// The bus is passed in as `&mut` to each method so that other devices can share it.
pub struct Adxl345<CS> {
    cs: CS,
}

impl<CS: SelectLine> Adxl345<CS> {
    /// Construct a driver and park the chip select in its inactive state.
    pub fn new(mut cs: CS) -> Self {
        cs.deselect();
        Self { cs }
    }

    /// Release the chip-select line.
    pub fn free(self) -> CS {
        self.cs
    }

    /// Run one framed two-byte transaction and return the byte received during the data phase.
    ///
    /// Chip select is released even when the bus reports an error.
    fn transaction<B: ByteBus>(&mut self, spi: &mut B, addr: u8, data: u8) -> Result<u8, B::Error> {
        self.cs.select();
        let result = spi
            .transfer_byte(addr)
            .and_then(|_| spi.transfer_byte(data));
        self.cs.deselect();
        result
    }

    /// Write a single register.
    pub fn write_reg<B: ByteBus>(&mut self, spi: &mut B, addr: u8, value: u8) -> Result<(), B::Error> {
        self.transaction(spi, addr & !READ_FLAG, value)?;
        Ok(())
    }

    /// Read a single register.
    pub fn read_reg<B: ByteBus>(&mut self, spi: &mut B, addr: u8) -> Result<u8, B::Error> {
        self.transaction(spi, addr | READ_FLAG, DUMMY)
    }

    /// Read the DEVID register.
    #[inline]
    pub fn device_id<B: ByteBus>(&mut self, spi: &mut B) -> Result<u8, B::Error> {
        self.read_reg(spi, reg::DEVID)
    }

    /// Put the sensor into measurement mode with the +/-2 g right-justified format.
    ///
    /// Returns the DEVID read beforehand. A mismatch against [`DEVICE_ID`] is left for the caller
    /// to report; the configuration writes go out regardless.
    pub fn init<B: ByteBus>(&mut self, spi: &mut B) -> Result<u8, B::Error> {
        let id = self.device_id(spi)?;
        self.write_reg(spi, reg::POWER_CTL, POWER_CTL_MEASURE)?;
        self.write_reg(spi, reg::DATA_FORMAT, DATA_FORMAT_2G)?;
        Ok(id)
    }

    /// Read one axis as a low/high register pair.
    fn read_axis<B: ByteBus>(&mut self, spi: &mut B, low: u8, high: u8) -> Result<i16, B::Error> {
        let lo = self.read_reg(spi, low)?;
        let hi = self.read_reg(spi, high)?;
        Ok(AxisSample::from_bytes(lo, hi))
    }

    /// Sample all three axes: six single-byte reads, X then Y then Z, low byte first.
    ///
    /// The low and high bytes come from separate transactions, so a sample can straddle a sensor
    /// update. There is no way to tell a torn or garbage read from a real one.
    pub fn sample_axes<B: ByteBus>(&mut self, spi: &mut B) -> Result<AxisSample, B::Error> {
        let x = self.read_axis(spi, reg::DATAX0, reg::DATAX1)?;
        let y = self.read_axis(spi, reg::DATAY0, reg::DATAY1)?;
        let z = self.read_axis(spi, reg::DATAZ0, reg::DATAZ1)?;
        Ok(AxisSample { x, y, z })
    }
}
