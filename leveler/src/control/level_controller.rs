//! Sampling-cycle controller for the leveling device.
//!
//! This controller wraps the [`Leveler`] state together with the sensor driver and the three
//! outputs, and provides a periodic `step()` that runs one full cycle and applies it to hardware.
//!
//! Typical usage pattern, from the two interrupt handlers:
//!
//! ```ignore
//! // periodic tick
//! controller.step(&mut spi)?;
//!
//! // button edge
//! controller.calibrate();
//! ```

use crate::control::{CalibrationOffset, Cycle, Leveler};
use crate::drivers::Adxl345;
use crate::hw::{ByteBus, DutyOutput, IndicatorLine, SelectLine};

/// Sensor, two PWM outputs and the level indicator, driven from one [`Leveler`].
pub struct LevelController<CS, X, Y, LED> {
    sensor: Adxl345<CS>,
    out_x: X,
    out_y: Y,
    indicator: LED,
    state: Leveler,
}

impl<CS, X, Y, LED> LevelController<CS, X, Y, LED>
where
    CS: SelectLine,
    X: DutyOutput,
    Y: DutyOutput,
    LED: IndicatorLine,
{
    /// Create a controller in the power-up state and park the outputs at center, indicator off.
    pub fn new(sensor: Adxl345<CS>, mut out_x: X, mut out_y: Y, mut indicator: LED) -> Self {
        let state = Leveler::new();
        let outputs = state.outputs();
        out_x.set_duty(outputs.x);
        out_y.set_duty(outputs.y);
        indicator.set(false);

        Self {
            sensor,
            out_x,
            out_y,
            indicator,
            state,
        }
    }

    /// Configure the sensor. Returns the device id it reported.
    pub fn init<B: ByteBus>(&mut self, spi: &mut B) -> Result<u8, B::Error> {
        self.sensor.init(spi)
    }

    /// Run one sampling cycle: acquire, map, debounce, then write the outputs.
    ///
    /// On a bus error nothing is updated and the previous outputs stay on the pins.
    pub fn step<B: ByteBus>(&mut self, spi: &mut B) -> Result<Cycle, B::Error> {
        let sample = self.sensor.sample_axes(spi)?;
        let cycle = self.state.update(sample);

        self.out_x.set_duty(cycle.outputs.x);
        self.out_y.set_duty(cycle.outputs.y);
        self.indicator.set(cycle.level);

        Ok(cycle)
    }

    /// Re-zero at the current orientation. Returns the new offset.
    #[inline]
    pub fn calibrate(&mut self) -> CalibrationOffset {
        self.state.calibrate()
    }

    #[inline]
    pub fn state(&self) -> &Leveler {
        &self.state
    }

    /// Tear down this controller and return its hardware.
    pub fn free(self) -> (Adxl345<CS>, X, Y, LED) {
        (self.sensor, self.out_x, self.out_y, self.indicator)
    }
}
