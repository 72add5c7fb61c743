//! Level indicator LED.

use leveler::hw::IndicatorLine;
use stm32f7xx_hal::gpio::{self, Output, PushPull};

/// Whether the LED is driven active-high or active-low on the board wiring.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ActiveLevel {
    High,
    Low,
}

/// LED abstraction that remembers its active level and last known state.
pub struct Led<const P: char, const N: u8> {
    pin: gpio::Pin<P, N, Output<PushPull>>,
    active: ActiveLevel,
    is_on: bool,
}

impl<const P: char, const N: u8> Led<P, N> {
    /// Create an LED wrapper, initializing it to OFF.
    pub fn new(mut pin: gpio::Pin<P, N, Output<PushPull>>, active: ActiveLevel) -> Self {
        match active {
            ActiveLevel::High => pin.set_low(),
            ActiveLevel::Low => pin.set_high(),
        }
        Self {
            pin,
            active,
            is_on: false,
        }
    }

    pub fn active_high(pin: gpio::Pin<P, N, Output<PushPull>>) -> Self {
        Self::new(pin, ActiveLevel::High)
    }

    #[inline]
    pub fn is_on(&self) -> bool {
        self.is_on
    }
}

impl<const P: char, const N: u8> IndicatorLine for Led<P, N> {
    /// Drive the LED logically ON (true) or OFF (false).
    fn set(&mut self, on: bool) {
        match (self.active, on) {
            (ActiveLevel::High, true) | (ActiveLevel::Low, false) => self.pin.set_high(),
            (ActiveLevel::High, false) | (ActiveLevel::Low, true) => self.pin.set_low(),
        }
        self.is_on = on;
    }
}
