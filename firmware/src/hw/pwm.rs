//! Two-channel PWM on TIM4 using direct PAC register access.
//!
//! TIM4 free-runs over the full 16-bit range; CH1 and CH2 are in PWM mode 1 so each channel's duty
//! is `CCRx / 65536`. The channels are split into independent handles that only ever write their
//! own compare register.

use leveler::hw::DutyOutput;
use stm32f7xx_hal::{
    gpio::{gpiod, Alternate},
    pac,
};

/// PD12 (TIM4_CH1) and PD13 (TIM4_CH2).
pub type Tim4Pins = (gpiod::PD12<Alternate<2>>, gpiod::PD13<Alternate<2>>);

pub struct Pwm<TIM> {
    tim: TIM,
}

/// Compare register `C` of TIM4.
pub struct CompareChannel<const C: u8> {
    _private: (),
}

impl Pwm<pac::TIM4> {
    /// Configure TIM4 CH1/CH2 for PWM with a 0xFFFF period and start counting.
    ///
    /// Both compare registers start at `initial`.
    pub fn tim4(tim4: pac::TIM4, _pins: Tim4Pins, initial: u16) -> Self {
        let rcc = unsafe { &*pac::RCC::ptr() };
        rcc.apb1enr.modify(|_, w| w.tim4en().set_bit());

        let tim = tim4;

        // Disable counter while configuring
        tim.cr1.modify(|_, w| w.cen().clear_bit());

        // Timer clock undivided, full 16-bit period
        tim.psc.write(|w| unsafe { w.bits(0) });
        tim.arr.write(|w| unsafe { w.bits(0xFFFF) });

        // PWM mode 1 with preload on both channels
        tim.ccmr1_output().modify(|_, w| unsafe {
            w.oc1m()
                .bits(0b110)
                .oc1pe()
                .set_bit()
                .oc2m()
                .bits(0b110)
                .oc2pe()
                .set_bit()
        });

        tim.ccr1().write(|w| unsafe { w.bits(initial as u32) });
        tim.ccr2().write(|w| unsafe { w.bits(initial as u32) });

        // Active-high outputs on both channels
        tim.ccer.modify(|_, w| {
            w.cc1p()
                .clear_bit()
                .cc2p()
                .clear_bit()
                .cc1e()
                .set_bit()
                .cc2e()
                .set_bit()
        });

        // Latch the preloaded registers, then run
        tim.egr.write(|w| w.ug().set_bit());
        tim.cr1.modify(|_, w| w.arpe().set_bit().cen().set_bit());

        Self { tim }
    }

    /// Hand out the two compare channels.
    pub fn split(self) -> (CompareChannel<1>, CompareChannel<2>) {
        (
            CompareChannel { _private: () },
            CompareChannel { _private: () },
        )
    }
}

impl DutyOutput for CompareChannel<1> {
    #[inline]
    fn set_duty(&mut self, compare: u16) {
        let tim = unsafe { &*pac::TIM4::ptr() };
        tim.ccr1().write(|w| unsafe { w.bits(compare as u32) });
    }
}

impl DutyOutput for CompareChannel<2> {
    #[inline]
    fn set_duty(&mut self, compare: u16) {
        let tim = unsafe { &*pac::TIM4::ptr() };
        tim.ccr2().write(|w| unsafe { w.bits(compare as u32) });
    }
}
