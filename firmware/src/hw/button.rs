//! User button on PC13 as an EXTI edge interrupt source.
//!
//! Configured through the SYSCFG/EXTI registers directly. The handler only needs the pending flag,
//! which is read and cleared through the EXTI register block.

use stm32f7xx_hal::{
    gpio::{gpioc, Input, PullDown},
    pac,
};

/// EXTI line of the button pin.
const LINE: u8 = 13;

pub struct Button {
    pin: gpioc::PC13<Input<PullDown>>,
}

impl Button {
    /// Route PC13 to EXTI13 and raise an interrupt on the rising (press) edge.
    pub fn pc13(pin: gpioc::PC13<Input<PullDown>>, syscfg: &pac::SYSCFG, exti: &pac::EXTI) -> Self {
        let rcc = unsafe { &*pac::RCC::ptr() };
        rcc.apb2enr.modify(|_, w| w.syscfgen().set_bit());

        // EXTICR4 selects the port for lines 12..15; 0b0010 = port C
        syscfg
            .exticr4
            .modify(|_, w| unsafe { w.exti13().bits(0b0010) });

        exti.rtsr.modify(|_, w| w.tr13().set_bit());
        exti.ftsr.modify(|_, w| w.tr13().clear_bit());

        // Drop anything latched during setup, then unmask
        exti.pr.write(|w| w.pr13().set_bit());
        exti.imr.modify(|_, w| w.mr13().set_bit());

        Self { pin }
    }

    /// Check and clear the pending flag. Returns true if the button edge fired.
    pub fn take_pending() -> bool {
        let exti = unsafe { &*pac::EXTI::ptr() };
        if exti.pr.read().bits() & (1 << LINE) != 0 {
            exti.pr.write(|w| unsafe { w.bits(1 << LINE) });
            true
        } else {
            false
        }
    }

    pub fn free(self) -> gpioc::PC13<Input<PullDown>> {
        self.pin
    }
}
