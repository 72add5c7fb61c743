// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Pin definitions for the STM32F767ZI Nucleo-144 devboard.
//!
//! | Function | Pin | Note |
//! | -------- | --- | ---- |
//! | Level indicator | PB0 | LD1 (green) |
//! | X output | PD12 | TIM4_CH1 |
//! | Y output | PD13 | TIM4_CH2 |
//! | Calibrate button | PC13 | B1 (USER) |
//! | ADXL345 SCK/SDO/SDA | PA5/PA6/PA7 | SPI1, Arduino D13/D12/D11 |
//! | ADXL345 CS | PD14 | Arduino D10 |
//! | Debug log | PD8/PD9 | USART3 via ST-LINK |

use stm32f7xx_hal::{
    gpio::{gpioa, gpiob, gpioc, gpiod, Alternate, Input, Output, PullDown, PushPull},
    pac,
    prelude::*,
};

/// All board pins. Construct this once at startup using:
///
/// ```ignore
/// let pins = BoardPins::new(dp.GPIOA, dp.GPIOB, dp.GPIOC, dp.GPIOD);
/// ```
pub struct BoardPins {
    pub leds: Leds,
    pub usart3: Usart3Pins,
    pub spi1: Spi1Pins,
    pub pwm: PwmPins,
    pub button: gpioc::PC13<Input<PullDown>>,
}

pub struct Leds {
    pub green: gpiob::PB0<Output<PushPull>>, // LD1
    pub blue: gpiob::PB7<Output<PushPull>>,  // LD2
    pub red: gpiob::PB14<Output<PushPull>>,  // LD3
}

pub struct Usart3Pins {
    pub tx: gpiod::PD8<Alternate<7>>,
    pub rx: gpiod::PD9<Alternate<7>>,
}

pub struct Spi1Pins {
    pub sck: gpioa::PA5<Alternate<5>>,
    pub miso: gpioa::PA6<Alternate<5>>,
    pub mosi: gpioa::PA7<Alternate<5>>,
    pub cs: gpiod::PD14<Output<PushPull>>,
}

/// TIM4 compare outputs
pub struct PwmPins {
    pub x: gpiod::PD12<Alternate<2>>, // TIM4_CH1
    pub y: gpiod::PD13<Alternate<2>>, // TIM4_CH2
}

impl BoardPins {
    pub fn new(gpioa: pac::GPIOA, gpiob: pac::GPIOB, gpioc: pac::GPIOC, gpiod: pac::GPIOD) -> Self {
        let gpioa = gpioa.split();
        let gpiob = gpiob.split();
        let gpioc = gpioc.split();
        let gpiod = gpiod.split();

        Self {
            leds: Leds {
                green: gpiob.pb0.into_push_pull_output(),
                blue: gpiob.pb7.into_push_pull_output(),
                red: gpiob.pb14.into_push_pull_output(),
            },

            usart3: Usart3Pins {
                tx: gpiod.pd8.into_alternate::<7>(),
                rx: gpiod.pd9.into_alternate::<7>(),
            },

            spi1: Spi1Pins {
                sck: gpioa.pa5.into_alternate::<5>(),
                miso: gpioa.pa6.into_alternate::<5>(),
                mosi: gpioa.pa7.into_alternate::<5>(),
                cs: gpiod.pd14.into_push_pull_output(),
            },

            pwm: PwmPins {
                x: gpiod.pd12.into_alternate::<2>(),
                y: gpiod.pd13.into_alternate::<2>(),
            },

            button: gpioc.pc13.into_pull_down_input(),
        }
    }
}
