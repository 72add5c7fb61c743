// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Self-leveling indicator firmware for the Nucleo-F767ZI.
//!
//! Two interrupt sources drive everything:
//! - `SysTick` at [`TICK_HZ`] runs one sampling cycle (sensor read, mapping, level check).
//! - `EXTI15_10` on the USER button re-zeroes at the current orientation.
//!
//! Both handlers reach the device state only through [`DEVICE`], i.e. inside a critical section, so
//! neither can run while the other is mid-update. Between interrupts the core sleeps in `wfi`.

#![no_main]
#![no_std]
#![allow(dead_code)]

use core::fmt::Write;

use cortex_m::peripheral::{syst::SystClkSource, NVIC};
use cortex_m_rt::{entry, exception};
use panic_halt as _;

use hal::{
    gpio::{gpioa, Alternate},
    pac::{self, interrupt, SPI1, USART3},
    prelude::*,
    serial::{Config, Serial},
    spi::{Mode, Phase, Polarity, Spi},
};
use stm32f7xx_hal as hal;

use leveler::drivers::{adxl345::DEVICE_ID, Adxl345};
use leveler::sync::Shared;
use leveler::LevelController;

mod hw;
use hw::{BoardPins, Button, ChipSelect, CompareChannel, Led, Pwm, SpiBus, Usart};

/// Sampling rate. Matches an 8 MHz clock divided by 32768.
const TICK_HZ: u32 = 244;

/// SPI clock for the ADXL345 (max 5 MHz).
const SPI_KHZ: u32 = 250;

const BAUD: u32 = 115_200;

/// ADXL345: CPOL = 1, CPHA = 1.
const SPI_MODE: Mode = Mode {
    polarity: Polarity::IdleHigh,
    phase: Phase::CaptureOnSecondTransition,
};

type Spi1Pins = (
    gpioa::PA5<Alternate<5>>,
    gpioa::PA6<Alternate<5>>,
    gpioa::PA7<Alternate<5>>,
);

type Controller = LevelController<ChipSelect<'D', 14>, CompareChannel<1>, CompareChannel<2>, Led<'B', 0>>;

/// Everything the interrupt handlers touch.
struct Device {
    spi: SpiBus<SPI1, Spi1Pins>,
    controller: Controller,
    log: Usart<USART3>,
}

impl Device {
    /// One sampling cycle. Logs indicator transitions and bus errors.
    fn tick(&mut self) {
        match self.controller.step(&mut self.spi) {
            Ok(cycle) if cycle.changed => {
                let state = if cycle.level { "level" } else { "not level" };
                let _ = writeln!(self.log, "{} ({}, {})\r", state, cycle.orientation, cycle.outputs);
            }
            Ok(_) => {}
            Err(_) => self.log.println("spi error, cycle skipped"),
        }
    }

    fn calibrate(&mut self) {
        let offset = self.controller.calibrate();
        let _ = writeln!(self.log, "calibrated: offset {}\r", offset);
    }
}

static DEVICE: Shared<Device> = Shared::new();

#[entry]
fn main() -> ! {
    // Peripherals
    let dp = pac::Peripherals::take().unwrap();
    let cp = cortex_m::Peripherals::take().unwrap();

    // Clocks
    let mut rcc = dp.RCC.constrain();
    let clocks = rcc.cfgr.freeze();

    // GPIO
    let pins = BoardPins::new(dp.GPIOA, dp.GPIOB, dp.GPIOC, dp.GPIOD);

    // USART3 (ST-LINK VCP)
    let usart_cfg = Config {
        baud_rate: BAUD.bps(),
        ..Default::default()
    };
    let serial = Serial::new(dp.USART3, (pins.usart3.tx, pins.usart3.rx), &clocks, usart_cfg);
    let mut log = Usart::new(serial);
    log.println("leveler: starting");

    // SPI1 + ADXL345
    let spi1 = Spi::new(dp.SPI1, (pins.spi1.sck, pins.spi1.miso, pins.spi1.mosi)).enable::<u8>(
        SPI_MODE,
        SPI_KHZ.kHz(),
        &clocks,
        &mut rcc.apb2,
    );
    let mut spi = SpiBus::new(spi1);
    let sensor = Adxl345::new(ChipSelect::active_low(pins.spi1.cs));

    // TIM4 outputs + indicator
    let (out_x, out_y) = Pwm::tim4(dp.TIM4, (pins.pwm.x, pins.pwm.y), leveler::config::CENTER).split();
    let indicator = Led::active_high(pins.leds.green);

    let mut controller = LevelController::new(sensor, out_x, out_y, indicator);
    match controller.init(&mut spi) {
        Ok(DEVICE_ID) => log.println("ADXL345 ready"),
        Ok(id) => {
            let _ = writeln!(log, "warning: unexpected device id {:#04X}\r", id);
        }
        Err(_) => log.println("error: spi failure during sensor init"),
    }
    log.flush();

    DEVICE.install(Device {
        spi,
        controller,
        log,
    });

    // USER button -> EXTI13
    let _button = Button::pc13(pins.button, &dp.SYSCFG, &dp.EXTI);
    unsafe { NVIC::unmask(pac::Interrupt::EXTI15_10) };

    // SysTick sampling tick
    let mut syst = cp.SYST;
    syst.set_clock_source(SystClkSource::Core);
    syst.set_reload(clocks.sysclk().raw() / TICK_HZ - 1);
    syst.clear_current();
    syst.enable_counter();
    syst.enable_interrupt();

    loop {
        cortex_m::asm::wfi();
    }
}

#[exception]
fn SysTick() {
    DEVICE.with(Device::tick);
}

#[interrupt]
fn EXTI15_10() {
    if Button::take_pending() {
        DEVICE.with(Device::calibrate);
    }
}
