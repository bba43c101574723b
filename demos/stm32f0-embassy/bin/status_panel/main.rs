//! Button Status Panel Example
//!
//! Debounces six buttons on the Arduino header, counts presses, and logs a
//! live text panel through defmt. The sampler and renderer run as separate
//! embassy tasks sharing one atomic snapshot cell; PB3 toggles per
//! accepted press and the onboard LED carries the sampling heartbeat.
//!
//! Wiring: buttons on PA0, PA1, PA4, PB0, PC1, PC0 to ground (internal
//! pull-ups), press indicator LED on PB3.

#![no_std]
#![no_main]

use core::future::pending;
use defmt::*;
use embassy_executor::Spawner;
use embassy_stm32::Config;
use embassy_stm32::gpio::{Input, Level, Output, Pull, Speed};
use embassy_stm32::time::Hertz;
use {defmt_rtt as _, panic_probe as _};

use stm32f0_embassy_demos::io::{ButtonArray, LedIndicator};

mod heartbeat_task;
mod render_task;
mod sampler_task;
mod types;

use heartbeat_task::heartbeat_task;
use render_task::render_task;
use sampler_task::sampler_task;

/// Configure system clock with HSE and PLL
fn configure_clock() -> Config {
    let mut config = Config::default();
    {
        use embassy_stm32::rcc::*;
        config.rcc.hse = Some(Hse {
            freq: Hertz(8_000_000),
            mode: HseMode::Bypass,
        });
        config.rcc.pll = Some(Pll {
            src: PllSource::HSE,
            prediv: PllPreDiv::DIV2,
            mul: PllMul::MUL12,
        });
        config.rcc.sys = Sysclk::PLL1_P;
        config.rcc.ahb_pre = AHBPrescaler::DIV1;
        config.rcc.apb1_pre = APBPrescaler::DIV1;
    }
    config
}

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Starting...");

    let config = configure_clock();
    let p = embassy_stm32::init(config);

    // Buttons in Button::ALL order (d-pad then aux pair)
    let buttons = ButtonArray::new([
        Input::new(p.PA0, Pull::Up),
        Input::new(p.PA1, Pull::Up),
        Input::new(p.PA4, Pull::Up),
        Input::new(p.PB0, Pull::Up),
        Input::new(p.PC1, Pull::Up),
        Input::new(p.PC0, Pull::Up),
    ]);

    let press_led = LedIndicator::new(Output::new(p.PB3, Level::Low, Speed::Low));
    let heartbeat_led = LedIndicator::new(Output::new(p.PA5, Level::Low, Speed::Low));

    spawner.spawn(sampler_task(buttons, press_led)).unwrap();
    spawner.spawn(heartbeat_task(heartbeat_led)).unwrap();
    spawner.spawn(render_task()).unwrap();

    info!("Ready!");

    pending::<()>().await;
}
