//! Button Status Panel Example
//!
//! Polls six buttons, debounces them, and renders a live status panel over
//! RTT: one glyph per button, the total press count and the time since
//! boot. GPIO16 toggles on every accepted press and the onboard LED
//! carries the sampling heartbeat.
//!
//! Wiring: buttons on GPIO10-GPIO15 to 3V3 (active high, internal
//! pull-downs), press indicator LED on GPIO16.

#![no_std]
#![no_main]

use cortex_m::delay::Delay;
use panic_halt as _;
use rp_pico::entry;
use rp_pico::hal::{Clock, Sio, Timer, clocks::init_clocks_and_plls, pac, watchdog::Watchdog};
use rtt_target::{rprintln, rtt_init_print};

use rp_pico_demos::io::{ButtonPin, LevelImage, PinIndicator, read_levels};
use rp_pico_demos::panel::RttPanel;
use rp_pico_demos::time::{SystemCounter, tick_rate};

use button_monitor::{
    Button, ButtonBank, Cadence, CounterSource, DebounceTask, HeartbeatTask, RenderTask,
    Scheduler, SnapshotCell, StatusPanel,
};

/// Debounce sampling rate in Hz.
const SAMPLE_HZ: u32 = 61;

/// Panel refresh rate in Hz.
const FRAME_HZ: u32 = 20;

#[entry]
fn main() -> ! {
    rtt_init_print!();
    rprintln!("=== RP Pico Button Status Panel ===");

    // Get peripherals
    let mut pac = pac::Peripherals::take().unwrap();
    let core = pac::CorePeripherals::take().unwrap();

    // Set up watchdog driver
    let mut watchdog = Watchdog::new(pac.WATCHDOG);

    // Configure clocks (125 MHz)
    let clocks = init_clocks_and_plls(
        rp_pico::XOSC_CRYSTAL_FREQ,
        pac.XOSC,
        pac.CLOCKS,
        pac.PLL_SYS,
        pac.PLL_USB,
        &mut pac.RESETS,
        &mut watchdog,
    )
    .ok()
    .unwrap();

    // Set up the Single Cycle IO (for GPIO access)
    let sio = Sio::new(pac.SIO);

    // Set the pins to their default state
    let pins = rp_pico::Pins::new(
        pac.IO_BANK0,
        pac.PADS_BANK0,
        sio.gpio_bank0,
        &mut pac.RESETS,
    );

    // Buttons on GPIO10-15, in Button::ALL order (d-pad then aux pair)
    let mut button_pins: [ButtonPin; Button::COUNT] = [
        pins.gpio10.into_pull_down_input().into_dyn_pin(),
        pins.gpio11.into_pull_down_input().into_dyn_pin(),
        pins.gpio12.into_pull_down_input().into_dyn_pin(),
        pins.gpio13.into_pull_down_input().into_dyn_pin(),
        pins.gpio14.into_pull_down_input().into_dyn_pin(),
        pins.gpio15.into_pull_down_input().into_dyn_pin(),
    ];

    let press_led = PinIndicator::new(pins.gpio16.into_push_pull_output().into_dyn_pin());
    let heartbeat_led = PinIndicator::new(pins.led.into_push_pull_output().into_dyn_pin());

    // Free-running microsecond counter
    let counter = SystemCounter::new(Timer::new(pac.TIMER, &mut pac.RESETS, &clocks));
    let rate = tick_rate();

    // Set up delay
    let mut delay = Delay::new(core.SYST, clocks.system_clock.freq().to_Hz());

    rprintln!("=== Hardware Ready ===");

    let cell = SnapshotCell::new();
    let levels = LevelImage::new();

    let mut sampler = DebounceTask::new(ButtonBank::default(), &levels, press_led, &cell);
    let mut heartbeat = HeartbeatTask::new(heartbeat_led);
    let mut renderer = RenderTask::new(StatusPanel::new(RttPanel::new()), &cell, rate);

    let mut scheduler: Scheduler<'_, 3> = Scheduler::new();
    scheduler
        .add(Cadence::new(rate.period_ticks(SAMPLE_HZ)), &mut sampler)
        .unwrap();
    scheduler
        .add(Cadence::new(rate.period_ticks(SAMPLE_HZ)), &mut heartbeat)
        .unwrap();
    scheduler
        .add(Cadence::new(rate.period_ticks(FRAME_HZ)), &mut renderer)
        .unwrap();

    loop {
        // One port capture per pass; the sampler reads bits out of it.
        levels.set(read_levels(&mut button_pins));

        let now = counter.count();
        scheduler.run_pending(now);

        // Sleep out the gap to the next due point. The timer counts
        // microseconds, so the hint converts directly.
        if let Some(gap) = scheduler.ticks_until_next(counter.count()) {
            delay.delay_us(gap);
        }
    }
}
