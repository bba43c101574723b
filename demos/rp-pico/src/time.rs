//! Hardware timer wrapper for the button-monitor counter trait.
//!
//! The RP2040 system timer counts microseconds in a 64-bit register; the
//! scheduler only needs the wrapping low word.

use button_monitor::{CounterSource, TickRate};

/// Ticks per second of the RP2040 system timer.
pub const TIMER_HZ: u32 = 1_000_000;

/// The tick rate matching [`SystemCounter`].
pub fn tick_rate() -> TickRate {
    TickRate::from_hz(TIMER_HZ)
}

/// Counter source wrapper around the RP2040 system timer.
pub struct SystemCounter {
    timer: rp_pico::hal::Timer,
}

impl SystemCounter {
    pub fn new(timer: rp_pico::hal::Timer) -> Self {
        Self { timer }
    }
}

impl CounterSource for SystemCounter {
    fn count(&self) -> u32 {
        // Wraps every ~71 minutes; all cadence arithmetic is wrap-safe.
        self.timer.get_counter().ticks() as u32
    }
}
