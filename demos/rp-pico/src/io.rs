//! GPIO wrappers for the button-monitor input and indicator traits.

use core::cell::Cell;

use button_monitor::{Button, Indicator, InputLines};
use embedded_hal::digital::{InputPin, StatefulOutputPin};
use rp_pico::hal::gpio::{DynPinId, FunctionSioInput, FunctionSioOutput, Pin, PullDown};

/// A button input pin, type-erased so the six can live in one array.
pub type ButtonPin = Pin<DynPinId, FunctionSioInput, PullDown>;

/// An indicator output pin.
pub type LedPin = Pin<DynPinId, FunctionSioOutput, PullDown>;

/// Reads all six button lines into a level image, bit N for button index N.
///
/// The pins are wired active high: pressed pulls the line to 3V3, the
/// internal pull-down keeps it low otherwise.
pub fn read_levels(pins: &mut [ButtonPin; Button::COUNT]) -> u8 {
    let mut image = 0;
    for (index, pin) in pins.iter_mut().enumerate() {
        if pin.is_high().unwrap() {
            image |= 1 << index;
        }
    }
    image
}

/// Level image holder implementing [`InputLines`].
///
/// The main loop refreshes the image once per pass with [`read_levels`];
/// the debouncer reads individual bits out of that one port capture, the
/// same way an interrupt handler samples a whole input register at once.
pub struct LevelImage {
    image: Cell<u8>,
}

impl LevelImage {
    pub const fn new() -> Self {
        Self {
            image: Cell::new(0),
        }
    }

    pub fn set(&self, image: u8) {
        self.image.set(image);
    }
}

impl Default for LevelImage {
    fn default() -> Self {
        Self::new()
    }
}

impl InputLines for LevelImage {
    fn level(&self, button: Button) -> bool {
        self.image.get() & (1 << button.index()) != 0
    }
}

impl InputLines for &LevelImage {
    fn level(&self, button: Button) -> bool {
        (*self).level(button)
    }
}

/// Indicator wrapper around an output pin.
pub struct PinIndicator {
    pin: LedPin,
}

impl PinIndicator {
    pub fn new(pin: LedPin) -> Self {
        Self { pin }
    }
}

impl Indicator for PinIndicator {
    fn toggle(&mut self) {
        self.pin.toggle().unwrap();
    }
}
