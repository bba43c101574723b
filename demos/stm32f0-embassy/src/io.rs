//! GPIO wrappers for the button-monitor input and indicator traits.

use button_monitor::{Button, Indicator, InputLines};
use embassy_stm32::gpio::{Input, Output};

/// The six button inputs, indexed by [`Button::index`].
pub struct ButtonArray {
    inputs: [Input<'static>; Button::COUNT],
}

impl ButtonArray {
    pub fn new(inputs: [Input<'static>; Button::COUNT]) -> Self {
        Self { inputs }
    }
}

impl InputLines for ButtonArray {
    fn level(&self, button: Button) -> bool {
        self.inputs[button.index()].is_high()
    }
}

/// Indicator wrapper around an output pin.
pub struct LedIndicator {
    output: Output<'static>,
}

impl LedIndicator {
    pub fn new(output: Output<'static>) -> Self {
        Self { output }
    }
}

impl Indicator for LedIndicator {
    fn toggle(&mut self) {
        self.output.toggle();
    }
}
