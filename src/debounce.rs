//! Button debouncing: shift-register history with two-threshold hysteresis.
//!
//! Provides [`Debouncer`] for a single input line and [`ButtonBank`] for the
//! full six-button set with press-count accounting. Also defines the
//! [`InputLines`] trait for hardware abstraction.

use crate::types::{Button, ButtonEvent, ButtonState, Polarity};

/// Number of consecutive consistent samples required to accept a transition.
///
/// Equal to the width of the history register: a button must be observed
/// pressed (or released) for a full window of samples before its logical
/// state changes.
pub const DEBOUNCE_WINDOW: u32 = 8;

/// Trait for abstracting raw button input lines.
///
/// Implement this for your input hardware (GPIO port reads, an ADC resistor
/// ladder, a shift register, etc.). `level` reports the instantaneous
/// electrical level of one line; polarity mapping is the debouncer's job.
/// Handle any hardware errors internally - this method cannot fail.
pub trait InputLines {
    /// Returns the current electrical level of a button line (true = high).
    fn level(&self, button: Button) -> bool;
}

/// A debounced edge on a single input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Edge {
    /// Up -> Down transition completed.
    Press,
    /// Down -> Up transition completed.
    Release,
}

/// Debounces one input by consensus over a sliding sample window.
///
/// Keeps the last eight raw samples in a shift register, newest sample in
/// the least-significant bit. The logical state flips Up -> Down only when
/// the register holds all ones and Down -> Up only when it holds all zeros;
/// anything in between keeps the previous state. A single stray sample
/// therefore never flips the state, and the window ages it out on its own
/// instead of restarting from scratch.
#[derive(Debug, Clone, Copy)]
pub struct Debouncer {
    history: u8,
    state: ButtonState,
    polarity: Polarity,
}

impl Debouncer {
    /// Creates a debouncer in the Up state with an empty history.
    pub const fn new(polarity: Polarity) -> Self {
        Self {
            history: 0,
            state: ButtonState::Up,
            polarity,
        }
    }

    /// Records one raw sample and applies the transition rules.
    ///
    /// Call once per sampling tick with the line's electrical level. The
    /// sample is mapped through this button's [`Polarity`] before entering
    /// the history. There is no error path: a mixed history is the normal
    /// bouncing window and simply produces no edge.
    ///
    /// # Returns
    /// * `Some(Edge::Press)` - the eighth consecutive pressed sample landed
    /// * `Some(Edge::Release)` - the eighth consecutive released sample landed
    /// * `None` - no transition this tick
    pub fn sample(&mut self, level: bool) -> Option<Edge> {
        self.history <<= 1;
        self.history |= self.polarity.is_pressed(level) as u8;

        match (self.history, self.state) {
            (0xFF, ButtonState::Up) => {
                self.state = ButtonState::Down;
                Some(Edge::Press)
            }
            (0x00, ButtonState::Down) => {
                self.state = ButtonState::Up;
                Some(Edge::Release)
            }
            _ => None,
        }
    }

    /// Current debounced state.
    #[inline]
    pub const fn state(&self) -> ButtonState {
        self.state
    }

    /// Returns true if the debounced state is Down.
    #[inline]
    pub const fn is_down(&self) -> bool {
        self.state.is_down()
    }
}

/// Everything that happened during one sampling tick across a bank.
#[derive(Debug, Clone, Default)]
pub struct TickReport {
    events: heapless::Vec<ButtonEvent, { Button::COUNT }>,
}

impl TickReport {
    /// The debounced transitions that completed this tick, in button order.
    #[inline]
    pub fn events(&self) -> &[ButtonEvent] {
        &self.events
    }

    /// Number of Up -> Down transitions this tick.
    pub fn presses(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, ButtonEvent::Pressed(_)))
            .count()
    }

    /// Returns true if no button changed state this tick.
    #[inline]
    pub fn is_quiet(&self) -> bool {
        self.events.is_empty()
    }
}

/// Debounce engine for the full six-button set.
///
/// Owns one [`Debouncer`] per [`Button`] plus the process-wide press
/// counter. The counter increments exactly once per Up -> Down transition
/// and never decreases; it saturates at `u16::MAX` rather than wrapping so
/// that "monotonically increasing, never reset" holds for the whole program
/// lifetime.
///
/// The bank is the single writer of all debounce state. Publish its
/// [`snapshot`](ButtonBank::snapshot) through a
/// [`SnapshotCell`](crate::snapshot::SnapshotCell) to hand the result to a
/// reader in another execution context.
#[derive(Debug, Clone)]
pub struct ButtonBank {
    debouncers: [Debouncer; Button::COUNT],
    press_count: u16,
}

impl ButtonBank {
    /// Creates a bank with per-button wiring, all buttons Up, count 0.
    pub const fn new(wiring: [Polarity; Button::COUNT]) -> Self {
        let mut debouncers = [Debouncer::new(Polarity::ActiveHigh); Button::COUNT];
        let mut i = 0;
        while i < Button::COUNT {
            debouncers[i] = Debouncer::new(wiring[i]);
            i += 1;
        }
        Self {
            debouncers,
            press_count: 0,
        }
    }

    /// Runs one sampling tick: shift, sample and evaluate every button.
    ///
    /// Intended to be driven at a fixed rate (a periodic timer interrupt or
    /// a [`Cadence`](crate::scheduler::Cadence)-gated task) so that the
    /// eight-sample window corresponds to a fixed real-time debounce
    /// duration. Runs unconditionally: there is no error path, only ticks
    /// on which nothing transitions.
    pub fn tick(&mut self, lines: &impl InputLines) -> TickReport {
        let mut report = TickReport::default();

        for button in Button::ALL {
            let level = lines.level(button);
            let edge = self.debouncers[button.index()].sample(level);

            let event = match edge {
                Some(Edge::Press) => {
                    self.press_count = self.press_count.saturating_add(1);
                    ButtonEvent::Pressed(button)
                }
                Some(Edge::Release) => ButtonEvent::Released(button),
                None => continue,
            };
            // Capacity is one event per button, so this cannot fail.
            let _ = report.events.push(event);
        }

        report
    }

    /// Debounced state of one button.
    #[inline]
    pub fn state(&self, button: Button) -> ButtonState {
        self.debouncers[button.index()].state()
    }

    /// Total number of accepted presses since construction.
    #[inline]
    pub fn press_count(&self) -> u16 {
        self.press_count
    }

    /// Captures the current states and press count as an immutable value.
    pub fn snapshot(&self) -> crate::snapshot::InputSnapshot {
        let mut down_bits = 0u8;
        for button in Button::ALL {
            if self.state(button).is_down() {
                down_bits |= 1 << button.index();
            }
        }
        crate::snapshot::InputSnapshot::new(down_bits, self.press_count)
    }
}

impl Default for ButtonBank {
    /// A bank wired active-high on every line.
    fn default() -> Self {
        Self::new([Polarity::ActiveHigh; Button::COUNT])
    }
}
