//! Core types for button identity, state and wiring.

/// The six physical buttons tracked by the monitor.
///
/// The set is fixed: a directional pad plus two auxiliary buttons, matching
/// the reference hardware. `Button` doubles as an index into per-button
/// arrays via [`Button::index`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Button {
    /// D-pad left.
    DpadLeft,
    /// D-pad right.
    DpadRight,
    /// D-pad up.
    DpadUp,
    /// D-pad down.
    DpadDown,
    /// Left auxiliary button.
    AuxLeft,
    /// Right auxiliary button.
    AuxRight,
}

impl Button {
    /// Number of buttons.
    pub const COUNT: usize = 6;

    /// All buttons, in index order.
    pub const ALL: [Button; Button::COUNT] = [
        Button::DpadLeft,
        Button::DpadRight,
        Button::DpadUp,
        Button::DpadDown,
        Button::AuxLeft,
        Button::AuxRight,
    ];

    /// Stable index of this button (0..6).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Debounced logical state of a button.
///
/// Distinct from the instantaneous electrical level of the input line:
/// a button only changes logical state after a full window of consistent
/// raw samples (see [`crate::debounce::Debouncer`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonState {
    /// Released.
    Up,
    /// Pressed.
    Down,
}

impl ButtonState {
    /// Returns true if the state is `Down`.
    #[inline]
    pub const fn is_down(self) -> bool {
        matches!(self, ButtonState::Down)
    }
}

impl Default for ButtonState {
    fn default() -> Self {
        ButtonState::Up
    }
}

/// Electrical wiring of a button line.
///
/// Whether a high level on the line means "pressed" is a hardware fact
/// that differs per board (pull-down to ground vs. pull-up with the switch
/// to ground). Configured per button at bank construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Polarity {
    /// A high level means pressed.
    ActiveHigh,
    /// A low level means pressed.
    ActiveLow,
}

impl Polarity {
    /// Maps a raw electrical level to a pressed/released sample.
    #[inline]
    pub const fn is_pressed(self, level: bool) -> bool {
        match self {
            Polarity::ActiveHigh => level,
            Polarity::ActiveLow => !level,
        }
    }
}

impl Default for Polarity {
    fn default() -> Self {
        Polarity::ActiveHigh
    }
}

/// A debounced state transition reported by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonEvent {
    /// The button completed an Up -> Down transition.
    Pressed(Button),
    /// The button completed a Down -> Up transition.
    Released(Button),
}

impl ButtonEvent {
    /// The button this event refers to.
    #[inline]
    pub const fn button(self) -> Button {
        match self {
            ButtonEvent::Pressed(b) | ButtonEvent::Released(b) => b,
        }
    }
}
