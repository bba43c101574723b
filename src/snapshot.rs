//! Snapshot handoff between the sampling context and the render context.
//!
//! [`InputSnapshot`] freezes the debounced button states and the press count
//! into one immutable value, and [`SnapshotCell`] moves that value across
//! execution contexts (interrupt to main loop, task to task) through a single
//! atomic word, so a reader can never observe a half-updated pair.

use core::sync::atomic::{AtomicU32, Ordering};

use crate::types::{Button, ButtonState};

/// Mask of the valid down-flag bits, one per button.
const DOWN_MASK: u32 = (1 << Button::COUNT) - 1;

/// An immutable capture of the debounced input state.
///
/// Carries one down-flag per [`Button`] and the total press count, packed
/// into a single `u32`: flags in the low bits, count in the high half.
/// Because the whole capture fits one machine word, publishing it is a
/// plain atomic store and reading it back is a plain atomic load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InputSnapshot {
    bits: u32,
}

impl InputSnapshot {
    /// Builds a snapshot from raw down flags (bit N = button with index N
    /// is Down) and a press count. Flag bits beyond the button set are
    /// discarded.
    pub const fn new(down_bits: u8, press_count: u16) -> Self {
        Self {
            bits: (down_bits as u32 & DOWN_MASK) | ((press_count as u32) << 16),
        }
    }

    /// The boot snapshot: every button Up, zero presses.
    pub const fn empty() -> Self {
        Self::new(0, 0)
    }

    /// Debounced state of one button at capture time.
    pub const fn state(self, button: Button) -> ButtonState {
        if self.is_down(button) {
            ButtonState::Down
        } else {
            ButtonState::Up
        }
    }

    /// Returns true if the button was Down at capture time.
    pub const fn is_down(self, button: Button) -> bool {
        self.bits & (1 << button.index()) != 0
    }

    /// Returns true if any button was Down at capture time.
    pub const fn any_down(self) -> bool {
        self.bits & DOWN_MASK != 0
    }

    /// Total accepted presses at capture time.
    pub const fn press_count(self) -> u16 {
        (self.bits >> 16) as u16
    }

    pub(crate) const fn from_bits(bits: u32) -> Self {
        Self { bits }
    }

    pub(crate) const fn to_bits(self) -> u32 {
        self.bits
    }
}

impl Default for InputSnapshot {
    fn default() -> Self {
        Self::empty()
    }
}

/// Single-producer handoff cell holding the most recent [`InputSnapshot`].
///
/// The sampling context overwrites the cell after every tick; readers take
/// whatever is current. Old snapshots are deliberately lost - the reader
/// wants the present state, not a history. Suitable for a `static` shared
/// between an interrupt handler and the main loop.
#[derive(Debug)]
pub struct SnapshotCell {
    bits: AtomicU32,
}

impl SnapshotCell {
    /// Creates a cell holding the boot snapshot.
    pub const fn new() -> Self {
        Self {
            bits: AtomicU32::new(InputSnapshot::empty().to_bits()),
        }
    }

    /// Replaces the cell's contents with a fresh snapshot.
    ///
    /// A single atomic store: the flags and count always land together.
    #[inline]
    pub fn publish(&self, snapshot: InputSnapshot) {
        self.bits.store(snapshot.to_bits(), Ordering::Release);
    }

    /// Reads the most recently published snapshot.
    #[inline]
    pub fn latest(&self) -> InputSnapshot {
        InputSnapshot::from_bits(self.bits.load(Ordering::Acquire))
    }
}

impl Default for SnapshotCell {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_snapshot_is_all_up_with_zero_count() {
        let snapshot = InputSnapshot::empty();
        for button in Button::ALL {
            assert_eq!(snapshot.state(button), ButtonState::Up);
        }
        assert!(!snapshot.any_down());
        assert_eq!(snapshot.press_count(), 0);
        assert_eq!(InputSnapshot::default(), snapshot);
    }

    #[test]
    fn flags_and_count_survive_packing() {
        let snapshot = InputSnapshot::new(0b10_0101, 1234);

        assert!(snapshot.is_down(Button::DpadLeft));
        assert!(!snapshot.is_down(Button::DpadRight));
        assert!(snapshot.is_down(Button::DpadUp));
        assert!(!snapshot.is_down(Button::DpadDown));
        assert!(!snapshot.is_down(Button::AuxLeft));
        assert!(snapshot.is_down(Button::AuxRight));
        assert!(snapshot.any_down());
        assert_eq!(snapshot.press_count(), 1234);
    }

    #[test]
    fn stray_flag_bits_are_discarded() {
        let snapshot = InputSnapshot::new(0xFF, u16::MAX);
        for button in Button::ALL {
            assert!(snapshot.is_down(button));
        }
        assert_eq!(snapshot.press_count(), u16::MAX);
        assert_eq!(snapshot, InputSnapshot::new(0b11_1111, u16::MAX));
    }

    #[test]
    fn cell_starts_at_boot_and_tracks_the_latest_publish() {
        let cell = SnapshotCell::new();
        assert_eq!(cell.latest(), InputSnapshot::empty());

        cell.publish(InputSnapshot::new(0b000001, 1));
        cell.publish(InputSnapshot::new(0b000011, 7));
        let seen = cell.latest();
        assert_eq!(seen.press_count(), 7);
        assert!(seen.is_down(Button::DpadLeft));
        assert!(seen.is_down(Button::DpadRight));

        // Reading is not consuming.
        assert_eq!(cell.latest(), seen);
    }
}
