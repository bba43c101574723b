//! Status panel rendering: six button glyphs plus the press count and
//! elapsed time readouts, drawn in a fixed full-redraw sequence.

use core::fmt::Write;

use crate::glyph::Glyph;
use crate::snapshot::InputSnapshot;
use crate::time::Elapsed;
use crate::types::Button;

/// Press counts above this render as "9999" so the readout keeps its
/// four-character width.
const MAX_SHOWN_COUNT: u16 = 9999;

/// Trait for abstracting the panel's display hardware.
///
/// Implement this for your display (an LCD controller, an OLED frame
/// buffer, a terminal emulator in tests). Coordinates are pixels from the
/// top-left corner. Handle any hardware errors internally - these methods
/// cannot fail.
///
/// Buffered implementations should stage `clear`, `draw_glyph` and
/// `draw_text` off-screen and push the frame in [`present`]; unbuffered
/// ones draw immediately and leave `present` a no-op.
///
/// [`present`]: PanelDisplay::present
pub trait PanelDisplay {
    /// Blanks the whole drawing surface.
    fn clear(&mut self);

    /// Draws an 8x8 glyph with its top-left corner at (x, y).
    fn draw_glyph(&mut self, x: u32, y: u32, glyph: &Glyph);

    /// Draws a text run with its top-left corner at (x, y).
    fn draw_text(&mut self, x: u32, y: u32, text: &str);

    /// Makes everything drawn since the last call visible.
    fn present(&mut self);
}

/// Pixel positions for every element the panel draws.
///
/// The default layout arranges the d-pad glyphs in a plus shape at the
/// left, the auxiliary pair to their right, and the two text readouts
/// along the top edge:
///
/// ```text
/// NNNN                      S.FFFF
///
///         [U]
///      [L]   [R]      [A]   [B]
///         [D]
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelLayout {
    glyph_origins: [(u32, u32); Button::COUNT],
    count_origin: (u32, u32),
    elapsed_origin: (u32, u32),
}

impl PanelLayout {
    /// The 84x48-friendly arrangement shown in the type docs.
    pub const DEFAULT: Self = Self {
        glyph_origins: [
            (0, 32),  // DpadLeft
            (16, 32), // DpadRight
            (8, 24),  // DpadUp
            (8, 40),  // DpadDown
            (60, 32), // AuxLeft
            (76, 32), // AuxRight
        ],
        count_origin: (0, 0),
        elapsed_origin: (54, 0),
    };

    /// Builds a custom arrangement. `glyph_origins` is indexed by
    /// [`Button::index`].
    pub const fn new(
        glyph_origins: [(u32, u32); Button::COUNT],
        count_origin: (u32, u32),
        elapsed_origin: (u32, u32),
    ) -> Self {
        Self {
            glyph_origins,
            count_origin,
            elapsed_origin,
        }
    }

    /// Top-left corner of one button's glyph.
    #[inline]
    pub const fn glyph_origin(&self, button: Button) -> (u32, u32) {
        self.glyph_origins[button.index()]
    }

    /// Top-left corner of the press count readout.
    #[inline]
    pub const fn count_origin(&self) -> (u32, u32) {
        self.count_origin
    }

    /// Top-left corner of the elapsed time readout.
    #[inline]
    pub const fn elapsed_origin(&self) -> (u32, u32) {
        self.elapsed_origin
    }
}

impl Default for PanelLayout {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Draws the full status panel from a snapshot.
///
/// Owns the display and performs a complete redraw on every
/// [`render`](StatusPanel::render) call: clear, the six glyphs in button
/// order, the elapsed time, the press count, then present. Redrawing
/// everything keeps the panel correct without tracking damage, which is
/// the right trade at a handful of frames per second.
#[derive(Debug)]
pub struct StatusPanel<D: PanelDisplay> {
    display: D,
    layout: PanelLayout,
}

impl<D: PanelDisplay> StatusPanel<D> {
    /// Creates a panel over a display using the default layout.
    pub fn new(display: D) -> Self {
        Self::with_layout(display, PanelLayout::DEFAULT)
    }

    /// Creates a panel over a display with a custom layout.
    pub fn with_layout(display: D, layout: PanelLayout) -> Self {
        Self { display, layout }
    }

    /// Redraws the whole panel for one snapshot and elapsed time.
    pub fn render(&mut self, snapshot: InputSnapshot, elapsed: Elapsed) {
        self.display.clear();

        for button in Button::ALL {
            let (x, y) = self.layout.glyph_origin(button);
            let glyph = Glyph::for_state(snapshot.state(button));
            self.display.draw_glyph(x, y, &glyph);
        }

        let (x, y) = self.layout.elapsed_origin();
        self.display.draw_text(x, y, &format_elapsed(elapsed));

        let (x, y) = self.layout.count_origin();
        self.display.draw_text(x, y, &format_press_count(snapshot.press_count()));

        self.display.present();
    }

    /// The wrapped display.
    pub fn display(&self) -> &D {
        &self.display
    }

    /// Mutable access to the wrapped display.
    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }
}

/// Formats a press count right-justified in four characters.
fn format_press_count(count: u16) -> heapless::String<8> {
    let shown = count.min(MAX_SHOWN_COUNT);
    let mut text = heapless::String::new();
    // Four characters always fit the buffer.
    let _ = write!(text, "{shown:>4}");
    text
}

/// Formats an elapsed time as seconds with four fractional digits.
fn format_elapsed(elapsed: Elapsed) -> heapless::String<24> {
    let mut text = heapless::String::new();
    // At most 14 integer digits plus ".FFFF" fit the buffer.
    let _ = write!(text, "{elapsed}");
    text
}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::string::{String, ToString};
    use std::vec::Vec;

    use super::*;
    use crate::types::ButtonState;

    #[derive(Debug, Clone, PartialEq)]
    enum Op {
        Clear,
        Glyph(u32, u32, Glyph),
        Text(u32, u32, String),
        Present,
    }

    #[derive(Default)]
    struct RecordingDisplay {
        ops: Vec<Op>,
    }

    impl PanelDisplay for RecordingDisplay {
        fn clear(&mut self) {
            self.ops.push(Op::Clear);
        }

        fn draw_glyph(&mut self, x: u32, y: u32, glyph: &Glyph) {
            self.ops.push(Op::Glyph(x, y, *glyph));
        }

        fn draw_text(&mut self, x: u32, y: u32, text: &str) {
            self.ops.push(Op::Text(x, y, text.to_string()));
        }

        fn present(&mut self) {
            self.ops.push(Op::Present);
        }
    }

    #[test]
    fn render_follows_the_fixed_sequence() {
        let mut panel = StatusPanel::new(RecordingDisplay::default());
        let snapshot = InputSnapshot::new(1 << Button::DpadUp.index(), 7);

        panel.render(snapshot, Elapsed::from_micros(999_936));

        let expected = [
            Op::Clear,
            Op::Glyph(0, 32, Glyph::UNPRESSED),
            Op::Glyph(16, 32, Glyph::UNPRESSED),
            Op::Glyph(8, 24, Glyph::PRESSED),
            Op::Glyph(8, 40, Glyph::UNPRESSED),
            Op::Glyph(60, 32, Glyph::UNPRESSED),
            Op::Glyph(76, 32, Glyph::UNPRESSED),
            Op::Text(54, 0, "0.9999".to_string()),
            Op::Text(0, 0, "   7".to_string()),
            Op::Present,
        ];
        assert_eq!(panel.display().ops, expected);
    }

    #[test]
    fn every_render_redraws_from_scratch() {
        let mut panel = StatusPanel::new(RecordingDisplay::default());

        panel.render(InputSnapshot::empty(), Elapsed::ZERO);
        panel.render(InputSnapshot::empty(), Elapsed::ZERO);

        let clears = panel
            .display()
            .ops
            .iter()
            .filter(|op| **op == Op::Clear)
            .count();
        let presents = panel
            .display()
            .ops
            .iter()
            .filter(|op| **op == Op::Present)
            .count();
        assert_eq!(clears, 2);
        assert_eq!(presents, 2);
        assert_eq!(panel.display().ops.len(), 20);
    }

    #[test]
    fn custom_layout_moves_every_element() {
        let layout = PanelLayout::new(
            [(0, 0), (8, 0), (16, 0), (24, 0), (32, 0), (40, 0)],
            (0, 56),
            (40, 56),
        );
        let mut panel = StatusPanel::with_layout(RecordingDisplay::default(), layout);

        panel.render(InputSnapshot::empty(), Elapsed::ZERO);

        assert!(panel.display().ops.contains(&Op::Glyph(40, 0, Glyph::UNPRESSED)));
        assert!(panel
            .display()
            .ops
            .contains(&Op::Text(0, 56, "   0".to_string())));
        assert!(panel
            .display()
            .ops
            .contains(&Op::Text(40, 56, "0.0000".to_string())));
    }

    #[test]
    fn press_count_is_right_justified_in_four_columns() {
        assert_eq!(format_press_count(0).as_str(), "   0");
        assert_eq!(format_press_count(7).as_str(), "   7");
        assert_eq!(format_press_count(42).as_str(), "  42");
        assert_eq!(format_press_count(1234).as_str(), "1234");
    }

    #[test]
    fn press_count_display_saturates_at_four_digits() {
        assert_eq!(format_press_count(9999).as_str(), "9999");
        assert_eq!(format_press_count(10_000).as_str(), "9999");
        assert_eq!(format_press_count(u16::MAX).as_str(), "9999");
    }

    #[test]
    fn glyph_choice_tracks_the_snapshot() {
        let mut down_bits = 0u8;
        for button in [Button::DpadLeft, Button::AuxRight] {
            down_bits |= 1 << button.index();
        }
        let snapshot = InputSnapshot::new(down_bits, 0);
        assert_eq!(snapshot.state(Button::DpadLeft), ButtonState::Down);

        let mut panel = StatusPanel::new(RecordingDisplay::default());
        panel.render(snapshot, Elapsed::ZERO);

        assert!(panel.display().ops.contains(&Op::Glyph(0, 32, Glyph::PRESSED)));
        assert!(panel.display().ops.contains(&Op::Glyph(76, 32, Glyph::PRESSED)));
        assert!(panel
            .display()
            .ops
            .contains(&Op::Glyph(16, 32, Glyph::UNPRESSED)));
    }
}
