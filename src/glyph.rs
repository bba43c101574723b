//! The 8x8 monochrome glyphs drawn for each button state.

use crate::types::ButtonState;

/// Glyph width in pixels.
pub const GLYPH_WIDTH: u32 = 8;

/// Glyph height in pixels.
pub const GLYPH_HEIGHT: u32 = 8;

/// An 8x8 one-bit-per-pixel image, one byte per row, leftmost pixel in the
/// most significant bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    rows: [u8; GLYPH_HEIGHT as usize],
}

impl Glyph {
    /// Solid filled square, shown while a button is Down.
    pub const PRESSED: Self = Self {
        rows: [0xFF; GLYPH_HEIGHT as usize],
    };

    /// Hollow square outline, shown while a button is Up.
    pub const UNPRESSED: Self = Self {
        rows: [0xFF, 0x81, 0x81, 0x81, 0x81, 0x81, 0x81, 0xFF],
    };

    /// The glyph for a debounced state.
    pub const fn for_state(state: ButtonState) -> Self {
        match state {
            ButtonState::Down => Self::PRESSED,
            ButtonState::Up => Self::UNPRESSED,
        }
    }

    /// Row bytes, top to bottom.
    #[inline]
    pub const fn as_bytes(&self) -> &[u8] {
        &self.rows
    }

    /// Returns true if the pixel at (x, y) is lit. Out-of-range
    /// coordinates read as unlit.
    pub const fn pixel(&self, x: u32, y: u32) -> bool {
        if x >= GLYPH_WIDTH || y >= GLYPH_HEIGHT {
            return false;
        }
        self.rows[y as usize] >> (GLYPH_WIDTH - 1 - x) & 1 != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pressed_glyph_is_solid() {
        for y in 0..GLYPH_HEIGHT {
            for x in 0..GLYPH_WIDTH {
                assert!(Glyph::PRESSED.pixel(x, y));
            }
        }
    }

    #[test]
    fn unpressed_glyph_is_a_hollow_outline() {
        for y in 0..GLYPH_HEIGHT {
            for x in 0..GLYPH_WIDTH {
                let on_border =
                    x == 0 || x == GLYPH_WIDTH - 1 || y == 0 || y == GLYPH_HEIGHT - 1;
                assert_eq!(Glyph::UNPRESSED.pixel(x, y), on_border, "({x}, {y})");
            }
        }
    }

    #[test]
    fn state_selects_the_glyph() {
        assert_eq!(Glyph::for_state(ButtonState::Down), Glyph::PRESSED);
        assert_eq!(Glyph::for_state(ButtonState::Up), Glyph::UNPRESSED);
    }

    #[test]
    fn rows_are_msb_leftmost() {
        // Second row of the outline is 0x81: only the outer columns lit.
        assert!(Glyph::UNPRESSED.pixel(0, 1));
        assert!(!Glyph::UNPRESSED.pixel(1, 1));
        assert!(!Glyph::UNPRESSED.pixel(6, 1));
        assert!(Glyph::UNPRESSED.pixel(7, 1));
    }

    #[test]
    fn out_of_range_pixels_read_unlit() {
        assert!(!Glyph::PRESSED.pixel(GLYPH_WIDTH, 0));
        assert!(!Glyph::PRESSED.pixel(0, GLYPH_HEIGHT));
    }
}
