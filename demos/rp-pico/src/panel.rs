//! Text-mode panel rendered over RTT.
//!
//! Maps the 84x48 pixel layout onto a 16x6 character grid: each glyph cell
//! becomes one character ('#' pressed, 'o' released) and the text readouts
//! land in the top row. Every present pushes the frame through
//! `rtt-target`, so a debug probe shows the live panel.

use button_monitor::{Glyph, PanelDisplay};
use rtt_target::rprintln;

const COLS: usize = 16;
const ROWS: usize = 6;
const CELL_WIDTH: u32 = 6;
const CELL_HEIGHT: u32 = 8;

/// [`PanelDisplay`] implementation drawing characters into an RTT console.
pub struct RttPanel {
    grid: [[u8; COLS]; ROWS],
}

impl RttPanel {
    pub const fn new() -> Self {
        Self {
            grid: [[b' '; COLS]; ROWS],
        }
    }

    fn put(&mut self, col: usize, row: usize, byte: u8) {
        if col < COLS && row < ROWS {
            self.grid[row][col] = byte;
        }
    }
}

impl Default for RttPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl PanelDisplay for RttPanel {
    fn clear(&mut self) {
        self.grid = [[b' '; COLS]; ROWS];
    }

    fn draw_glyph(&mut self, x: u32, y: u32, glyph: &Glyph) {
        let marker = if *glyph == Glyph::PRESSED { b'#' } else { b'o' };
        self.put(
            (x / CELL_WIDTH) as usize,
            (y / CELL_HEIGHT) as usize,
            marker,
        );
    }

    fn draw_text(&mut self, x: u32, y: u32, text: &str) {
        let row = (y / CELL_HEIGHT) as usize;
        let start = (x / CELL_WIDTH) as usize;
        for (offset, byte) in text.bytes().enumerate() {
            self.put(start + offset, row, byte);
        }
    }

    fn present(&mut self) {
        const BORDER: &str = "+----------------+";

        rprintln!("{}", BORDER);
        for row in &self.grid {
            rprintln!("|{}|", core::str::from_utf8(row).unwrap_or(""));
        }
        rprintln!("{}", BORDER);
    }
}
