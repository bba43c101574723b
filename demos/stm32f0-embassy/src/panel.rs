//! Text-mode panel rendered through defmt.
//!
//! Same character-grid reduction as the rp-pico demo: glyph cells become
//! single characters and the readouts share the top row. Frames go out as
//! defmt log lines, so any probe console shows the live panel.

use button_monitor::{Glyph, PanelDisplay};

const COLS: usize = 16;
const ROWS: usize = 6;
const CELL_WIDTH: u32 = 6;
const CELL_HEIGHT: u32 = 8;

/// [`PanelDisplay`] implementation drawing characters into the defmt log.
pub struct DefmtPanel {
    grid: [[u8; COLS]; ROWS],
}

impl DefmtPanel {
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

impl Default for DefmtPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl PanelDisplay for DefmtPanel {
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
        for row in &self.grid {
            defmt::info!("|{=str}|", core::str::from_utf8(row).unwrap_or(""));
        }
        defmt::info!("----------------");
    }
}
