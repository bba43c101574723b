//! Shared test infrastructure for button-monitor integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use core::cell::Cell;

use button_monitor::{Button, Glyph, Indicator, InputLines, PanelDisplay};

// ============================================================================
// Mock Input Lines
// ============================================================================

/// Mock GPIO port with an externally settable level image.
///
/// Bit N of the image is the electrical level of the button with index N.
/// Tests flip the image between ticks to script bounce patterns.
pub struct PortLines {
    image: Cell<u8>,
}

impl PortLines {
    pub fn new(image: u8) -> Self {
        Self {
            image: Cell::new(image),
        }
    }

    pub fn all_low() -> Self {
        Self::new(0)
    }

    /// Replaces the whole level image.
    pub fn set_image(&self, image: u8) {
        self.image.set(image);
    }

    /// Drives one button's line high or low.
    pub fn set_level(&self, button: Button, high: bool) {
        let bit = 1 << button.index();
        let image = self.image.get();
        self.image.set(if high { image | bit } else { image & !bit });
    }
}

impl InputLines for PortLines {
    fn level(&self, button: Button) -> bool {
        self.image.get() & (1 << button.index()) != 0
    }
}

impl InputLines for &PortLines {
    fn level(&self, button: Button) -> bool {
        (*self).level(button)
    }
}

// ============================================================================
// Mock Display
// ============================================================================

/// One drawing call as seen by the display.
#[derive(Debug, Clone, PartialEq)]
pub enum DisplayOp {
    Clear,
    Glyph(u32, u32, Glyph),
    Text(u32, u32, String),
    Present,
}

/// Mock display that records every drawing call for testing.
#[derive(Default)]
pub struct RecordingDisplay {
    ops: Vec<DisplayOp>,
}

impl RecordingDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ops(&self) -> &[DisplayOp] {
        &self.ops
    }

    /// The drawing calls of the most recent complete frame.
    pub fn last_frame(&self) -> &[DisplayOp] {
        let end = self
            .ops
            .iter()
            .rposition(|op| *op == DisplayOp::Present)
            .map(|i| i + 1)
            .unwrap_or(0);
        let start = self.ops[..end]
            .iter()
            .rposition(|op| *op == DisplayOp::Clear)
            .unwrap_or(0);
        &self.ops[start..end]
    }

    /// Number of completed frames.
    pub fn frames(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| **op == DisplayOp::Present)
            .count()
    }

    /// The text runs of the most recent complete frame, in draw order.
    pub fn last_texts(&self) -> Vec<String> {
        self.last_frame()
            .iter()
            .filter_map(|op| match op {
                DisplayOp::Text(_, _, text) => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    /// The glyph drawn at an origin in the most recent complete frame.
    pub fn glyph_at(&self, x: u32, y: u32) -> Option<Glyph> {
        self.last_frame().iter().find_map(|op| match op {
            DisplayOp::Glyph(gx, gy, glyph) if (*gx, *gy) == (x, y) => Some(*glyph),
            _ => None,
        })
    }
}

impl PanelDisplay for RecordingDisplay {
    fn clear(&mut self) {
        self.ops.push(DisplayOp::Clear);
    }

    fn draw_glyph(&mut self, x: u32, y: u32, glyph: &Glyph) {
        self.ops.push(DisplayOp::Glyph(x, y, *glyph));
    }

    fn draw_text(&mut self, x: u32, y: u32, text: &str) {
        self.ops.push(DisplayOp::Text(x, y, text.to_string()));
    }

    fn present(&mut self) {
        self.ops.push(DisplayOp::Present);
    }
}

// ============================================================================
// Mock Indicator
// ============================================================================

/// Mock indicator pin counting its toggles.
#[derive(Default)]
pub struct MockIndicator {
    toggles: usize,
}

impl MockIndicator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggles(&self) -> usize {
        self.toggles
    }

    /// Toggle parity, taking the pin as starting low.
    pub fn is_high(&self) -> bool {
        self.toggles % 2 == 1
    }
}

impl Indicator for &mut MockIndicator {
    fn toggle(&mut self) {
        self.toggles += 1;
    }
}

// ============================================================================
// Test Helper Functions
// ============================================================================

/// Bit mask for a set of buttons, for building level images.
pub fn mask(buttons: &[Button]) -> u8 {
    buttons.iter().fold(0, |acc, b| acc | 1 << b.index())
}
