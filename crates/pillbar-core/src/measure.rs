//! Text-width measurement seams.
//!
//! The fit estimator only ever sees widths through [`TextWidth`], so the same
//! greedy loop serves terminal rendering (display columns) and pixel layouts
//! (font advance tables). Each measurer also knows the per-pill overhead its
//! unit implies.

use unicode_width::UnicodeWidthStr;

/// Measures label text for pill layout.
pub trait TextWidth {
    /// Width of `label` in the measurer's unit.
    fn width(&self, label: &str) -> u16;

    /// Fixed cost per pill beyond its label (padding, separator, close marker).
    fn pill_overhead(&self) -> u16;
}

/// Per-pill chrome in terminal cells: bracket pair, close marker and its gap,
/// trailing separator.
pub const CELL_PILL_OVERHEAD: u16 = 5;

/// Per-pill chrome in pixels: padding, separator margin, close icon.
pub const FONT_PILL_OVERHEAD: u16 = 50;

/// Default font size for pixel measurement.
pub const DEFAULT_FONT_SIZE: f32 = 12.0;

/// Terminal-cell measurement (display columns).
#[derive(Debug, Clone, Copy, Default)]
pub struct CellWidth;

impl TextWidth for CellWidth {
    fn width(&self, label: &str) -> u16 {
        UnicodeWidthStr::width(label) as u16
    }

    fn pill_overhead(&self) -> u16 {
        CELL_PILL_OVERHEAD
    }
}

/// Approximate pixel measurement from a per-glyph advance table.
///
/// Advances are stored in em units for printable ASCII and multiplied by the
/// font size; the total is rounded up to whole pixels. Glyphs outside the
/// table fall back to a representative advance. Close enough to a real text
/// measurer for fit estimation, which only needs cumulative sums.
#[derive(Debug, Clone, Copy)]
pub struct FontWidth {
    font_size: f32,
}

/// Advance widths in em units for ASCII 0x20..=0x7E (Helvetica metrics).
#[rustfmt::skip]
const ASCII_ADVANCES: [f32; 95] = [
    0.278, 0.278, 0.355, 0.556, 0.556, 0.889, 0.667, 0.191, // ' '..'\''
    0.333, 0.333, 0.389, 0.584, 0.278, 0.333, 0.278, 0.278, // '('..'/'
    0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, // '0'..'7'
    0.556, 0.556, 0.278, 0.278, 0.584, 0.584, 0.584, 0.556, // '8'..'?'
    1.015, 0.667, 0.667, 0.722, 0.722, 0.667, 0.611, 0.778, // '@'..'G'
    0.722, 0.278, 0.500, 0.667, 0.556, 0.833, 0.722, 0.778, // 'H'..'O'
    0.667, 0.778, 0.722, 0.667, 0.611, 0.722, 0.667, 0.944, // 'P'..'W'
    0.667, 0.667, 0.611, 0.278, 0.278, 0.278, 0.469, 0.556, // 'X'..'_'
    0.333, 0.556, 0.556, 0.500, 0.556, 0.556, 0.278, 0.556, // '`'..'g'
    0.556, 0.222, 0.222, 0.500, 0.222, 0.833, 0.556, 0.556, // 'h'..'o'
    0.556, 0.556, 0.333, 0.500, 0.278, 0.556, 0.500, 0.722, // 'p'..'w'
    0.500, 0.500, 0.500, 0.334, 0.260, 0.334, 0.584,        // 'x'..'~'
];

/// Advance used for glyphs outside the ASCII table.
const FALLBACK_ADVANCE: f32 = 0.556;

impl FontWidth {
    pub fn new(font_size: f32) -> Self {
        Self { font_size }
    }

    fn advance(c: char) -> f32 {
        let code = c as u32;
        if (0x20..=0x7E).contains(&code) {
            ASCII_ADVANCES[(code - 0x20) as usize]
        } else {
            FALLBACK_ADVANCE
        }
    }
}

impl Default for FontWidth {
    fn default() -> Self {
        Self::new(DEFAULT_FONT_SIZE)
    }
}

impl TextWidth for FontWidth {
    fn width(&self, label: &str) -> u16 {
        let em: f32 = label.chars().map(Self::advance).sum();
        (em * self.font_size).ceil() as u16
    }

    fn pill_overhead(&self) -> u16 {
        FONT_PILL_OVERHEAD
    }
}
