//! Fixed-width bitmap text.
//!
//! Glyphs are 7×12 and can be scaled by a rational factor `scale_n / scale_d`,
//! so 3/2 gives 10×18 glyphs. Text never wraps on word boundaries; a line ends
//! at a `'\n'` or when the next glyph would run off the right edge.

use bit_field::BitField;

pub use super::font::{FONT_HEIGHT, FONT_WIDTH};
use super::font::{FIRST_CHAR, FONT12, LAST_CHAR};
use super::{Surface, colors};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct TextStyle {
    pub fg: u16,
    /// `None` leaves the pixels behind the glyph untouched.
    pub bg: Option<u16>,
    pub scale_n: u8,
    pub scale_d: u8,
}

impl TextStyle {
    pub const fn new(fg: u16, bg: u16) -> Self {
        Self {
            fg,
            bg: Some(bg),
            scale_n: 1,
            scale_d: 1,
        }
    }

    pub const fn transparent(fg: u16) -> Self {
        Self {
            fg,
            bg: None,
            scale_n: 1,
            scale_d: 1,
        }
    }

    pub const fn scaled(self, scale_n: u8, scale_d: u8) -> Self {
        Self {
            scale_n,
            scale_d,
            ..self
        }
    }

    /// Horizontal advance of one glyph in pixels.
    pub const fn glyph_width(&self) -> u16 {
        if self.scale_d == 0 {
            return 0;
        }
        (self.scale_n as u16 * FONT_WIDTH) / self.scale_d as u16
    }

    /// Line height in pixels.
    pub const fn glyph_height(&self) -> u16 {
        if self.scale_d == 0 {
            return 0;
        }
        (self.scale_n as u16 * FONT_HEIGHT) / self.scale_d as u16
    }

    /// Width of a single line of `text`.
    pub fn text_width(&self, text: &str) -> u16 {
        (text.len() as u16).saturating_mul(self.glyph_width())
    }
}

impl Default for TextStyle {
    /// White on black at 1:1.
    fn default() -> Self {
        Self::new(colors::WHITE, colors::BLACK)
    }
}

fn glyph(c: u8) -> &'static [u8] {
    let c = if (FIRST_CHAR..=LAST_CHAR).contains(&c) { c } else { b'?' };
    let start = (c - FIRST_CHAR) as usize * FONT_HEIGHT as usize;
    &FONT12[start..start + FONT_HEIGHT as usize]
}

pub fn write_char(surface: &mut Surface, x: u16, y: u16, c: u8, style: &TextStyle) {
    if style.scale_n == 0 || style.scale_d == 0 {
        return;
    }
    let (n, d) = (style.scale_n as u16, style.scale_d as u16);
    let rows = glyph(c);

    for gy in 0..style.glyph_height() {
        let line = rows[(d * gy / n) as usize];
        for gx in 0..style.glyph_width() {
            let column = (d * gx / n) as usize;
            let (px, py) = (x.saturating_add(gx), y.saturating_add(gy));
            if line.get_bit(7 - column) {
                surface.set_pixel(px, py, style.fg);
            } else if let Some(bg) = style.bg {
                surface.set_pixel(px, py, bg);
            }
        }
    }
}

/// Draw `text` with its first glyph at `(x, y)`.
///
/// Returns where the next glyph would go.
pub fn write_string(surface: &mut Surface, x: u16, y: u16, text: &str, style: &TextStyle) -> (u16, u16) {
    let advance = style.glyph_width();
    let line_height = style.glyph_height();
    let (mut cx, mut cy) = (x, y);

    for c in text.bytes() {
        if c == b'\n' {
            cx = x;
            cy = cy.saturating_add(line_height);
            continue;
        }
        if cx > x && cx as u32 + advance as u32 > surface.width() as u32 {
            cx = x;
            cy = cy.saturating_add(line_height);
        }
        write_char(surface, cx, cy, c, style);
        cx = cx.saturating_add(advance);
    }
    (cx, cy)
}
