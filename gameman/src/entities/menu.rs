//! Highlightable text menu.
//!
//! Down and Up move the highlight (no wrap-around), A marks the highlighted
//! option as selected. The game state machine polls [`Menu::option_selected`]
//! and decides what the selection means.

use crate::drawable::{Drawable, RenderStyle, RenderTarget, Tick};
use crate::input::Buttons;
use crate::video::text::{self, FONT_HEIGHT, TextStyle};
use crate::video::{Surface, colors};

pub struct Menu {
    x: u16,
    y: u16,
    header: &'static str,
    options: &'static [&'static str],
    highlighted: u8,
    selected: bool,
    last_action_ms: u32,
    style: RenderStyle,
}

impl Menu {
    pub fn new(
        x: u16,
        y: u16,
        header: &'static str,
        options: &'static [&'static str],
        now_ms: u32,
        style: RenderStyle,
    ) -> Self {
        debug_assert!(options.len() <= u8::MAX as usize);
        Self {
            x,
            y,
            header,
            options,
            highlighted: 0,
            selected: false,
            last_action_ms: now_ms,
            style,
        }
    }

    pub fn highlighted_option(&self) -> u8 {
        self.highlighted
    }

    pub fn option_selected(&self) -> bool {
        self.selected
    }

    pub fn num_options(&self) -> u8 {
        self.options.len() as u8
    }

    fn line_style(&self, index: usize) -> TextStyle {
        let bg = if index == self.highlighted as usize {
            colors::BLUE
        } else {
            colors::BLACK
        };
        TextStyle::new(colors::WHITE, bg)
    }

    /// Each line as `(y, text, style)`: the header, a blank line, then the options.
    fn lines(&self) -> impl Iterator<Item = (u16, &'static str, TextStyle)> + '_ {
        let header = (self.y, self.header, TextStyle::default());
        let first_option = self.y.saturating_add(2 * FONT_HEIGHT);
        let options = self.options.iter().enumerate().map(move |(i, option)| {
            let y = first_option.saturating_add(i as u16 * FONT_HEIGHT);
            (y, *option, self.line_style(i))
        });
        core::iter::once(header).chain(options)
    }

    fn render_cpu(&self, surface: &mut Surface) {
        for (y, line, style) in self.lines() {
            text::write_string(surface, self.x, y, line, &style);
        }
    }

    /// Background as one rectangle per line, then the glyphs over it.
    fn render_dma2d(&self, surface: &mut Surface) {
        for (y, line, style) in self.lines() {
            if let Some(bg) = style.bg {
                surface.fill_rect(self.x, y, style.text_width(line), style.glyph_height(), bg);
            }
            text::write_string(surface, self.x, y, line, &TextStyle::transparent(style.fg));
        }
    }
}

impl Drawable for Menu {
    fn update(&mut self, tick: &Tick) {
        if tick.now_ms.wrapping_sub(self.last_action_ms) <= tick.config.menu_repeat_ms {
            return;
        }

        let input = tick.input;
        if input.just_pressed(Buttons::DOWN) {
            if self.highlighted + 1 < self.num_options() {
                self.highlighted += 1;
                self.last_action_ms = tick.now_ms;
            }
        } else if input.just_pressed(Buttons::UP) {
            if self.highlighted > 0 {
                self.highlighted -= 1;
                self.last_action_ms = tick.now_ms;
            }
        } else if input.just_pressed(Buttons::A) {
            self.selected = true;
            self.last_action_ms = tick.now_ms;
        }
    }

    fn render(&self, target: &mut RenderTarget) {
        match self.style {
            RenderStyle::Cpu => self.render_cpu(&mut target.surface),
            RenderStyle::Dma2d => self.render_dma2d(&mut target.surface),
        }
    }
}
