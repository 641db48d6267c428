//! Every frame of a sprite set laid out on a grid, one of them outlined.

use crate::drawable::{Drawable, RenderStyle, RenderTarget, Tick};
use crate::input::Buttons;
use crate::sprites::SpriteSet;
use crate::video::colors;

pub const GALLERY_COLUMNS: u16 = 4;
/// Each sprite sits centered in a square cell this wide.
pub const GALLERY_CELL: u16 = 32;
const OUTLINE: u16 = 2;

pub struct Gallery {
    sprites: SpriteSet,
    selected: u8,
    style: RenderStyle,
}

impl Gallery {
    pub fn new(sprites: SpriteSet, style: RenderStyle) -> Self {
        Self {
            sprites,
            selected: 0,
            style,
        }
    }

    pub fn selected(&self) -> u8 {
        self.selected
    }

    fn rows(&self) -> u16 {
        (self.sprites.frames() as u16).div_ceil(GALLERY_COLUMNS)
    }

    /// Top-left corner of the cell holding frame `index`, grid centered on screen.
    pub fn cell_origin(&self, index: u8, width: u16, height: u16) -> (u16, u16) {
        let grid_w = GALLERY_COLUMNS * GALLERY_CELL;
        let grid_h = self.rows() * GALLERY_CELL;
        let left = width.saturating_sub(grid_w) / 2;
        let top = height.saturating_sub(grid_h) / 2;
        let (col, row) = (index as u16 % GALLERY_COLUMNS, index as u16 / GALLERY_COLUMNS);
        (left + col * GALLERY_CELL, top + row * GALLERY_CELL)
    }
}

impl Drawable for Gallery {
    fn update(&mut self, tick: &Tick) {
        let frames = self.sprites.frames();
        if frames == 0 {
            return;
        }
        let (selected, frames) = (self.selected as u16, frames as u16);
        if tick.input.just_pressed(Buttons::RIGHT) {
            self.selected = ((selected + 1) % frames) as u8;
        } else if tick.input.just_pressed(Buttons::LEFT) {
            self.selected = ((selected + frames - 1) % frames) as u8;
        }
    }

    fn render(&self, target: &mut RenderTarget) {
        let (width, height) = (target.surface.width(), target.surface.height());
        let (w, h) = (self.sprites.width(), self.sprites.height());
        let pad_x = GALLERY_CELL.saturating_sub(w) / 2;
        let pad_y = GALLERY_CELL.saturating_sub(h) / 2;

        for index in 0..self.sprites.frames() {
            let (cx, cy) = self.cell_origin(index, width, height);
            let (x, y) = (cx + pad_x, cy + pad_y);

            if index == self.selected {
                // the sprite covers the middle, leaving a frame
                let (ox, oy) = (x.saturating_sub(OUTLINE), y.saturating_sub(OUTLINE));
                target
                    .surface
                    .fill_rect(ox, oy, w + 2 * OUTLINE, h + 2 * OUTLINE, colors::YELLOW);
            }

            let frame = target.sprites.frame(&self.sprites, index);
            match self.style {
                RenderStyle::Cpu => target.surface.copy_rect_cpu(x, y, w, h, frame),
                RenderStyle::Dma2d => target.surface.copy_rect_block(x, y, w, h, frame),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::error::LoadError;
    use crate::input::InputHistory;
    use crate::sprites::{ImageLoader, SpriteBank};
    use crate::video::Surface;

    const PATHS: [&str; 8] = ["/0", "/1", "/2", "/3", "/4", "/5", "/6", "/7"];

    struct Solid;

    impl ImageLoader for Solid {
        fn load_image(&mut self, _path: &str, dest: &mut [u8]) -> Result<usize, LoadError> {
            for px in dest.chunks_exact_mut(2) {
                px.copy_from_slice(&colors::RED.to_ne_bytes());
            }
            Ok(dest.len())
        }
    }

    fn press(gallery: &mut Gallery, history: &mut InputHistory, button: Buttons) {
        let config = GameConfig::default();
        for sample in [button, Buttons::NONE] {
            history.push(sample);
            gallery.update(&Tick {
                input: history,
                now_ms: 0,
                config: &config,
            });
        }
    }

    #[test]
    fn selection_wraps() {
        let mut memory = vec![0u16; 8 * 256];
        let set = SpriteBank::new(&mut memory).load_set(&mut Solid, &PATHS, 16, 16).unwrap();
        let mut gallery = Gallery::new(set, RenderStyle::Cpu);
        let mut history = InputHistory::new();

        press(&mut gallery, &mut history, Buttons::LEFT);
        assert_eq!(gallery.selected(), 7);
        press(&mut gallery, &mut history, Buttons::RIGHT);
        press(&mut gallery, &mut history, Buttons::RIGHT);
        assert_eq!(gallery.selected(), 1);
    }

    #[test]
    fn grid_is_centered_and_selection_outlined() {
        let mut memory = vec![0u16; 8 * 256];
        let mut bank = SpriteBank::new(&mut memory);
        let set = bank.load_set(&mut Solid, &PATHS, 16, 16).unwrap();
        let gallery = Gallery::new(set, RenderStyle::Dma2d);

        assert_eq!(gallery.cell_origin(0, 320, 240), (96, 88));
        assert_eq!(gallery.cell_origin(7, 320, 240), (96 + 3 * 32, 88 + 32));

        let mut px = vec![0u16; 320 * 240];
        let mut target = RenderTarget {
            surface: Surface::new(&mut px, 320, 240),
            sprites: &bank,
        };
        gallery.render(&mut target);

        // frame 0 sits at (104, 96) with a 2px outline around it
        assert_eq!(target.surface.pixel(102, 94), Some(colors::YELLOW));
        assert_eq!(target.surface.pixel(104, 96), Some(colors::RED));
        // frame 1 has no outline
        assert_eq!(target.surface.pixel(134, 94), Some(colors::BLACK));
        assert_eq!(target.surface.pixel(136, 96), Some(colors::RED));
    }
}
