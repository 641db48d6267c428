//! Scrolling checkerboard background.
//!
//! Holding the d-pad slides the pattern. The offsets wrap every two tiles, which
//! is where the pattern repeats.

use crate::drawable::{Drawable, RenderStyle, RenderTarget, Tick};
use crate::input::Buttons;
use crate::video::Surface;

pub const TILE_SIZE: u16 = 16;

pub struct Scroller {
    offset_x: u16,
    offset_y: u16,
    tile: u16,
    colors: [u16; 2],
    style: RenderStyle,
}

impl Scroller {
    pub fn new(colors: [u16; 2], style: RenderStyle) -> Self {
        Self {
            offset_x: 0,
            offset_y: 0,
            tile: TILE_SIZE,
            colors,
            style,
        }
    }

    pub fn offset(&self) -> (u16, u16) {
        (self.offset_x, self.offset_y)
    }

    fn period(&self) -> u16 {
        self.tile * 2
    }

    fn color_at(&self, tile_x: u32, tile_y: u32) -> u16 {
        self.colors[((tile_x + tile_y) & 1) as usize]
    }

    fn render_cpu(&self, surface: &mut Surface) {
        let t = self.tile as u32;
        for y in 0..surface.height() {
            let ty = (y as u32 + self.offset_y as u32) / t;
            for x in 0..surface.width() {
                let tx = (x as u32 + self.offset_x as u32) / t;
                surface.set_pixel(x, y, self.color_at(tx, ty));
            }
        }
    }

    /// One rectangle per visible tile, partial tiles clipped at the edges.
    fn render_dma2d(&self, surface: &mut Surface) {
        let t = self.tile as i32;
        let (width, height) = (surface.width() as i32, surface.height() as i32);
        let (ox, oy) = (self.offset_x as i32, self.offset_y as i32);

        let mut top = -(oy % t);
        while top < height {
            let ty = ((top + oy) / t) as u32;
            let y0 = top.max(0);
            let h = (top + t).min(height) - y0;

            let mut left = -(ox % t);
            while left < width {
                let tx = ((left + ox) / t) as u32;
                let x0 = left.max(0);
                let w = (left + t).min(width) - x0;
                surface.fill_rect(x0 as u16, y0 as u16, w as u16, h as u16, self.color_at(tx, ty));
                left += t;
            }
            top += t;
        }
    }
}

impl Drawable for Scroller {
    fn update(&mut self, tick: &Tick) {
        let speed = tick.config.move_speed_px_per_frame % self.period();
        let period = self.period();
        let input = tick.input;

        if input.pressed(Buttons::RIGHT) {
            self.offset_x = (self.offset_x + speed) % period;
        } else if input.pressed(Buttons::LEFT) {
            self.offset_x = (self.offset_x + period - speed) % period;
        }
        if input.pressed(Buttons::DOWN) {
            self.offset_y = (self.offset_y + speed) % period;
        } else if input.pressed(Buttons::UP) {
            self.offset_y = (self.offset_y + period - speed) % period;
        }
    }

    fn render(&self, target: &mut RenderTarget) {
        match self.style {
            RenderStyle::Cpu => self.render_cpu(&mut target.surface),
            RenderStyle::Dma2d => self.render_dma2d(&mut target.surface),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::input::InputHistory;
    use crate::sprites::SpriteBank;

    fn draw(scroller: &Scroller) -> Vec<u16> {
        let mut px = vec![0u16; 320 * 240];
        let mut none = [0u16; 0];
        let sprites = SpriteBank::new(&mut none);
        let mut target = RenderTarget {
            surface: Surface::new(&mut px, 320, 240),
            sprites: &sprites,
        };
        scroller.render(&mut target);
        px
    }

    fn hold(scroller: &mut Scroller, held: Buttons, frames: u32) {
        let config = GameConfig::default();
        let mut history = InputHistory::new();
        for frame in 0..frames {
            history.push(held);
            scroller.update(&Tick {
                input: &history,
                now_ms: frame * 16,
                config: &config,
            });
        }
    }

    #[test]
    fn offsets_wrap_both_ways() {
        let mut scroller = Scroller::new([1, 2], RenderStyle::Cpu);
        hold(&mut scroller, Buttons::LEFT, 1);
        assert_eq!(scroller.offset(), (30, 0));

        // 16 frames of 2px is exactly one period
        hold(&mut scroller, Buttons::RIGHT | Buttons::DOWN, 16);
        assert_eq!(scroller.offset(), (30, 0));
    }

    #[test]
    fn styles_agree_at_any_offset() {
        let mut cpu = Scroller::new([1, 2], RenderStyle::Cpu);
        let mut dma = Scroller::new([1, 2], RenderStyle::Dma2d);
        for _ in 0..5 {
            assert!(draw(&cpu) == draw(&dma));
            hold(&mut cpu, Buttons::RIGHT | Buttons::UP, 3);
            hold(&mut dma, Buttons::RIGHT | Buttons::UP, 3);
        }
    }

    #[test]
    fn checkerboard_alternates_per_tile() {
        let px = draw(&Scroller::new([1, 2], RenderStyle::Dma2d));
        assert_eq!(px[0], 1);
        assert_eq!(px[15], 1);
        assert_eq!(px[16], 2);
        assert_eq!(px[16 * 320], 2);
        assert_eq!(px[16 * 320 + 16], 1);
    }
}
