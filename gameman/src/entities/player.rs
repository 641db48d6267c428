//! Player character, top-down adventure style.
//!
//! The sprite sheet holds 8 frames of 16×16: a neutral and a stepping frame for
//! each of the four facing directions.
//!
//! | phase \ direction | down | left | up | right |
//! |-------------------|------|------|----|-------|
//! | 0 (neutral)       | 0    | 1    | 2  | 3     |
//! | 1 (step)          | 4    | 5    | 6  | 7     |

use crate::drawable::{Drawable, RenderStyle, RenderTarget, Tick};
use crate::input::Buttons;
use crate::sprites::SpriteSet;

pub const PLAYER_WIDTH: u16 = 16;
pub const PLAYER_HEIGHT: u16 = 16;

/// Sprite sheet files, in frame order.
pub const PLAYER_SPRITE_PATHS: [&str; 8] = [
    "/sprites/link/link_d1_16.bmp",
    "/sprites/link/link_l1_16.bmp",
    "/sprites/link/link_u1_16.bmp",
    "/sprites/link/link_r1_16.bmp",
    "/sprites/link/link_d2_16.bmp",
    "/sprites/link/link_l2_16.bmp",
    "/sprites/link/link_u2_16.bmp",
    "/sprites/link/link_r2_16.bmp",
];

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Direction {
    Down = 0,
    Left = 1,
    Up = 2,
    Right = 3,
}

pub struct Player {
    x: u16,
    y: u16,
    direction: Direction,
    moving: bool,
    animation_frame: u8,
    last_step_ms: u32,
    sprites: SpriteSet,
    style: RenderStyle,
}

impl Player {
    pub fn new(x: u16, y: u16, direction: Direction, sprites: SpriteSet, style: RenderStyle) -> Self {
        Self {
            x,
            y,
            direction,
            moving: false,
            animation_frame: 0,
            last_step_ms: 0,
            sprites,
            style,
        }
    }

    pub fn position(&self) -> (u16, u16) {
        (self.x, self.y)
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn is_moving(&self) -> bool {
        self.moving
    }

    pub fn animation_frame(&self) -> u8 {
        self.animation_frame
    }

    /// Index into the sprite sheet for the current pose.
    pub fn sprite_index(&self) -> u8 {
        self.animation_frame * 4 + self.direction as u8
    }
}

impl Drawable for Player {
    fn update(&mut self, tick: &Tick) {
        let config = tick.config;
        let speed = config.move_speed_px_per_frame;
        let max_x = config.width.saturating_sub(PLAYER_WIDTH);
        let max_y = config.height.saturating_sub(PLAYER_HEIGHT);

        // one direction per frame, checked in this order
        let heading = [
            (Buttons::UP, Direction::Up),
            (Buttons::DOWN, Direction::Down),
            (Buttons::LEFT, Direction::Left),
            (Buttons::RIGHT, Direction::Right),
        ]
        .into_iter()
        .find(|(button, _)| tick.input.pressed(*button))
        .map(|(_, direction)| direction);

        let Some(direction) = heading else {
            self.moving = false;
            self.animation_frame = 0;
            return;
        };

        if direction != self.direction || !self.moving {
            // turning or starting off always begins with a step
            self.direction = direction;
            self.animation_frame = 1;
            self.last_step_ms = tick.now_ms;
        } else if tick.now_ms.wrapping_sub(self.last_step_ms) >= config.animation_frame_ms {
            self.animation_frame ^= 1;
            self.last_step_ms = tick.now_ms;
        }
        self.moving = true;

        match direction {
            Direction::Up => self.y = self.y.saturating_sub(speed),
            Direction::Down => self.y = self.y.saturating_add(speed),
            Direction::Left => self.x = self.x.saturating_sub(speed),
            Direction::Right => self.x = self.x.saturating_add(speed),
        }
        self.x = self.x.min(max_x);
        self.y = self.y.min(max_y);
    }

    fn render(&self, target: &mut RenderTarget) {
        let frame = target.sprites.frame(&self.sprites, self.sprite_index());
        let (w, h) = (self.sprites.width(), self.sprites.height());
        match self.style {
            RenderStyle::Cpu => target.surface.copy_rect_cpu(self.x, self.y, w, h, frame),
            RenderStyle::Dma2d => target.surface.copy_rect_block(self.x, self.y, w, h, frame),
        }
    }
}
