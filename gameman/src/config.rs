//! Tunables for the game core.
//!
//! Defaults match the RevA0 board: a 320×240 RGB565 panel, 60 frames per second.

use crate::drawable::RenderStyle;

/// Panel width in pixels.
pub const X_RESOLUTION: u16 = 320;
/// Panel height in pixels.
pub const Y_RESOLUTION: u16 = 240;

/// Panel pixel density, used to turn physical speeds into pixel speeds.
pub const PX_PER_INCH: u16 = 120;
pub const FRAMES_PER_SECOND: u16 = 60;

/// Minimum time between two accepted menu actions.
pub const MENU_UPDATE_SPEED_MS: u32 = 125;
/// Time the menu must be on screen before a selection counts.
pub const MENU_DWELL_MS: u32 = 500;

pub const PLAYER_SPEED_INCH_PER_SECOND: u16 = 1;
pub const PLAYER_SPEED_PX_PER_FRAME: u16 =
    PLAYER_SPEED_INCH_PER_SECOND * PX_PER_INCH / FRAMES_PER_SECOND;
/// Walk cycle: the step phase flips 2.5 times a second.
pub const PLAYER_ANIMATION_FRAME_MS: u32 = 400;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub width: u16,
    pub height: u16,
    pub menu_repeat_ms: u32,
    pub menu_dwell_ms: u32,
    pub move_speed_px_per_frame: u16,
    pub animation_frame_ms: u32,
    pub render_style: RenderStyle,
}

impl GameConfig {
    /// Pixels in one framebuffer.
    pub const fn framebuffer_size(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: X_RESOLUTION,
            height: Y_RESOLUTION,
            menu_repeat_ms: MENU_UPDATE_SPEED_MS,
            menu_dwell_ms: MENU_DWELL_MS,
            move_speed_px_per_frame: PLAYER_SPEED_PX_PER_FRAME,
            animation_frame_ms: PLAYER_ANIMATION_FRAME_MS,
            render_style: RenderStyle::Cpu,
        }
    }
}
