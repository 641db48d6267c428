use crate::drawable::{Drawable, RenderTarget, Tick};

/// Solid full-screen fill, queued behind everything else in a scene.
pub struct Backdrop {
    color: u16,
}

impl Backdrop {
    pub fn new(color: u16) -> Self {
        Self { color }
    }

    pub fn color(&self) -> u16 {
        self.color
    }
}

impl Drawable for Backdrop {
    fn update(&mut self, _tick: &Tick) {}

    fn render(&self, target: &mut RenderTarget) {
        target.surface.fill(self.color);
    }
}
