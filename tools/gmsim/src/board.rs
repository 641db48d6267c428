use gameman::error::LoadError;
use gameman::sprites::ImageLoader;
use gameman::video::DisplayController;
use gameman::{Buttons, Clock, InputSource};
use tracing::trace;

use crate::assets::AssetLoader;
use crate::script::Script;

/// The handheld, as far as the game core can tell.
///
/// Time only moves when the gamepad is sampled, one frame per sample. The panel
/// keeps showing the old frame until the new scanout is latched at vblank.
pub struct SimBoard {
    script: Script,
    /// Samples taken so far. The first one is the boot sample.
    samples: u32,
    frame_ms: u32,
    now_ms: u32,
    pending: Option<Vec<u16>>,
    panel: Vec<u16>,
    vblanks: u32,
    assets: AssetLoader,
}

impl SimBoard {
    pub fn new(script: Script, frame_ms: u32, assets: AssetLoader) -> Self {
        Self {
            script,
            samples: 0,
            frame_ms,
            now_ms: 0,
            pending: None,
            panel: Vec::new(),
            vblanks: 0,
            assets,
        }
    }

    /// What the panel is showing.
    pub fn panel(&self) -> &[u16] {
        &self.panel
    }

    pub fn vblanks(&self) -> u32 {
        self.vblanks
    }
}

impl InputSource for SimBoard {
    fn sample(&mut self) -> Buttons {
        // the core throws the boot sample away, so script frame 0 is the sample after it
        let buttons = match self.samples.checked_sub(1) {
            Some(frame) => self.script.buttons_at(frame),
            None => Buttons::NONE,
        };
        self.samples += 1;
        self.now_ms += self.frame_ms;
        trace!(samples = self.samples, now_ms = self.now_ms, ?buttons, "gamepad sampled");
        buttons
    }
}

impl Clock for SimBoard {
    fn now_ms(&self) -> u32 {
        self.now_ms
    }
}

impl DisplayController for SimBoard {
    fn set_scanout(&mut self, front: &[u16]) {
        self.pending = Some(front.to_vec());
    }

    fn reload_at_vblank(&mut self) {
        if let Some(frame) = self.pending.take() {
            self.panel = frame;
            self.vblanks += 1;
        }
    }
}

impl ImageLoader for SimBoard {
    fn load_image(&mut self, path: &str, dest: &mut [u8]) -> Result<usize, LoadError> {
        self.assets.load_image(path, dest)
    }
}
