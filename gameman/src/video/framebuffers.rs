use log::trace;

use crate::error::VideoError;
use crate::video::{DisplayController, Surface};

/// The front/back framebuffer pair.
///
/// Both buffers are borrowed from the caller. On the board they sit at fixed
/// addresses in external SRAM; on the host they are plain vectors.
pub struct Framebuffers<'a> {
    buffers: [&'a mut [u16]; 2],
    back: usize,
    width: u16,
    height: u16,
}

impl<'a> Framebuffers<'a> {
    /// `first` starts out as the back buffer.
    pub fn new(
        first: &'a mut [u16],
        second: &'a mut [u16],
        width: u16,
        height: u16,
    ) -> Result<Self, VideoError> {
        let expected = width as usize * height as usize;
        for buffer in [&*first, &*second] {
            if buffer.len() != expected {
                return Err(VideoError::BufferSize {
                    expected,
                    actual: buffer.len(),
                });
            }
        }
        Ok(Self {
            buffers: [first, second],
            back: 0,
            width,
            height,
        })
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// The buffer being drawn into.
    pub fn back(&mut self) -> Surface<'_> {
        Surface::new(&mut *self.buffers[self.back], self.width, self.height)
    }

    /// The buffer being displayed.
    pub fn front(&self) -> &[u16] {
        &*self.buffers[self.back ^ 1]
    }

    /// 0 or 1, whichever buffer is currently the back buffer.
    pub fn back_index(&self) -> usize {
        self.back
    }

    pub fn clear_back(&mut self) {
        self.buffers[self.back].fill(0);
    }

    pub fn clear_both(&mut self) {
        for buffer in self.buffers.iter_mut() {
            buffer.fill(0);
        }
    }

    /// Show the back buffer and start drawing into the old front one.
    ///
    /// The controller is reprogrammed, then told to latch the change at vblank.
    pub fn swap(&mut self, display: &mut impl DisplayController) {
        self.back ^= 1;
        display.set_scanout(self.front());
        display.reload_at_vblank();
        trace!("swapped, drawing into buffer {}", self.back);
    }
}
