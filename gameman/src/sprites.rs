//! # Sprite Memory
//!
//! Sprite sheets are loaded from the SD card into a region of external SRAM
//! handed to the [`SpriteBank`]. Loads are bump-allocated one after another;
//! the whole bank is reset at once when the scene that needed them goes away.
//!
//! ```text
//! ┌────────┬────────┬─────┬────────┬──────────────── free ──┐
//! │ frame0 │ frame1 │ ... │ frame7 │                        │
//! └────────┴────────┴─────┴────────┴────────────────────────┘
//!  ▲ set.offset                     ▲ used
//! ```
//!
//! Reading the files is somebody else's job: anything implementing
//! [`ImageLoader`] can fill the bank.

use log::{debug, warn};

use crate::error::{LoadError, SpriteError};

/// Loads one image file into a caller-provided buffer.
///
/// On success returns the number of bytes written to `dest`. Pixels are RGB565
/// in native byte order, top row first.
pub trait ImageLoader {
    fn load_image(&mut self, path: &str, dest: &mut [u8]) -> Result<usize, LoadError>;
}

/// A run of equally sized frames inside a [`SpriteBank`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SpriteSet {
    offset: usize,
    frames: u8,
    width: u16,
    height: u16,
}

impl SpriteSet {
    pub const fn frames(&self) -> u8 {
        self.frames
    }

    pub const fn width(&self) -> u16 {
        self.width
    }

    pub const fn height(&self) -> u16 {
        self.height
    }

    pub const fn frame_pixels(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

pub struct SpriteBank<'a> {
    memory: &'a mut [u16],
    used: usize,
}

impl<'a> SpriteBank<'a> {
    pub fn new(memory: &'a mut [u16]) -> Self {
        Self { memory, used: 0 }
    }

    pub fn capacity(&self) -> usize {
        self.memory.len()
    }

    pub fn used(&self) -> usize {
        self.used
    }

    /// Forget every loaded set. Any [`SpriteSet`] handed out before is garbage now.
    pub fn reset(&mut self) {
        debug!("sprite bank reset, {} pixels released", self.used);
        self.used = 0;
    }

    /// Load one frame per path, each exactly `width × height` pixels.
    ///
    /// Either every frame loads or the bank is left as it was.
    pub fn load_set(
        &mut self,
        loader: &mut impl ImageLoader,
        paths: &[&'static str],
        width: u16,
        height: u16,
    ) -> Result<SpriteSet, SpriteError> {
        let frame_pixels = width as usize * height as usize;
        let requested = frame_pixels * paths.len();
        let available = self.memory.len() - self.used;
        if requested > available {
            return Err(SpriteError::OutOfMemory {
                requested,
                available,
            });
        }

        let start = self.used;
        for (i, path) in paths.iter().copied().enumerate() {
            let at = start + i * frame_pixels;
            let dest: &mut [u8] = bytemuck::cast_slice_mut(&mut self.memory[at..at + frame_pixels]);
            let expected = dest.len();

            let loaded = loader
                .load_image(path, dest)
                .map_err(|error| SpriteError::Load { path, error });
            match loaded {
                Ok(loaded) if loaded == expected => {}
                Ok(loaded) => {
                    warn!("{path}: loaded {loaded} bytes, frame needs {expected}");
                    return Err(SpriteError::FrameSize {
                        path,
                        expected,
                        loaded,
                    });
                }
                Err(e) => {
                    warn!("{e}");
                    return Err(e);
                }
            }
        }

        self.used = start + requested;
        debug!(
            "loaded {} sprite frames of {}x{}, {}/{} pixels in use",
            paths.len(),
            width,
            height,
            self.used,
            self.memory.len()
        );
        Ok(SpriteSet {
            offset: start,
            frames: paths.len() as u8,
            width,
            height,
        })
    }

    /// Pixels of frame `index` of `set`. Out-of-range frames clamp to the last one.
    pub fn frame(&self, set: &SpriteSet, index: u8) -> &[u16] {
        let index = index.min(set.frames.saturating_sub(1)) as usize;
        let at = set.offset + index * set.frame_pixels();
        &self.memory[at..at + set.frame_pixels()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Fills each frame with the index of the path in `paths`, plus one.
    struct Fill {
        paths: Vec<&'static str>,
        fail_on: Option<&'static str>,
        short: bool,
    }

    impl ImageLoader for Fill {
        fn load_image(&mut self, path: &str, dest: &mut [u8]) -> Result<usize, LoadError> {
            if self.fail_on == Some(path) {
                return Err(LoadError::FileOpen);
            }
            let value = self.paths.iter().position(|p| *p == path).unwrap() as u16 + 1;
            for px in dest.chunks_exact_mut(2) {
                px.copy_from_slice(&value.to_ne_bytes());
            }
            Ok(if self.short { dest.len() / 2 } else { dest.len() })
        }
    }

    const PATHS: [&str; 3] = ["/a.bmp", "/b.bmp", "/c.bmp"];

    #[test]
    fn loads_frames_back_to_back() {
        let mut memory = vec![0u16; 64];
        let mut bank = SpriteBank::new(&mut memory);
        let mut loader = Fill { paths: PATHS.to_vec(), fail_on: None, short: false };

        let set = bank.load_set(&mut loader, &PATHS, 4, 4).unwrap();
        assert_eq!(set.frames(), 3);
        assert_eq!(bank.used(), 48);
        assert!(bank.frame(&set, 0).iter().all(|&p| p == 1));
        assert!(bank.frame(&set, 2).iter().all(|&p| p == 3));
    }

    #[test]
    fn failed_load_rolls_back() {
        let mut memory = vec![0u16; 64];
        let mut bank = SpriteBank::new(&mut memory);
        let mut loader = Fill { paths: PATHS.to_vec(), fail_on: Some("/b.bmp"), short: false };

        let err = bank.load_set(&mut loader, &PATHS, 4, 4).unwrap_err();
        assert_eq!(err, SpriteError::Load { path: "/b.bmp", error: LoadError::FileOpen });
        assert_eq!(bank.used(), 0);
    }

    #[test]
    fn short_read_is_an_error() {
        let mut memory = vec![0u16; 64];
        let mut bank = SpriteBank::new(&mut memory);
        let mut loader = Fill { paths: PATHS.to_vec(), fail_on: None, short: true };

        let err = bank.load_set(&mut loader, &PATHS, 4, 4).unwrap_err();
        assert_eq!(err, SpriteError::FrameSize { path: "/a.bmp", expected: 32, loaded: 16 });
    }

    #[test]
    fn out_of_memory() {
        let mut memory = vec![0u16; 40];
        let mut bank = SpriteBank::new(&mut memory);
        let mut loader = Fill { paths: PATHS.to_vec(), fail_on: None, short: false };

        let err = bank.load_set(&mut loader, &PATHS, 4, 4).unwrap_err();
        assert_eq!(err, SpriteError::OutOfMemory { requested: 48, available: 40 });
    }
}
