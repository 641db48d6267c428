//! Sprite files from a directory on the host, standing in for the SD card.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use gameman::error::LoadError;
use gameman::sprites::ImageLoader;
use gameman::video::colors;
use image::{ImageError, ImageFormat};
use tracing::{debug, warn};

pub struct AssetLoader {
    /// Card paths like `/sprites/link/link_d1_16.bmp` resolve under here.
    root: Option<PathBuf>,
    /// Fill missing files with a generated tile instead of failing.
    placeholders: bool,
}

impl AssetLoader {
    pub fn new(root: Option<PathBuf>, placeholders: bool) -> Self {
        Self { root, placeholders }
    }

    fn resolve(&self, path: &str) -> Option<PathBuf> {
        self.root.as_ref().map(|root| root.join(path.trim_start_matches('/')))
    }

    fn decode(file: &Path, dest: &mut [u8]) -> Result<usize, LoadError> {
        match ImageFormat::from_path(file) {
            Ok(ImageFormat::Bmp) => {}
            _ => return Err(LoadError::NotBitmap),
        }
        let image = image::open(file).map_err(|e| match e {
            ImageError::IoError(io) if io.kind() == ErrorKind::NotFound => LoadError::FileOpen,
            ImageError::IoError(_) => LoadError::FileRead,
            _ => LoadError::NotBitmap,
        })?;
        let image = image.to_rgb8();

        let bytes = image.width() as usize * image.height() as usize * 2;
        if bytes > dest.len() {
            return Err(LoadError::BufferTooSmall);
        }
        for (px, out) in image.pixels().zip(dest.chunks_exact_mut(2)) {
            let [r, g, b] = px.0;
            out.copy_from_slice(&colors::rgb(r, g, b).to_ne_bytes());
        }
        Ok(bytes)
    }
}

/// Solid tile with a colour picked from the path, so different files look different.
fn placeholder(path: &str, dest: &mut [u8]) -> usize {
    let seed = path.bytes().fold(0u32, |h, b| h.wrapping_mul(31).wrapping_add(b as u32));
    let [r, g, b, _] = seed.to_le_bytes();
    let color = colors::rgb(r | 0x40, g | 0x40, b | 0x40);
    for out in dest.chunks_exact_mut(2) {
        out.copy_from_slice(&color.to_ne_bytes());
    }
    dest.len()
}

impl ImageLoader for AssetLoader {
    fn load_image(&mut self, path: &str, dest: &mut [u8]) -> Result<usize, LoadError> {
        let result = match self.resolve(path) {
            Some(file) => Self::decode(&file, dest),
            None => Err(LoadError::FileOpen),
        };
        match result {
            Ok(bytes) => {
                debug!("loaded {path}, {bytes} bytes");
                Ok(bytes)
            }
            Err(LoadError::FileOpen) if self.placeholders => {
                warn!("{path} not found, drawing a placeholder");
                Ok(placeholder(path, dest))
            }
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_files_without_placeholders() {
        let mut loader = AssetLoader::new(None, false);
        let mut dest = [0u8; 512];
        assert_eq!(loader.load_image("/sprites/x.bmp", &mut dest), Err(LoadError::FileOpen));
    }

    #[test]
    fn placeholders_fill_the_whole_frame() {
        let mut loader = AssetLoader::new(None, true);
        let mut a = [0u8; 512];
        let mut b = [0u8; 512];
        assert_eq!(loader.load_image("/sprites/a.bmp", &mut a), Ok(512));
        assert_eq!(loader.load_image("/sprites/b.bmp", &mut b), Ok(512));
        assert!(a.chunks_exact(2).all(|px| px == &a[..2]));
        assert_ne!(a, b);
    }

    #[test]
    fn decodes_bmp_into_rgb565() {
        let dir = std::env::temp_dir().join(format!("gmsim-assets-{}", std::process::id()));
        std::fs::create_dir_all(dir.join("sprites")).unwrap();
        let img = image::RgbImage::from_pixel(16, 16, image::Rgb([255, 0, 0]));
        img.save(dir.join("sprites/red.bmp")).unwrap();

        let mut loader = AssetLoader::new(Some(dir.clone()), false);
        let mut dest = [0u8; 512];
        assert_eq!(loader.load_image("/sprites/red.bmp", &mut dest), Ok(512));
        assert_eq!(&dest[..2], &colors::RED.to_ne_bytes());

        let mut small = [0u8; 100];
        assert_eq!(loader.load_image("/sprites/red.bmp", &mut small), Err(LoadError::BufferTooSmall));

        std::fs::remove_dir_all(dir).unwrap();
    }
}
