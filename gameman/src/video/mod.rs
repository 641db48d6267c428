//! # Video
//!
//! Two RGB565 framebuffers live in external SRAM. The LCD controller scans one
//! out (the *front* buffer) while the game draws into the other (the *back*
//! buffer). Once a frame is done, [`Framebuffers::swap`] trades the roles and asks
//! the controller to switch over at its next vertical blank, so a half-drawn frame
//! is never shown.
//!
//! ```ignore
//! let mut back = framebuffers.back();
//! back.fill_rect(10, 10, 32, 32, colors::BLUE);
//! text::write_string(&mut back, 0, 0, "hello", &TextStyle::default());
//!
//! framebuffers.swap(&mut display);
//! ```
//!
//! Swapping does not clear anything: after a swap the back buffer holds the frame
//! from two swaps ago. Draw over everything, or clear it yourself.
//!
//! ## Pixel Format
//!
//! `0bRRRRR_GGGGGG_BBBBB`, one `u16` per pixel, row-major.

mod font;
pub mod framebuffers;
pub mod surface;
pub mod text;

pub use framebuffers::Framebuffers;
pub use surface::Surface;
pub use text::TextStyle;

/// The LCD controller's view of the framebuffers.
pub trait DisplayController {
    /// Point the scanout layer at `front`.
    fn set_scanout(&mut self, front: &[u16]);

    /// Latch the new layer address at the next vertical blank.
    fn reload_at_vblank(&mut self);
}

pub mod colors {
    pub const BLACK: u16 = 0x0000;
    pub const WHITE: u16 = 0xFFFF;
    /// Pure blue, the menu highlight.
    pub const BLUE: u16 = 0x001F;
    pub const RED: u16 = 0xF800;
    pub const GREEN: u16 = 0x07E0;
    pub const YELLOW: u16 = 0xFFE0;
    pub const DARK_GREEN: u16 = 0x0320;
    pub const GRASS: u16 = 0x4D27;

    /// Pack 8-bit channels into RGB565.
    pub const fn rgb(r: u8, g: u8, b: u8) -> u16 {
        ((r as u16 >> 3) << 11) | ((g as u16 >> 2) << 5) | (b as u16 >> 3)
    }
}
