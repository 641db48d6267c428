//! Concrete drawable objects.
//!
//! | Entity | Used by | Covers the screen |
//! |--------|---------|-------------------|
//! | [`Menu`] | main menu | no |
//! | [`Player`] | character test | no |
//! | [`Backdrop`] | character & sprite tests | yes |
//! | [`Scroller`] | scrolling background test | yes |
//! | [`Gallery`] | sprite test | no |
//!
//! Entities that do not cover the screen rely on something queued in front of
//! them (usually a [`Backdrop`]) to wipe the stale back buffer.

mod backdrop;
mod gallery;
pub mod menu;
pub mod player;
mod scroller;

pub use backdrop::Backdrop;
pub use gallery::Gallery;
pub use menu::Menu;
pub use player::{Direction, Player};
pub use scroller::Scroller;
