//! # GameMan Game Core
//!
//! The draw queue, drawable entities and frame loop of the GameMan handheld.
//! Everything hardware-shaped (gamepad shift register, LCD controller, SD card,
//! debug UART) comes in through a handful of small traits, so the same core runs
//! on the board and inside the `gmsim` host simulator.
//!
//! ## The Frame Loop
//!
//! ```ignore
//! let mut game = GameContext::new(GameConfig::default(), framebuffers, sprite_memory)?;
//! game.boot(&mut board);
//!
//! // sample input -> update + render every queued object -> advance state -> swap
//! let err = game.run(&mut board);
//! ```
//!
//! A single frame is [`GameContext::frame`](game::GameContext::frame):
//!
//! 1. sample the gamepad into the rolling [`InputHistory`](input::InputHistory)
//! 2. walk the [`DrawQueue`](queue::DrawQueue) front to back, calling `update`
//!    then `render` on each object
//! 3. step the game state machine, which may spawn or despawn objects
//! 4. swap framebuffers; the display picks the new front buffer up at vblank
//!
//! ## Draw Order
//!
//! The queue is kept in non-increasing priority order, so a priority 255 object
//! is updated and drawn first and anything with a lower priority is drawn over it.
//! Equal priorities keep their insertion order.
//!
//! ## Board Interface
//!
//! | Trait | Board side |
//! |-------|------------|
//! | [`InputSource`](input::InputSource) | gamepad SPI transfer |
//! | [`Clock`](game::Clock) | millisecond tick |
//! | [`DisplayController`](video::DisplayController) | LCD layer address + vblank reload |
//! | [`ImageLoader`](sprites::ImageLoader) | bitmap loader on the SD card |
//!
//! Debug output goes through the `log` facade.

#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod drawable;
pub mod entities;
pub mod error;
pub mod game;
pub mod input;
pub mod queue;
pub mod sprites;
pub mod video;

pub use config::GameConfig;
pub use drawable::{Drawable, DrawableObject, Handle, RenderStyle};
pub use error::GameError;
pub use game::{Board, Clock, GameContext, GameState};
pub use input::{Buttons, InputHistory, InputSource};
pub use queue::DrawQueue;
