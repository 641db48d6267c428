//! # Game State Machine
//!
//! [`GameContext`] owns everything the frame loop touches: the draw queue, the
//! objects behind it, both framebuffers, sprite memory and the input history.
//!
//! | State | Queued | Leaves on |
//! |-------|--------|-----------|
//! | `Init` | nothing, welcome text drawn by [`GameContext::boot`] | any button |
//! | `Menu` | menu @ 255 | option confirmed after the dwell time |
//! | `CharacterTest` | backdrop @ 255, player @ 128 | Start |
//! | `ScrollingTest` | scroller @ 255 | Start |
//! | `SpriteTest` | backdrop @ 255, gallery @ 128 | Start |
//!
//! Every state carries the handles of the objects it spawned, and leaving a
//! state despawns exactly those.

use core::fmt::{Display, Formatter};

use log::{debug, error, info};

use crate::config::GameConfig;
use crate::drawable::{Drawable, DrawableObject, Handle, ObjectArena, RenderTarget, Tick};
use crate::entities::player::{PLAYER_HEIGHT, PLAYER_SPRITE_PATHS, PLAYER_WIDTH};
use crate::entities::{Backdrop, Direction, Gallery, Menu, Player, Scroller};
use crate::error::{GameError, VideoError};
use crate::input::{Buttons, InputHistory, InputSource};
use crate::queue::{DrawQueue, QUEUE_MAX};
use crate::sprites::{ImageLoader, SpriteBank, SpriteSet};
use crate::video::text::{self, TextStyle};
use crate::video::{DisplayController, Framebuffers, colors};

pub const WELCOME_TEXT: &str = "Welcome! Press Any Key to Begin!";
pub const MENU_HEADER: &str = "Please Select One of the Following Tests:";
pub const MENU_OPTIONS: &[&str] = &[
    "0) Test A Simple Character Sprite",
    "1) Scrolling Background Test",
    "2) Sprite Render Test",
];

/// Priority of whatever fills the screen. Queued first, drawn first.
pub const BACKGROUND_PRIORITY: u8 = 255;
pub const FOREGROUND_PRIORITY: u8 = 128;

/// Millisecond tick since power-on.
pub trait Clock {
    fn now_ms(&self) -> u32;
}

/// Everything the frame loop needs from the hardware.
pub trait Board: InputSource + Clock + DisplayController + ImageLoader {}

impl<B: InputSource + Clock + DisplayController + ImageLoader> Board for B {}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameState {
    Init,
    Menu { menu: Handle },
    CharacterTest { backdrop: Handle, player: Handle },
    ScrollingTest { scroller: Handle },
    SpriteTest { backdrop: Handle, gallery: Handle },
}

impl GameState {
    /// Objects spawned by this state.
    pub fn handles(&self) -> impl Iterator<Item = Handle> + use<> {
        let (first, second) = match *self {
            GameState::Init => (None, None),
            GameState::Menu { menu } => (Some(menu), None),
            GameState::CharacterTest { backdrop, player } => (Some(backdrop), Some(player)),
            GameState::ScrollingTest { scroller } => (Some(scroller), None),
            GameState::SpriteTest { backdrop, gallery } => (Some(backdrop), Some(gallery)),
        };
        first.into_iter().chain(second)
    }
}

impl Display for GameState {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            GameState::Init => "INIT",
            GameState::Menu { .. } => "MENU",
            GameState::CharacterTest { .. } => "CHARACTER_TEST",
            GameState::ScrollingTest { .. } => "SCROLLING_TEST",
            GameState::SpriteTest { .. } => "SPRITE_TEST",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Copy, Clone)]
enum Test {
    Character,
    Scrolling,
    Sprites,
}

pub struct GameContext<'a> {
    config: GameConfig,
    state: GameState,
    queue: DrawQueue<Handle>,
    objects: ObjectArena<DrawableObject, QUEUE_MAX>,
    framebuffers: Framebuffers<'a>,
    sprites: SpriteBank<'a>,
    input: InputHistory,
    /// When the current state was entered.
    delay_timestamp: u32,
}

impl<'a> GameContext<'a> {
    /// The framebuffers must match the resolution in `config`.
    pub fn new(
        config: GameConfig,
        framebuffers: Framebuffers<'a>,
        sprite_memory: &'a mut [u16],
    ) -> Result<Self, VideoError> {
        if (framebuffers.width(), framebuffers.height()) != (config.width, config.height) {
            return Err(VideoError::BufferSize {
                expected: config.framebuffer_size(),
                actual: framebuffers.width() as usize * framebuffers.height() as usize,
            });
        }
        Ok(Self {
            config,
            state: GameState::Init,
            queue: DrawQueue::new(),
            objects: ObjectArena::new(),
            framebuffers,
            sprites: SpriteBank::new(sprite_memory),
            input: InputHistory::new(),
            delay_timestamp: 0,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn queue(&self) -> &DrawQueue<Handle> {
        &self.queue
    }

    pub fn objects(&self) -> &ObjectArena<DrawableObject, QUEUE_MAX> {
        &self.objects
    }

    pub fn object(&self, handle: Handle) -> Option<&DrawableObject> {
        self.objects.get(handle)
    }

    pub fn framebuffers(&self) -> &Framebuffers<'a> {
        &self.framebuffers
    }

    pub fn sprites(&self) -> &SpriteBank<'a> {
        &self.sprites
    }

    pub fn input(&self) -> &InputHistory {
        &self.input
    }

    /// Put the welcome screen on both buffers and throw away the first sample,
    /// which the gamepad returns before it has latched anything.
    pub fn boot(&mut self, board: &mut (impl InputSource + DisplayController)) {
        let style = TextStyle::new(colors::WHITE, colors::BLACK).scaled(3, 2);

        self.framebuffers.clear_back();
        text::write_string(&mut self.framebuffers.back(), 0, 0, WELCOME_TEXT, &style);
        self.framebuffers.swap(board);
        self.framebuffers.clear_back();
        text::write_string(&mut self.framebuffers.back(), 0, 0, WELCOME_TEXT, &style);

        self.input.sample_from(board);
        info!("booted into {}", self.state);
    }

    pub fn sample_input(&mut self, source: &mut impl InputSource) -> Buttons {
        self.input.sample_from(source)
    }

    /// Update then render each queued object, front of the queue first.
    pub fn update_objects(&mut self, now_ms: u32) -> Result<(), GameError> {
        let tick = Tick {
            input: &self.input,
            now_ms,
            config: &self.config,
        };
        for entry in self.queue.iter() {
            let object = self.objects.get_mut(entry.item).ok_or(GameError::StaleHandle)?;
            object.update(&tick);

            let mut target = RenderTarget {
                surface: self.framebuffers.back(),
                sprites: &self.sprites,
            };
            object.render(&mut target);
        }
        Ok(())
    }

    /// Advance the state machine. May spawn and despawn objects.
    pub fn update_game(&mut self, now_ms: u32, loader: &mut impl ImageLoader) -> Result<(), GameError> {
        match self.state {
            GameState::Init => {
                if self.input.any_pressed() {
                    self.enter_menu(now_ms)?;
                }
            }
            GameState::Menu { menu } => {
                let Some(m) = self.objects.get(menu).and_then(DrawableObject::as_menu) else {
                    return Err(GameError::IllegalState(self.state));
                };
                let dwelled = now_ms.wrapping_sub(self.delay_timestamp) > self.config.menu_dwell_ms;
                if !(dwelled && m.option_selected()) {
                    return Ok(());
                }

                let test = match m.highlighted_option() {
                    0 => Test::Character,
                    1 => Test::Scrolling,
                    2 => Test::Sprites,
                    other => return Err(GameError::InvalidMenuOption(other)),
                };
                self.despawn(menu)?;
                let next = self.start_test(test, loader)?;
                self.enter(next, now_ms);
            }
            GameState::CharacterTest { .. }
            | GameState::ScrollingTest { .. }
            | GameState::SpriteTest { .. } => {
                if self.input.just_pressed(Buttons::START) {
                    self.leave_scene()?;
                    self.sprites.reset();
                    self.enter_menu(now_ms)?;
                }
            }
        }
        Ok(())
    }

    pub fn swap(&mut self, display: &mut impl DisplayController) {
        self.framebuffers.swap(display);
    }

    /// One full frame: sample, update and render, advance, swap.
    pub fn frame(&mut self, board: &mut impl Board) -> Result<(), GameError> {
        self.sample_input(board);
        let now = board.now_ms();
        self.update_objects(now)?;
        self.update_game(now, board)?;
        self.swap(board);
        Ok(())
    }

    /// Run frames until one fails. Only returns with the error that stopped it.
    pub fn run(&mut self, board: &mut impl Board) -> GameError {
        loop {
            if let Err(e) = self.frame(board) {
                error!("game halted: {e} (code {})", e.code());
                return e;
            }
        }
    }

    /// Store `object` and queue it at `priority`.
    pub fn spawn(&mut self, object: impl Into<DrawableObject>, priority: u8) -> Result<Handle, GameError> {
        let object = object.into();
        let kind = object.kind();
        let handle = self.objects.insert(object).map_err(|_| GameError::ObjectsExhausted)?;
        if self.queue.enqueue(handle, priority).is_err() {
            self.objects.remove(handle);
            return Err(GameError::QueueFull);
        }
        debug!("spawned {kind} at priority {priority}, {} queued", self.queue.len());
        Ok(handle)
    }

    /// Unqueue and destroy the object behind `handle`.
    pub fn despawn(&mut self, handle: Handle) -> Result<DrawableObject, GameError> {
        if !self.objects.contains(handle) {
            return Err(GameError::StaleHandle);
        }
        if !self.queue.remove_item(&handle) {
            return Err(GameError::NotQueued);
        }
        let object = self.objects.remove(handle).ok_or(GameError::StaleHandle)?;
        debug!("despawned {}, {} queued", object.kind(), self.queue.len());
        Ok(object)
    }

    fn enter(&mut self, next: GameState, now_ms: u32) {
        info!("{} -> {}", self.state, next);
        self.state = next;
        self.delay_timestamp = now_ms;
    }

    fn enter_menu(&mut self, now_ms: u32) -> Result<(), GameError> {
        let menu = Menu::new(0, 0, MENU_HEADER, MENU_OPTIONS, now_ms, self.config.render_style);
        let menu = self.spawn(menu, BACKGROUND_PRIORITY)?;
        self.framebuffers.clear_both();
        self.enter(GameState::Menu { menu }, now_ms);
        Ok(())
    }

    fn leave_scene(&mut self) -> Result<(), GameError> {
        let state = self.state;
        for handle in state.handles() {
            self.despawn(handle)?;
        }
        Ok(())
    }

    fn load_player_sprites(&mut self, loader: &mut impl ImageLoader) -> Result<SpriteSet, GameError> {
        let set = self
            .sprites
            .load_set(loader, &PLAYER_SPRITE_PATHS, PLAYER_WIDTH, PLAYER_HEIGHT)?;
        Ok(set)
    }

    fn start_test(&mut self, test: Test, loader: &mut impl ImageLoader) -> Result<GameState, GameError> {
        let style = self.config.render_style;
        match test {
            Test::Character => {
                let sprites = self.load_player_sprites(loader)?;
                let x = self.config.width.saturating_sub(PLAYER_WIDTH) / 2;
                let y = self.config.height.saturating_sub(PLAYER_HEIGHT) / 2;
                let backdrop = self.spawn(Backdrop::new(colors::GRASS), BACKGROUND_PRIORITY)?;
                let player = self.spawn(
                    Player::new(x, y, Direction::Down, sprites, style),
                    FOREGROUND_PRIORITY,
                )?;
                Ok(GameState::CharacterTest { backdrop, player })
            }
            Test::Scrolling => {
                let scroller = self.spawn(
                    Scroller::new([colors::DARK_GREEN, colors::GRASS], style),
                    BACKGROUND_PRIORITY,
                )?;
                Ok(GameState::ScrollingTest { scroller })
            }
            Test::Sprites => {
                let sprites = self.load_player_sprites(loader)?;
                let backdrop = self.spawn(Backdrop::new(colors::BLACK), BACKGROUND_PRIORITY)?;
                let gallery = self.spawn(Gallery::new(sprites, style), FOREGROUND_PRIORITY)?;
                Ok(GameState::SpriteTest { backdrop, gallery })
            }
        }
    }
}
