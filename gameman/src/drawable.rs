//! # Drawable Objects
//!
//! Everything the frame loop touches is a [`DrawableObject`]: one of a closed set
//! of entity types, each with an `update` and a `render`. Objects live in an
//! [`ObjectArena`] and are referred to by [`Handle`]s, which is what the draw
//! queue actually stores.
//!
//! A handle is an index plus a generation. Removing an object bumps the slot's
//! generation, so a handle kept past its object's death resolves to `None`
//! instead of to whatever moved into the slot next.

use heapless::Vec;

use crate::config::GameConfig;
use crate::entities::{Backdrop, Gallery, Menu, Player, Scroller};
use crate::input::InputHistory;
use crate::sprites::SpriteBank;
use crate::video::Surface;

/// How an entity moves its pixels into the back buffer.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum RenderStyle {
    /// Pixel-by-pixel copies on the CPU.
    #[default]
    Cpu,
    /// Rectangle transfers, the way the DMA2D engine moves memory.
    Dma2d,
}

/// What an object gets to look at during `update`.
pub struct Tick<'a> {
    pub input: &'a InputHistory,
    pub now_ms: u32,
    pub config: &'a GameConfig,
}

/// What an object draws into during `render`.
pub struct RenderTarget<'a> {
    /// The back buffer. It still holds whatever was drawn into it two frames ago.
    pub surface: Surface<'a>,
    pub sprites: &'a SpriteBank<'a>,
}

pub trait Drawable {
    fn update(&mut self, tick: &Tick);
    fn render(&self, target: &mut RenderTarget);
}

pub enum DrawableObject {
    Menu(Menu),
    Player(Player),
    Backdrop(Backdrop),
    Scroller(Scroller),
    Gallery(Gallery),
}

impl DrawableObject {
    pub fn as_menu(&self) -> Option<&Menu> {
        match self {
            DrawableObject::Menu(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_player(&self) -> Option<&Player> {
        match self {
            DrawableObject::Player(p) => Some(p),
            _ => None,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            DrawableObject::Menu(_) => "menu",
            DrawableObject::Player(_) => "player",
            DrawableObject::Backdrop(_) => "backdrop",
            DrawableObject::Scroller(_) => "scroller",
            DrawableObject::Gallery(_) => "gallery",
        }
    }
}

impl Drawable for DrawableObject {
    #[inline]
    fn update(&mut self, tick: &Tick) {
        match self {
            DrawableObject::Menu(o) => o.update(tick),
            DrawableObject::Player(o) => o.update(tick),
            DrawableObject::Backdrop(o) => o.update(tick),
            DrawableObject::Scroller(o) => o.update(tick),
            DrawableObject::Gallery(o) => o.update(tick),
        }
    }

    #[inline]
    fn render(&self, target: &mut RenderTarget) {
        match self {
            DrawableObject::Menu(o) => o.render(target),
            DrawableObject::Player(o) => o.render(target),
            DrawableObject::Backdrop(o) => o.render(target),
            DrawableObject::Scroller(o) => o.render(target),
            DrawableObject::Gallery(o) => o.render(target),
        }
    }
}

impl From<Menu> for DrawableObject {
    fn from(m: Menu) -> Self {
        DrawableObject::Menu(m)
    }
}

impl From<Player> for DrawableObject {
    fn from(p: Player) -> Self {
        DrawableObject::Player(p)
    }
}

impl From<Backdrop> for DrawableObject {
    fn from(b: Backdrop) -> Self {
        DrawableObject::Backdrop(b)
    }
}

impl From<Scroller> for DrawableObject {
    fn from(s: Scroller) -> Self {
        DrawableObject::Scroller(s)
    }
}

impl From<Gallery> for DrawableObject {
    fn from(g: Gallery) -> Self {
        DrawableObject::Gallery(g)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Handle {
    index: u16,
    generation: u16,
}

impl Handle {
    pub const fn index(&self) -> usize {
        self.index as usize
    }
}

struct Slot<T> {
    generation: u16,
    value: Option<T>,
}

/// Fixed-capacity slot map.
pub struct ObjectArena<T, const N: usize> {
    slots: Vec<Slot<T>, N>,
    live: usize,
}

impl<T, const N: usize> ObjectArena<T, N> {
    pub const fn new() -> Self {
        assert!(N <= u16::MAX as usize, "arena indices are 16 bits");
        Self {
            slots: Vec::new(),
            live: 0,
        }
    }

    /// Store `value`, handing it back if every slot is taken.
    pub fn insert(&mut self, value: T) -> Result<Handle, T> {
        if let Some(index) = self.slots.iter().position(|s| s.value.is_none()) {
            let slot = &mut self.slots[index];
            slot.value = Some(value);
            self.live += 1;
            return Ok(Handle {
                index: index as u16,
                generation: slot.generation,
            });
        }

        let index = self.slots.len();
        match self.slots.push(Slot {
            generation: 0,
            value: Some(value),
        }) {
            Ok(()) => {
                self.live += 1;
                Ok(Handle {
                    index: index as u16,
                    generation: 0,
                })
            }
            Err(slot) => match slot.value {
                Some(value) => Err(value),
                None => unreachable!(),
            },
        }
    }

    /// Take the object out, invalidating `handle` and every copy of it.
    pub fn remove(&mut self, handle: Handle) -> Option<T> {
        let slot = self.slots.get_mut(handle.index())?;
        if slot.generation != handle.generation {
            return None;
        }
        let value = slot.value.take()?;
        slot.generation = slot.generation.wrapping_add(1);
        self.live -= 1;
        Some(value)
    }

    pub fn get(&self, handle: Handle) -> Option<&T> {
        self.slots
            .get(handle.index())
            .filter(|s| s.generation == handle.generation)
            .and_then(|s| s.value.as_ref())
    }

    pub fn get_mut(&mut self, handle: Handle) -> Option<&mut T> {
        self.slots
            .get_mut(handle.index())
            .filter(|s| s.generation == handle.generation)
            .and_then(|s| s.value.as_mut())
    }

    pub fn contains(&self, handle: Handle) -> bool {
        self.get(handle).is_some()
    }

    pub fn len(&self) -> usize {
        self.live
    }

    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    pub const fn capacity(&self) -> usize {
        N
    }

    /// Drop every object. All outstanding handles go stale.
    pub fn clear(&mut self) {
        for slot in self.slots.iter_mut() {
            if slot.value.take().is_some() {
                slot.generation = slot.generation.wrapping_add(1);
            }
        }
        self.live = 0;
    }
}

impl<T, const N: usize> Default for ObjectArena<T, N> {
    fn default() -> Self {
        Self::new()
    }
}
